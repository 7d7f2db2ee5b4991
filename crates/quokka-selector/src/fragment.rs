//! The selector fragment value and its append operations.
//!
//! A fragment is the in-progress text of one compound selector
//! ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound)) together with
//! the most specific category appended so far. Every append consumes the
//! fragment and returns a new one; there is no shared accumulator, so
//! interleaved builds cannot corrupt each other.

use crate::Stringify;
use crate::category::Category;
use crate::error::SelectorError;

/// An in-progress compound selector.
///
/// Obtained from the crate-level entry points ([`element`](crate::element),
/// [`id`](crate::id), ...) and extended by the chaining methods, each of
/// which enforces the grammar order and occurrence rules before producing
/// the next fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorFragment {
    /// Accumulated, order-correct selector text.
    text: String,
    /// Most specific category appended so far; `None` for a fresh fragment.
    last: Option<Category>,
}

impl SelectorFragment {
    /// An empty fragment with no categories appended.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
        }
    }

    /// Append a type selector ([§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors)):
    /// `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the fragment already has a type
    /// selector, [`SelectorError::OutOfOrder`] if any later category has
    /// been appended.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Type, value)
    }

    /// Append an ID selector ([§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors)):
    /// `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the fragment already has an ID,
    /// [`SelectorError::OutOfOrder`] if any later category has been
    /// appended.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append a class selector ([§ 6.6](https://www.w3.org/TR/selectors-4/#class-html)):
    /// `.value`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute, pseudo-class, or
    /// pseudo-element has already been appended.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append an attribute selector ([§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)):
    /// `[value]`. The value is the raw attribute expression (for example
    /// `href$=".png"`) and is emitted verbatim. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element
    /// has already been appended.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append a pseudo-class selector ([§ 4](https://www.w3.org/TR/selectors-4/#pseudo-classes)):
    /// `:value`. Functional arguments such as `nth-of-type(even)` pass
    /// through verbatim. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element has already been
    /// appended.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append a pseudo-element selector ([§ 11](https://www.w3.org/TR/selectors-4/#pseudo-elements)):
    /// `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the fragment already has a
    /// pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Apply a fallible append to this fragment.
    ///
    /// Mirrors [`Result::and_then`] so chains can move between a bare
    /// fragment and the `Result` returned by the append methods.
    ///
    /// # Errors
    ///
    /// Propagates whatever error `op` returns.
    pub fn and_then<F>(self, op: F) -> Result<Self, SelectorError>
    where
        F: FnOnce(Self) -> Result<Self, SelectorError>,
    {
        op(self)
    }

    /// The accumulated selector text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The most specific category appended so far.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    /// Check occurrence and ordering rules, then append.
    ///
    /// The duplicate check runs first: re-appending a single-occurrence
    /// category reports [`SelectorError::Duplicate`] even though its rank
    /// also ties the fragment's last category.
    fn append(self, category: Category, value: &str) -> Result<Self, SelectorError> {
        if let Some(last) = self.last {
            if category.is_unique() && last == category {
                return Err(SelectorError::Duplicate(category));
            }
            if last > category {
                return Err(SelectorError::OutOfOrder {
                    appended: category,
                    last,
                });
            }
        }
        Ok(self.push(category, value))
    }

    /// Render the category's syntax into the text and advance `last`.
    /// No rule checking; callers are the checked `append` and the
    /// crate-level entry points, which start from an empty fragment.
    pub(crate) fn push(mut self, category: Category, value: &str) -> Self {
        match category {
            Category::Type => self.text.push_str(value),
            Category::Id => {
                self.text.push('#');
                self.text.push_str(value);
            }
            Category::Class => {
                self.text.push('.');
                self.text.push_str(value);
            }
            Category::Attribute => {
                self.text.push('[');
                self.text.push_str(value);
                self.text.push(']');
            }
            Category::PseudoClass => {
                self.text.push(':');
                self.text.push_str(value);
            }
            Category::PseudoElement => {
                self.text.push_str("::");
                self.text.push_str(value);
            }
        }
        self.last = Some(category);
        self
    }
}

impl Stringify for SelectorFragment {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl std::fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
