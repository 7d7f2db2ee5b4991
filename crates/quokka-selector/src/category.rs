//! Simple selector categories and their grammar ordering.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "If it contains a type selector or universal selector, that selector
//! must come first in the sequence." The builder generalizes that rule to
//! the full category order used by the selector grammar:
//! type, id, class, attribute, pseudo-class, pseudo-element.

use std::fmt;

/// The category of a simple selector within a compound sequence.
///
/// Variant order is the grammar order, so the derived [`Ord`] is the rank
/// used by the ordering check: appending a category is legal only while
/// the fragment's most recent category does not outrank it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `table`, `tr`
    Type,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The bracketed attribute expression is carried verbatim.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A colon (:) followed by the pseudo-class name, including any
    /// functional argument.
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Two colons (::) followed by the pseudo-element name.
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl Category {
    /// Whether this category may occur at most once per fragment.
    ///
    /// Type, ID, and pseudo-element selectors are single-occurrence;
    /// class, attribute, and pseudo-class selectors may repeat.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Type | Self::Id | Self::PseudoElement)
    }

    /// The grammar name of the category, as used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
