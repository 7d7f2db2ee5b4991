//! Typed construction of CSS selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate builds selector text; it never parses CSS and never matches
//! selectors against a document tree.
//!
//! - **Simple selector categories** ([§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors),
//!   [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element selectors
//!   - Grammar-order enforcement across categories
//!   - Single-occurrence enforcement for type, ID, and pseudo-element
//!
//! - **Compound construction** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Each append produces a fresh [`SelectorFragment`]; fragments are
//!     plain values and independent builds never share state
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling
//!   - [`combine`] joins any two stringifiable selectors, including
//!     previously combined ones
//!
//! # Example
//!
//! ```
//! use quokka_selector::{Combinator, Stringify, combine, element};
//!
//! let left = element("div").id("main")?.class("container")?;
//! let right = element("table").id("data")?;
//! let combined = combine(&left, Combinator::NextSibling, &right);
//! assert_eq!(combined.stringify(), "div#main.container + table#data");
//! # Ok::<(), quokka_selector::SelectorError>(())
//! ```

/// Simple selector categories and their ordering rules.
pub mod category;
/// Combinator punctuation per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Combined selectors built from two selector operands and a combinator.
pub mod combined;
/// Error kinds surfaced by fragment construction.
pub mod error;
/// The selector fragment value and its append operations.
pub mod fragment;

pub use category::Category;
pub use combinator::Combinator;
pub use combined::{CombinedSelector, combine};
pub use error::SelectorError;
pub use fragment::SelectorFragment;

/// Render a selector value to its canonical text form.
///
/// Implemented by [`SelectorFragment`] and [`CombinedSelector`]. Pure with
/// respect to the value: stringifying never mutates and two calls on the
/// same value always yield the same text.
pub trait Stringify {
    /// The canonical selector text.
    fn stringify(&self) -> String;
}

/// Start a fragment with a type selector
/// ([§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors)): `div`.
#[must_use]
pub fn element(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::Type, value)
}

/// Start a fragment with an ID selector
/// ([§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors)): `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::Id, value)
}

/// Start a fragment with a class selector
/// ([§ 6.6](https://www.w3.org/TR/selectors-4/#class-html)): `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::Class, value)
}

/// Start a fragment with an attribute selector
/// ([§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)):
/// `[href$=".png"]`. The value is the raw attribute expression and is
/// emitted verbatim between the brackets.
#[must_use]
pub fn attr(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::Attribute, value)
}

/// Start a fragment with a pseudo-class selector
/// ([§ 4](https://www.w3.org/TR/selectors-4/#pseudo-classes)):
/// `:focus`, `:nth-of-type(even)`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::PseudoClass, value)
}

/// Start a fragment with a pseudo-element selector
/// ([§ 11](https://www.w3.org/TR/selectors-4/#pseudo-elements)): `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorFragment {
    SelectorFragment::new().push(Category::PseudoElement, value)
}
