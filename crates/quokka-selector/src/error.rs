//! Error kinds surfaced by fragment construction.
//!
//! All of these are programming-usage errors, not transient failures: the
//! caller is expected to fix the call site rather than retry.

use thiserror::Error;

use crate::category::Category;

/// Error type for selector construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A category was appended after a higher-ranked one.
    #[error(
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element \
         (cannot append {appended} after {last})"
    )]
    OutOfOrder {
        /// The category the caller tried to append.
        appended: Category,
        /// The fragment's most recent, higher-ranked category.
        last: Category,
    },

    /// A single-occurrence category was appended a second time.
    #[error(
        "element, id and pseudo-element should not occur more than \
         one time inside the selector (duplicate {0})"
    )]
    Duplicate(Category),

    /// A character that is not one of the four combinators.
    #[error("unknown combinator {0:?} (expected one of ' ', '>', '+', '~')")]
    UnknownCombinator(char),
}
