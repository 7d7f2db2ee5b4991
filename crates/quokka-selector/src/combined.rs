//! Combined selectors per
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex).
//!
//! A combined selector joins the rendered text of two operands with a
//! combinator. It is terminal with respect to category appends, but it
//! implements [`Stringify`] and may itself be an operand of a further
//! [`combine`], so arbitrarily deep chains build up left to right.

use crate::Stringify;
use crate::combinator::Combinator;

/// Two rendered selector operands joined by a combinator.
///
/// Holds text, not fragments: the operands were already valid when
/// combined, and no further validation of their internal structure is
/// performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    /// Rendered text of the left operand.
    left: String,
    /// The joining combinator.
    combinator: Combinator,
    /// Rendered text of the right operand.
    right: String,
}

impl CombinedSelector {
    /// The joining combinator.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Rendered text of the left operand.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Rendered text of the right operand.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }
}

/// Join two selectors with a combinator.
///
/// Operands may be [`SelectorFragment`](crate::SelectorFragment)s or
/// previously combined selectors; each is rendered once at combination
/// time.
#[must_use]
pub fn combine<L, R>(left: &L, combinator: Combinator, right: &R) -> CombinedSelector
where
    L: Stringify + ?Sized,
    R: Stringify + ?Sized,
{
    CombinedSelector {
        left: left.stringify(),
        combinator,
        right: right.stringify(),
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        format!("{} {} {}", self.left, self.combinator, self.right)
    }
}

impl std::fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}
