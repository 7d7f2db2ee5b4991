//! Rectangle value type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for geometry values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A dimension was negative, NaN, or infinite.
    #[error("rectangle dimensions must be finite and non-negative (got {width} x {height})")]
    InvalidDimension {
        /// The offending width.
        width: f64,
        /// The offending height.
        height: f64,
    },
}

/// An axis-aligned rectangle described by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    ///
    /// # Errors
    ///
    /// [`GeomError::InvalidDimension`] if either side is negative or
    /// non-finite.
    pub fn new(width: f64, height: f64) -> Result<Self, GeomError> {
        if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
            Ok(Self { width, height })
        } else {
            Err(GeomError::InvalidDimension { width, height })
        }
    }

    /// The rectangle's area, computed from the current side lengths.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
