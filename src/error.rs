//! Configuration validation errors.
//!
//! Generation itself never fails; these only come out of the validating
//! constructors on [`StrokeStyle`](crate::StrokeStyle) and
//! [`DashPattern`](crate::DashPattern).

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum StyleError {
    #[error("Dash pattern holds at most {max} lengths.")]
    TooManyDashes { max: usize },
    #[error("Dash and gap lengths must be finite and non-negative, got {0}.")]
    InvalidDashLength(f64),
    #[error("Dash pattern has zero total length.")]
    EmptyDashPattern,
    #[error("Width must be finite, got {0}.")]
    InvalidWidth(f64),
    #[error("Miter limit must be finite and at least 1, got {0}.")]
    InvalidMiterLimit(f64),
    #[error("Approximation scale must be finite and positive, got {0}.")]
    InvalidApproximationScale(f64),
    #[error("Smooth value must be within [0, 1], got {0}.")]
    InvalidSmoothValue(f64),
}
