//! Library for evaluating one-dimensional linear and natural cubic splines
//! defined by sorted knots and corresponding values.
//! Queries outside the knot range use constant extrapolation.
//!
//! # Example
//! ```
//! use linear_spline::{interp, Method};
//!
//! let xp = [1.0, 2.0, 4.0, 7.0];
//! let yp = [3.0, 5.0, 6.0, 10.0];
//!
//! let y = interp(3.5, &xp, &yp, Method::PointSlope).unwrap();
//! assert!((y - 5.75).abs() < 1e-12);
//!
//! // Constant extrapolation outside the knot range.
//! assert_eq!(3.0, interp(0.0, &xp, &yp, Method::PointSlope).unwrap());
//! assert_eq!(10.0, interp(8.0, &xp, &yp, Method::PointSlope).unwrap());
//! ```

mod data;
mod error;
mod interp;
mod method;

pub use data::validate;
pub use error::SplineError;
pub use interp::{interp, interp_matrix, interp_piecewise_linear, interp_point_slope};
pub use method::Method;
