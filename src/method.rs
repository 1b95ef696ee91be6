use std::{fmt::Display, str::FromStr};

use crate::error::SplineError;

/// Strategy selector for [interp](crate::interp()). The set of strategies is
/// closed; string-keyed dispatch goes through [FromStr].
///
/// # Example
/// ```
/// use linear_spline::Method;
///
/// let method: Method = "piecewise-linear".parse().unwrap();
/// assert_eq!(Method::PiecewiseLinear, method);
///
/// assert!("bogus".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Per-interval linear interpolation using the two-point slope formula.
    PointSlope,
    /// Linear interpolation with interval location by forward scan.
    PiecewiseLinear,
    /// Natural cubic spline with second derivatives obtained from a
    /// tridiagonal system solve.
    Matrix,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::PointSlope => "point-slope",
            Method::PiecewiseLinear => "piecewise-linear",
            Method::Matrix => "matrix",
        }
    }
}

impl FromStr for Method {
    type Err = SplineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "point-slope" => Ok(Method::PointSlope),
            "piecewise-linear" => Ok(Method::PiecewiseLinear),
            "matrix" => Ok(Method::Matrix),
            _ => Err(SplineError::InvalidMethod(name.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_methods() {
        assert_eq!(Method::PointSlope, "point-slope".parse().unwrap());
        assert_eq!(Method::PiecewiseLinear, "piecewise-linear".parse().unwrap());
        assert_eq!(Method::Matrix, "matrix".parse().unwrap());
    }

    #[test]
    fn parse_invalid_method() {
        let result = "bogus".parse::<Method>();
        assert_eq!(Err(SplineError::InvalidMethod("bogus".to_string())), result);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Point-Slope".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn as_str_round_trips() {
        for method in [Method::PointSlope, Method::PiecewiseLinear, Method::Matrix] {
            assert_eq!(method, method.as_str().parse().unwrap());
        }
    }
}
