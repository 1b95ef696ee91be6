use nalgebra::{DMatrix, DVector};

use crate::{error::SplineError, method::Method};

/// Evaluate the spline defined by knots `xp` and values `yp` at point `x`
/// using the given strategy. Queries outside `[xp[0], xp[n-1]]` return the
/// nearest boundary value (constant extrapolation).
///
/// `xp` must be sorted ascending and of the same length as `yp`; see
/// [validate](crate::validate). The strategies additionally require at least
/// 2 knots, except [Method::PointSlope] which handles a single knot as
/// described in [interp_point_slope].
///
/// # Example
/// ```
/// use linear_spline::{interp, Method};
///
/// let xp = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let yp = [2.0, 4.0, 6.0, 8.0, 10.0];
///
/// assert_eq!(7.0, interp(3.5, &xp, &yp, Method::PointSlope).unwrap());
/// assert_eq!(7.0, interp(3.5, &xp, &yp, Method::PiecewiseLinear).unwrap());
/// ```
pub fn interp(x: f64, xp: &[f64], yp: &[f64], method: Method) -> Result<f64, SplineError> {
    match method {
        Method::PointSlope => Ok(interp_point_slope(x, xp, yp)),
        Method::PiecewiseLinear => interp_piecewise_linear(x, xp, yp),
        Method::Matrix => interp_matrix(x, xp, yp),
    }
}

/// Evaluate by scanning intervals left-to-right and applying the two-point
/// slope formula on the first interval containing `x`. Both interval ends are
/// inclusive, so a query exactly on an interior knot resolves to the
/// preceding interval and returns the knot's own value.
///
/// With a single knot and `x` exactly on it there is no interval to
/// interpolate over and the scan falls through to `f64::NAN`.
pub fn interp_point_slope(x: f64, xp: &[f64], yp: &[f64]) -> f64 {
    let n = xp.len();

    if x < xp[0] {
        return yp[0];
    } else if x > xp[n - 1] {
        return yp[n - 1];
    }

    for i in 0..n - 1 {
        if xp[i] <= x && x <= xp[i + 1] {
            let slope = (yp[i + 1] - yp[i]) / (xp[i + 1] - xp[i]);
            return yp[i] + (x - xp[i]) * slope;
        }
    }

    f64::NAN
}

/// Evaluate by advancing an index from the first interval until the interval
/// containing `x` is found, then interpolating with the normalized parameter
/// `t = (x - xp[i]) / (xp[i+1] - xp[i])`. Mathematically identical to
/// [interp_point_slope], differing only in boundary inclusivity at the exact
/// extrapolation limits.
pub fn interp_piecewise_linear(x: f64, xp: &[f64], yp: &[f64]) -> Result<f64, SplineError> {
    let n = xp.len();

    if n < 2 {
        return Err(SplineError::InsufficientKnots { required: 2, actual: n });
    }

    if x <= xp[0] {
        return Ok(yp[0]);
    } else if x >= xp[n - 1] {
        return Ok(yp[n - 1]);
    }

    let mut i = 0;
    while x > xp[i + 1] {
        i += 1;
    }

    let t = (x - xp[i]) / (xp[i + 1] - xp[i]);
    Ok(yp[i] + t * (yp[i + 1] - yp[i]))
}

/// Evaluate using a natural cubic spline whose second derivatives at the
/// knots are obtained by solving a tridiagonal linear system with natural
/// boundary conditions (zero second derivative at both ends).
///
/// Unlike the two linear strategies the result is not confined to the convex
/// hull of the enclosing interval's values; cubic overshoot is possible.
/// With exactly 2 knots the system reduces to the two boundary identity rows
/// and all second derivatives are zero.
pub fn interp_matrix(x: f64, xp: &[f64], yp: &[f64]) -> Result<f64, SplineError> {
    let n = xp.len();

    if n < 2 {
        return Err(SplineError::InsufficientKnots { required: 2, actual: n });
    }

    if x <= xp[0] {
        return Ok(yp[0]);
    } else if x >= xp[n - 1] {
        return Ok(yp[n - 1]);
    }

    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        matrix[(i, i - 1)] = xp[i] - xp[i - 1];
        matrix[(i, i)] = 2.0 * (xp[i + 1] - xp[i - 1]);
        matrix[(i, i + 1)] = xp[i + 1] - xp[i];
        rhs[i] = 6.0
            * ((yp[i + 1] - yp[i]) / (xp[i + 1] - xp[i])
                - (yp[i] - yp[i - 1]) / (xp[i] - xp[i - 1]));
    }

    // Natural boundary conditions: zero second derivative at both ends.
    matrix[(0, 0)] = 1.0;
    matrix[(n - 1, n - 1)] = 1.0;

    let c = match matrix.lu().solve(&rhs) {
        Some(solution) => solution,
        None => return Err(SplineError::SingularSystem),
    };

    let mut i = 0;
    while x > xp[i + 1] {
        i += 1;
    }

    let h = xp[i + 1] - xp[i];
    let t = (x - xp[i]) / h;
    let p1 = (1.0 - t) * yp[i];
    let p2 = t * yp[i + 1];
    let p3 = ((t.powi(3) - t) / 6.0) * ((yp[i + 1] - yp[i]) / h - (h / 6.0) * (c[i + 1] - c[i]));
    Ok(p1 + p2 + p3)
}
