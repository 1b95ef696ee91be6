use crate::error::SplineError;

/// Check that `(xp, yp)` form a usable knot/value table: both non-empty, of
/// equal length, with `xp` sorted in ascending order.
///
/// The evaluation strategies assume these preconditions already hold; callers
/// feeding external data should validate once up front.
pub fn validate(xp: &[f64], yp: &[f64]) -> Result<(), SplineError> {
    if xp.is_empty() || yp.is_empty() {
        return Err(SplineError::EmptyKnots);
    }

    if xp.len() != yp.len() {
        return Err(SplineError::LengthMismatch {
            knots: xp.len(),
            values: yp.len(),
        });
    }

    if xp.windows(2).any(|pair| pair[1] < pair[0]) {
        return Err(SplineError::UnsortedKnots);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sorted_table() {
        let xp = [1.0, 2.0, 4.0, 7.0];
        let yp = [3.0, 5.0, 6.0, 10.0];

        assert!(validate(&xp, &yp).is_ok());
    }

    #[test]
    fn accepts_single_knot() {
        assert!(validate(&[2.0], &[5.0]).is_ok());
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(Err(SplineError::EmptyKnots), validate(&[], &[]));
        assert_eq!(Err(SplineError::EmptyKnots), validate(&[1.0], &[]));
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = validate(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert_eq!(Err(SplineError::LengthMismatch { knots: 3, values: 2 }), result);
    }

    #[test]
    fn rejects_unsorted_knots() {
        let result = validate(&[1.0, 3.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(Err(SplineError::UnsortedKnots), result);
    }

    #[test]
    fn tolerates_tied_knots() {
        // Ties violate the strategies' sorted-ascending contract but pass
        // validation, matching a non-strict sortedness check.
        assert!(validate(&[1.0, 2.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]).is_ok());
    }
}
