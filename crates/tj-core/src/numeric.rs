use crate::TjError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TjError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TjError::NonFinite { what, value: v })
    }
}

/// Check that `v` is finite and lies in the closed interval `[min, max]`.
pub fn ensure_in_range(
    v: Real,
    min: Real,
    max: Real,
    what: &'static str,
) -> Result<Real, TjError> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(TjError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_in_range_bounds_are_inclusive() {
        assert_eq!(ensure_in_range(0.1, 0.1, 1.0, "eta").unwrap(), 0.1);
        assert_eq!(ensure_in_range(1.0, 0.1, 1.0, "eta").unwrap(), 1.0);
        let err = ensure_in_range(1.2, 0.1, 1.0, "eta").unwrap_err();
        assert!(matches!(err, TjError::OutOfRange { what: "eta", .. }));
        assert!(ensure_in_range(Real::INFINITY, 0.0, 1.0, "eta").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ensure_in_range_rejects_exterior(v in 1.0e-9_f64..1.0e6) {
            prop_assert!(ensure_in_range(1.0 + v, 0.0, 1.0, "v").is_err());
            prop_assert!(ensure_in_range(-v, 0.0, 1.0, "v").is_err());
        }

        #[test]
        fn ensure_in_range_accepts_interior(v in 0.0_f64..1.0) {
            prop_assert!(ensure_in_range(v, 0.0, 1.0, "v").is_ok());
        }
    }
}
