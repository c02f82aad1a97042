use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Rejects `NaN` and both infinities, which is the minimum a rating or a
/// temperature needs before it can enter a linear model.
///
/// # Examples
///
/// ```
/// use refrig_balance::support::constraint::Finite;
///
/// assert_eq!(Finite::new(55.0).unwrap().into_inner(), 55.0);
///
/// assert!(Finite::new(f64::NAN).is_err());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN` or infinite.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_values() {
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(-40.0_f32).is_ok());
        assert_eq!(*Finite::new(10_200.0).unwrap().as_ref(), 10_200.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::Infinite)
        );
    }
}
