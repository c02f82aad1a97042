use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero.
///
/// Used wherever a value ends up as a divisor, such as the reference
/// temperature difference of an evaporator rating.
///
/// # Examples
///
/// ```
/// use refrig_balance::support::constraint::{Constrained, NonZero};
///
/// let td = Constrained::<_, NonZero>::new(10.0).unwrap();
/// assert_eq!(td.into_inner(), 10.0);
///
/// assert!(NonZero::new(-5.0).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(NonZero::new(-0.0), Err(ConstraintError::Zero));
    }

    #[test]
    fn integers_and_floats() {
        assert_eq!(NonZero::new(15).unwrap().into_inner(), 15);
        assert!(NonZero::new(0).is_err());
        assert!(Constrained::<f64, NonZero>::new(1e-9).is_ok());
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
