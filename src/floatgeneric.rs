//! Eager [`Selectable`] implementation for plain floating point numbers

use num_traits::Float;
use crate::constraint::{ConstraintError, Selectable};

macro_rules! impl_selectable_float {
    ($($t:ty),+) => {
        $(
            impl Selectable for $t
            {
                type F = $t;
                type Pred = bool;

                fn constant(c: $t) -> $t
                {
                    c
                }

                fn fabs(&self) -> $t
                {
                    Float::abs(*self)
                }

                fn sqrt(&self) -> $t
                {
                    Float::sqrt(*self)
                }

                fn is_lt(&self, rhs: &$t) -> bool
                {
                    *self < *rhs
                }

                fn is_le(&self, rhs: &$t) -> bool
                {
                    *self <= *rhs
                }

                fn is_ge(&self, rhs: &$t) -> bool
                {
                    *self >= *rhs
                }

                fn if_else(cond: bool, if_true: $t, if_false: $t) -> Result<$t, ConstraintError>
                {
                    Ok(if cond {if_true} else {if_false})
                }
            }
        )+
    };
}

impl_selectable_float!(f32, f64);

//

#[test]
fn test_floatgeneric1()
{
    let a = -2_f64;
    let b = 3_f64;

    assert_eq!(a.fabs(), 2.);
    assert_eq!(Selectable::sqrt(&4_f64), 2.);
    assert!(a.is_lt(&b));
    assert!(a.is_le(&a));
    assert!(!a.is_ge(&b));
    assert_eq!(f64::if_else(a.is_lt(&b), a, b), Ok(a));
    assert_eq!(f64::if_else(a.is_ge(&b), a, b), Ok(b));
    assert_eq!(Selectable::sq(&a), 4.);
}

#[test]
fn test_floatgeneric_f32()
{
    let a = 1.5_f32;

    assert_eq!(<f32 as Selectable>::constant(a), 1.5);
    assert_eq!(f32::if_else(a.is_ge(&0.), a, -a), Ok(1.5));
}
