//! Selectable scalar

use num_traits::Float;
use core::ops::{Add, Sub, Mul, Div, Neg};
use crate::constraint::ConstraintError;

/// Scalar trait with a ternary branch.
/// 
/// Implemented eagerly by plain floating point numbers (see [`crate::floatgeneric`])
/// and lazily by symbolic expression nodes (see [`crate::Expr`]),
/// so that a single formula with branches can be written once for both.
pub trait Selectable: Sized + Clone
    + Add<Output=Self> + Sub<Output=Self> + Mul<Output=Self> + Div<Output=Self> + Neg<Output=Self>
{
    /// Floating point data type of constants.
    type F: Float;

    /// Data type of a predicate which [`Selectable::if_else`] branches on.
    type Pred;

    /// Lifts a constant.
    fn constant(c: Self::F) -> Self;

    /// Absolute value.
    fn fabs(&self) -> Self;

    /// Square root.
    fn sqrt(&self) -> Self;

    /// Predicate `self < rhs`.
    fn is_lt(&self, rhs: &Self) -> Self::Pred;

    /// Predicate `self <= rhs`.
    fn is_le(&self, rhs: &Self) -> Self::Pred;

    /// Predicate `self >= rhs`.
    fn is_ge(&self, rhs: &Self) -> Self::Pred;

    /// Selects `if_true` when `cond` holds, otherwise `if_false`.
    /// 
    /// Returns the selected value, or the expression that selects it when evaluated.
    /// * Returns [`ConstraintError::InvalidArgument`] if the representation cannot express a branch.
    fn if_else(cond: Self::Pred, if_true: Self, if_false: Self) -> Result<Self, ConstraintError>;

    /// Checks that the value is usable as a scalar.
    fn check(&self) -> Result<(), ConstraintError>
    {
        Ok(())
    }

    /// Square.
    fn sq(&self) -> Self
    {
        self.clone() * self.clone()
    }
}
