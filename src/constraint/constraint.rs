//! Constraint set

use num_traits::Float;
use alloc::vec::Vec;
use crate::constraint::{ConstraintError, Selectable, VectorLike};

/// Constraint set trait
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// A closed convex set \\(\mathcal{C}\\) that a penalty or projection term of a solver is built from.
pub trait Constraint<F: Float>
{
    /// Calculates \\({\bf dist}^2(u, \mathcal{C})\\), that is the squared euclidean distance from \\(u\\) to the set \\(\mathcal{C}\\).
    /// 
    /// Returns the squared distance in the representation of `u`:
    /// a number for a numeric `u`, an expression for a symbolic `u`.
    /// * `u` is a point \\(u\\).
    fn distance_squared<V>(&self, u: &V) -> Result<V::S, ConstraintError>
    where V: VectorLike + ?Sized, V::S: Selectable<F=F>;

    /// Calculates \\(\Pi_\mathcal{C}(u)\\), that is euclidean projection of \\(u\\) onto the set \\(\mathcal{C}\\).
    /// 
    /// Returns the projected point, or [`ConstraintError::NotSupported`] if the set does not provide it.
    /// * `u` is a point \\(u\\).
    fn project<V>(&self, u: &V) -> Result<Vec<V::S>, ConstraintError>
    where V: VectorLike + ?Sized, V::S: Selectable<F=F>;
}
