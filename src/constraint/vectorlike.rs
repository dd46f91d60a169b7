//! Vector-like

use num_traits::Zero;
use core::ops::Range;
use alloc::boxed::Box;
use alloc::vec::Vec;
use crate::constraint::{ConstraintError, Selectable};

/// Vector trait over [`Selectable`] elements.
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
pub trait VectorLike
{
    /// Element data type.
    type S: Selectable;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `idx`.
    fn elem(&self, idx: usize) -> Self::S;

    /// Sub-vector of elements within `range`.
    fn slice(&self, range: Range<usize>) -> &Self;

    /// Elementwise absolute value \\(|x|\\).
    fn abs(&self) -> Box<Self>;

    /// Dot product \\(x^T y\\).
    /// 
    /// * `rhs` is \\(y\\) and shall have the same length as `self`.
    fn dot(&self, rhs: &Self) -> Self::S;

    /// 2-norm (or euclidean norm) \\(\\|x\\|_2=\sqrt{x^T x}\\).
    fn norm2(&self) -> Self::S
    {
        self.dot(self).sqrt()
    }

    /// Checks that every element is usable as a scalar.
    fn check(&self) -> Result<(), ConstraintError>;
}

//

// pairwise summation keeps an expression graph of the sum O(log n) deep
fn sum_pairwise<S: Selectable>(mut terms: Vec<S>) -> Option<S>
{
    while terms.len() > 1 {
        let mut next = Vec::with_capacity((terms.len() + 1) / 2);
        let mut iter = terms.into_iter();

        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => next.push(a + b),
                None => next.push(a),
            }
        }
        terms = next;
    }

    terms.pop()
}

impl<S: Selectable> VectorLike for [S]
{
    type S = S;

    fn len(&self) -> usize
    {
        <[S]>::len(self)
    }

    fn elem(&self, idx: usize) -> S
    {
        self[idx].clone()
    }

    fn slice(&self, range: Range<usize>) -> &[S]
    {
        &self[range]
    }

    fn abs(&self) -> Box<[S]>
    {
        self.iter().map(S::fabs).collect()
    }

    fn dot(&self, rhs: &[S]) -> S
    {
        assert_eq!(<[S]>::len(self), <[S]>::len(rhs));

        let prods = self.iter().zip(rhs).map(|(u, v)| u.clone() * v.clone()).collect();

        sum_pairwise(prods).unwrap_or_else(|| S::constant(<S::F as Zero>::zero()))
    }

    fn check(&self) -> Result<(), ConstraintError>
    {
        for e in self {
            e.check()?;
        }
        Ok(())
    }
}

//

#[test]
fn test_vectorlike1()
{
    use float_eq::assert_float_eq;

    let x: &[f64] = &[3., -4., 12.];

    assert_eq!(VectorLike::len(x), 3);
    assert_eq!(x.elem(1), -4.);
    assert_eq!(x.slice(0..2), &[3., -4.]);
    assert_eq!(&*x.abs(), &[3., 4., 12.]);
    assert_float_eq!(x.dot(x), 169., abs <= 1e-12);
    assert_float_eq!(x.norm2(), 13., abs <= 1e-12);
    assert_float_eq!(x.abs().norm2(), 13., abs <= 1e-12);
}

#[test]
fn test_vectorlike_pairwise()
{
    use alloc::vec;

    assert_eq!(sum_pairwise::<f64>(vec![]), None);
    assert_eq!(sum_pairwise(vec![1.5]), Some(1.5));
    assert_eq!(sum_pairwise(vec![1., 2., 3., 4., 5.]), Some(15.));

    let x = vec![1_f64; 1001];
    assert_eq!(x.dot(&x), 1001.);
}

#[test]
fn test_vectorlike_empty()
{
    let x: &[f64] = &[];

    assert_eq!(x.dot(x), 0.);
    assert_eq!(x.norm2(), 0.);
    assert_eq!(x.check(), Ok(()));
}
