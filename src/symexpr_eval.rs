//! Evaluation of [`Expr`] at a numeric point

use num_traits::Float;
use alloc::vec;
use alloc::vec::Vec;
use crate::constraint::ConstraintError;
use crate::symexpr::{Expr, Node};

//

// sign with sign(0) = 0
fn sign0<F: Float>(v: F) -> F
{
    if v > F::zero() {
        F::one()
    }
    else if v < F::zero() {
        -F::one()
    }
    else {
        F::zero()
    }
}

// sparse gradient, sorted by index
type Grad<F> = Vec<(usize, F)>;

fn scale<F: Float>(alpha: F, x: &[(usize, F)]) -> Grad<F>
{
    x.iter().map(|(i, e)| (*i, alpha * *e)).collect()
}

// alpha x + beta y
fn lincomb<F: Float>(alpha: F, x: &[(usize, F)], beta: F, y: &[(usize, F)]) -> Grad<F>
{
    let mut z = Vec::with_capacity(x.len() + y.len());
    let (mut i, mut j) = (0, 0);

    while i < x.len() && j < y.len() {
        let (ix, ex) = x[i];
        let (iy, ey) = y[j];

        if ix < iy {
            z.push((ix, alpha * ex));
            i += 1;
        }
        else if iy < ix {
            z.push((iy, beta * ey));
            j += 1;
        }
        else {
            z.push((ix, alpha * ex + beta * ey));
            i += 1;
            j += 1;
        }
    }
    z.extend(x[i..].iter().map(|(k, e)| (*k, alpha * *e)));
    z.extend(y[j..].iter().map(|(k, e)| (*k, beta * *e)));

    z
}

fn scalar_expected() -> ConstraintError
{
    log::error!("predicate evaluated where a scalar is required");
    ConstraintError::InvalidArgument
}

fn predicate_expected() -> ConstraintError
{
    log::error!("scalar evaluated where a predicate is required");
    ConstraintError::InvalidArgument
}

impl<F: Float> Expr<F>
{
    fn symbol_value(name: &str, idx: usize, vals: &[F]) -> Result<F, ConstraintError>
    {
        vals.get(idx).copied().ok_or_else(|| {
            log::error!("symbol {}[{}] is out of {} values", name, idx, vals.len());
            ConstraintError::InvalidArgument
        })
    }

    /// Evaluates the expression.
    /// 
    /// Returns the value.
    /// * `vals` is values of the symbols; a symbol `name[idx]` takes `vals[idx]`.
    /// 
    /// Only the selected branch of an `if_else` is evaluated.
    /// Returns [`ConstraintError::InvalidArgument`] if a symbol is out of `vals`,
    /// or if the expression is a predicate.
    pub fn eval(&self, vals: &[F]) -> Result<F, ConstraintError>
    {
        match self.node() {
            Node::Const(c)        => Ok(*c),
            Node::Symbol(n, i)    => Self::symbol_value(n, *i, vals),
            Node::Neg(a)          => Ok(-a.eval(vals)?),
            Node::Abs(a)          => Ok(a.eval(vals)?.abs()),
            Node::Sqrt(a)         => Ok(a.eval(vals)?.sqrt()),
            Node::Add(a, b)       => Ok(a.eval(vals)? + b.eval(vals)?),
            Node::Sub(a, b)       => Ok(a.eval(vals)? - b.eval(vals)?),
            Node::Mul(a, b)       => Ok(a.eval(vals)? * b.eval(vals)?),
            Node::Div(a, b)       => Ok(a.eval(vals)? / b.eval(vals)?),
            Node::IfElse(c, a, b) => if c.eval_pred(vals)? {a.eval(vals)} else {b.eval(vals)},
            Node::Lt(..) | Node::Le(..) | Node::Ge(..) => Err(scalar_expected()),
        }
    }

    fn eval_pred(&self, vals: &[F]) -> Result<bool, ConstraintError>
    {
        match self.node() {
            Node::Lt(a, b) => Ok(a.eval(vals)? < b.eval(vals)?),
            Node::Le(a, b) => Ok(a.eval(vals)? <= b.eval(vals)?),
            Node::Ge(a, b) => Ok(a.eval(vals)? >= b.eval(vals)?),
            _ => Err(predicate_expected()),
        }
    }

    /// Evaluates the expression and its gradient by forward-mode differentiation.
    /// 
    /// Returns a tuple of the value and the gradient with respect to `vals`.
    /// * `vals` is values of the symbols, same as [`Expr::eval`].
    /// 
    /// The derivative of \\(|v|\\) at \\(v=0\\) is taken as zero,
    /// and only the selected branch of an `if_else` is differentiated.
    pub fn eval_grad(&self, vals: &[F]) -> Result<(F, Vec<F>), ConstraintError>
    {
        let (v, g) = self.grad_sparse(vals)?;

        let mut d = vec![F::zero(); vals.len()];
        for (i, e) in g {
            d[i] = d[i] + e;
        }

        Ok((v, d))
    }

    fn grad_sparse(&self, vals: &[F]) -> Result<(F, Grad<F>), ConstraintError>
    {
        let f1 = F::one();
        let f2 = f1 + f1;

        match self.node() {
            Node::Const(c) => Ok((*c, Vec::new())),
            Node::Symbol(nm, i) => {
                let v = Self::symbol_value(nm, *i, vals)?;
                Ok((v, vec![(*i, f1)]))
            },
            Node::Neg(a) => {
                let (v, d) = a.grad_sparse(vals)?;
                Ok((-v, scale(-f1, &d)))
            },
            Node::Abs(a) => {
                let (v, d) = a.grad_sparse(vals)?;
                Ok((v.abs(), scale(sign0(v), &d)))
            },
            Node::Sqrt(a) => {
                let (v, d) = a.grad_sparse(vals)?;
                let sv = v.sqrt();
                Ok((sv, scale((f2 * sv).recip(), &d)))
            },
            Node::Add(a, b) => {
                let (va, da) = a.grad_sparse(vals)?;
                let (vb, db) = b.grad_sparse(vals)?;
                Ok((va + vb, lincomb(f1, &da, f1, &db)))
            },
            Node::Sub(a, b) => {
                let (va, da) = a.grad_sparse(vals)?;
                let (vb, db) = b.grad_sparse(vals)?;
                Ok((va - vb, lincomb(f1, &da, -f1, &db)))
            },
            Node::Mul(a, b) => {
                let (va, da) = a.grad_sparse(vals)?;
                let (vb, db) = b.grad_sparse(vals)?;
                Ok((va * vb, lincomb(vb, &da, va, &db)))
            },
            Node::Div(a, b) => {
                let (va, da) = a.grad_sparse(vals)?;
                let (vb, db) = b.grad_sparse(vals)?;
                Ok((va / vb, lincomb(vb.recip(), &da, -va / (vb * vb), &db)))
            },
            Node::IfElse(c, a, b) => if c.eval_pred(vals)? {a.grad_sparse(vals)} else {b.grad_sparse(vals)},
            Node::Lt(..) | Node::Le(..) | Node::Ge(..) => Err(scalar_expected()),
        }
    }
}

//

#[test]
fn test_eval1()
{
    use float_eq::assert_float_eq;
    use crate::constraint::Selectable;
    use crate::SymKind;

    let u = Expr::<f64>::vector("u", 2, SymKind::Graph);
    let e = (u[0].clone() - Expr::constant(1.)) * u[1].fabs() / Expr::constant(2.);

    assert_float_eq!(e.eval(&[3., -4.]).unwrap(), 4., abs <= 1e-12);

    let (v, d) = e.eval_grad(&[3., -4.]).unwrap();
    assert_float_eq!(v, 4., abs <= 1e-12);
    assert_float_eq!(d[0], 2., abs <= 1e-12);
    assert_float_eq!(d[1], -1., abs <= 1e-12);
}

#[test]
fn test_eval_if_else()
{
    use crate::constraint::Selectable;
    use crate::SymKind;

    let x = Expr::<f64>::symbol("x", 0, SymKind::Graph);
    let zero = Expr::constant(0.);
    // lazily selected branch: the other one would divide by zero
    let e = Expr::if_else(x.is_le(&zero), zero.clone(), Expr::constant(1.) / x.clone()).unwrap();

    assert_eq!(e.eval(&[0.]), Ok(0.));
    assert_eq!(e.eval(&[4.]), Ok(0.25));
    assert_eq!(e.eval_grad(&[0.]), Ok((0., vec![0.])));
    assert_eq!(e.eval_grad(&[2.]), Ok((0.5, vec![-0.25])));
}

#[test]
fn test_eval_abs_at_zero()
{
    use crate::constraint::Selectable;
    use crate::SymKind;

    let x = Expr::<f64>::symbol("x", 0, SymKind::Graph);

    assert_eq!(x.fabs().eval_grad(&[0.]), Ok((0., vec![0.])));
    assert_eq!(x.fabs().eval_grad(&[-3.]), Ok((3., vec![-1.])));
}

#[test]
fn test_eval_err()
{
    use crate::constraint::Selectable;
    use crate::SymKind;

    let u = Expr::<f64>::vector("u", 3, SymKind::Graph);

    assert_eq!(u[2].eval(&[1., 2.]), Err(ConstraintError::InvalidArgument));
    assert_eq!(u[0].is_lt(&u[1]).eval(&[1., 2., 3.]), Err(ConstraintError::InvalidArgument));
    assert_eq!(u[0].is_lt(&u[1]).eval_grad(&[1., 2., 3.]).unwrap_err(), ConstraintError::InvalidArgument);
}
