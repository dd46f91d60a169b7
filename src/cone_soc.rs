use num_traits::Float;
use alloc::vec::Vec;
use crate::constraint::{Constraint, ConstraintError, Selectable, VectorLike};

//

/// Second-order cone parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SocParam<F: Float>
{
    /// Tolerance under which \\(\\|x\\|_2 + |r|\\) is regarded as zero, that is \\(u\\) as the apex.
    pub eps_zero: F,
}

impl<F: Float> Default for SocParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        SocParam {
            eps_zero: ten.powi(-16),
        }
    }
}

//

/// Second-order (or quadratic) cone
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// \\[
/// \mathcal{C}_a =
/// \left\lbrace u = (x, r) \in \mathbb{R}^{n-1} \times \mathbb{R}
/// \ \middle|\ a \\|x\\|_2 \le r
/// \right\rbrace,
/// \quad a > 0
/// \\]
/// 
/// The last element of a point \\(u\\) is \\(r\\) and the others are \\(x\\).
/// 
/// [`Constraint::distance_squared`] selects one of four closed forms:
/// zero at the apex and for \\(r \ge \\|x\\|_2 / a\\),
/// \\(\\|x\\|_2^2 + r^2\\) for \\(r \le -a \\|x\\|_2\\),
/// and otherwise
/// \\(n^2 + \beta (a n + r)^2 - 2 a n (a n + r) + (r - (a n + r) / (a^2 + 1))^2\\)
/// with \\(n = \\|\,|x|\,\\|_2\\), \\(\beta = a^2 / (a^2 + 1)\\).
/// This last form is kept as the penalty formula has always been defined;
/// it is not the exact squared distance there and may be negative,
/// e.g. \\(-32.76\\) for \\(a = 2\\), \\(u = (3, 0)\\).
#[derive(Debug, Clone)]
pub struct SecondOrderCone<F: Float>
{
    a: F,
    par: SocParam<F>,
}

impl<F: Float> SecondOrderCone<F>
{
    /// Creates an instance.
    /// 
    /// Returns [`SecondOrderCone`] instance, or [`ConstraintError::Construction`] unless `a` is positive.
    /// * `a` is the parameter \\(a\\).
    pub fn new(a: F) -> Result<Self, ConstraintError>
    {
        // NaN falls here too
        if !(a > F::zero()) {
            log::error!("Parameter a must be a positive number: {:?}", a.to_f64());
            return Err(ConstraintError::Construction);
        }

        Ok(SecondOrderCone {
            a,
            par: SocParam::default(),
        })
    }

    /// Changes the parameters.
    /// 
    /// Returns [`SecondOrderCone`] with its parameters changed by `f`.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SocParam<F>)
    {
        f(&mut self.par);
        self
    }

    /// Parameter \\(a\\).
    pub fn a(&self) -> F
    {
        self.a
    }

    /// Parameters.
    pub fn param(&self) -> &SocParam<F>
    {
        &self.par
    }
}

impl<F: Float> SecondOrderCone<F>
{
    fn dist_sq<S, V>(&self, u: &V) -> Result<S, ConstraintError>
    where S: Selectable<F=F>, V: VectorLike<S=S> + ?Sized
    {
        let f0 = F::zero();
        let f1 = F::one();
        let f2 = f1 + f1;

        let nu = u.len();
        if nu < 2 {
            log::error!("Point length must be >= 2: {}", nu);
            return Err(ConstraintError::InvalidArgument);
        }
        u.check()?;

        log::trace!("distance_squared: n {}", nu);

        let a = self.a;
        let a2 = a * a;
        let beta = a2 / (a2 + f1);

        let x = u.slice(0.. nu - 1);
        let r = u.elem(nu - 1);

        let eps = S::constant(self.par.eps_zero);
        let zero = S::constant(f0);

        let norm_x = x.abs().norm2();
        let sq_norm_x = x.dot(x);

        let an_r = S::constant(a) * norm_x.clone() + r.clone();

        let fun2 = sq_norm_x + r.sq();
        let fun3 = norm_x.sq()
            + S::constant(beta) * an_r.sq()
            - S::constant(f2 * a) * norm_x.clone() * an_r.clone()
            + (r.clone() - an_r / S::constant(a2 + f1)).sq();

        // apex
        let cond0 = (norm_x.clone() + r.fabs()).is_lt(&eps);
        // inside the cone
        let cond1 = r.is_ge(&(norm_x.clone() / S::constant(a)));
        // inside the polar cone
        let cond2 = r.is_le(&(S::constant(-a) * norm_x));

        S::if_else(cond0, zero.clone(),
            S::if_else(cond1, zero,
                S::if_else(cond2, fun2, fun3)?
            )?
        )
    }
}

impl<F: Float> Constraint<F> for SecondOrderCone<F>
{
    fn distance_squared<V>(&self, u: &V) -> Result<V::S, ConstraintError>
    where V: VectorLike + ?Sized, V::S: Selectable<F=F>
    {
        self.dist_sq(u)
    }

    fn project<V>(&self, u: &V) -> Result<Vec<V::S>, ConstraintError>
    where V: VectorLike + ?Sized, V::S: Selectable<F=F>
    {
        // TODO: projection onto the cone; a ball-style rescaling u / max(1, ||u||) does not project onto it
        log::error!("Projection onto SecondOrderCone is not provided: point length {}", u.len());
        Err(ConstraintError::NotSupported)
    }
}

//

#[test]
fn test_cone_soc1()
{
    use float_eq::assert_float_eq;

    let c = SecondOrderCone::new(1_f64).unwrap();

    assert_float_eq!(c.distance_squared(&[0., 0., 1.][..]).unwrap(), 0., abs <= 1e-12);
    assert_float_eq!(c.distance_squared(&[3., 4., -10.][..]).unwrap(), 125., abs <= 1e-12);
    assert_float_eq!(c.distance_squared(&[0., 0.][..]).unwrap(), 0., abs <= 1e-12);
}

#[test]
fn test_cone_soc_general()
{
    use float_eq::assert_float_eq;

    let c = SecondOrderCone::new(2_f64).unwrap();

    // norm_x^2 + beta (a norm_x + r)^2 - 2 a norm_x (a norm_x + r) + (r - (a norm_x + r) / (a^2 + 1))^2
    // = 9 + 0.8 * 36 - 72 + 1.44
    assert_float_eq!(c.distance_squared(&[3., 0.][..]).unwrap(), -32.76, abs <= 1e-12);
}

#[test]
fn test_cone_soc_new()
{
    assert!(SecondOrderCone::new(1e-3_f64).is_ok());
    assert_eq!(SecondOrderCone::new(0_f64).unwrap_err(), ConstraintError::Construction);
    assert_eq!(SecondOrderCone::new(-1_f64).unwrap_err(), ConstraintError::Construction);
    assert_eq!(SecondOrderCone::new(f64::NAN).unwrap_err(), ConstraintError::Construction);

    let c = SecondOrderCone::new(2.5_f64).unwrap().par(|p| p.eps_zero = 1e-12);
    assert_eq!(c.a(), 2.5);
    assert_eq!(c.param().eps_zero, 1e-12);
}

#[test]
fn test_cone_soc_eps()
{
    let c = SecondOrderCone::new(1_f64).unwrap();
    let c_loose = c.clone().par(|p| p.eps_zero = 1e-3);

    // within the looser tolerance the point counts as the apex
    let u = &[1e-4, -1e-4][..];
    assert!(c.distance_squared(u).unwrap() != 0.);
    assert_eq!(c_loose.distance_squared(u).unwrap(), 0.);
}

#[test]
fn test_cone_soc_project()
{
    let c = SecondOrderCone::new(1_f64).unwrap();

    assert_eq!(c.project(&[0., 0., 1.][..]).unwrap_err(), ConstraintError::NotSupported);
    assert_eq!(c.project(&[3., 4., -10.][..]).unwrap_err(), ConstraintError::NotSupported);
}
