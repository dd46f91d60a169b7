/*!
Squared distance to a second-order cone.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate provides [`SecondOrderCone`], a constraint set
\\(\mathcal{C}_a = \lbrace (x, r) \mid a \\|x\\|_2 \le r \rbrace\\),
and computes \\({\bf dist}^2(u, \mathcal{C}_a)\\) of a point \\(u\\) for penalty terms of a solver.

A point is any [`constraint::VectorLike`]:
* a slice of `f64` or `f32` - the distance is evaluated at once;
* a slice of [`Expr`] - an expression graph of the distance is built,
  which can be evaluated (and differentiated) later at any point.

# Examples

```
use float_eq::assert_float_eq;
use socdist::prelude::*;
use socdist::{Expr, SymKind};

//env_logger::init(); // Use any logger crate as `socdist` uses `log` crate.

let cone = SecondOrderCone::new(1_f64).unwrap();

// numeric point
let d = cone.distance_squared(&[3., 4., -10.][..]).unwrap();
assert_float_eq!(d, 125., abs <= 1e-12);

// symbolic point
let u = Expr::<f64>::vector("u", 3, SymKind::Graph);
let d_sym = cone.distance_squared(&u[..]).unwrap();
assert_float_eq!(d_sym.eval(&[3., 4., -10.]).unwrap(), 125., abs <= 1e-12);
```
*/

#![no_std]

extern crate alloc;

pub mod constraint;

//

pub mod floatgeneric;

//

mod symexpr;
mod symexpr_eval;

pub use symexpr::*;

//

mod cone_soc;

pub use cone_soc::*;

//

/// Prelude
pub mod prelude
{
    pub use crate::constraint::{Constraint, ConstraintError, Selectable, VectorLike};
    pub use crate::{SecondOrderCone, SocParam};
}
