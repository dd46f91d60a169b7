use num_traits::Float;
use core::fmt::{Display, Formatter};
use core::ops::{Add, Sub, Mul, Div, Neg};
use alloc::sync::Arc;
use alloc::vec::Vec;
use crate::constraint::{ConstraintError, Selectable};

//

/// Capability of symbolic expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymKind
{
    /// Expression graph which can express conditional branches.
    Graph,
    /// Pure scalar algebra without conditional branches.
    Algebraic,
}

impl SymKind
{
    fn merge(self, other: SymKind) -> SymKind
    {
        if self == SymKind::Algebraic || other == SymKind::Algebraic {
            SymKind::Algebraic
        }
        else {
            SymKind::Graph
        }
    }
}

//

#[derive(Debug)]
pub(crate) enum Node<F>
{
    Const(F),
    Symbol(Arc<str>, usize),
    Neg(Expr<F>),
    Abs(Expr<F>),
    Sqrt(Expr<F>),
    Add(Expr<F>, Expr<F>),
    Sub(Expr<F>, Expr<F>),
    Mul(Expr<F>, Expr<F>),
    Div(Expr<F>, Expr<F>),
    Lt(Expr<F>, Expr<F>),
    Le(Expr<F>, Expr<F>),
    Ge(Expr<F>, Expr<F>),
    IfElse(Expr<F>, Expr<F>, Expr<F>),
}

/// Symbolic expression
/// 
/// A node of an immutable expression graph.
/// Cloning is cheap and shares the sub-graph.
/// 
/// Arithmetic operators and [`Selectable`] build new nodes lazily;
/// nothing is evaluated until [`Expr::eval`] or [`Expr::eval_grad`] is called.
/// Comparisons build predicate nodes, which are valid only as the condition of [`Selectable::if_else`].
#[derive(Debug, Clone)]
pub struct Expr<F>
{
    node: Arc<Node<F>>,
    kind: SymKind,
}

impl<F: Float> Expr<F>
{
    fn new(node: Node<F>, kind: SymKind) -> Self
    {
        Expr {
            node: Arc::new(node),
            kind,
        }
    }

    /// Creates a constant.
    pub fn constant(c: F) -> Self
    {
        Self::new(Node::Const(c), SymKind::Graph)
    }

    /// Creates a symbol `name[idx]`.
    /// 
    /// * `idx` is the position of the symbol's value in the slice given to [`Expr::eval`].
    /// * `kind` is the capability of expressions built from the symbol.
    pub fn symbol(name: &str, idx: usize, kind: SymKind) -> Self
    {
        Self::new(Node::Symbol(Arc::from(name), idx), kind)
    }

    /// Creates a vector of symbols `name[0]`, ..., `name[n-1]`.
    pub fn vector(name: &str, n: usize, kind: SymKind) -> Vec<Self>
    {
        let name: Arc<str> = Arc::from(name);

        (0.. n).map(|i| Self::new(Node::Symbol(name.clone(), i), kind)).collect()
    }

    /// Capability of the expression.
    pub fn kind(&self) -> SymKind
    {
        self.kind
    }

    /// Returns `true` if the expression is a boolean-valued predicate.
    pub fn is_predicate(&self) -> bool
    {
        matches!(*self.node, Node::Lt(..) | Node::Le(..) | Node::Ge(..))
    }

    pub(crate) fn node(&self) -> &Node<F>
    {
        &self.node
    }

    fn unary(a: Self, f: fn(Self) -> Node<F>) -> Self
    {
        let kind = a.kind;
        Self::new(f(a), kind)
    }

    fn binary(a: Self, b: Self, f: fn(Self, Self) -> Node<F>) -> Self
    {
        let kind = a.kind.merge(b.kind);
        Self::new(f(a, b), kind)
    }
}

//

macro_rules! impl_expr_binop {
    ($tr:ident, $method:ident, $variant:ident) => {
        impl<F: Float> $tr for Expr<F>
        {
            type Output = Expr<F>;

            fn $method(self, rhs: Expr<F>) -> Expr<F>
            {
                Expr::binary(self, rhs, Node::$variant)
            }
        }
    };
}

impl_expr_binop!(Add, add, Add);
impl_expr_binop!(Sub, sub, Sub);
impl_expr_binop!(Mul, mul, Mul);
impl_expr_binop!(Div, div, Div);

impl<F: Float> Neg for Expr<F>
{
    type Output = Expr<F>;

    fn neg(self) -> Expr<F>
    {
        Expr::unary(self, Node::Neg)
    }
}

//

impl<F: Float> Selectable for Expr<F>
{
    type F = F;
    type Pred = Expr<F>;

    fn constant(c: F) -> Self
    {
        Expr::constant(c)
    }

    fn fabs(&self) -> Self
    {
        Expr::unary(self.clone(), Node::Abs)
    }

    fn sqrt(&self) -> Self
    {
        Expr::unary(self.clone(), Node::Sqrt)
    }

    fn is_lt(&self, rhs: &Self) -> Self
    {
        Expr::binary(self.clone(), rhs.clone(), Node::Lt)
    }

    fn is_le(&self, rhs: &Self) -> Self
    {
        Expr::binary(self.clone(), rhs.clone(), Node::Le)
    }

    fn is_ge(&self, rhs: &Self) -> Self
    {
        Expr::binary(self.clone(), rhs.clone(), Node::Ge)
    }

    fn if_else(cond: Self, if_true: Self, if_false: Self) -> Result<Self, ConstraintError>
    {
        let kind = cond.kind.merge(if_true.kind).merge(if_false.kind);

        if kind == SymKind::Algebraic {
            log::error!("if_else is not expressible by {:?} expressions", kind);
            return Err(ConstraintError::InvalidArgument);
        }
        if !cond.is_predicate() {
            log::error!("if_else condition is not a predicate");
            return Err(ConstraintError::InvalidArgument);
        }
        if if_true.is_predicate() || if_false.is_predicate() {
            log::error!("if_else branch is a predicate");
            return Err(ConstraintError::InvalidArgument);
        }

        Ok(Expr::new(Node::IfElse(cond, if_true, if_false), kind))
    }

    fn check(&self) -> Result<(), ConstraintError>
    {
        if self.is_predicate() {
            log::error!("predicate given where a scalar is required");
            Err(ConstraintError::InvalidArgument)
        }
        else {
            Ok(())
        }
    }
}

//

impl<F: Float + Display> Display for Expr<F>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self.node() {
            Node::Const(c)        => write!(f, "{}", c),
            Node::Symbol(n, i)    => write!(f, "{}[{}]", n, i),
            Node::Neg(a)          => write!(f, "(-{})", a),
            Node::Abs(a)          => write!(f, "fabs({})", a),
            Node::Sqrt(a)         => write!(f, "sqrt({})", a),
            Node::Add(a, b)       => write!(f, "({} + {})", a, b),
            Node::Sub(a, b)       => write!(f, "({} - {})", a, b),
            Node::Mul(a, b)       => write!(f, "({} * {})", a, b),
            Node::Div(a, b)       => write!(f, "({} / {})", a, b),
            Node::Lt(a, b)        => write!(f, "({} < {})", a, b),
            Node::Le(a, b)        => write!(f, "({} <= {})", a, b),
            Node::Ge(a, b)        => write!(f, "({} >= {})", a, b),
            Node::IfElse(c, a, b) => write!(f, "if_else({}, {}, {})", c, a, b),
        }
    }
}

//

#[test]
fn test_symexpr_display()
{
    use alloc::string::ToString;

    let u = Expr::<f64>::vector("u", 2, SymKind::Graph);
    let e = (u[0].clone() + Expr::constant(1.)) * u[1].fabs();

    assert_eq!(e.to_string(), "((u[0] + 1) * fabs(u[1]))");
    assert_eq!(u[0].is_lt(&u[1]).to_string(), "(u[0] < u[1])");
}

#[test]
fn test_symexpr_kind()
{
    let g = Expr::<f64>::symbol("g", 0, SymKind::Graph);
    let s = Expr::<f64>::symbol("s", 0, SymKind::Algebraic);

    assert_eq!((g.clone() + g.clone()).kind(), SymKind::Graph);
    assert_eq!((g.clone() * s.clone()).kind(), SymKind::Algebraic);
    assert_eq!((-s.clone()).kind(), SymKind::Algebraic);

    let c = g.is_ge(&Expr::constant(0.));
    assert!(c.is_predicate());
    assert!(Expr::if_else(c.clone(), g.clone(), -g.clone()).is_ok());
    assert_eq!(Expr::if_else(c.clone(), s.clone(), g.clone()).unwrap_err(), ConstraintError::InvalidArgument);
    assert_eq!(Expr::if_else(g.clone(), g.clone(), g.clone()).unwrap_err(), ConstraintError::InvalidArgument);
    assert_eq!(Expr::if_else(c.clone(), c.clone(), g.clone()).unwrap_err(), ConstraintError::InvalidArgument);
    assert_eq!(c.check(), Err(ConstraintError::InvalidArgument));
    assert_eq!(g.check(), Ok(()));
}
