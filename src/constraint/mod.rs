//! Constraint traits and the capabilities they consume

mod constraint_error;
mod selectable;
mod vectorlike;
mod constraint;

pub use constraint_error::*;
pub use selectable::*;
pub use vectorlike::*;
pub use constraint::*;
