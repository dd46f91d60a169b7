/// Constraint errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintError
{
    /// Invalid parameter given to a constructor.
    Construction,
    /// Unsupported or malformed point representation.
    InvalidArgument,
    /// Operation not provided by the constraint.
    NotSupported,
}

impl core::fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            ConstraintError::Construction    => "Construction: invalid constraint parameter",
            ConstraintError::InvalidArgument => "InvalidArgument: unsupported or malformed point",
            ConstraintError::NotSupported    => "NotSupported: operation not provided by the constraint",
        })
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for ConstraintError {}
