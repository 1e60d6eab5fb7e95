use crate::set_ops::{Family, ShapeKind};

/// Failures of the set operations
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOpError {
    /// The shape has no canonical form and cannot take part in a set operation
    #[error("no set operation is defined for a {0:?}")]
    Unsupported(ShapeKind),
    /// The pair of canonical families has no handler (yet)
    #[error("{op} is not implemented for {a:?} x {b:?}")]
    NotImplemented {
        op: &'static str,
        a: Family,
        b: Family,
    },
}
