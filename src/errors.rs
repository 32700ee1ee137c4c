//! Error types for containment operations.
//!
//! Only two operations in the crate can fail: adding a shape to a carrier
//! and indexing into a carrier's children. Everything else is total.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by [`Space`](crate::space::Space) containment operations.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    #[error("shape already belongs to a carrier")]
    #[diagnostic(
        code(bouncebox::space::already_carried),
        help("remove the shape from its current carrier before re-adding it")
    )]
    AlreadyCarried,

    #[error("adding the shape would create a containment cycle")]
    #[diagnostic(code(bouncebox::space::would_cycle))]
    WouldCycle,

    #[error("shape extends past the carrier's right or bottom edge")]
    #[diagnostic(
        code(bouncebox::space::does_not_fit),
        help("shrink or reposition the shape so it fits inside the carrier")
    )]
    DoesNotFit,

    #[error("no child at index {index} (carrier holds {count})")]
    #[diagnostic(code(bouncebox::space::index_out_of_range))]
    IndexOutOfRange { index: usize, count: usize },
}
