//! Typed failures reported by [`ResultUnion`](crate::ResultUnion) operations.

mod conversions;
mod types;

pub use types::{AccessError, CoercionError, ConstructionError, InvocationError, UnionError};

#[cfg(test)]
mod tests;
