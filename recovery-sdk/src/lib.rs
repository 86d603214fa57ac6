#![deny(missing_docs)]

//! Recovery SDK - Complete SDK.
//!
//! Re-exports all recovery SDK components for convenient single-crate usage.

pub use recovery_model as model;
pub use recovery_primitives as primitives;
