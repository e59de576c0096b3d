//! Operator implementations

pub mod array;
pub mod math;
pub mod string;

// Re-export all operators for convenience
pub use array::*;
pub use math::*;
pub use string::*;
