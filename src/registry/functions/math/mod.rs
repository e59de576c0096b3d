//! Mathematical operators

mod divide;

pub use divide::DivideFunction;
