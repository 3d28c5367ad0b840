//! Built-in calculation tools.

pub mod arithmetic;
pub mod growth;
pub mod percentage;
pub mod proportion;
