pub mod example;
pub mod example_set;

pub use example::*;
pub use example_set::*;
