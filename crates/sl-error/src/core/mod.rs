pub mod engine;
pub mod strategy;

pub use engine::*;
pub use strategy::*;
