pub mod bridge;
pub mod chain;
pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{RailBridgeError, Result};
