pub mod quad_bridge;

pub use quad_bridge::{BridgeOutcome, QuadBridge};
