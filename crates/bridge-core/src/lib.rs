pub mod error;
pub mod handoff;
pub mod message;
pub mod slack;
pub mod types;
pub mod workflow;

pub use error::{BridgeError, Result};
