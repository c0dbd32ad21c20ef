use thiserror::Error;

use crate::collision::BroadPhaseMethod;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("broad-phase method `{0}` is not implemented")]
    UnsupportedMethod(BroadPhaseMethod),
    #[error("invalid body {id}: {reason}")]
    InvalidBody { id: u32, reason: &'static str },
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),
    #[error("world has no bodies")]
    EmptyWorld,
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
