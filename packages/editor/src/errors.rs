//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Invalid rotation: {0} (expected 0, 90, 180 or 270)")]
    InvalidRotation(i64),
}
