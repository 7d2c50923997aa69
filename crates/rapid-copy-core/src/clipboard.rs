//! Clipboard Port
//!
//! The popup writes through the async Clipboard API first and falls back
//! to the legacy selection-copy path when that is refused.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard write denied: {0}")]
    Denied(String),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Synchronous fallback (hidden textarea + copy command in browsers)
    fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Try the primary path, then the legacy one
pub async fn copy_with_fallback(port: &dyn ClipboardPort, text: &str) -> Result<(), ClipboardError> {
    match port.write_text(text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("Failed to copy: {}; trying legacy copy", e);
            port.write_text_legacy(text)
        }
    }
}
