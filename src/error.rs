use orbfield_core::ConfigError;
use thiserror::Error;

/// Reasons the background cannot start. All of them are fatal: without a
/// drawable canvas there is nothing to fall back to.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    CanvasNotFound(String),
    #[error("#{0} is not a <canvas>")]
    NotACanvas(String),
    #[error("2D context unavailable: {0}")]
    NoContext(String),
    #[error("failed to listen for `{event}`: {detail}")]
    Listen { event: &'static str, detail: String },
    #[error("invalid field config: {0}")]
    Config(#[from] ConfigError),
}
