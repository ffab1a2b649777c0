use thiserror::Error;

/// Errors raised by the layer-surface core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// The running compositor does not offer the layer-shell protocol
    #[error("compositor does not support the layer-shell protocol")]
    Unsupported,

    /// Layer-shell must be set up before the window is first shown
    #[error("window is already mapped; layer-shell must be initialized before it is shown")]
    AlreadyMapped,

    /// A layer name outside Overlay/Top/Bottom/Background was selected
    #[error("unknown layer: {0:?}")]
    UnknownLayer(String),

    /// The layer chooser reported a change with nothing selected
    #[error("no layer selected")]
    NoSelection,
}
