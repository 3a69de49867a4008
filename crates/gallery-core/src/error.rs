use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("malformed photo list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("formation has {targets} targets but the scene holds {panels} panels")]
    LengthMismatch { panels: usize, targets: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session has been disposed")]
    Disposed,
    #[error("no panel at index {0}")]
    NoSuchPanel(usize),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("render failed: {0}")]
    Render(anyhow::Error),
}
