use std::path::PathBuf;

/// Refusals from the item list. The list is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("label is empty")]
    EmptyLabel,
    #[error("the wheel already holds {max} items")]
    Full { max: usize },
    #[error("the wheel needs at least {min} items")]
    TooFew { min: usize },
    #[error("no item at position {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("seed list must hold between {min} and {max} non-empty labels, got {len}")]
    InvalidSeed { len: usize, min: usize, max: usize },
}

/// Failures that stop the widget from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to read font {}: {}", path.display(), source)]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable font", path.display())]
    InvalidFont { path: PathBuf },
    #[error("max_framerate must be a positive number, got {0}")]
    InvalidFramerate(f64),
    #[error(transparent)]
    Items(#[from] ItemError),
}

pub type Result<T> = std::result::Result<T, WheelError>;
