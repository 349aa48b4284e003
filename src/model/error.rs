use thiserror::Error;
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("FEM refinement must be in (0, 1), got {0}")]
    InvalidRefinement(f64),
    #[error("unsupported pattern: {0:?}")]
    UnsupportedPattern(String),
    #[error("measurement pattern has {actual} channels, model has {expected} electrodes")]
    PatternShape { expected: usize, actual: usize },
    #[error("electrode count must be at least 2")]
    InvalidElectrodeCount,
    #[error("failed to read model config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model config: {0}")]
    Json(#[from] serde_json::Error),
}
