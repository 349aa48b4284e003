use thiserror::Error;
#[derive(Debug, Error)]
pub enum ImagingError {
    #[error("transform pair must hold exactly 2 transforms, got {actual}")]
    InvalidTransformArity { actual: usize },
    #[error("no frame metadata recorded yet; process a frame pair first")]
    MissingMetadata,
    #[error("unknown transform: {0:?}")]
    UnknownTransform(String),
    #[error("unknown imaging type: {0:?}")]
    UnknownImaging(String),
    #[error("frame labels must hold 2 (frame, frequency) entries, got {actual}")]
    InvalidMetadata { actual: usize },
    #[error("channel count mismatch: expected at least {expected}, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },
    #[error("measurement pattern has {actual} channels, model has {expected} electrodes")]
    PatternShape { expected: usize, actual: usize },
}
