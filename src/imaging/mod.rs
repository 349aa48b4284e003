// src/imaging/mod.rs
pub mod error;
pub mod labels;
pub mod meas;
pub mod strategy;
pub mod transform;
pub mod voltage;
pub use error::ImagingError;
pub use labels::{CustomLabels, EitPlotsType, LabelBundle};
pub use meas::EitMeas;
pub use strategy::{FrameLabel, FrameMetadata, Imaging, ImagingKind};
pub use transform::{transform, TransformKind, TransformPair};
pub use voltage::{make_voltage_vector, MeasurementModel};
