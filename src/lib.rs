//! Electrical Impedance Tomography model and imaging transforms.
//!
//! [`model`] holds the chamber/electrode setup and the geometry derived from
//! it; [`imaging`] turns raw reference/measurement voltage frames into
//! labelled voltage vectors for plotting or reconstruction.
pub mod imaging;
pub mod model;
pub use imaging::{
    make_voltage_vector, transform, CustomLabels, EitMeas, EitPlotsType, FrameLabel,
    FrameMetadata, Imaging, ImagingError, ImagingKind, LabelBundle, MeasurementModel,
    TransformKind, TransformPair,
};
pub use model::{EitModel, EitSetup, ModelConfig, ModelError};
