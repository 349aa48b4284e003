use std::fmt;
use std::str::FromStr;
use log::{debug, info};
use ndarray::ArrayView2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use crate::imaging::labels::{CustomLabels, LabelBundle};
use crate::imaging::meas::EitMeas;
use crate::imaging::transform::{TransformKind, TransformPair};
use crate::imaging::voltage::{make_voltage_vector, MeasurementModel};
use crate::imaging::ImagingError;
const VOLTAGE_AXES: [&str; 2] = ["Measurements", "Voltages in [V]"];
/// Frame index and frequency of one voltage frame, kept as display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLabel {
    pub idx: String,
    pub freq: String,
}
impl FrameLabel {
    pub fn new(idx: impl ToString, freq: impl ToString) -> Self {
        Self {
            idx: idx.to_string(),
            freq: freq.to_string(),
        }
    }
}
/// Labels of the reference frame and of the measured frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMetadata {
    pub reference: FrameLabel,
    pub frame: FrameLabel,
}
impl FrameMetadata {
    pub fn new(reference: FrameLabel, frame: FrameLabel) -> Self {
        Self { reference, frame }
    }
    /// Builds metadata from `[(ref_idx, ref_freq), (frm_idx, frm_freq)]`.
    pub fn from_pairs<I: ToString, F: ToString>(labels: &[(I, F)]) -> Result<Self, ImagingError> {
        match labels {
            [(ref_idx, ref_freq), (frm_idx, frm_freq)] => Ok(Self::new(
                FrameLabel::new(ref_idx.to_string(), ref_freq.to_string()),
                FrameLabel::new(frm_idx.to_string(), frm_freq.to_string()),
            )),
            _ => Err(ImagingError::InvalidMetadata {
                actual: labels.len(),
            }),
        }
    }
}
/// The three ways of combining a reference and a measured frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImagingKind {
    Absolute,
    TimeDifference,
    FrequencyDifference,
}
impl ImagingKind {
    pub const ALL: [ImagingKind; 3] = [
        ImagingKind::Absolute,
        ImagingKind::TimeDifference,
        ImagingKind::FrequencyDifference,
    ];
    pub fn name(self) -> &'static str {
        match self {
            ImagingKind::Absolute => "Absolute imaging",
            ImagingKind::TimeDifference => "Time difference imaging",
            ImagingKind::FrequencyDifference => "Frequence difference imaging",
        }
    }
    /// Symbol of the imaged quantity.
    pub fn modality(self) -> &'static str {
        match self {
            ImagingKind::Absolute => "U",
            ImagingKind::TimeDifference => "\u{0394}U_t",
            ImagingKind::FrequencyDifference => "\u{0394}U_f",
        }
    }
    /// Renders the plot labels. `meas_labels` are the transformed quantity
    /// labels for the raw voltages and for the imaged quantity.
    pub fn make_labels(self, meas_labels: &[String; 2], metadata: &FrameMetadata) -> LabelBundle {
        let [lab_u, lab_imaging] = meas_labels;
        let reference = &metadata.reference;
        let frame = &metadata.frame;
        match self {
            ImagingKind::Absolute => {
                let t = format!("({lab_imaging}); {} ({})", frame.idx, frame.freq);
                LabelBundle::new(
                    CustomLabels::new(format!("Absolute Imaging {t}"), ["", ""], &["X", "Y"]),
                    CustomLabels::new(
                        format!("Voltages {t}"),
                        [frame.idx.as_str(), ""],
                        &VOLTAGE_AXES,
                    ),
                    CustomLabels::new(format!("Voltages {t}"), ["", ""], &VOLTAGE_AXES),
                )
            }
            ImagingKind::TimeDifference => {
                let t = format!(
                    "({lab_imaging}); {} ({} - {})",
                    frame.freq, reference.idx, frame.idx
                );
                LabelBundle::new(
                    CustomLabels::new(
                        format!("Time difference Imaging {t}"),
                        ["", ""],
                        &["X", "Y", "Z"],
                    ),
                    CustomLabels::new(
                        format!("Voltages ({lab_u}); {}", frame.freq),
                        [format!("Ref {}", reference.idx), frame.idx.clone()],
                        &VOLTAGE_AXES,
                    ),
                    CustomLabels::new(format!("Voltage differences {t}"), ["", ""], &VOLTAGE_AXES),
                )
            }
            ImagingKind::FrequencyDifference => {
                let t = format!(
                    "({lab_imaging}); {} ({} - {})",
                    frame.idx, reference.freq, frame.freq
                );
                LabelBundle::new(
                    CustomLabels::new(
                        format!("Frequency difference Imaging {t}"),
                        ["", ""],
                        &["X", "Y", "Z"],
                    ),
                    CustomLabels::new(
                        format!("Voltages ({lab_u}); {}", frame.idx),
                        [format!("Ref {}", reference.freq), frame.freq.clone()],
                        &VOLTAGE_AXES,
                    ),
                    CustomLabels::new(format!("Voltage differences {t}"), ["", ""], &VOLTAGE_AXES),
                )
            }
        }
    }
}
impl fmt::Display for ImagingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for ImagingKind {
    type Err = ImagingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("Frequency difference imaging") {
            return Ok(ImagingKind::FrequencyDifference);
        }
        ImagingKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ImagingError::UnknownImaging(s.to_string()))
    }
}
/// One imaging session: a variant plus the transform pair applied to both
/// frames.
///
/// `process_data` records the frame metadata it was given so that
/// [`Imaging::labels`] can re-render the labels later.
#[derive(Clone, Debug)]
pub struct Imaging {
    kind: ImagingKind,
    transforms: TransformPair,
    metadata: Option<FrameMetadata>,
}
impl Imaging {
    pub fn new(kind: ImagingKind, transforms: TransformPair) -> Self {
        Self {
            kind,
            transforms,
            metadata: None,
        }
    }
    pub fn with_transforms(kind: ImagingKind, kinds: &[TransformKind]) -> Result<Self, ImagingError> {
        Ok(Self::new(kind, TransformPair::try_from(kinds)?))
    }
    pub fn absolute(transforms: TransformPair) -> Self {
        Self::new(ImagingKind::Absolute, transforms)
    }
    pub fn time_difference(transforms: TransformPair) -> Self {
        Self::new(ImagingKind::TimeDifference, transforms)
    }
    pub fn frequency_difference(transforms: TransformPair) -> Self {
        Self::new(ImagingKind::FrequencyDifference, transforms)
    }
    /// Looks the variant up by its display name, e.g. `"Time difference imaging"`.
    pub fn from_name(name: &str, transforms: TransformPair) -> Result<Self, ImagingError> {
        Ok(Self::new(name.parse()?, transforms))
    }
    pub fn kind(&self) -> ImagingKind {
        self.kind
    }
    pub fn transforms(&self) -> TransformPair {
        self.transforms
    }
    pub fn metadata(&self) -> Option<&FrameMetadata> {
        self.metadata.as_ref()
    }
    pub fn meas_labels(&self) -> [String; 2] {
        self.transforms.meas_labels(self.kind.modality())
    }
    /// Transforms both frames into column vectors. A `None` frame yields an
    /// empty half.
    pub fn transform_voltages<M: MeasurementModel + ?Sized>(
        &self,
        v_ref: Option<ArrayView2<'_, Complex64>>,
        v_meas: Option<ArrayView2<'_, Complex64>>,
        model: &M,
    ) -> Result<EitMeas, ImagingError> {
        let kinds = [self.transforms.first, self.transforms.second];
        let reference = make_voltage_vector(model, &kinds, v_ref)?;
        let frame = make_voltage_vector(model, &kinds, v_meas)?;
        Ok(EitMeas::new(reference, frame, self.kind.name()))
    }
    pub fn make_labels(&self, metadata: &FrameMetadata) -> LabelBundle {
        self.kind.make_labels(&self.meas_labels(), metadata)
    }
    /// Transforms one reference/measured frame pair and renders its labels.
    pub fn process_data<M: MeasurementModel + ?Sized>(
        &mut self,
        v_ref: Option<ArrayView2<'_, Complex64>>,
        v_meas: Option<ArrayView2<'_, Complex64>>,
        metadata: FrameMetadata,
        model: &M,
    ) -> Result<(EitMeas, LabelBundle), ImagingError> {
        debug!(
            "{}: transforms {} then {}, ref {:?}, frame {:?}",
            self.kind,
            self.transforms.first,
            self.transforms.second,
            v_ref.map(|v| v.dim()),
            v_meas.map(|v| v.dim())
        );
        let meas = self.transform_voltages(v_ref, v_meas, model)?;
        let labels = self.make_labels(&metadata);
        info!(
            "{}: processed ref {} / frame {} -> {} + {} values",
            self.kind,
            metadata.reference.idx,
            metadata.frame.idx,
            meas.reference.nrows(),
            meas.frame.nrows()
        );
        self.metadata = Some(metadata);
        Ok((meas, labels))
    }
    /// Labels for the metadata of the last processed frame pair.
    pub fn labels(&self) -> Result<LabelBundle, ImagingError> {
        let metadata = self.metadata.as_ref().ok_or(ImagingError::MissingMetadata)?;
        Ok(self.make_labels(metadata))
    }
}
