use std::fmt;
use std::str::FromStr;
use ndarray::{Array1, Array2, Axis};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use crate::imaging::ImagingError;
/// Element-wise transform applied to a measurement vector.
///
/// Each kind carries its own display name, so two kinds computing the same
/// numbers (`Magnitude` and `Abs`) still label differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    Real,
    Imag,
    Magnitude,
    Phase,
    Abs,
    Identity,
}
impl TransformKind {
    pub const ALL: [TransformKind; 6] = [
        TransformKind::Real,
        TransformKind::Imag,
        TransformKind::Magnitude,
        TransformKind::Phase,
        TransformKind::Abs,
        TransformKind::Identity,
    ];
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Real => "Real",
            TransformKind::Imag => "Imag",
            TransformKind::Magnitude => "Magnitude",
            TransformKind::Phase => "Phase",
            TransformKind::Abs => "Abs",
            TransformKind::Identity => "Identity",
        }
    }
    /// True for the kinds that produce a non-negative norm.
    pub fn is_norm(self) -> bool {
        matches!(self, TransformKind::Magnitude | TransformKind::Abs)
    }
    pub fn apply_value(self, value: Complex64) -> Complex64 {
        match self {
            TransformKind::Real => Complex64::new(value.re, 0.0),
            TransformKind::Imag => Complex64::new(value.im, 0.0),
            TransformKind::Magnitude | TransformKind::Abs => Complex64::new(value.norm(), 0.0),
            TransformKind::Phase => Complex64::new(value.arg(), 0.0),
            TransformKind::Identity => value,
        }
    }
    pub fn apply(self, values: Array1<Complex64>) -> Array1<Complex64> {
        if self == TransformKind::Identity {
            return values;
        }
        values.mapv_into(|v| self.apply_value(v))
    }
}
impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for TransformKind {
    type Err = ImagingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // "Image" is the historical key for the imaginary part.
        if trimmed.eq_ignore_ascii_case("image") {
            return Ok(TransformKind::Imag);
        }
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ImagingError::UnknownTransform(s.to_string()))
    }
}
/// The two transforms applied, in order, to every voltage vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPair {
    pub first: TransformKind,
    pub second: TransformKind,
}
impl TransformPair {
    pub fn new(first: TransformKind, second: TransformKind) -> Self {
        Self { first, second }
    }
    pub fn identity() -> Self {
        Self::new(TransformKind::Identity, TransformKind::Identity)
    }
    pub fn apply(&self, values: Array1<Complex64>) -> Array1<Complex64> {
        self.second.apply(self.first.apply(values))
    }
    /// Labels for the raw voltages and for the imaging quantity, e.g.
    /// `["Real(U)", "Real(ΔU_t)"]`, wrapped in `||..||` when the second
    /// transform is a norm.
    pub fn meas_labels(&self, modality: &str) -> [String; 2] {
        let name = self.first.name();
        let labels = [format!("{name}(U)"), format!("{name}({modality})")];
        if self.second.is_norm() {
            labels.map(|lab| format!("||{lab}||"))
        } else {
            labels
        }
    }
}
impl Default for TransformPair {
    fn default() -> Self {
        Self::identity()
    }
}
impl TryFrom<&[TransformKind]> for TransformPair {
    type Error = ImagingError;
    fn try_from(kinds: &[TransformKind]) -> Result<Self, Self::Error> {
        match kinds {
            [first, second] => Ok(Self::new(*first, *second)),
            _ => Err(ImagingError::InvalidTransformArity {
                actual: kinds.len(),
            }),
        }
    }
}
/// Applies `kinds` (which must hold exactly two transforms) to `values` and
/// returns the result as a column vector.
pub fn transform(
    values: Array1<Complex64>,
    kinds: &[TransformKind],
) -> Result<Array2<Complex64>, ImagingError> {
    let pair = TransformPair::try_from(kinds)?;
    Ok(pair.apply(values).insert_axis(Axis(1)))
}
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }
    #[test]
    fn transform_rejects_wrong_arity() {
        let x = array![c(1.0, 1.0)];
        for kinds in [
            vec![],
            vec![TransformKind::Real],
            vec![TransformKind::Real, TransformKind::Abs, TransformKind::Identity],
        ] {
            let err = transform(x.clone(), &kinds).unwrap_err();
            assert!(matches!(
                err,
                ImagingError::InvalidTransformArity { actual } if actual == kinds.len()
            ));
        }
    }
    #[test]
    fn transform_returns_column_vector() {
        let x = array![c(3.0, 4.0), c(-1.0, 0.0), c(0.0, -2.0)];
        let out = transform(x, &[TransformKind::Identity, TransformKind::Abs]).unwrap();
        assert_eq!(out.dim(), (3, 1));
        assert_eq!(out[[0, 0]], c(5.0, 0.0));
        assert_eq!(out[[1, 0]], c(1.0, 0.0));
        assert_eq!(out[[2, 0]], c(2.0, 0.0));
    }
    #[test]
    fn transforms_apply_in_order() {
        let x = array![c(-3.0, 4.0)];
        let real_then_abs = TransformPair::new(TransformKind::Real, TransformKind::Abs);
        assert_eq!(real_then_abs.apply(x.clone())[0], c(3.0, 0.0));
        let abs_then_real = TransformPair::new(TransformKind::Abs, TransformKind::Real);
        assert_eq!(abs_then_real.apply(x.clone())[0], c(5.0, 0.0));
        let imag = TransformPair::new(TransformKind::Imag, TransformKind::Identity);
        assert_eq!(imag.apply(x)[0], c(4.0, 0.0));
    }
    #[test]
    fn phase_matches_complex_argument() {
        let x = array![c(0.0, 1.0)];
        let out = TransformKind::Phase.apply(x);
        assert!((out[0].re - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(out[0].im, 0.0);
    }
    #[test]
    fn names_resolve_both_ways() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.name().parse::<TransformKind>().unwrap(), kind);
        }
        assert_eq!("Image".parse::<TransformKind>().unwrap(), TransformKind::Imag);
        assert_eq!(" abs ".parse::<TransformKind>().unwrap(), TransformKind::Abs);
        assert!(matches!(
            "Log".parse::<TransformKind>(),
            Err(ImagingError::UnknownTransform(name)) if name == "Log"
        ));
    }
    #[test]
    fn magnitude_and_abs_keep_distinct_labels() {
        let magnitude = TransformPair::new(TransformKind::Magnitude, TransformKind::Identity);
        let abs = TransformPair::new(TransformKind::Abs, TransformKind::Identity);
        assert_eq!(magnitude.meas_labels("U")[0], "Magnitude(U)");
        assert_eq!(abs.meas_labels("U")[0], "Abs(U)");
    }
    #[test]
    fn norm_second_transform_wraps_labels() {
        let pair = TransformPair::new(TransformKind::Real, TransformKind::Abs);
        assert_eq!(pair.meas_labels("ΔU_t"), ["||Real(U)||", "||Real(ΔU_t)||"]);
        let plain = TransformPair::new(TransformKind::Real, TransformKind::Phase);
        assert_eq!(plain.meas_labels("U"), ["Real(U)", "Real(U)"]);
    }
}
