use ndarray::{concatenate, Array2, Axis};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
/// Processed reference and measured voltage vectors, each shaped (n, 1).
///
/// The reference half is empty (0 x 1) when no reference frame was supplied,
/// e.g. absolute imaging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EitMeas {
    pub reference: Array2<Complex64>,
    pub frame: Array2<Complex64>,
    pub label: String,
}
impl EitMeas {
    pub fn new(reference: Array2<Complex64>, frame: Array2<Complex64>, label: impl Into<String>) -> Self {
        Self {
            reference,
            frame,
            label: label.into(),
        }
    }
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }
    /// Two-column `[reference | frame]` matrix, or `None` when the halves
    /// cannot be stacked (missing reference or differing lengths).
    pub fn stacked(&self) -> Option<Array2<Complex64>> {
        if !self.has_reference() || self.reference.nrows() != self.frame.nrows() {
            return None;
        }
        concatenate(Axis(1), &[self.reference.view(), self.frame.view()]).ok()
    }
    /// `frame - reference`, or `None` when the halves cannot be stacked.
    pub fn difference(&self) -> Option<Array2<Complex64>> {
        if !self.has_reference() || self.reference.dim() != self.frame.dim() {
            return None;
        }
        Some(&self.frame - &self.reference)
    }
}
