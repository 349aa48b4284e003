use log::debug;
use ndarray::{s, Array1, Array2, ArrayView2};
use num_complex::Complex64;
use crate::imaging::transform::{transform, TransformKind};
use crate::imaging::ImagingError;
/// Read-only view of the model parameters the voltage vector builder needs.
pub trait MeasurementModel {
    /// Number of active electrodes, i.e. leading channels used from a raw frame.
    fn n_elec(&self) -> usize;
    /// Measurement pattern, shape (measurements, n_elec).
    fn meas_pattern(&self) -> ArrayView2<'_, f64>;
}
/// Builds the transformed measurement column vector from a raw frame
/// (shape frames x channels).
///
/// The first `n_elec` channels are projected through the measurement pattern
/// (`M · Vᵀ`), flattened row-major and passed through `kinds`. An absent frame
/// yields an empty (0 x 1) vector whatever `kinds` holds.
pub fn make_voltage_vector<M: MeasurementModel + ?Sized>(
    model: &M,
    kinds: &[TransformKind],
    voltages: Option<ArrayView2<'_, Complex64>>,
) -> Result<Array2<Complex64>, ImagingError> {
    let Some(voltages) = voltages else {
        return Ok(Array2::zeros((0, 1)));
    };
    let n_elec = model.n_elec();
    if voltages.ncols() < n_elec {
        return Err(ImagingError::ChannelMismatch {
            expected: n_elec,
            actual: voltages.ncols(),
        });
    }
    let pattern = model.meas_pattern();
    if pattern.ncols() != n_elec {
        return Err(ImagingError::PatternShape {
            expected: n_elec,
            actual: pattern.ncols(),
        });
    }
    let used = voltages.slice(s![.., ..n_elec]);
    let projected = pattern
        .mapv(|w| Complex64::new(w, 0.0))
        .dot(&used.t());
    debug!(
        "projected {} frame(s) through a {:?} pattern -> {:?}",
        voltages.nrows(),
        pattern.dim(),
        projected.dim()
    );
    let flat: Array1<Complex64> = projected.iter().copied().collect();
    transform(flat, kinds)
}
