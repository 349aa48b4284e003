// src/model/mod.rs
pub mod error;
pub mod fwd;
pub mod setup;
use std::fs;
use std::path::Path;
use log::{info, warn};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
pub use error::ModelError;
pub use fwd::PatternKind;
pub use setup::{
    ChamberForm, ChamberLimits, EitChamber, EitElecLayout, EitPattern, EitSetup, ElecForm,
    ElecPlace, LayoutDesign, PatternFunc,
};
use crate::imaging::{EitMeas, MeasurementModel};
/// Regularisation parameters handed to a reconstruction solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionParams {
    pub p: f64,
    pub lambda: f64,
    pub n: usize,
}
impl Default for ReconstructionParams {
    fn default() -> Self {
        Self {
            p: 0.5,
            lambda: 0.01,
            n: 64,
        }
    }
}
/// Serialized form of an [`EitModel`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub setup: EitSetup,
    pub reconstruction: ReconstructionParams,
    pub solver: String,
}
impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "EITModel_defaultName".into(),
            setup: EitSetup::default(),
            reconstruction: ReconstructionParams::default(),
            solver: "none".into(),
        }
    }
}
/// Virtual model of the measurement chamber: setup plus the geometry and
/// patterns derived from it.
#[derive(Clone, Debug)]
pub struct EitModel {
    config: ModelConfig,
    elec_pos: Array2<f64>,
    ex_mat: Array2<usize>,
    meas_pattern: Array2<f64>,
}
impl EitModel {
    pub fn from_config(config: ModelConfig) -> Result<Self, ModelError> {
        let (elec_pos, ex_mat, meas_pattern) = derive_geometry(&config.setup)?;
        info!(
            "model {:?}: {} electrodes, {} injections, {}x{} measurement pattern",
            config.name,
            elec_pos.nrows(),
            ex_mat.nrows(),
            meas_pattern.nrows(),
            meas_pattern.ncols()
        );
        Ok(Self {
            config,
            elec_pos,
            ex_mat,
            meas_pattern,
        })
    }
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Self::from_config(serde_json::from_str(json)?)
    }
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        info!("loading model config from {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
    pub fn name(&self) -> &str {
        &self.config.name
    }
    pub fn setup(&self) -> &EitSetup {
        &self.config.setup
    }
    /// Replaces the setup and rebuilds electrode positions and patterns.
    pub fn update_setup(&mut self, setup: EitSetup) -> Result<(), ModelError> {
        let (elec_pos, ex_mat, meas_pattern) = derive_geometry(&setup)?;
        self.config.setup = setup;
        self.elec_pos = elec_pos;
        self.ex_mat = ex_mat;
        self.meas_pattern = meas_pattern;
        Ok(())
    }
    pub fn reconstruction(&self) -> &ReconstructionParams {
        &self.config.reconstruction
    }
    pub fn solver(&self) -> &str {
        &self.config.solver
    }
    pub fn set_solver(&mut self, solver: impl Into<String>) {
        self.config.solver = solver.into();
    }
    /// Injection current amplitude.
    pub fn amplitude(&self) -> f64 {
        self.config.setup.pattern.inj_amplitude
    }
    pub fn refinement(&self) -> f64 {
        self.config.setup.chamber.fem_refinement
    }
    pub fn set_refinement(&mut self, value: f64) -> Result<(), ModelError> {
        if !(value > 0.0 && value < 1.0) {
            warn!("rejected FEM refinement {value}");
            return Err(ModelError::InvalidRefinement(value));
        }
        self.config.setup.chamber.fem_refinement = value;
        Ok(())
    }
    pub fn n_elec(&self) -> usize {
        self.elec_pos.nrows()
    }
    /// Electrode positions, row `i` = `[x, y, z]`.
    pub fn elec_pos(&self) -> ArrayView2<'_, f64> {
        self.elec_pos.view()
    }
    /// Excitation matrix, row `i` = `[elec_in, elec_out]`.
    pub fn excitation_mat(&self) -> ArrayView2<'_, usize> {
        self.ex_mat.view()
    }
    /// Pattern mapping channel voltages to measurements:
    /// `meas_u = meas_pattern · meas_ch`.
    pub fn meas_pattern(&self) -> ArrayView2<'_, f64> {
        self.meas_pattern.view()
    }
    /// Overrides the measurement pattern; it must have one column per electrode.
    pub fn set_meas_pattern(&mut self, pattern: Array2<f64>) -> Result<(), ModelError> {
        if pattern.ncols() != self.n_elec() {
            return Err(ModelError::PatternShape {
                expected: self.n_elec(),
                actual: pattern.ncols(),
            });
        }
        self.meas_pattern = pattern;
        Ok(())
    }
    /// Wraps two flat voltage vectors as reference/frame columns.
    pub fn build_meas_data(
        &self,
        reference: ArrayView1<'_, Complex64>,
        frame: ArrayView1<'_, Complex64>,
        label: impl Into<String>,
    ) -> EitMeas {
        EitMeas::new(
            reference.to_owned().insert_axis(Axis(1)),
            frame.to_owned().insert_axis(Axis(1)),
            label,
        )
    }
}
impl MeasurementModel for EitModel {
    fn n_elec(&self) -> usize {
        EitModel::n_elec(self)
    }
    fn meas_pattern(&self) -> ArrayView2<'_, f64> {
        EitModel::meas_pattern(self)
    }
}
type Geometry = (Array2<f64>, Array2<usize>, Array2<f64>);
fn derive_geometry(setup: &EitSetup) -> Result<Geometry, ModelError> {
    let n_elec = setup.elec_layout.elec_nb;
    let pattern = &setup.pattern;
    let inj = PatternKind::parse(&pattern.inj_type, &pattern.inj_special)?;
    let meas = PatternKind::parse(&pattern.meas_type, &pattern.meas_special)?;
    let elec_pos = fwd::electrode_positions(&setup.elec_layout, &setup.chamber)?;
    let ex_mat = fwd::excitation_matrix(n_elec, inj)?;
    let meas_pattern = fwd::measurement_pattern(n_elec, meas)?;
    Ok((elec_pos, ex_mat, meas_pattern))
}
