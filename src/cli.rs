use std::fs;
use std::path::Path;
use anyhow::{bail, Context, Result};
use eit_model::{
    EitMeas, EitModel, FrameMetadata, Imaging, LabelBundle, ModelConfig, TransformKind,
    TransformPair,
};
use log::info;
use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_json::Value;
/// Raw frames are frames x channels, every value a `[re, im]` pair.
type RawFrames = Vec<Vec<[f64; 2]>>;
#[derive(Deserialize)]
struct MeasurementFile {
    #[serde(default)]
    reference: Option<RawFrames>,
    #[serde(default)]
    frame: Option<RawFrames>,
    labels: Vec<(Value, Value)>,
}
#[derive(Serialize)]
struct ProcessOutput<'a> {
    imaging: &'a str,
    transforms: TransformPair,
    meas: EitMeas,
    labels: LabelBundle,
}
#[derive(Serialize)]
struct SetupOutput<'a> {
    config: &'a ModelConfig,
    n_elec: usize,
    elec_pos: Vec<Vec<f64>>,
    excitation_mat: Vec<Vec<usize>>,
    meas_pattern: Vec<Vec<f64>>,
}
fn load_model(path: Option<&Path>) -> Result<EitModel> {
    match path {
        Some(path) => EitModel::from_json_file(path)
            .with_context(|| format!("loading model from {}", path.display())),
        None => Ok(EitModel::from_config(ModelConfig::default())?),
    }
}
fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
fn to_array(name: &str, rows: RawFrames) -> Result<Array2<Complex64>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|row| row.len() != n_cols) {
        bail!("{name}: every frame must have {n_cols} channels");
    }
    let values = rows
        .into_iter()
        .flatten()
        .map(|[re, im]| Complex64::new(re, im))
        .collect();
    Array2::from_shape_vec((n_rows, n_cols), values).with_context(|| format!("{name}: bad shape"))
}
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}
pub fn run_process(
    data: &Path,
    model: Option<&Path>,
    imaging: &str,
    transform: &[String],
) -> Result<()> {
    let model = load_model(model)?;
    let kinds = transform
        .iter()
        .map(|name| name.parse::<TransformKind>())
        .collect::<Result<Vec<_>, _>>()?;
    let mut imaging = Imaging::from_name(imaging, TransformPair::try_from(kinds.as_slice())?)?;
    let raw = fs::read_to_string(data).with_context(|| format!("reading {}", data.display()))?;
    let file: MeasurementFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", data.display()))?;
    let labels: Vec<(String, String)> = file
        .labels
        .iter()
        .map(|(idx, freq)| (label_text(idx), label_text(freq)))
        .collect();
    let metadata = FrameMetadata::from_pairs(labels.as_slice())?;
    let reference = file.reference.map(|r| to_array("reference", r)).transpose()?;
    let frame = file.frame.map(|f| to_array("frame", f)).transpose()?;
    info!("processing {} with {}", data.display(), imaging.kind());
    let (meas, labels) = imaging.process_data(
        reference.as_ref().map(|r| r.view()),
        frame.as_ref().map(|f| f.view()),
        metadata,
        &model,
    )?;
    let output = ProcessOutput {
        imaging: imaging.kind().name(),
        transforms: imaging.transforms(),
        meas,
        labels,
    };
    println!("{}", to_json(&output)?);
    Ok(())
}
pub fn run_setup(model: Option<&Path>) -> Result<()> {
    let model = load_model(model)?;
    let output = SetupOutput {
        config: model.config(),
        n_elec: model.n_elec(),
        elec_pos: model.elec_pos().outer_iter().map(|r| r.to_vec()).collect(),
        excitation_mat: model.excitation_mat().outer_iter().map(|r| r.to_vec()).collect(),
        meas_pattern: model.meas_pattern().outer_iter().map(|r| r.to_vec()).collect(),
    };
    println!("{}", to_json(&output)?);
    Ok(())
}
