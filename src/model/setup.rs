//! Chamber, electrode layout and stimulation pattern of an EIT setup.
//!
//! Keys follow the camelCase names used by the acquisition software
//! (`elecNb`, `boxSize`, `femRefinement`, ...), so exported setups load as-is.
//! Every field has a default; a partial JSON object only overrides what it names.
use serde::{Deserialize, Serialize};
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatternFunc {
    #[default]
    #[serde(rename = "Ring patterning")]
    Ring,
    #[serde(rename = "Array patterning")]
    Array,
    #[serde(rename = "3D patterning")]
    ThreeD,
}
/// Injection and measurement pattern.
///
/// `inj_type`/`meas_type` are `{ad}` (adjacent), `{op}` (opposite) or
/// `{special}`, in which case the matching `*_special` string gives the
/// electrode pair, e.g. `[1 3]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EitPattern {
    pub inj_amplitude: f64,
    pub inj_type: String,
    pub inj_special: String,
    pub meas_type: String,
    pub meas_special: String,
    pub pattern_option: Vec<String>,
    pub pattern_func: PatternFunc,
}
impl Default for EitPattern {
    fn default() -> Self {
        Self {
            inj_amplitude: 1.0,
            inj_type: "{ad}".into(),
            inj_special: "[1 2]".into(),
            meas_type: "{ad}".into(),
            meas_special: "[1 2]".into(),
            pattern_option: vec!["meas_current".into()],
            pattern_func: PatternFunc::Ring,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElecForm {
    #[default]
    Circular,
    Rectangular,
    Point,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElecPlace {
    #[default]
    Wall,
    Top,
    Bottom,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDesign {
    #[default]
    Ring,
    #[serde(rename = "Array_Grid 0")]
    ArrayGrid0,
    #[serde(rename = "Array_Grid 45")]
    ArrayGrid45,
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EitElecLayout {
    pub elec_nb: usize,
    pub elec_form: ElecForm,
    pub elec_size: [f64; 2],
    pub elec_place: ElecPlace,
    pub layout_design: LayoutDesign,
    /// Diameter of the ring, or edge length of the grid.
    pub layout_size: f64,
    pub z_contact: f64,
}
impl Default for EitElecLayout {
    fn default() -> Self {
        Self {
            elec_nb: 16,
            elec_form: ElecForm::Circular,
            elec_size: [0.5, 0.0],
            elec_place: ElecPlace::Wall,
            layout_design: LayoutDesign::Ring,
            layout_size: 4.0,
            z_contact: 0.01,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChamberForm {
    #[default]
    Cylinder,
    Cubic,
    #[serde(rename = "2D_Circ")]
    Circ2D,
}
/// Overall dimensions of the measurement chamber.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EitChamber {
    pub name: String,
    /// Length, width, height.
    pub box_size: [f64; 3],
    pub fem_refinement: f64,
    pub form: ChamberForm,
}
impl Default for EitChamber {
    fn default() -> Self {
        Self {
            name: "NameDesignOfChamber".into(),
            box_size: [5.0, 5.0, 2.0],
            fem_refinement: 0.5,
            form: ChamberForm::Cylinder,
        }
    }
}
/// Bounding box of a chamber centred on the origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChamberLimits {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}
impl EitChamber {
    pub fn length(&self) -> f64 {
        self.box_size[0]
    }
    pub fn width(&self) -> f64 {
        self.box_size[1]
    }
    pub fn height(&self) -> f64 {
        self.box_size[2]
    }
    pub fn is_2d(&self) -> bool {
        self.height() == 0.0
    }
    /// 2D limits for a flat chamber (height 0), 3D limits otherwise.
    pub fn limits(&self) -> ChamberLimits {
        let x = self.length() / 2.0;
        let y = self.width() / 2.0;
        let z = self.height() / 2.0;
        if self.is_2d() {
            ChamberLimits {
                min: vec![-x, -y],
                max: vec![x, y],
            }
        } else {
            ChamberLimits {
                min: vec![-x, -y, -z],
                max: vec![x, y, z],
            }
        }
    }
}
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EitSetup {
    pub chamber: EitChamber,
    pub elec_layout: EitElecLayout,
    pub pattern: EitPattern,
}
