use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// Kind of plot a label set is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EitPlotsType {
    /// Reconstructed 2D image.
    Image2D,
    /// Raw voltages of reference and measured frame.
    UPlot,
    /// Voltage difference between measured and reference frame.
    UPlotDiff,
}
impl EitPlotsType {
    pub const ALL: [EitPlotsType; 3] = [
        EitPlotsType::Image2D,
        EitPlotsType::UPlot,
        EitPlotsType::UPlotDiff,
    ];
}
/// Title, legend entries and axis labels of one plot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLabels {
    pub title: String,
    pub legend: [String; 2],
    pub axis: Vec<String>,
}
impl CustomLabels {
    pub fn new<L: Into<String>>(title: impl Into<String>, legend: [L; 2], axis: &[&str]) -> Self {
        Self {
            title: title.into(),
            legend: legend.map(Into::into),
            axis: axis.iter().map(|a| a.to_string()).collect(),
        }
    }
}
/// Labels for each plot kind, produced together with the processed data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelBundle {
    labels: BTreeMap<EitPlotsType, CustomLabels>,
}
impl LabelBundle {
    pub fn new(image: CustomLabels, u_plot: CustomLabels, u_plot_diff: CustomLabels) -> Self {
        let labels = BTreeMap::from([
            (EitPlotsType::Image2D, image),
            (EitPlotsType::UPlot, u_plot),
            (EitPlotsType::UPlotDiff, u_plot_diff),
        ]);
        Self { labels }
    }
    pub fn get(&self, kind: EitPlotsType) -> Option<&CustomLabels> {
        self.labels.get(&kind)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&EitPlotsType, &CustomLabels)> {
        self.labels.iter()
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
