use std::f64::consts::{FRAC_PI_4, PI};
use log::debug;
use ndarray::Array2;
use crate::model::error::ModelError;
use crate::model::setup::{EitChamber, EitElecLayout, ElecPlace, LayoutDesign};
/// Electrode pairing rule shared by injection and measurement patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// Neighbouring electrodes `(i, i + 1)`.
    Adjacent,
    /// Diametrically opposite electrodes `(i, i + n / 2)`.
    Opposite,
    /// Fixed offset taken from a `[a b]` electrode pair.
    Special { offset: i64 },
}
impl PatternKind {
    /// Parses a pattern type such as `{ad}`; `special` is only read for `{special}`.
    pub fn parse(kind: &str, special: &str) -> Result<Self, ModelError> {
        let key = kind.trim().trim_start_matches('{').trim_end_matches('}');
        match key.to_ascii_lowercase().as_str() {
            "ad" | "adjacent" => Ok(PatternKind::Adjacent),
            "op" | "opposite" => Ok(PatternKind::Opposite),
            "special" => parse_special(special),
            _ => Err(ModelError::UnsupportedPattern(kind.to_string())),
        }
    }
    /// Distance between the two electrodes of a pair on an `n_elec` ring.
    pub fn step(self, n_elec: usize) -> usize {
        match self {
            PatternKind::Adjacent => 1,
            PatternKind::Opposite => (n_elec / 2).max(1),
            PatternKind::Special { offset } => offset.rem_euclid(n_elec as i64) as usize,
        }
    }
}
fn parse_special(special: &str) -> Result<PatternKind, ModelError> {
    let invalid = || ModelError::UnsupportedPattern(special.to_string());
    let pair = special
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match pair.as_slice() {
        [a, b] if a != b => Ok(PatternKind::Special {
            offset: b.checked_sub(*a).ok_or_else(invalid)?,
        }),
        _ => Err(invalid()),
    }
}
fn check_count(n_elec: usize) -> Result<(), ModelError> {
    if n_elec < 2 {
        return Err(ModelError::InvalidElectrodeCount);
    }
    Ok(())
}
/// Excitation matrix, one row `[in, out]` (0-based electrode indices) per
/// injection.
pub fn excitation_matrix(n_elec: usize, kind: PatternKind) -> Result<Array2<usize>, ModelError> {
    check_count(n_elec)?;
    let step = kind.step(n_elec);
    if step == 0 {
        return Err(ModelError::UnsupportedPattern(format!("{kind:?}")));
    }
    Ok(Array2::from_shape_fn((n_elec, 2), |(i, j)| {
        if j == 0 {
            i
        } else {
            (i + step) % n_elec
        }
    }))
}
/// Differential measurement pattern, shape (n_elec, n_elec): row `i` reads
/// `U[i] - U[i + step]`.
pub fn measurement_pattern(n_elec: usize, kind: PatternKind) -> Result<Array2<f64>, ModelError> {
    let pairs = excitation_matrix(n_elec, kind)?;
    let mut pattern = Array2::zeros((n_elec, n_elec));
    for (row, pair) in pairs.outer_iter().enumerate() {
        pattern[[row, pair[0]]] += 1.0;
        pattern[[row, pair[1]]] -= 1.0;
    }
    debug!("built {n_elec}x{n_elec} measurement pattern ({kind:?})");
    Ok(pattern)
}
/// Electrode centres, shape (n_elec, 3).
pub fn electrode_positions(
    layout: &EitElecLayout,
    chamber: &EitChamber,
) -> Result<Array2<f64>, ModelError> {
    let n = layout.elec_nb;
    check_count(n)?;
    let z = match layout.elec_place {
        _ if chamber.is_2d() => 0.0,
        ElecPlace::Wall => 0.0,
        ElecPlace::Top => chamber.height() / 2.0,
        ElecPlace::Bottom => -chamber.height() / 2.0,
    };
    let mut pos = Array2::zeros((n, 3));
    match layout.layout_design {
        LayoutDesign::Ring => {
            let radius = layout.layout_size / 2.0;
            for i in 0..n {
                let theta = 2.0 * PI * i as f64 / n as f64;
                pos[[i, 0]] = radius * theta.cos();
                pos[[i, 1]] = radius * theta.sin();
                pos[[i, 2]] = z;
            }
        }
        LayoutDesign::ArrayGrid0 | LayoutDesign::ArrayGrid45 => {
            let side = (n as f64).sqrt().ceil() as usize;
            let spacing = if side > 1 {
                layout.layout_size / (side - 1) as f64
            } else {
                0.0
            };
            let half = layout.layout_size / 2.0;
            let angle = if layout.layout_design == LayoutDesign::ArrayGrid45 {
                FRAC_PI_4
            } else {
                0.0
            };
            let (sin, cos) = angle.sin_cos();
            for i in 0..n {
                let x = (i % side) as f64 * spacing - half;
                let y = (i / side) as f64 * spacing - half;
                pos[[i, 0]] = x * cos - y * sin;
                pos[[i, 1]] = x * sin + y * cos;
                pos[[i, 2]] = z;
            }
        }
    }
    Ok(pos)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_pattern_types() {
        assert_eq!(PatternKind::parse("{ad}", "").unwrap(), PatternKind::Adjacent);
        assert_eq!(PatternKind::parse("{op}", "").unwrap(), PatternKind::Opposite);
        assert_eq!(
            PatternKind::parse("{special}", "[1 4]").unwrap(),
            PatternKind::Special { offset: 3 }
        );
        assert!(matches!(
            PatternKind::parse("{trig}", ""),
            Err(ModelError::UnsupportedPattern(_))
        ));
        assert!(PatternKind::parse("{special}", "[2 2]").is_err());
        assert!(PatternKind::parse("{special}", "[a b]").is_err());
    }
    #[test]
    fn special_offset_overflow_is_an_error() {
        assert!(matches!(
            PatternKind::parse("{special}", "[-9223372036854775808 1]"),
            Err(ModelError::UnsupportedPattern(_))
        ));
        let json = r#"{ "setup": { "pattern": { "injType": "{special}", "injSpecial": "[-9223372036854775808 1]" } } }"#;
        assert!(matches!(
            crate::model::EitModel::from_json_str(json),
            Err(ModelError::UnsupportedPattern(_))
        ));
    }
    #[test]
    fn adjacent_excitation_wraps_around() {
        let ex = excitation_matrix(4, PatternKind::Adjacent).unwrap();
        assert_eq!(ex.dim(), (4, 2));
        assert_eq!(ex.row(0).to_vec(), vec![0, 1]);
        assert_eq!(ex.row(3).to_vec(), vec![3, 0]);
        let op = excitation_matrix(16, PatternKind::Opposite).unwrap();
        assert_eq!(op.row(2).to_vec(), vec![2, 10]);
        let back = excitation_matrix(8, PatternKind::Special { offset: -1 }).unwrap();
        assert_eq!(back.row(0).to_vec(), vec![0, 7]);
    }
    #[test]
    fn measurement_rows_sum_to_zero() {
        let pattern = measurement_pattern(16, PatternKind::Adjacent).unwrap();
        assert_eq!(pattern.dim(), (16, 16));
        for row in pattern.outer_iter() {
            assert_eq!(row.sum(), 0.0);
        }
        assert_eq!(pattern[[0, 0]], 1.0);
        assert_eq!(pattern[[0, 1]], -1.0);
    }
    #[test]
    fn rejects_degenerate_patterns() {
        assert!(matches!(
            excitation_matrix(1, PatternKind::Adjacent),
            Err(ModelError::InvalidElectrodeCount)
        ));
        assert!(matches!(
            excitation_matrix(4, PatternKind::Special { offset: 4 }),
            Err(ModelError::UnsupportedPattern(_))
        ));
    }
    #[test]
    fn ring_electrodes_lie_on_circle() {
        let layout = EitElecLayout::default();
        let pos = electrode_positions(&layout, &EitChamber::default()).unwrap();
        assert_eq!(pos.dim(), (16, 3));
        for row in pos.outer_iter() {
            let r = (row[0] * row[0] + row[1] * row[1]).sqrt();
            assert!((r - 2.0).abs() < 1e-12);
            assert_eq!(row[2], 0.0);
        }
    }
    #[test]
    fn grid_layout_places_top_electrodes() {
        let layout = EitElecLayout {
            elec_nb: 9,
            layout_design: LayoutDesign::ArrayGrid0,
            elec_place: ElecPlace::Top,
            ..EitElecLayout::default()
        };
        let pos = electrode_positions(&layout, &EitChamber::default()).unwrap();
        assert_eq!(pos.row(0).to_vec(), vec![-2.0, -2.0, 1.0]);
        assert_eq!(pos.row(8).to_vec(), vec![2.0, 2.0, 1.0]);
    }
}
