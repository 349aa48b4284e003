use eit_model::{
    EitModel, EitPlotsType, FrameMetadata, Imaging, ImagingError, ImagingKind, ModelConfig,
    TransformKind, TransformPair,
};
use ndarray::Array2;
use num_complex::Complex64;
fn model_with_ones_pattern() -> EitModel {
    let mut model = EitModel::from_config(ModelConfig::default()).unwrap();
    model.set_meas_pattern(Array2::ones((8, 16))).unwrap();
    model
}
fn real_frames(frames: usize, channels: usize, offset: f64) -> Array2<Complex64> {
    Array2::from_shape_fn((frames, channels), |(f, c)| {
        Complex64::new(offset + f as f64 * 0.5 + c as f64 * 0.1, 0.0)
    })
}
#[test]
fn absolute_imaging_without_reference() {
    let model = model_with_ones_pattern();
    let mut imaging = Imaging::absolute(TransformPair::new(
        TransformKind::Identity,
        TransformKind::Abs,
    ));
    let v_meas = real_frames(1, 16, -1.0);
    let metadata = FrameMetadata::from_pairs(&[(0, 100), (1, 200)]).unwrap();
    let (meas, labels) = imaging
        .process_data(None, Some(v_meas.view()), metadata, &model)
        .unwrap();
    assert!(meas.reference.is_empty());
    assert_eq!(meas.frame.dim(), (8, 1));
    let expected: f64 = (0..16).map(|c| -1.0 + c as f64 * 0.1).sum::<f64>().abs();
    for value in meas.frame.iter() {
        assert!((value.re - expected).abs() < 1e-9);
        assert_eq!(value.im, 0.0);
    }
    let title = &labels.get(EitPlotsType::Image2D).unwrap().title;
    assert!(title.contains("Absolute Imaging"));
    assert!(title.contains("Identity"));
}
// Every frame contributes one value per measurement row, so a 2 x 16 frame
// against an 8 x 16 pattern yields a (16, 1) column.
#[test]
fn absolute_imaging_two_frames_flatten_per_measurement() {
    let model = model_with_ones_pattern();
    let mut imaging = Imaging::absolute(TransformPair::identity());
    let v_meas = real_frames(2, 16, 0.0);
    let metadata = FrameMetadata::from_pairs(&[(0, 100), (1, 200)]).unwrap();
    let (meas, _) = imaging
        .process_data(None, Some(v_meas.view()), metadata, &model)
        .unwrap();
    // (8 x 16) · (16 x 2) flattened row-major: frame values alternate.
    assert_eq!(meas.frame.dim(), (16, 1));
    let first: f64 = (0..16).map(|c| c as f64 * 0.1).sum();
    assert!((meas.frame[[0, 0]].re - first).abs() < 1e-9);
    assert!((meas.frame[[1, 0]].re - (first + 8.0)).abs() < 1e-9);
}
#[test]
fn time_difference_on_identical_frames_has_zero_difference() {
    let model = EitModel::from_config(ModelConfig::default()).unwrap();
    let mut imaging = Imaging::time_difference(TransformPair::identity());
    let frame = Array2::from_shape_fn((1, 16), |(_, c)| Complex64::new(c as f64, -(c as f64)));
    let metadata = FrameMetadata::from_pairs(&[(0, 100), (1, 100)]).unwrap();
    let (meas, _) = imaging
        .process_data(Some(frame.view()), Some(frame.view()), metadata, &model)
        .unwrap();
    assert_eq!(meas.reference, meas.frame);
    assert_eq!(meas.stacked().unwrap().dim(), (16, 2));
    assert!(meas.difference().unwrap().iter().all(|v| v.norm() == 0.0));
}
#[test]
fn every_variant_labels_all_plot_kinds() {
    let model = EitModel::from_config(ModelConfig::default()).unwrap();
    let v_ref = real_frames(1, 16, 1.0);
    let v_meas = real_frames(1, 16, 2.0);
    for kind in ImagingKind::ALL {
        let mut imaging = Imaging::new(
            kind,
            TransformPair::new(TransformKind::Real, TransformKind::Abs),
        );
        let metadata = FrameMetadata::from_pairs(&[(0, 100), (1, 200)]).unwrap();
        let (meas, labels) = imaging
            .process_data(Some(v_ref.view()), Some(v_meas.view()), metadata, &model)
            .unwrap();
        assert_eq!(meas.reference.dim(), (16, 1));
        assert_eq!(meas.frame.dim(), (16, 1));
        assert_eq!(labels.len(), 3);
        for plot in EitPlotsType::ALL {
            let label = labels.get(plot).unwrap();
            assert!(!label.title.is_empty(), "{kind}: empty {plot:?} title");
            assert!(label.title.contains(kind.modality()) || plot == EitPlotsType::UPlot);
        }
        // Re-rendering from recorded metadata gives the same bundle.
        assert_eq!(imaging.labels().unwrap(), labels);
    }
}
#[test]
fn non_negative_after_abs() {
    let model = EitModel::from_config(ModelConfig::default()).unwrap();
    let mut imaging = Imaging::frequency_difference(TransformPair::new(
        TransformKind::Imag,
        TransformKind::Abs,
    ));
    let v_ref = Array2::from_shape_fn((1, 16), |(_, c)| Complex64::new(0.0, (c as f64).sin()));
    let v_meas = Array2::from_shape_fn((1, 16), |(_, c)| Complex64::new(1.0, (c as f64).cos()));
    let metadata = FrameMetadata::from_pairs(&[("f0", "1 kHz"), ("f0", "10 kHz")]).unwrap();
    let (meas, labels) = imaging
        .process_data(Some(v_ref.view()), Some(v_meas.view()), metadata, &model)
        .unwrap();
    assert!(meas.reference.iter().chain(meas.frame.iter()).all(|v| v.re >= 0.0));
    assert_eq!(
        labels.get(EitPlotsType::Image2D).unwrap().title,
        "Frequency difference Imaging (||Imag(ΔU_f)||); f0 (1 kHz - 10 kHz)"
    );
}
#[test]
fn channel_mismatch_surfaces_and_keeps_old_metadata() {
    let model = EitModel::from_config(ModelConfig::default()).unwrap();
    let mut imaging = Imaging::absolute(TransformPair::identity());
    let short = real_frames(1, 8, 0.0);
    let metadata = FrameMetadata::from_pairs(&[(0, 100), (1, 200)]).unwrap();
    let err = imaging
        .process_data(None, Some(short.view()), metadata, &model)
        .unwrap_err();
    assert!(matches!(
        err,
        ImagingError::ChannelMismatch {
            expected: 16,
            actual: 8
        }
    ));
    assert!(matches!(imaging.labels(), Err(ImagingError::MissingMetadata)));
}
