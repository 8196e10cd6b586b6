use ctxsum_demo_model::{
    predict, predict_single, train, ModelError, ModelInput, ModelParams, Prediction,
    TrainingOptions,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_prediction_is_a_probability(
        features in proptest::collection::vec(-100.0..100.0f64, 3)
    ) {
        let p = predict_single(&ModelParams::default(), &features).unwrap();
        prop_assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn batch_matches_single_predictions() {
    let params = ModelParams::default();
    let samples = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]];

    let batch = predict(&params, &ModelInput::Batch(samples.clone())).unwrap();
    let singles: Vec<f64> = samples
        .iter()
        .map(|s| predict_single(&params, s).unwrap())
        .collect();
    assert_eq!(batch, Prediction::Batch(singles));
}

#[test]
fn empty_input_is_rejected() {
    let params = ModelParams::default();
    assert_eq!(
        predict(&params, &ModelInput::Single(vec![])),
        Err(ModelError::EmptyInput)
    );
    assert_eq!(
        predict(&params, &ModelInput::Batch(vec![])),
        Err(ModelError::EmptyInput)
    );
}

#[test]
fn bad_sample_in_batch_fails_whole_batch() {
    let input = ModelInput::Batch(vec![vec![1.0, 2.0, 3.0], vec![1.0]]);
    assert_eq!(
        predict(&ModelParams::default(), &input),
        Err(ModelError::FeatureMismatch { expected: 3, actual: 1 })
    );
}

#[test]
fn training_moves_prediction_toward_target() {
    let params = ModelParams::default();
    let samples = vec![vec![1.0, 1.0, 1.0]];
    let targets = vec![0.0];

    let before = predict_single(&params, &samples[0]).unwrap();
    let report = train(&params, &samples, &targets, TrainingOptions::default()).unwrap();
    let after = predict_single(&report.params, &samples[0]).unwrap();

    assert_eq!(report.trained_epochs, 100);
    assert!(after < before);
    // the input parameters are untouched
    assert_eq!(params, ModelParams::default());
}

#[test]
fn zero_epochs_returns_same_params() {
    let params = ModelParams::default();
    let options = TrainingOptions { epochs: 0, ..Default::default() };
    let report = train(&params, &[vec![1.0, 2.0, 3.0]], &[1.0], options).unwrap();
    assert_eq!(report.params, params);
}

#[test]
fn mismatched_targets_are_rejected() {
    let err = train(
        &ModelParams::default(),
        &[vec![1.0, 2.0, 3.0]],
        &[],
        TrainingOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, ModelError::TargetMismatch { samples: 1, targets: 0 });
}
