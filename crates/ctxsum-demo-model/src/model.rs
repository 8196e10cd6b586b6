//! Linear model with a sigmoid output
//!
//! All state lives in [`ModelParams`]; nothing here is global. Training
//! consumes a borrowed parameter set and returns a new one.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Weights and bias of the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// One weight per input feature
    pub weights: Vec<f64>,
    /// Additive bias
    pub bias: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            weights: vec![0.5, 1.2, -0.3],
            bias: 0.1,
        }
    }
}

impl ModelParams {
    /// Number of features a sample must have
    #[inline]
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }
}

/// A single sample or a batch of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelInput {
    /// Several samples
    Batch(Vec<Vec<f64>>),
    /// One sample
    Single(Vec<f64>),
}

/// Output matching the shape of [`ModelInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Probability for one sample
    Single(f64),
    /// Probability per sample, in input order
    Batch(Vec<f64>),
}

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Predict a single sample
///
/// # Errors
/// Returns [`ModelError::FeatureMismatch`] if the sample width is wrong
pub fn predict_single(params: &ModelParams, features: &[f64]) -> Result<f64> {
    if features.len() != params.feature_count() {
        return Err(ModelError::FeatureMismatch {
            expected: params.feature_count(),
            actual: features.len(),
        });
    }
    let z: f64 = params
        .weights
        .iter()
        .zip(features)
        .map(|(w, x)| w * x)
        .sum::<f64>()
        + params.bias;
    Ok(sigmoid(z))
}

/// Predict a sample or a batch
///
/// # Errors
/// Returns [`ModelError::EmptyInput`] for an empty sample or batch, or a
/// feature mismatch from any sample.
pub fn predict(params: &ModelParams, input: &ModelInput) -> Result<Prediction> {
    match input {
        ModelInput::Single(features) if features.is_empty() => Err(ModelError::EmptyInput),
        ModelInput::Batch(samples) if samples.is_empty() => Err(ModelError::EmptyInput),
        ModelInput::Single(features) => predict_single(params, features).map(Prediction::Single),
        ModelInput::Batch(samples) => samples
            .iter()
            .map(|sample| predict_single(params, sample))
            .collect::<Result<Vec<_>>>()
            .map(Prediction::Batch),
    }
}

/// Gradient descent settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingOptions {
    /// Passes over the data
    pub epochs: usize,
    /// Step size
    pub learning_rate: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.01,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Epochs completed
    pub trained_epochs: usize,
    /// Parameters after the final step
    pub params: ModelParams,
}

/// Fit `params` to `(samples, targets)` with per-sample gradient steps
///
/// # Errors
/// Returns an error if the lengths of `samples` and `targets` differ or a
/// sample has the wrong width.
pub fn train(
    params: &ModelParams,
    samples: &[Vec<f64>],
    targets: &[f64],
    options: TrainingOptions,
) -> Result<TrainingReport> {
    if samples.len() != targets.len() {
        return Err(ModelError::TargetMismatch {
            samples: samples.len(),
            targets: targets.len(),
        });
    }

    let mut next = params.clone();
    for epoch in 0..options.epochs {
        for (sample, target) in samples.iter().zip(targets) {
            let error = predict_single(&next, sample)? - target;
            for (w, x) in next.weights.iter_mut().zip(sample) {
                *w -= options.learning_rate * error * x;
            }
            next.bias -= options.learning_rate * error;
        }
        tracing::trace!(epoch, bias = next.bias, "epoch complete");
    }

    Ok(TrainingReport {
        trained_epochs: options.epochs,
        params: next,
    })
}

/// Descriptive metadata for a parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Display name
    pub name: String,
    /// Model version
    pub version: String,
    /// Model family
    #[serde(rename = "type")]
    pub kind: String,
    /// One-line description
    pub description: String,
    /// Feature names, one per weight
    pub input_features: Vec<String>,
    /// What the output represents
    pub output_type: String,
    /// Current weights
    pub weights: Vec<f64>,
    /// Current bias
    pub bias: f64,
}

/// Metadata for `params`
#[must_use]
pub fn model_info(params: &ModelParams) -> ModelInfo {
    ModelInfo {
        name: "Simple Demo Model".into(),
        version: "1.0.0".into(),
        kind: "regression".into(),
        description: "A simple linear regression model for demonstration".into(),
        input_features: (1..=params.feature_count())
            .map(|i| format!("feature_{i}"))
            .collect(),
        output_type: "probability".into(),
        weights: params.weights.clone(),
        bias: params.bias,
    }
}
