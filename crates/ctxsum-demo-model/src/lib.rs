//! Demo regression model
//!
//! A three-feature linear model with a sigmoid output, kept to show how a
//! model is parameterized, queried and trained without global state.

#![warn(unreachable_pub)]

mod error;
mod model;

pub use error::{ModelError, Result};
pub use model::{
    model_info, predict, predict_single, train, ModelInfo, ModelInput, ModelParams, Prediction,
    TrainingOptions, TrainingReport,
};
