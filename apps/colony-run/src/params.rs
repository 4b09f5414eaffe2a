//! The JSON parameter file.
//!
//! ```json
//! {
//!   "run":   { "total_ticks": 8640, "seed": 1234, "output_dir": "output" },
//!   "model": { "num_cats": { "value": 10, "min": 2, "max": 100, "step": 2 } }
//! }
//! ```
//!
//! Every model parameter carries its admissible range and step.  Values that
//! fall outside the range or off the step grid are reported as warnings and
//! still used as given; only values the model itself rejects abort the run.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use colony_core::{ModelParams, SimConfig};

/// Slack allowed when testing whether a value sits on the step grid.
const STEP_TOLERANCE: f64 = 1e-6;

/// One model parameter with its admissible range.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamSpec {
    /// Kept as raw JSON so integer parameters deserialize as integers.
    pub value: Value,
    pub min:   f64,
    pub max:   f64,
    pub step:  f64,
}

/// Run-level settings.  Missing fields fall back to [`SimConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub tick_duration_secs:    u32,
    pub total_ticks:           u64,
    pub seed:                  u64,
    pub output_interval_ticks: u64,
    pub output_dir:            PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            tick_duration_secs:    config.tick_duration_secs,
            total_ticks:           config.total_ticks,
            seed:                  config.seed,
            output_interval_ticks: config.output_interval_ticks,
            output_dir:            PathBuf::from("output"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParamFile {
    pub run:   RunSettings,
    pub model: BTreeMap<String, ParamSpec>,
}

/// A parameter value the range check objects to.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamIssue {
    Unknown(String),
    NotNumeric(String),
    BelowMin { name: String, value: f64, min: f64 },
    AboveMax { name: String, value: f64, max: f64 },
    OffStep { name: String, value: f64, min: f64, step: f64 },
}

impl fmt::Display for ParamIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamIssue::Unknown(name) => write!(f, "{name} is not a model parameter"),
            ParamIssue::NotNumeric(name) => write!(f, "{name} has a non-numeric value"),
            ParamIssue::BelowMin { name, value, min } => {
                write!(f, "{name} = {value} is below the minimum {min}")
            }
            ParamIssue::AboveMax { name, value, max } => {
                write!(f, "{name} = {value} is above the maximum {max}")
            }
            ParamIssue::OffStep { name, value, min, step } => {
                write!(f, "{name} = {value} is not {min} plus a multiple of {step}")
            }
        }
    }
}

impl ParamFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameter file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing parameter file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check every model parameter against its range and step, logging a
    /// warning for each issue found.
    pub fn check(&self) -> Vec<ParamIssue> {
        let known = known_parameters();
        let mut issues = Vec::new();
        for (name, spec) in &self.model {
            if !known.iter().any(|k| k == name) {
                issues.push(ParamIssue::Unknown(name.clone()));
                continue;
            }
            let Some(value) = spec.value.as_f64() else {
                issues.push(ParamIssue::NotNumeric(name.clone()));
                continue;
            };
            if value < spec.min {
                issues.push(ParamIssue::BelowMin { name: name.clone(), value, min: spec.min });
            } else if value > spec.max {
                issues.push(ParamIssue::AboveMax { name: name.clone(), value, max: spec.max });
            } else if spec.step > 0.0 {
                let steps = (value - spec.min) / spec.step;
                if (steps - steps.round()).abs() > STEP_TOLERANCE {
                    issues.push(ParamIssue::OffStep {
                        name: name.clone(),
                        value,
                        min: spec.min,
                        step: spec.step,
                    });
                }
            }
        }
        for issue in &issues {
            warn!("{issue}");
        }
        issues
    }

    /// The model parameters, with anything absent from the file left at
    /// its default.
    pub fn model_params(&self) -> Result<ModelParams> {
        let values: Map<String, Value> = self
            .model
            .iter()
            .map(|(name, spec)| (name.clone(), spec.value.clone()))
            .collect();
        serde_json::from_value(Value::Object(values)).context("converting model parameters")
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            tick_duration_secs:    self.run.tick_duration_secs,
            total_ticks:           self.run.total_ticks,
            seed:                  self.run.seed,
            output_interval_ticks: self.run.output_interval_ticks,
        }
    }
}

/// Field names of [`ModelParams`], read off its serialized form.
fn known_parameters() -> Vec<String> {
    match serde_json::to_value(ModelParams::default()) {
        Ok(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
