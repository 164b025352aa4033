//! Linear price model loaded from exported training artifacts.
//!
//! The artifact lists the feature columns in training order: `total_sqft`,
//! `bath`, `bhk`, then one one-hot column per location (lower-cased).

use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;

const NUMERIC_FEATURES: usize = 3;

#[derive(Debug, Deserialize)]
struct ModelArtifacts {
    data_columns: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Clone)]
pub struct PriceModel {
    columns: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl PriceModel {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifacts '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid model artifacts '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let artifacts: ModelArtifacts = serde_json::from_str(raw)?;
        if artifacts.data_columns.len() < NUMERIC_FEATURES {
            bail!(
                "expected at least {NUMERIC_FEATURES} data columns, found {}",
                artifacts.data_columns.len()
            );
        }
        if artifacts.data_columns.len() != artifacts.coefficients.len() {
            bail!(
                "{} data columns but {} coefficients",
                artifacts.data_columns.len(),
                artifacts.coefficients.len()
            );
        }
        Ok(Self {
            columns: artifacts
                .data_columns
                .into_iter()
                .map(|column| column.to_lowercase())
                .collect(),
            coefficients: artifacts.coefficients,
            intercept: artifacts.intercept,
        })
    }

    pub fn location_names(&self) -> &[String] {
        &self.columns[NUMERIC_FEATURES..]
    }

    fn location_index(&self, location: &str) -> Option<usize> {
        let wanted = location.to_lowercase();
        self.columns
            .iter()
            .skip(NUMERIC_FEATURES)
            .position(|column| *column == wanted)
            .map(|offset| offset + NUMERIC_FEATURES)
    }

    /// Predicted price in lakhs, rounded to two decimals. Unknown locations
    /// get no one-hot contribution.
    pub fn estimated_price(&self, location: &str, total_sqft: f64, bhk: i64, bath: i64) -> f64 {
        let mut prediction = self.intercept
            + self.coefficients[0] * total_sqft
            + self.coefficients[1] * bath as f64
            + self.coefficients[2] * bhk as f64;
        if let Some(idx) = self.location_index(location) {
            prediction += self.coefficients[idx];
        }
        (prediction * 100.0).round() / 100.0
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
