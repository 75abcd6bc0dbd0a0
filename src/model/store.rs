use std::{collections::HashMap, fs, path::Path, str::FromStr};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::warn;

use crate::model::structures::{
    regression_model::{ModelSpec, RegressionModel},
    time_control::TimeControl
};

/// Default dataset shipped with the crate. Covers the four categories the
/// published rating-comparison tables have fits for.
const BUNDLED_DATASET: &str = include_str!("../../data/regressions.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read regression dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse regression dataset: {0}")]
    Parse(#[from] serde_json::Error)
}

/// Read-only table of regression models keyed by time-control category.
///
/// A store is loaded once per process (or once per CLI run when an external
/// dataset is supplied) and never mutated afterwards. Individual entries
/// that fail validation are dropped with a warning rather than poisoning
/// the whole table; the category then simply has no model.
#[derive(Debug, Clone, Default)]
pub struct RegressionStore {
    models: HashMap<TimeControl, RegressionModel>
}

impl RegressionStore {
    pub fn from_json(json: &str) -> Result<RegressionStore, StoreError> {
        let raw: HashMap<String, ModelSpec> = serde_json::from_str(json)?;
        let mut models = HashMap::with_capacity(raw.len());

        for (key, spec) in raw {
            let category = match TimeControl::from_str(&key) {
                Ok(TimeControl::Unknown) | Err(_) => {
                    warn!("dropping regression entry for unrecognized category `{key}`");
                    continue;
                }
                Ok(category) => category
            };

            match RegressionModel::try_from(spec) {
                Ok(model) => {
                    models.insert(category, model);
                }
                Err(e) => warn!("dropping {category} regression entry: {e}")
            }
        }

        Ok(RegressionStore { models })
    }

    pub fn from_file(path: &Path) -> Result<RegressionStore, StoreError> {
        RegressionStore::from_json(&fs::read_to_string(path)?)
    }

    pub fn model_for(&self, category: TimeControl) -> Option<&RegressionModel> {
        self.models.get(&category)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

lazy_static! {
    static ref BUNDLED: RegressionStore = RegressionStore::from_json(BUNDLED_DATASET)
        .expect("bundled regression dataset must parse");
}

/// The store backed by the bundled dataset. Parsed on first access and
/// shared read-only for the lifetime of the process.
pub fn bundled() -> &'static RegressionStore {
    &BUNDLED
}
