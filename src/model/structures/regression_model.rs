use serde::Deserialize;
use thiserror::Error;

/// Evaluation rule for a set of regression coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Linear,
    Quadratic,
    Cubic,
    Log,
    /// Solves `rating = c0 * x + c1` for `x` instead of projecting forward.
    /// Unlike every other kind, results are not clamped at zero.
    InverseLinear
}

impl ModelKind {
    /// Resolves an explicit dataset tag.
    pub fn from_tag(tag: &str) -> Option<ModelKind> {
        match tag {
            "linear" => Some(ModelKind::Linear),
            "quadratic" => Some(ModelKind::Quadratic),
            "cubic" => Some(ModelKind::Cubic),
            "log" => Some(ModelKind::Log),
            "inverse_linear" => Some(ModelKind::InverseLinear),
            _ => None
        }
    }

    /// Infers the kind of a bare coefficient sequence from its length.
    pub fn from_coefficient_count(count: usize) -> Option<ModelKind> {
        match count {
            2 => Some(ModelKind::Linear),
            3 => Some(ModelKind::Quadratic),
            4 => Some(ModelKind::Cubic),
            _ => None
        }
    }

    /// Number of parameters the kind evaluates with.
    pub fn arity(self) -> usize {
        match self {
            ModelKind::Linear | ModelKind::Log | ModelKind::InverseLinear => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Cubic => 4
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unrecognized model type `{0}`")]
    UnknownKind(String),

    #[error("a bare coefficient sequence must have 2, 3 or 4 entries, got {0}")]
    UnknownArity(usize),

    #[error("{kind:?} model expects {expected} parameters, got {got}")]
    BadArity {
        kind: ModelKind,
        expected: usize,
        got: usize
    }
}

/// One fitted curve relating a native rating to its converted equivalent.
/// Coefficients are frozen at construction and highest-order first.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionModel {
    kind: ModelKind,
    params: Vec<f64>
}

impl RegressionModel {
    pub fn new(kind: ModelKind, params: Vec<f64>) -> Result<RegressionModel, ModelError> {
        if params.len() != kind.arity() {
            return Err(ModelError::BadArity {
                kind,
                expected: kind.arity(),
                got: params.len()
            });
        }

        Ok(RegressionModel { kind, params })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }
}

/// Wire shape of one dataset entry: either `{ "type": ..., "params": [...] }`
/// or a bare coefficient array whose length implies the kind.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ModelSpec {
    Tagged {
        #[serde(rename = "type")]
        kind: String,
        params: Vec<f64>
    },
    Coefficients(Vec<f64>)
}

impl TryFrom<ModelSpec> for RegressionModel {
    type Error = ModelError;

    fn try_from(spec: ModelSpec) -> Result<RegressionModel, ModelError> {
        match spec {
            ModelSpec::Tagged { kind, params } => {
                let kind = ModelKind::from_tag(&kind).ok_or(ModelError::UnknownKind(kind))?;
                RegressionModel::new(kind, params)
            }
            ModelSpec::Coefficients(params) => {
                let kind =
                    ModelKind::from_coefficient_count(params.len()).ok_or(ModelError::UnknownArity(params.len()))?;
                RegressionModel::new(kind, params)
            }
        }
    }
}
