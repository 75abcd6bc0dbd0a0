use crate::model::structures::regression_model::{ModelKind, RegressionModel};

/// Projects a native rating through a regression model.
///
/// Polynomial and logarithmic kinds clamp at zero (ratings cannot be
/// negative); the inverse-linear kind recovers an implied source rating and
/// is returned unclamped. `None` means the observation should be skipped:
/// a non-positive rating fed to a log fit, a zero slope fed to the inverse
/// fit, or a non-finite evaluation.
pub fn convert(model: &RegressionModel, rating: i64) -> Option<i64> {
    let p = model.params();
    let r = rating as f64;

    let raw = match model.kind() {
        ModelKind::Linear => p[0] * r + p[1],
        ModelKind::Quadratic => p[0] * r * r + p[1] * r + p[2],
        ModelKind::Cubic => p[0] * r * r * r + p[1] * r * r + p[2] * r + p[3],
        ModelKind::Log => {
            if rating <= 0 {
                return None;
            }
            p[0] * r.ln() + p[1]
        }
        ModelKind::InverseLinear => {
            if p[0] == 0.0 {
                return None;
            }
            let solved = (r - p[1]) / p[0];
            if !solved.is_finite() {
                return None;
            }
            return Some(solved.round() as i64);
        }
    };

    if !raw.is_finite() {
        return None;
    }

    Some(raw.round().max(0.0) as i64)
}
