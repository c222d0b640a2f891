use super::types::FormState;
use serde::Serialize;
use std::fmt;

/// Whether the configured target is reachable without adding capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum TargetOutcome {
    NeedToAdd { additional_gb: u64, target_percentage: f64 },
    AlreadyMet { target_percentage: f64 },
}

/// Contents of the results area.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Results {
    /// No total entered yet.
    #[default]
    Empty,
    Error {
        message: String,
    },
    Summary {
        free_percentage: f64,
        used_percentage: f64,
        target: Option<TargetOutcome>,
    },
}

impl Results {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    pub(crate) const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Error { message } => write!(f, "Error: {message}"),
            Self::Summary { free_percentage, used_percentage, target } => {
                writeln!(f, "Current Free Space: {free_percentage:.2}%")?;
                write!(f, "Current Used Space: {used_percentage:.2}%")?;
                match target {
                    Some(TargetOutcome::NeedToAdd { additional_gb, target_percentage }) => write!(
                        f,
                        "\nYou need to add {additional_gb} GB to reach {target_percentage:.2}% free space."
                    ),
                    Some(TargetOutcome::AlreadyMet { target_percentage }) => write!(
                        f,
                        "\nYou have already met or exceeded the target free space of {target_percentage:.2}%."
                    ),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Same rule as Python's `math.isclose` with only a relative tolerance.
fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Recompute the results area from the committed model and the visible fields.
pub(crate) fn summarize(state: &FormState, tolerance: f64) -> Results {
    let model = &state.model;
    if model.total_space == 0.0 {
        return Results::Empty;
    }

    let free = model.free_space;
    let used = model.used_space();
    if free < 0.0 || used < 0.0 {
        return Results::error("Free or Used space cannot be negative.");
    }

    if let (Some(free_gb), Some(used_gb)) = (state.free.base, state.used.base) {
        if !is_close(free_gb + used_gb, model.total_space, tolerance) {
            return Results::error("Free + Used does not equal Total Disk Space.");
        }
    }

    let target = model.target_free_percentage.and_then(|target_percentage| {
        model.additional_space_needed().map(|additional_gb| {
            if additional_gb > 0 {
                TargetOutcome::NeedToAdd { additional_gb, target_percentage }
            } else {
                TargetOutcome::AlreadyMet { target_percentage }
            }
        })
    });

    Results::Summary {
        free_percentage: model.free_percentage(),
        used_percentage: model.used_percentage(),
        target,
    }
}
