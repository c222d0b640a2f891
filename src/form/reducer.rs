use super::error::FormError;
use super::results::{summarize, Results};
use super::types::{FormEdit, FormSettings, FormState, SpaceKind};
use crate::calculator::input::{is_numeric_input, parse_field};
use crate::calculator::{to_base, Unit};
use tracing::debug;

/// An edit that was stored but surfaced an inline error instead of committing.
type Outcome = (FormState, Option<String>);

/// Apply one edit and return the fully reconciled next state.
///
/// Rejected edits (`Err`) leave the caller's state as it was. Accepted edits
/// may still carry an inline error in `results`, in which case the model was
/// not committed.
pub(crate) fn apply(
    state: &FormState,
    edit: FormEdit,
    settings: &FormSettings,
) -> Result<FormState, FormError> {
    debug!("Applying form edit: {edit:?}");

    let (mut next, inline_error) = match edit {
        FormEdit::Clear => return Ok(FormState::new(settings)),
        FormEdit::SetSpace { field, text } => set_space(state, field, text)?,
        FormEdit::SetTarget { text } => set_target(state, text)?,
        FormEdit::SetUnit { field, unit } => set_unit(state, field, &unit)?,
        FormEdit::LoadVolume { total, free } => load_volume(state, total, free)?,
    };

    next.revision = state.revision + 1;
    next.results = match inline_error {
        Some(message) => Results::error(message),
        None => summarize(&next, settings.tolerance),
    };
    Ok(next)
}

fn ensure_numeric(field: &'static str, text: &str) -> Result<(), FormError> {
    if is_numeric_input(text) {
        Ok(())
    } else {
        Err(FormError::InvalidInput { field, text: text.to_string() })
    }
}

fn exceeds_total(kind: SpaceKind) -> String {
    format!("{} space cannot exceed Total Disk Space.", kind.label())
}

fn set_space(state: &FormState, kind: SpaceKind, text: String) -> Result<Outcome, FormError> {
    ensure_numeric(kind.label(), &text)?;

    let mut next = state.clone();
    let field = next.field_mut(kind);
    let value = parse_field(&text).map(|v| to_base(v, field.unit));
    field.text = text;
    field.base = value;

    let (Some(value_gb), Some(total_gb)) = (value, next.total.base) else {
        return Ok((next, None));
    };

    match kind {
        SpaceKind::Total => {
            for other in [SpaceKind::Free, SpaceKind::Used] {
                if next.field(other).base.is_some_and(|v| v > total_gb) {
                    return Ok((next, Some(exceeds_total(other))));
                }
            }
            next.model.set_total(total_gb);
            if let Some(free_gb) = next.free.base {
                next.model.set_free(free_gb);
            } else if let Some(used_gb) = next.used.base {
                next.model.set_free(total_gb - used_gb);
                next.free.show(total_gb - used_gb);
            }
        }
        SpaceKind::Free => {
            if value_gb > total_gb {
                return Ok((next, Some(exceeds_total(kind))));
            }
            next.model.set_total(total_gb);
            next.model.set_free(value_gb);
            let used_gb = next.model.used_space();
            next.used.show(used_gb);
        }
        SpaceKind::Used => {
            if value_gb > total_gb {
                return Ok((next, Some(exceeds_total(kind))));
            }
            let free_gb = total_gb - value_gb;
            next.model.set_total(total_gb);
            next.model.set_free(free_gb);
            next.free.show(free_gb);
        }
    }

    Ok((next, None))
}

fn set_target(state: &FormState, text: String) -> Result<Outcome, FormError> {
    ensure_numeric("Target", &text)?;

    let mut next = state.clone();
    let value = parse_field(&text);
    next.target_text = text;

    let inline_error = match value {
        Some(v) if v < 0.0 => Some("Target percentage cannot be negative."),
        Some(v) if v >= 100.0 => Some("Target free space percentage must be less than 100%."),
        _ => None,
    };

    if inline_error.is_some() {
        next.model.set_target(None);
    } else {
        next.model.set_target(value);
    }
    Ok((next, inline_error.map(str::to_string)))
}

fn set_unit(state: &FormState, kind: SpaceKind, unit: &str) -> Result<Outcome, FormError> {
    let unit: Unit =
        unit.parse().map_err(|source| FormError::BadUnit { field: kind.label(), source })?;

    let mut next = state.clone();
    let field = next.field_mut(kind);
    field.unit = unit;
    if let Some(base) = field.base {
        field.show(base);
    }
    Ok((next, None))
}

fn ensure_measurement(field: &'static str, value_gb: f64) -> Result<(), FormError> {
    if value_gb.is_finite() && value_gb >= 0.0 {
        Ok(())
    } else {
        Err(FormError::InvalidInput { field, text: value_gb.to_string() })
    }
}

fn load_volume(state: &FormState, total_gb: f64, free_gb: f64) -> Result<Outcome, FormError> {
    ensure_measurement(SpaceKind::Total.label(), total_gb)?;
    ensure_measurement(SpaceKind::Free.label(), free_gb)?;

    let mut next = state.clone();
    if free_gb > total_gb {
        return Ok((next, Some(exceeds_total(SpaceKind::Free))));
    }

    next.model.set_total(total_gb);
    next.model.set_free(free_gb);
    next.total.show(total_gb);
    next.free.show(free_gb);
    next.used.show(total_gb - free_gb);
    Ok((next, None))
}
