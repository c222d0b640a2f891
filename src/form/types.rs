use super::results::Results;
use crate::calculator::{from_base, DiskSpaceModel, Unit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three linked capacity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SpaceKind {
    Total,
    Free,
    Used,
}

impl SpaceKind {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Free => "Free",
            Self::Used => "Used",
        }
    }
}

/// A capacity field as the user sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct SpaceField {
    pub text: String,
    pub unit: Unit,
    /// Exact GB value behind `text`, if the text holds a number.
    pub base: Option<f64>,
}

impl SpaceField {
    pub(crate) fn empty(unit: Unit) -> Self {
        Self { text: String::new(), unit, base: None }
    }

    /// Display a GB value in this field's unit.
    pub(crate) fn show(&mut self, value_gb: f64) {
        self.base = Some(value_gb);
        self.text = format!("{:.2}", from_base(value_gb, self.unit));
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub(crate) enum FormEdit {
    SetSpace { field: SpaceKind, text: String },
    SetTarget { text: String },
    SetUnit { field: SpaceKind, unit: String },
    /// Replace total and free with measured values (GB).
    LoadVolume { total: f64, free: f64 },
    Clear,
}

/// Knobs the reducer takes from configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FormSettings {
    pub default_unit: Unit,
    pub default_target: Option<f64>,
    /// Relative tolerance for the free + used == total check.
    pub tolerance: f64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self { default_unit: Unit::Gb, default_target: None, tolerance: 1e-3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FormState {
    /// Regenerated whenever the form is cleared.
    pub session_id: Uuid,
    pub revision: u64,
    pub model: DiskSpaceModel,
    pub total: SpaceField,
    pub free: SpaceField,
    pub used: SpaceField,
    pub target_text: String,
    pub results: Results,
}

impl FormState {
    pub(crate) fn new(settings: &FormSettings) -> Self {
        let mut model = DiskSpaceModel::default();
        model.set_target(settings.default_target);

        Self {
            session_id: Uuid::new_v4(),
            revision: 0,
            model,
            total: SpaceField::empty(settings.default_unit),
            free: SpaceField::empty(settings.default_unit),
            used: SpaceField::empty(settings.default_unit),
            target_text: settings.default_target.map(|t| t.to_string()).unwrap_or_default(),
            results: Results::Empty,
        }
    }

    pub(crate) const fn field(&self, kind: SpaceKind) -> &SpaceField {
        match kind {
            SpaceKind::Total => &self.total,
            SpaceKind::Free => &self.free,
            SpaceKind::Used => &self.used,
        }
    }

    pub(crate) fn field_mut(&mut self, kind: SpaceKind) -> &mut SpaceField {
        match kind {
            SpaceKind::Total => &mut self.total,
            SpaceKind::Free => &mut self.free,
            SpaceKind::Used => &mut self.used,
        }
    }
}
