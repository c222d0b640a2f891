use super::settings::AppConfig;
use crate::calculator::Unit;
use serde::{Deserialize, Deserializer};

/// Partial settings change, as posted to /api/settings. Absent fields keep
/// their current value.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SettingsUpdate {
    pub default_unit: Option<Unit>,
    /// `Some(None)` (explicit `null`) clears the default target.
    #[serde(default, deserialize_with = "explicit_null")]
    pub default_target_percent: Option<Option<f64>>,
    pub consistency_tolerance: Option<f64>,
    pub mail_to: Option<String>,
    pub client_abbreviation: Option<String>,
    pub allow_probe: Option<bool>,
}

/// Distinguish a missing field from an explicit `null`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl AppConfig {
    /// A copy of this config with `update` applied. The result is not validated.
    pub(crate) fn merged(&self, update: SettingsUpdate) -> Self {
        let SettingsUpdate {
            default_unit,
            default_target_percent,
            consistency_tolerance,
            mail_to,
            client_abbreviation,
            allow_probe,
        } = update;

        Self {
            default_unit: default_unit.unwrap_or(self.default_unit),
            default_target_percent: default_target_percent.unwrap_or(self.default_target_percent),
            consistency_tolerance: consistency_tolerance.unwrap_or(self.consistency_tolerance),
            mail_to: mail_to.unwrap_or_else(|| self.mail_to.clone()),
            client_abbreviation: client_abbreviation
                .unwrap_or_else(|| self.client_abbreviation.clone()),
            allow_probe: allow_probe.unwrap_or(self.allow_probe),
            ..self.clone()
        }
    }
}
