use super::defaults::MAX_CONSISTENCY_TOLERANCE;
use super::settings::AppConfig;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        if let Some(target) = self.default_target_percent {
            anyhow::ensure!(
                (0.0..100.0).contains(&target),
                "default_target_percent must be at least 0 and below 100"
            );
        }
        anyhow::ensure!(
            self.consistency_tolerance > 0.0
                && self.consistency_tolerance <= MAX_CONSISTENCY_TOLERANCE,
            "consistency_tolerance must be between 0.0 and {MAX_CONSISTENCY_TOLERANCE}"
        );
        anyhow::ensure!(
            !self.mail_to.contains(char::is_whitespace),
            "mail_to must not contain whitespace"
        );
        anyhow::ensure!(
            !self.client_abbreviation.contains(['[', ']']),
            "client_abbreviation must not contain brackets"
        );
        Ok(())
    }
}
