use super::settings::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format. Unknown keys and
    /// unparsable values are ignored.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "PORT" => {
                        if let Ok(v) = value.parse() {
                            self.port = v;
                        }
                    }
                    "DEFAULT_UNIT" => {
                        if let Ok(v) = value.parse() {
                            self.default_unit = v;
                        }
                    }
                    "DEFAULT_TARGET_PERCENT" => {
                        if value.is_empty() {
                            self.default_target_percent = None;
                        } else if let Ok(v) = value.parse() {
                            self.default_target_percent = Some(v);
                        }
                    }
                    "CONSISTENCY_TOLERANCE" => {
                        if let Ok(v) = value.parse() {
                            self.consistency_tolerance = v;
                        }
                    }
                    "MAIL_TO" => value.clone_into(&mut self.mail_to),
                    "CLIENT_ABBREVIATION" => value.clone_into(&mut self.client_abbreviation),
                    "ALLOW_PROBE" => {
                        self.allow_probe = value == "yes" || value == "true" || value == "1";
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }

    /// Save current config back to the config file.
    pub fn save(&self) -> Result<()> {
        let contents = format!(
            r#"# Ideal Disk Space configuration
# Auto-generated, edit via the settings API
PORT="{}"
DEFAULT_UNIT="{}"
DEFAULT_TARGET_PERCENT="{}"
CONSISTENCY_TOLERANCE="{}"
MAIL_TO="{}"
CLIENT_ABBREVIATION="{}"
ALLOW_PROBE="{}"
"#,
            self.port,
            self.default_unit,
            self.default_target_percent.map(|t| t.to_string()).unwrap_or_default(),
            self.consistency_tolerance,
            self.mail_to,
            self.client_abbreviation,
            if self.allow_probe { "yes" } else { "no" },
        );

        if let Some(parent) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config to {}", self.config_path))?;

        Ok(())
    }
}
