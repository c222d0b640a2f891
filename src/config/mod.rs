mod defaults;
mod parser;
mod settings;
mod update;
mod validation;

pub use settings::AppConfig;
pub(crate) use update::SettingsUpdate;
