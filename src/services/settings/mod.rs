mod runtime;
mod service;

pub use service::{default_settings_path, SettingsService};
