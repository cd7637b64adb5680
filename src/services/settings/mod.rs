// Settings service
// TOML-backed configuration for the picker host

mod service;

pub use service::SettingsService;
