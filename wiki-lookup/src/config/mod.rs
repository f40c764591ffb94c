pub mod language;
pub mod lookup_config;
