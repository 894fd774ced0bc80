use duedate_core::config::CalendarConfig;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "duedate.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    /// Business calendar used for every calculation
    pub calendar: CalendarConfig,
    /// Timezone naive submission times are read in (IANA format).
    /// Falls back to the system timezone when unset.
    pub input_timezone: Option<String>,
}

impl Config {
    /// Load configuration from the TOML file and `DUEDATE_` environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `DUEDATE_CALENDAR__TIMEZONE`.
    pub fn new(path: Option<&Path>) -> Result<Self, figment::Error> {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("DUEDATE_").split("__"))
            .extract()
    }
}
