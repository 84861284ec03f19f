use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Leftmost calendar column, 1 = Sunday .. 7 = Saturday.
    #[serde(default = "default_first_weekday")]
    pub first_weekday: u8,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_reminder_title")]
    pub reminder_title: String,
    #[serde(default = "default_reminder_body")]
    pub reminder_body: String,
}

fn default_first_weekday() -> u8 {
    2
}
fn default_locale() -> String {
    "en_GB".to_string()
}
fn default_reminder_title() -> String {
    "Pill time 💊".to_string()
}
fn default_reminder_body() -> String {
    "Don't forget to take your pill!".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            first_weekday: default_first_weekday(),
            locale: default_locale(),
            reminder_title: default_reminder_title(),
            reminder_body: default_reminder_body(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pillpal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pillpal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pillpal.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pillpal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring configuration file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Check the values a hand-edited file may have broken.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=7).contains(&self.first_weekday) {
            return Err(AppError::Config(format!(
                "first_weekday must be 1..7, found {}",
                self.first_weekday
            )));
        }
        crate::core::grid::parse_locale(&self.locale)
            .map_err(|e| AppError::Config(e.to_string()))?;
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_name {
            Some(name) => resolve_in(&dir, &name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = config.to_yaml().map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create {}: {e}", db_path.display()))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/p.sqlite\n").unwrap();
        assert_eq!(cfg.first_weekday, 2);
        assert_eq!(cfg.locale, "en_GB");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = Config::with_database(PathBuf::from("/tmp/p.sqlite"));
        cfg.first_weekday = 9;
        assert!(cfg.validate().is_err());

        cfg.first_weekday = 1;
        cfg.locale = "nope".into();
        assert!(cfg.validate().is_err());
    }
}
