use crate::core::calculator::hours::{CORE_END, CORE_START};
use crate::core::calculator::policy::{
    DAY_OFF_HOURS, HALF_DAY_CREDIT_HOURS, HoursPolicy, LUNCH_HOURS, TARGET_HOURS,
};
use crate::errors::{AppError, AppResult};
use crate::utils::time::normalize_time;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_target_hours")]
    pub target_hours: f64,
    #[serde(default = "default_core_start")]
    pub core_start: String,
    #[serde(default = "default_core_end")]
    pub core_end: String,
    #[serde(default)]
    pub hours_policy: HoursPolicy,
    #[serde(default = "default_lunch_hours")]
    pub lunch_hours: f64,
    #[serde(default = "default_half_day_credit")]
    pub half_day_credit_hours: f64,
    #[serde(default = "default_day_off_hours")]
    pub day_off_hours: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_target_hours() -> f64 {
    TARGET_HOURS
}
fn default_core_start() -> String {
    CORE_START.to_string()
}
fn default_core_end() -> String {
    CORE_END.to_string()
}
fn default_lunch_hours() -> f64 {
    LUNCH_HOURS
}
fn default_half_day_credit() -> f64 {
    HALF_DAY_CREDIT_HOURS
}
fn default_day_off_hours() -> f64 {
    DAY_OFF_HOURS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            target_hours: default_target_hours(),
            core_start: default_core_start(),
            core_end: default_core_end(),
            hours_policy: HoursPolicy::default(),
            lunch_hours: default_lunch_hours(),
            half_day_credit_hours: default_half_day_credit(),
            day_off_hours: default_day_off_hours(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkcycle")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkcycle")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkcycle.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkcycle.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Reject values the hours computation cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !self.target_hours.is_finite() || self.target_hours < 0.0 {
            return Err(AppError::Config(format!(
                "target_hours must be a non-negative number, got {}",
                self.target_hours
            )));
        }

        for (name, value) in [("core_start", &self.core_start), ("core_end", &self.core_end)] {
            // core bounds are compared as strings, so "9:00" must be rejected
            if normalize_time(value).ok().as_deref() != Some(value.as_str()) {
                return Err(AppError::Config(format!(
                    "{} must be a zero-padded HH:MM time, got '{}'",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rworkcycle.sqlite")
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
