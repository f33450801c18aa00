use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ColorPalette;

/// MUI `sm` breakpoint: viewports at least this wide use the desktop drawer.
pub(crate) const DEFAULT_BREAKPOINT: f32 = 600.0;
pub(crate) const DEFAULT_DRAWER_WIDTH: f32 = 240.0;

/// Errors raised while reading or writing the shell configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-tunable shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    pub(crate) title: String,
    pub(crate) start_path: String,
    pub(crate) breakpoint: f32,
    pub(crate) drawer_width: f32,
    pub(crate) desktop_drawer_open: bool,
    pub(crate) mobile_drawer_open: bool,
    pub(crate) palette: ColorPalette,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: String::from("Backoffice"),
            start_path: String::from("/"),
            breakpoint: DEFAULT_BREAKPOINT,
            drawer_width: DEFAULT_DRAWER_WIDTH,
            desktop_drawer_open: true,
            mobile_drawer_open: false,
            palette: ColorPalette::default(),
        }
    }
}

impl ShellConfig {
    /// Clamp geometry values that would break the layout.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.breakpoint.is_finite() || self.breakpoint <= 0.0 {
            log::warn!(
                "ignoring invalid breakpoint {}, using {}",
                self.breakpoint,
                defaults.breakpoint
            );
            self.breakpoint = defaults.breakpoint;
        }
        if !self.drawer_width.is_finite() || self.drawer_width <= 0.0 {
            log::warn!(
                "ignoring invalid drawer width {}, using {}",
                self.drawer_width,
                defaults.drawer_width
            );
            self.drawer_width = defaults.drawer_width;
        }
        if self.start_path.trim().is_empty() {
            self.start_path = defaults.start_path;
        }
        self
    }
}

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ShellConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ShellConfigLoad {
    config: ShellConfig,
    status: ShellConfigLoadStatus,
}

impl ShellConfigLoad {
    pub(crate) fn new(
        config: ShellConfig,
        status: ShellConfigLoadStatus,
    ) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ShellConfig, ShellConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the configuration, falling back to defaults on any failure.
pub(crate) fn load_or_default() -> ShellConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ShellConfigLoadStatus::Loaded => {
                    log::info!("shell config loaded from {}", path.display());
                },
                ShellConfigLoadStatus::Missing => {
                    log::debug!(
                        "no shell config at {}, writing defaults",
                        path.display()
                    );
                    if let Err(err) = save_config_to_path(&path, &config) {
                        log::warn!("failed to write default shell config: {err}");
                    }
                },
                ShellConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "shell config at {} is invalid ({message}), using defaults",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("shell config load failed: {err}");
            ShellConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ShellConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ShellConfigLoad::new(
                ShellConfig::default(),
                ShellConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<ShellConfig>(&data) {
        Ok(config) => Ok(ShellConfigLoad::new(
            config.sanitized(),
            ShellConfigLoadStatus::Loaded,
        )),
        Err(err) => Ok(ShellConfigLoad::new(
            ShellConfig::default(),
            ShellConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_config_to_path(
    path: &Path,
    config: &ShellConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(config)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("backoffice")
            .join("shell.json");
    }

    std::env::temp_dir().join("backoffice").join("shell.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
