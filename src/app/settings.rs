use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{cli::Cli, cli::IconMode, domain::weather::TemperatureUnit};

pub const DEFAULT_HOURLY_HOURS: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub units: TemperatureUnit,
    pub hourly_hours: u16,
    pub icon_mode: IconMode,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            units: TemperatureUnit::Fahrenheit,
            hourly_hours: DEFAULT_HOURLY_HOURS,
            icon_mode: IconMode::Unicode,
        }
    }
}

impl RuntimeSettings {
    /// Layers explicit command-line choices over `self`.
    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(units) = cli.units {
            self.units = units.into();
        }
        if let Some(hours) = cli.hours {
            self.hourly_hours = hours;
        }
        if cli.ascii_icons {
            self.icon_mode = IconMode::Ascii;
        } else if cli.emoji_icons {
            self.icon_mode = IconMode::Emoji;
        }
        self
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::default().with_cli_overrides(cli), None);
    }

    let path = settings_path();
    let settings = load_runtime_settings_from(cli, path.as_deref());
    (settings, path)
}

/// Defaults, then the saved file at `path` if it parses, then CLI flags.
pub fn load_runtime_settings_from(cli: &Cli, path: Option<&Path>) -> RuntimeSettings {
    let saved = path.and_then(|path| {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => {
                debug!(path = %path.display(), "loaded saved settings");
                Some(saved)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable settings file");
                None
            }
        }
    });

    saved.unwrap_or_default().with_cli_overrides(cli)
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("PETRICHOR_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("petrichor")
            .join("settings.json"),
    )
}
