use crate::severity::Breakpoints;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub default_strings: DefaultStrings,

    #[serde(default)]
    pub entries: EntriesConfig,
}

/// Severity breakpoints (percent used) per entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "LimitsFile")]
pub struct Limits {
    pub ram:  Breakpoints,
    pub disk: Breakpoints,
}

/// `[limits]` as written: any key may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LimitsFile {
    ram:  PartialBreakpoints,
    disk: PartialBreakpoints,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialBreakpoints {
    warning: Option<f64>,
    danger:  Option<f64>,
}

impl PartialBreakpoints {
    fn or(self, fallback: Breakpoints) -> Breakpoints {
        Breakpoints {
            warning: self.warning.unwrap_or(fallback.warning),
            danger:  self.danger.unwrap_or(fallback.danger),
        }
    }
}

impl From<LimitsFile> for Limits {
    fn from(f: LimitsFile) -> Self {
        Self {
            ram:  f.ram.or(Limits::default_ram()),
            disk: f.disk.or(Limits::default_disk()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultStrings {
    /// Shown in place of a value no probe could detect.
    pub not_detected: String,
}

/// Which entries are probed and printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntriesConfig {
    pub shell:     bool,
    pub ram:       bool,
    pub disk:      bool,
    pub packages:  bool,
    pub processes: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Limits {
    fn default_ram() -> Breakpoints {
        Breakpoints { warning: 33.3, danger: 66.7 }
    }

    fn default_disk() -> Breakpoints {
        Breakpoints { warning: 50.0, danger: 75.0 }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { ram: Self::default_ram(), disk: Self::default_disk() }
    }
}

impl Default for DefaultStrings {
    fn default() -> Self {
        Self { not_detected: "Not detected".to_string() }
    }
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self { shell: true, ram: true, disk: true, packages: true, processes: true }
    }
}

// ── Load ─────────────────────────────────────────────────────────────

impl Config {
    /// Load from `path` (or the default location). Never fails: a missing or
    /// broken file means defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Config::config_path) {
            Some(p) => p,
            None => {
                tracing::debug!("no config directory, using defaults");
                return Config::default();
            }
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }
        match try_load(&path) {
            Ok(c) => {
                tracing::debug!(path = %path.display(), "config loaded");
                c
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rfetch").join("config.toml"))
    }

    fn normalized(mut self) -> Self {
        self.limits.ram  = self.limits.ram.ascending();
        self.limits.disk = self.limits.disk.ascending();
        self
    }
}

fn try_load(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg.normalized())
}
