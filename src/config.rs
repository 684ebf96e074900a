/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD), or from an
/// explicit path given on the command line.
/// Falls back to defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};

use crate::error::ConfigError;

// ── Public Config Struct ──

/// Immutable game rules, built once at startup and passed by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub entities: EntityConfig,
    pub respawn: RespawnConfig,
    pub timing: TimingConfig,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityConfig {
    pub stars: usize,
    pub enemies: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RespawnConfig {
    pub interval_turns: u32,
    pub max_tries: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    pub invalid_input_pause: Duration,
    pub all_collected_pause: Duration,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    board: TomlBoard,
    #[serde(default)]
    entities: TomlEntities,
    #[serde(default)]
    respawn: TomlRespawn,
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlBoard {
    #[serde(default = "default_rows")]
    rows: i32,
    #[serde(default = "default_cols")]
    cols: i32,
}

#[derive(Deserialize, Debug)]
struct TomlEntities {
    #[serde(default = "default_stars")]
    stars: usize,
    #[serde(default = "default_enemies")]
    enemies: usize,
}

#[derive(Deserialize, Debug)]
struct TomlRespawn {
    #[serde(default = "default_respawn_interval")]
    interval_turns: u32,
    #[serde(default = "default_respawn_tries")]
    max_tries: u32,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_invalid_pause")]
    invalid_input_pause_ms: u64,
    #[serde(default = "default_collected_pause")]
    all_collected_pause_ms: u64,
}

#[derive(Deserialize, Debug, Default)]
struct TomlGeneral {
    #[serde(default)]
    seed: Option<u64>,
}

// ── Defaults ──

fn default_rows() -> i32 { 12 }
fn default_cols() -> i32 { 30 }
fn default_stars() -> usize { 6 }
fn default_enemies() -> usize { 3 }
fn default_respawn_interval() -> u32 { 12 }
fn default_respawn_tries() -> u32 { 50 }
fn default_invalid_pause() -> u64 { 250 }
fn default_collected_pause() -> u64 { 500 }

impl Default for TomlBoard {
    fn default() -> Self {
        TomlBoard { rows: default_rows(), cols: default_cols() }
    }
}

impl Default for TomlEntities {
    fn default() -> Self {
        TomlEntities { stars: default_stars(), enemies: default_enemies() }
    }
}

impl Default for TomlRespawn {
    fn default() -> Self {
        TomlRespawn {
            interval_turns: default_respawn_interval(),
            max_tries: default_respawn_tries(),
        }
    }
}

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            invalid_input_pause_ms: default_invalid_pause(),
            all_collected_pause_ms: default_collected_pause(),
        }
    }
}

impl From<TomlConfig> for GameConfig {
    fn from(t: TomlConfig) -> Self {
        GameConfig {
            board: BoardConfig { rows: t.board.rows, cols: t.board.cols },
            entities: EntityConfig { stars: t.entities.stars, enemies: t.entities.enemies },
            respawn: RespawnConfig {
                interval_turns: t.respawn.interval_turns,
                max_tries: t.respawn.max_tries,
            },
            timing: TimingConfig {
                invalid_input_pause: Duration::from_millis(t.timing.invalid_input_pause_ms),
                all_collected_pause: Duration::from_millis(t.timing.all_collected_pause_ms),
            },
            seed: t.general.seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `explicit`, or search for `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => read_toml(path).unwrap_or_default(),
            None => load_toml(&candidate_dirs()),
        }
    }

    /// Parse a TOML document. Unknown keys are ignored, missing keys default.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<TomlConfig>(text).map(Into::into)
    }

    /// Reject settings the game loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { rows, cols } = self.board;
        if rows < 1 || cols < 1 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }
        let cells = rows as usize * cols as usize;
        // Player and goal are always on the board alongside each group.
        for (what, count) in [("stars", self.entities.stars), ("enemies", self.entities.enemies)] {
            let needed = count + 2;
            if needed > cells {
                return Err(ConfigError::Overcrowded { what, cells, needed });
            }
        }
        if self.respawn.interval_turns == 0 {
            return Err(ConfigError::ZeroRespawnInterval);
        }
        Ok(())
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> GameConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            if let Some(cfg) = read_toml(&path) {
                return cfg;
            }
        }
    }
    debug!("no config.toml found, using defaults");
    GameConfig::default()
}

/// Read and parse one file. A parse error means "use defaults", a read
/// error means "keep searching".
fn read_toml(path: &Path) -> Option<GameConfig> {
    match std::fs::read_to_string(path) {
        Ok(text) => match GameConfig::from_toml_str(&text) {
            Ok(cfg) => {
                debug!("loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                warn!("{} parse error: {e}", path.display());
                warn!("Using default settings.");
                Some(GameConfig::default())
            }
        },
        Err(e) => {
            warn!("could not read {}: {e}", path.display());
            None
        }
    }
}
