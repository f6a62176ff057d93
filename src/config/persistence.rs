//! Configuration file persistence for Tally
//!
//! Settings live in a single JSON file in the platform config directory.
//! Loading falls back to defaults when the file is missing, empty, or
//! corrupt; saving goes through a temp file and keeps the previous file
//! as a one-level backup.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the platform config root.
const APP_NAME: &str = "tally";

/// Settings file name.
const CONFIG_FILE_NAME: &str = "config.json";

/// Scratch file the new settings are written to before the rename.
const CONFIG_TMP_NAME: &str = "config.json.tmp";

/// Previous settings file, kept after every successful save.
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// The application's config directory.
///
/// `%APPDATA%\tally` on Windows, `~/Library/Application Support/tally` on
/// macOS, `~/.config/tally` on Linux.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Full path of the settings file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from the config file, falling back to defaults.
///
/// Any failure (unresolvable directory, unreadable file, invalid JSON) is
/// logged as a warning and answered with `Settings::default()`; the
/// application always starts.
pub fn load_config() -> Settings {
    config_file_path()
        .and_then(|path| read_settings(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Read and sanitize settings from the given file.
///
/// A missing or empty file is not an error; both mean "no preferences
/// saved yet" and yield defaults.
fn read_settings(path: &Path) -> Result<Settings> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(Error::ConfigLoad {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if contents.trim().is_empty() {
        debug!("Config file at {} is empty, using defaults", path.display());
        return Ok(Settings::default());
    }

    let settings =
        Settings::from_json_sanitized(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Configuration loaded from {}", path.display());
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Saving
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to the config file.
///
/// Creates the config directory if needed, then hands off to
/// [`write_settings`] for the temp-file dance.
pub fn save_config(settings: &Settings) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir).map_err(|source| Error::ConfigSave {
        path: dir.clone(),
        source,
    })?;
    write_settings(&dir, settings)
}

/// Write settings into `dir` without clobbering the previous file.
///
/// The new JSON lands in a temp file first, the current file (if any) is
/// renamed to the backup name, then the temp file is renamed into place.
/// A failed backup rename is logged but does not abort the save.
fn write_settings(dir: &Path, settings: &Settings) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let tmp_path = dir.join(CONFIG_TMP_NAME);
    let backup_path = dir.join(CONFIG_BACKUP_NAME);

    let json = serde_json::to_string_pretty(settings).map_err(|source| Error::ConfigSave {
        path: config_path.clone(),
        source: io::Error::new(io::ErrorKind::InvalidData, source),
    })?;

    fs::write(&tmp_path, json).map_err(|source| Error::ConfigSave {
        path: tmp_path.clone(),
        source,
    })?;

    if config_path.exists() {
        // Windows cannot rename over an existing file
        let _ = fs::remove_file(&backup_path);
        if let Err(e) = fs::rename(&config_path, &backup_path) {
            warn!("Could not back up previous config: {}", e);
        }
    }

    fs::rename(&tmp_path, &config_path).map_err(|source| Error::ConfigSave {
        path: config_path.clone(),
        source,
    })?;

    info!("Configuration saved to {}", config_path.display());
    Ok(())
}

/// Best-effort save for paths where failure must not interrupt anything,
/// like saving on exit. Errors are logged; returns whether the save
/// succeeded.
pub fn save_config_silent(settings: &Settings) -> bool {
    match save_config(settings) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use tempfile::TempDir;

    /// A throwaway config directory the real read/write functions run
    /// against.
    struct TestEnv {
        _tmp: TempDir,
        dir: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let tmp = TempDir::new().expect("create temp dir");
            let dir = tmp.path().join(APP_NAME);
            fs::create_dir_all(&dir).expect("create config dir");
            Self { _tmp: tmp, dir }
        }

        fn config_path(&self) -> PathBuf {
            self.dir.join(CONFIG_FILE_NAME)
        }

        fn backup_path(&self) -> PathBuf {
            self.dir.join(CONFIG_BACKUP_NAME)
        }

        fn tmp_path(&self) -> PathBuf {
            self.dir.join(CONFIG_TMP_NAME)
        }
    }

    fn dark_settings() -> Settings {
        Settings {
            theme: Theme::Dark,
            font_size: 18.0,
            ..Settings::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reading
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_read_missing_file_gives_defaults() {
        let env = TestEnv::new();
        let settings = read_settings(&env.config_path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_empty_file_gives_defaults() {
        let env = TestEnv::new();
        fs::write(env.config_path(), "  \n").unwrap();

        let settings = read_settings(&env.config_path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_partial_json_fills_defaults() {
        let env = TestEnv::new();
        fs::write(env.config_path(), r#"{"theme": "dark"}"#).unwrap();

        let settings = read_settings(&env.config_path()).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 14.0);
        assert!(settings.word_wrap);
    }

    #[test]
    fn test_read_invalid_json_is_parse_error() {
        let env = TestEnv::new();
        fs::write(env.config_path(), "{ this is not json").unwrap();

        let err = read_settings(&env.config_path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_read_sanitizes_out_of_range_values() {
        let env = TestEnv::new();
        fs::write(env.config_path(), r#"{"font_size": 500.0}"#).unwrap();

        let settings = read_settings(&env.config_path()).unwrap();
        assert_eq!(settings.font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_read_ignores_unknown_fields() {
        let env = TestEnv::new();
        fs::write(
            env.config_path(),
            r#"{"theme": "light", "someday_maybe": true}"#,
        )
        .unwrap();

        let settings = read_settings(&env.config_path()).unwrap();
        assert_eq!(settings.theme, Theme::Light);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writing
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_write_then_read_roundtrip() {
        let env = TestEnv::new();
        let original = dark_settings();

        write_settings(&env.dir, &original).unwrap();
        let loaded = read_settings(&env.config_path()).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_write_leaves_no_tmp_file() {
        let env = TestEnv::new();
        write_settings(&env.dir, &Settings::default()).unwrap();

        assert!(env.config_path().exists());
        assert!(!env.tmp_path().exists());
    }

    #[test]
    fn test_first_write_creates_no_backup() {
        let env = TestEnv::new();
        write_settings(&env.dir, &Settings::default()).unwrap();

        assert!(!env.backup_path().exists());
    }

    #[test]
    fn test_second_write_backs_up_previous() {
        let env = TestEnv::new();
        let first = Settings::default();
        let second = dark_settings();

        write_settings(&env.dir, &first).unwrap();
        write_settings(&env.dir, &second).unwrap();

        let backup = read_settings(&env.backup_path()).unwrap();
        assert_eq!(backup, first);
        let current = read_settings(&env.config_path()).unwrap();
        assert_eq!(current, second);
    }

    #[test]
    fn test_backup_holds_only_one_generation() {
        let env = TestEnv::new();
        let first = Settings::default();
        let second = dark_settings();
        let third = Settings {
            font_size: 20.0,
            ..Settings::default()
        };

        write_settings(&env.dir, &first).unwrap();
        write_settings(&env.dir, &second).unwrap();
        write_settings(&env.dir, &third).unwrap();

        let backup = read_settings(&env.backup_path()).unwrap();
        assert_eq!(backup, second);
    }

    #[test]
    fn test_written_file_is_pretty_json() {
        let env = TestEnv::new();
        write_settings(&env.dir, &Settings::default()).unwrap();

        let contents = fs::read_to_string(env.config_path()).unwrap();
        // Pretty output spans multiple lines and parses back
        assert!(contents.lines().count() > 1);
        assert!(serde_json::from_str::<Settings>(&contents).is_ok());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Public API
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_config_file_path_names_the_json_file() {
        let path = config_file_path().unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_config_never_panics() {
        // Whatever is (or is not) on this machine, the fallback holds
        let settings = load_config();
        assert!(settings.font_size >= Settings::MIN_FONT_SIZE);
        assert!(settings.font_size <= Settings::MAX_FONT_SIZE);
    }
}
