//! JSON persistence for the progress record under `~/.ironplan/`.
//!
//! Loading is deliberately forgiving: a missing, unreadable, or corrupt
//! record falls back to the zero-state so startup can never fail on bad
//! save data.

use crate::constants::STATS_FILE;
use crate::stats::PlayerStats;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.ironplan/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".ironplan");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.ironplan/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file from ~/.ironplan/, returning `T::default()` if
/// missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.ironplan/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the player's progress record, or the zero-state when absent.
pub fn load_stats() -> PlayerStats {
    load_json_or_default(STATS_FILE)
}

/// Persist the player's progress record.
pub fn save_stats(stats: &PlayerStats) -> io::Result<()> {
    save_json(STATS_FILE, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".ironplan"));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".ironplan/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let stats: PlayerStats = load_json_or_default("nonexistent_stats_98431.json");
        assert_eq!(stats, PlayerStats::default());
    }

    #[test]
    fn test_corrupt_record_falls_back_to_default() {
        let name = "corrupt_stats_test.json";
        let path = save_path(name).unwrap();
        fs::write(&path, "{ not json at all").unwrap();

        let stats: PlayerStats = load_json_or_default(name);
        assert_eq!(stats, PlayerStats::default());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let name = "roundtrip_stats_test.json";
        let mut stats = PlayerStats::default();
        stats.xp = 777;
        stats.plans_generated = 4;
        save_json(name, &stats).expect("save should succeed");

        let loaded: PlayerStats = load_json_or_default(name);
        assert_eq!(loaded, stats);

        // Cleanup
        let path = save_path(name).unwrap();
        fs::remove_file(path).ok();
    }
}
