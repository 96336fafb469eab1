use std::path::PathBuf;

use arcade_common::storage::{FileKeyValueStore, Record, RecordManager, Validate};
use serde::{Deserialize, Serialize};

use super::{LaddersConfig, TicTacToeConfig};

pub const DATA_DIR_NAME: &str = "arcade_data";

/// Next to the executable when it can be located, otherwise the working
/// directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(DATA_DIR_NAME);
    }
    PathBuf::from(DATA_DIR_NAME)
}

pub fn get_settings_manager(store: FileKeyValueStore) -> RecordManager<FileKeyValueStore, Settings> {
    RecordManager::yaml(store)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub ladders: LaddersConfig,
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.ladders.validate()?;
        Ok(())
    }
}

impl Record for Settings {
    const KEY: &'static str = "settings";
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_common::games::GameMode;
    use arcade_common::games::tictactoe::{Difficulty, Mark};
    use arcade_common::storage::{KeyValueStore, RecordSerializer, YamlSerializer};

    fn get_temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_arcade_settings_{}", random_number));
        path
    }

    #[test]
    fn test_default_settings_can_be_serialized_and_deserialized_string() {
        let default_settings = Settings::default();
        let serializer = YamlSerializer::new();

        let serialized = serializer.serialize(&default_settings).unwrap();
        let deserialized: Settings = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_settings, deserialized);
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_settings_can_be_saved_and_loaded_from_file() {
        let dir = get_temp_dir();
        let settings = Settings {
            tictactoe: TicTacToeConfig {
                mode: GameMode::Local,
                difficulty: Difficulty::Hard,
                first_mark: Mark::O,
                computer_mark: Mark::X,
                bot_delay_ms: 0,
            },
            ladders: LaddersConfig {
                mode: GameMode::VsComputer,
                bot_delay_ms: 250,
            },
        };

        let manager = get_settings_manager(FileKeyValueStore::new(dir.clone()));
        manager.save(&settings).unwrap();

        let reloaded = get_settings_manager(FileKeyValueStore::new(dir.clone()));
        assert_eq!(reloaded.load().unwrap(), settings);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_settings_file_returns_default() {
        let manager = get_settings_manager(FileKeyValueStore::new(get_temp_dir()));

        assert_eq!(manager.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let dir = get_temp_dir();
        let store = FileKeyValueStore::new(dir.clone());
        store
            .set(
                "settings",
                "ladders:\n  mode: VsComputer\n  bot_delay_ms: 10\n",
            )
            .unwrap();

        let loaded = get_settings_manager(store).load().unwrap();

        assert_eq!(loaded.tictactoe, TicTacToeConfig::default());
        assert_eq!(loaded.ladders.mode, GameMode::VsComputer);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_settings_cant_be_read() {
        let dir = get_temp_dir();
        let store = FileKeyValueStore::new(dir.clone());
        store
            .set(
                "settings",
                r#"
tictactoe:
  mode: VsComputer
  difficulty: Hard
  first_mark: Empty
  computer_mark: O
  bot_delay_ms: 100
"#,
            )
            .unwrap();

        assert!(get_settings_manager(store).load().is_err());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_broken_settings_file_is_not_overwritten() {
        let dir = get_temp_dir();
        let store = FileKeyValueStore::new(dir.clone());
        let broken = "tictactoe:\n  difficulty: Hrad\n";
        store.set("settings", broken).unwrap();

        assert!(get_settings_manager(store.clone()).load_or_create().is_err());

        assert_eq!(store.get("settings").unwrap().as_deref(), Some(broken));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_settings_file_is_created_with_defaults() {
        let dir = get_temp_dir();
        let store = FileKeyValueStore::new(dir.clone());

        let loaded = get_settings_manager(store.clone()).load_or_create().unwrap();

        assert_eq!(loaded, Settings::default());
        assert!(store.get("settings").unwrap().is_some());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let mut settings = Settings::default();
        settings.ladders.bot_delay_ms = 60_000;

        assert!(settings.validate().is_err());
    }
}
