use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Directory compiled modules are written to when no output path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_output_dir() -> PathBuf { PathBuf::from("output") }
fn default_file_name() -> String { "CompiledScene.tsx".into() }

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

impl CompilerConfig {
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Read a config file, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("invalid compiler config {} ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("phaser-scene-compiler");
        path.push("config.json");
        path
    }
}
