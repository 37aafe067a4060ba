use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Scene;

/// A scene backed by a JSON file on disk.
pub struct SceneDocument {
    pub scene: Scene,
    pub file_path: PathBuf,
    pub dirty: bool,
}

impl SceneDocument {
    /// Open a scene file. A path that does not exist yet opens as an empty
    /// scene which is created on the first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let scene = if path.exists() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            log::debug!("{} does not exist, starting an empty scene", path.display());
            Scene::default()
        };

        Ok(SceneDocument {
            scene,
            file_path: path.to_path_buf(),
            dirty: false,
        })
    }

    /// Apply an edit and mark the document dirty if it succeeds.
    pub fn edit<T, E>(&mut self, f: impl FnOnce(&mut Scene) -> Result<T, E>) -> Result<T, E> {
        let out = f(&mut self.scene)?;
        self.dirty = true;
        Ok(out)
    }

    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.scene)?;
        std::fs::write(&self.file_path, &json)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        self.dirty = false;
        log::info!(
            "Saved {} objects to {}",
            self.scene.objects.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::scene::SceneError;

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let doc = SceneDocument::open(dir.path().join("scene.json")).unwrap();
        assert!(doc.scene.objects.is_empty());
        assert!(!doc.dirty);
    }

    #[test]
    fn edits_survive_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.json");

        let mut doc = SceneDocument::open(&path).unwrap();
        let id = doc
            .edit(|s| Ok::<_, SceneError>(s.add_object("Player")))
            .unwrap();
        doc.edit(|s| s.attach_script(id, "PlayerScript.ts")).unwrap();
        assert!(doc.dirty);
        doc.save().unwrap();
        assert!(!doc.dirty);

        let reopened = SceneDocument::open(&path).unwrap();
        assert_eq!(reopened.scene, doc.scene);
    }

    #[test]
    fn failed_edit_leaves_document_clean() {
        let dir = TempDir::new().unwrap();
        let mut doc = SceneDocument::open(dir.path().join("scene.json")).unwrap();
        assert!(doc.edit(|s| s.select(5)).is_err());
        assert!(!doc.dirty);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SceneDocument::open(&path).err().unwrap();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
