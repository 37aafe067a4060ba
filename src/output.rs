//! Persistence of compiled modules.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::compiler::Compiler;
use crate::scene::Scene;
use crate::types::CompileReport;

/// Write `code` to `path`, creating parent directories as needed.
pub fn persist(code: &str, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Compile a scene and persist the module, returning the report.
pub fn compile_to(scene: &Scene, path: &Path) -> Result<CompileReport> {
    let code = Compiler::compile(scene)?;
    let file_path = persist(&code, path)?;
    log::info!("Wrote {} bytes to {}", code.len(), file_path.display());
    Ok(CompileReport::success(file_path, code))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::scene::{Position, SceneObject};

    #[test]
    fn persist_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output").join("nested").join("CompiledScene.tsx");

        let written = persist("// module\n", &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// module\n");
    }

    #[test]
    fn compile_to_reports_what_it_wrote() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CompiledScene.tsx");
        let scene = Scene::new().with_object(SceneObject::new(1, "Player", Position::new(1.0, 2.0)));

        let report = compile_to(&scene, &path).unwrap();
        assert_eq!(report.message, "Scene compiled successfully!");
        assert_eq!(report.file_path, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), report.code);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("filePath").is_some());
    }

    #[test]
    fn compile_errors_write_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CompiledScene.tsx");
        let scene = Scene::new().with_object(
            SceneObject::new(1, "P", Position::default()).with_script("not valid.ts"),
        );

        assert!(compile_to(&scene, &path).is_err());
        assert!(!path.exists());
    }
}
