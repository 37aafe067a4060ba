//! Scene description — the declarative input to the compiler.
//!
//! These types describe *what exists* in a scene and which behavior scripts
//! are bound to it. They are plain values: the compiler only ever borrows
//! them, and every edit is an explicit call on a caller-owned `Scene`.

pub mod document;
pub mod validator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    /// Emission order of the compiled module follows this order.
    #[serde(rename = "gameObjects", default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub selected_object_id: Option<u64>,
    /// Scripts known to the editor. Advisory only; compilation never reads it.
    #[serde(rename = "scripts", default)]
    pub script_catalog: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
    #[serde(rename = "scripts", default)]
    pub script_refs: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no object with id {0}")]
    UnknownObject(u64),
}

impl SceneObject {
    pub fn new(id: u64, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            script_refs: Vec::new(),
        }
    }

    pub fn with_script(mut self, reference: impl Into<String>) -> Self {
        self.script_refs.push(reference.into());
        self
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(name: impl Into<String>) -> Self {
        Self {
            project: Some(Project { name: name.into() }),
            ..Self::default()
        }
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn object(&self, id: u64) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    fn object_mut(&mut self, id: u64) -> Result<&mut SceneObject, SceneError> {
        self.objects
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(SceneError::UnknownObject(id))
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.selected_object_id.and_then(|id| self.object(id))
    }

    /// Append a new object at the origin and return its id.
    ///
    /// Ids are allocated one past the current maximum so that repeated runs
    /// over the same document produce the same ids.
    pub fn add_object(&mut self, name: impl Into<String>) -> u64 {
        let id = self.objects.iter().map(|o| o.id).max().map_or(1, |max| max + 1);
        self.objects
            .push(SceneObject::new(id, name, Position::default()));
        id
    }

    pub fn select(&mut self, id: u64) -> Result<(), SceneError> {
        if self.object(id).is_none() {
            return Err(SceneError::UnknownObject(id));
        }
        self.selected_object_id = Some(id);
        Ok(())
    }

    pub fn move_object(&mut self, id: u64, x: f64, y: f64) -> Result<(), SceneError> {
        self.object_mut(id)?.position = Position::new(x, y);
        Ok(())
    }

    /// Bind a script to an object. The same reference may be attached more
    /// than once; each occurrence becomes its own instance when compiled.
    pub fn attach_script(&mut self, id: u64, reference: &str) -> Result<(), SceneError> {
        self.object_mut(id)?.script_refs.push(reference.to_string());
        Ok(())
    }

    /// Add a script to the catalog. Returns false if it was already listed.
    pub fn add_script(&mut self, reference: &str) -> bool {
        if self.script_catalog.iter().any(|s| s == reference) {
            return false;
        }
        self.script_catalog.push(reference.to_string());
        true
    }
}
