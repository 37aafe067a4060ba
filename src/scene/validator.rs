//! Scene validation
//!
//! Advisory checks over a [`Scene`] that the editor would normally prevent.
//! None of these stop compilation; the compiler only rejects script
//! references it cannot turn into safe source text.

use std::collections::HashSet;
use std::fmt;

use super::Scene;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two objects share an id
    DuplicateId(u64),
    /// `selectedObjectId` names no object
    UnknownSelection(u64),
    /// An object references a script the catalog does not list
    UncataloguedScript { object_id: u64, reference: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateId(id) => write!(f, "Duplicate object id: {id}"),
            ValidationIssue::UnknownSelection(id) => {
                write!(f, "Selected object {id} does not exist")
            }
            ValidationIssue::UncataloguedScript {
                object_id,
                reference,
            } => write!(
                f,
                "Object {object_id} references '{reference}', which is not in the script catalog"
            ),
        }
    }
}

pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene, returning every issue found in object order.
    pub fn validate(scene: &Scene) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut seen_ids = HashSet::new();
        for obj in &scene.objects {
            if !seen_ids.insert(obj.id) {
                issues.push(ValidationIssue::DuplicateId(obj.id));
            }
        }

        if let Some(id) = scene.selected_object_id {
            if !seen_ids.contains(&id) {
                issues.push(ValidationIssue::UnknownSelection(id));
            }
        }

        let catalog: HashSet<&str> = scene.script_catalog.iter().map(String::as_str).collect();
        for obj in &scene.objects {
            let mut reported = HashSet::new();
            for reference in &obj.script_refs {
                if !catalog.contains(reference.as_str()) && reported.insert(reference.as_str()) {
                    issues.push(ValidationIssue::UncataloguedScript {
                        object_id: obj.id,
                        reference: reference.clone(),
                    });
                }
            }
        }

        issues
    }
}
