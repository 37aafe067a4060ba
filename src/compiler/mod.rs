//! Compiler — turns a `Scene` into module source text.
//!
//! Three stages, each a pure function over the borrowed scene:
//! references are collected and deduplicated, every object is emitted as a
//! block of create-body statements, and both are spliced into the fixed
//! module template. Identical scenes always produce byte-identical output.

pub mod emitter;
pub mod error;
pub mod references;
pub mod symbol;
pub mod template;

pub use error::{CompileError, ReferenceError};

use crate::scene::Scene;
use emitter::emit_object;
use references::{collect_references, derive_symbols};
use template::ModuleTemplate;

pub struct Compiler;

impl Compiler {
    /// Compile a scene into a complete module.
    pub fn compile(scene: &Scene) -> Result<String, CompileError> {
        let references = collect_references(&scene.objects);
        let imports: Vec<String> = derive_symbols(&references)?
            .iter()
            .map(|s| s.import_statement())
            .collect();

        let blocks = scene
            .objects
            .iter()
            .enumerate()
            .map(|(index, obj)| emit_object(index, obj))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Compiled {} objects with {} distinct scripts",
            blocks.len(),
            imports.len()
        );

        Ok(ModuleTemplate::assemble(&imports, &blocks))
    }
}
