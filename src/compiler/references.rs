use std::collections::{HashMap, HashSet};

use crate::scene::SceneObject;

use super::error::CompileError;
use super::symbol::ScriptSymbol;

/// Distinct script references across all objects, in first-seen order
/// (object order, then each object's own reference order).
pub fn collect_references(objects: &[SceneObject]) -> Vec<&str> {
    let mut seen = HashSet::new();
    objects
        .iter()
        .flat_map(|obj| obj.script_refs.iter().map(String::as_str))
        .filter(|reference| seen.insert(*reference))
        .collect()
}

/// Derive a symbol for every distinct reference, refusing two references
/// that would bind the same name.
pub fn derive_symbols<'a>(references: &[&'a str]) -> Result<Vec<ScriptSymbol<'a>>, CompileError> {
    let mut bound: HashMap<&str, &str> = HashMap::new();
    let mut symbols = Vec::with_capacity(references.len());

    for &reference in references {
        let symbol =
            ScriptSymbol::derive(reference).map_err(|reason| CompileError::InvalidReference {
                reference: reference.to_string(),
                reason,
            })?;
        if let Some(first) = bound.insert(symbol.symbol, reference) {
            return Err(CompileError::SymbolCollision {
                symbol: symbol.symbol.to_string(),
                first: first.to_string(),
                second: reference.to_string(),
            });
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::error::ReferenceError;
    use crate::scene::Position;

    fn object(id: u64, scripts: &[&str]) -> SceneObject {
        scripts.iter().fold(
            SceneObject::new(id, format!("Object{id}"), Position::default()),
            |obj, s| obj.with_script(*s),
        )
    }

    #[test]
    fn empty_scene_has_no_references() {
        assert!(collect_references(&[]).is_empty());
        assert!(collect_references(&[object(1, &[])]).is_empty());
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let objects = [
            object(1, &["B.ts", "A.ts", "B.ts"]),
            object(2, &["C.ts", "A.ts"]),
            object(3, &["D.ts"]),
        ];
        assert_eq!(collect_references(&objects), vec!["B.ts", "A.ts", "C.ts", "D.ts"]);
    }

    #[test]
    fn dedup_is_keyed_by_the_raw_reference() {
        let objects = [object(1, &["Foo.ts", "Foo"])];
        assert_eq!(collect_references(&objects), vec!["Foo.ts", "Foo"]);
    }

    #[test]
    fn distinct_references_with_one_symbol_collide() {
        let err = derive_symbols(&["a/Foo.ts", "Bar.ts", "b/Foo.ts"]).unwrap_err();
        assert_eq!(
            err,
            CompileError::SymbolCollision {
                symbol: "Foo".into(),
                first: "a/Foo.ts".into(),
                second: "b/Foo.ts".into(),
            }
        );
    }

    #[test]
    fn invalid_reference_is_reported_with_its_text() {
        let err = derive_symbols(&["Ok.ts", "bad name.ts"]).unwrap_err();
        assert_eq!(
            err,
            CompileError::InvalidReference {
                reference: "bad name.ts".into(),
                reason: ReferenceError::InvalidCharacter { character: ' ' },
            }
        );
    }
}
