use std::fmt::Write;

use crate::scene::SceneObject;

use super::error::CompileError;
use super::symbol::ScriptSymbol;
use super::template::{ASSET_KEY, BODY_INDENT, SPRITE_BINDING_PREFIX};

/// Emit the create-body statements for one object.
///
/// `index` is the object's position in the scene and names its binding, so
/// consecutive blocks never redeclare the same constant.
pub fn emit_object(index: usize, obj: &SceneObject) -> Result<String, CompileError> {
    let binding = format!("{SPRITE_BINDING_PREFIX}{index}");
    let mut block = format!(
        "{BODY_INDENT}const {binding} = this.add.sprite({}, {}, '{ASSET_KEY}'); // Replace '{ASSET_KEY}' with actual asset key\n\
         {BODY_INDENT}{binding}.name = {};",
        number_literal(obj.position.x),
        number_literal(obj.position.y),
        string_literal(&obj.name),
    );

    if !obj.script_refs.is_empty() {
        let instances = obj
            .script_refs
            .iter()
            .map(|reference| {
                ScriptSymbol::derive(reference)
                    .map(|s| s.construct_expression())
                    .map_err(|reason| CompileError::InvalidReference {
                        reference: reference.clone(),
                        reason,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let _ = write!(block, "\n{BODY_INDENT}{binding}.scripts = [{}];", instances.join(", "));
    }

    Ok(block)
}

/// Format a coordinate as a numeric literal. Finite values keep their
/// shortest decimal form; the rest use the global names that evaluate to them.
pub fn number_literal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

/// Quote `value` as a single-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Position;

    #[test]
    fn object_without_scripts_has_no_attachment() {
        let obj = SceneObject::new(1, "Player", Position::new(100.0, 200.0));
        assert_eq!(
            emit_object(0, &obj).unwrap(),
            "    const sprite0 = this.add.sprite(100, 200, 'player'); // Replace 'player' with actual asset key\n    sprite0.name = 'Player';"
        );
    }

    #[test]
    fn attachment_preserves_duplicates_and_order() {
        let obj = SceneObject::new(1, "Hero", Position::new(0.0, 0.0))
            .with_script("Jump.ts")
            .with_script("Walk.ts")
            .with_script("Jump.ts");
        let block = emit_object(2, &obj).unwrap();
        assert!(block.ends_with("\n    sprite2.scripts = [new Jump(), new Walk(), new Jump()];"));
    }

    #[test]
    fn coordinates_keep_their_decimal_form() {
        let obj = SceneObject::new(1, "P", Position::new(-12.5, 0.125));
        assert!(emit_object(0, &obj).unwrap().contains("this.add.sprite(-12.5, 0.125, 'player')"));
    }

    #[test]
    fn non_finite_coordinates_use_global_names() {
        assert_eq!(number_literal(f64::INFINITY), "Infinity");
        assert_eq!(number_literal(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_literal(f64::NAN), "NaN");
        assert_eq!(number_literal(100.0), "100");

        let obj = SceneObject::new(1, "Far", Position::new(f64::INFINITY, f64::NAN));
        assert!(emit_object(0, &obj).unwrap().contains("this.add.sprite(Infinity, NaN, 'player')"));
    }

    #[test]
    fn names_are_escaped() {
        assert_eq!(string_literal("Player"), "'Player'");
        assert_eq!(string_literal("it's"), r"'it\'s'");
        assert_eq!(string_literal("a\\b"), r"'a\\b'");
        assert_eq!(string_literal("x';alert(1);//\n"), r"'x\';alert(1);//\n'");
        assert_eq!(string_literal("\u{0}"), r"'\u0000'");
        assert_eq!(string_literal("名前"), "'名前'");
    }
}
