//! Identifier derivation for script references.
//!
//! A reference such as `enemies/Patrol.ts` becomes the bare symbol `Patrol`,
//! imported from `./enemies/Patrol` and constructed as `new Patrol()`.
//! Every reference is validated here before any of it reaches the output.

use super::error::ReferenceError;
use super::template::is_template_binding;

/// Source-file suffix stripped from script references.
pub const SCRIPT_SUFFIX: &str = ".ts";

const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSymbol<'a> {
    pub reference: &'a str,
    /// Import binding and constructible type name.
    pub symbol: &'a str,
    /// Reference with the suffix stripped, relative to the generated module.
    pub module_path: &'a str,
}

impl<'a> ScriptSymbol<'a> {
    pub fn derive(reference: &'a str) -> Result<Self, ReferenceError> {
        validate_reference(reference)?;

        let module_path = reference.strip_suffix(SCRIPT_SUFFIX).unwrap_or(reference);
        let symbol = module_path
            .rsplit_once('/')
            .map_or(module_path, |(_, name)| name);
        validate_symbol(symbol)?;

        Ok(ScriptSymbol {
            reference,
            symbol,
            module_path,
        })
    }

    pub fn import_statement(&self) -> String {
        format!("import {} from './{}';", self.symbol, self.module_path)
    }

    pub fn construct_expression(&self) -> String {
        format!("new {}()", self.symbol)
    }
}

fn validate_reference(reference: &str) -> Result<(), ReferenceError> {
    if reference.is_empty() {
        return Err(ReferenceError::Empty);
    }
    if reference.starts_with('/') {
        return Err(ReferenceError::LeadingSlash);
    }
    if reference.contains('\\') {
        return Err(ReferenceError::Backslash);
    }
    for segment in reference.split('/') {
        if segment.is_empty() {
            return Err(ReferenceError::EmptySegment);
        }
        if segment == "." || segment == ".." {
            return Err(ReferenceError::RelativeSegment);
        }
        for ch in segment.chars() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '$' | '.') {
                continue;
            }
            return Err(ReferenceError::InvalidCharacter { character: ch });
        }
    }
    Ok(())
}

fn validate_symbol(symbol: &str) -> Result<(), ReferenceError> {
    let mut chars = symbol.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(ReferenceError::InvalidSymbol {
            symbol: symbol.to_string(),
        });
    }
    if RESERVED_WORDS.contains(&symbol) {
        return Err(ReferenceError::ReservedWord {
            symbol: symbol.to_string(),
        });
    }
    if is_template_binding(symbol) {
        return Err(ReferenceError::TemplateBinding {
            symbol: symbol.to_string(),
        });
    }
    Ok(())
}
