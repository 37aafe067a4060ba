use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("script reference '{reference}' is invalid: {reason}")]
    InvalidReference {
        reference: String,
        reason: ReferenceError,
    },
    #[error("script references '{first}' and '{second}' both bind the symbol '{symbol}'")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },
}

/// Why a script reference cannot be spliced into generated source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("reference must not be empty")]
    Empty,
    #[error("reference must not start with '/'")]
    LeadingSlash,
    #[error("reference must not contain '\\\\'")]
    Backslash,
    #[error("reference contains an empty path segment")]
    EmptySegment,
    #[error("reference must not contain '.' or '..' segments")]
    RelativeSegment,
    #[error("reference contains invalid character {character:?}")]
    InvalidCharacter { character: char },
    #[error("'{symbol}' is not a valid identifier")]
    InvalidSymbol { symbol: String },
    #[error("'{symbol}' is a reserved word")]
    ReservedWord { symbol: String },
    #[error("'{symbol}' is already bound by the module template")]
    TemplateBinding { symbol: String },
}
