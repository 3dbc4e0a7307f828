use crate::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// The fixed taxonomy of lexical and syntactic problems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    // Lexer
    UnknownChar(char),
    InvalidDigit { digit: char, base: u32 },
    InvalidFloatBase { base: u32 },
    HexFloatLeadingDigits,
    HexFloatMissingExponent,
    MisplacedBinaryExponent { base: u32 },
    InvalidEscape(char),
    UnterminatedChar,
    UnterminatedString,

    // Parser
    ExpectedToken { expected: &'static str, found: &'static str },
    ExpectedOneOf { expected: &'static str, found: &'static str },
    ExpectedExpression { found: &'static str },
    ExpectedFunctionBody { found: &'static str },
    InvalidDeclaration { found: &'static str },
    EmptyVariant,
    InvalidImportSymbol { found: &'static str },
    MissingFieldSeparator,
    ParamMissingType,
    ParamAfterVararg,
    UnsupportedDecl { keyword: &'static str },
}

impl DiagnosticKind {
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::UnknownChar(c) => format!("unknown character '{}'", c.escape_default()),
            DiagnosticKind::InvalidDigit { digit, base } => {
                format!("invalid digit '{digit}' for base {base} literal")
            }
            DiagnosticKind::InvalidFloatBase { base } => {
                format!("floating point literals are not supported in base {base}")
            }
            DiagnosticKind::HexFloatLeadingDigits => {
                "hexadecimal floats must have exactly one digit before the point".into()
            }
            DiagnosticKind::HexFloatMissingExponent => {
                "hexadecimal floats require a 'p' exponent".into()
            }
            DiagnosticKind::MisplacedBinaryExponent { base } => {
                format!("'p' exponents are only valid on hexadecimal literals, not base {base}")
            }
            DiagnosticKind::InvalidEscape(c) => {
                format!("invalid escape sequence '\\{}'", c.escape_default())
            }
            DiagnosticKind::UnterminatedChar => "unterminated character literal".into(),
            DiagnosticKind::UnterminatedString => "unterminated string literal".into(),

            DiagnosticKind::ExpectedToken { expected, found } => {
                format!("expected '{expected}', found {found}", found = show_found(found))
            }
            DiagnosticKind::ExpectedOneOf { expected, found } => {
                format!("expected one of {expected}, found {found}", found = show_found(found))
            }
            DiagnosticKind::ExpectedExpression { found } => {
                format!("expected expression, found {found}", found = show_found(found))
            }
            DiagnosticKind::ExpectedFunctionBody { found } => {
                format!("expected '=>' or '{{' to begin a function body, found {found}",
                    found = show_found(found))
            }
            DiagnosticKind::InvalidDeclaration { found } => {
                format!("invalid declaration starting with {found}", found = show_found(found))
            }
            DiagnosticKind::EmptyVariant => "enum variant has an empty field list".into(),
            DiagnosticKind::InvalidImportSymbol { found } => {
                format!(
                    "expected an identifier or '...' in the import symbol list, found {found}",
                    found = show_found(found)
                )
            }
            DiagnosticKind::MissingFieldSeparator => {
                "expected ',' between struct fields".into()
            }
            DiagnosticKind::ParamMissingType => "parameter is missing a type".into(),
            DiagnosticKind::ParamAfterVararg => {
                "parameter follows a '...' parameter".into()
            }
            DiagnosticKind::UnsupportedDecl { keyword } => {
                format!("'{keyword}' declarations are not supported yet")
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            DiagnosticKind::UnknownChar(_) => "unknown character".into(),
            DiagnosticKind::InvalidDigit { .. } => "invalid digit".into(),
            DiagnosticKind::InvalidFloatBase { .. } => "invalid float".into(),
            DiagnosticKind::HexFloatLeadingDigits | DiagnosticKind::HexFloatMissingExponent => {
                "malformed hexadecimal float".into()
            }
            DiagnosticKind::MisplacedBinaryExponent { .. } => "misplaced exponent".into(),
            DiagnosticKind::InvalidEscape(_) => "invalid escape".into(),
            DiagnosticKind::UnterminatedChar => "literal starts here".into(),
            DiagnosticKind::UnterminatedString => "string starts here".into(),

            DiagnosticKind::ExpectedToken { expected, .. } => format!("expected '{expected}'"),
            DiagnosticKind::ExpectedOneOf { expected, .. } => format!("expected one of {expected}"),
            DiagnosticKind::ExpectedExpression { .. } => "expected an expression here".into(),
            DiagnosticKind::ExpectedFunctionBody { .. } => "expected a function body".into(),
            DiagnosticKind::InvalidDeclaration { .. } => "not a declaration".into(),
            DiagnosticKind::EmptyVariant => "empty field list".into(),
            DiagnosticKind::InvalidImportSymbol { .. } => "not an importable symbol".into(),
            DiagnosticKind::MissingFieldSeparator => "expected ',' before this field".into(),
            DiagnosticKind::ParamMissingType => "type required".into(),
            DiagnosticKind::ParamAfterVararg => "'...' must come last".into(),
            DiagnosticKind::UnsupportedDecl { .. } => "not supported yet".into(),
        }
    }
}

// Fixed-spelling tokens get quoted; descriptive names do not.
fn show_found(found: &str) -> String {
    let descriptive =
        found.contains(' ') || matches!(found, "identifier" | "newline" | "comment" | "token");
    if descriptive {
        found.to_string()
    } else {
        format!("'{found}'")
    }
}

/// One reported problem. Owns its message, label, and optional hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub label: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn error_kind(kind: DiagnosticKind, span: Span) -> Self {
        Self::error(span, kind.message(), kind.label())
    }

    pub fn warning(span: Span, message: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn warning_kind(kind: DiagnosticKind, span: Span) -> Self {
        Self::warning(span, kind.message(), kind.label())
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
