use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// The parser never fails, so every kind describes input it recovered from:
/// an invalid character is an error, the rest are warnings about text that
/// degraded to a best-effort token or was left outside any construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexer could not make sense of a character
    InvalidCharacter,

    // Literals that ran to the end of their line or of the input
    UnterminatedString,
    UnclosedCapture,
    UnterminatedRegex,

    // Tokens no top-level construct accepted
    UnrecognizedInput,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::InvalidCharacter => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid character",
            Self::UnterminatedString => "unterminated string",
            Self::UnclosedCapture => "missing closing `>`",
            Self::UnterminatedRegex => "missing closing `$`",
            Self::UnrecognizedInput => "unrecognized input",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::InvalidCharacter => "invalid character `{}`".to_string(),
            Self::UnrecognizedInput => {
                "`{}` is not a rule, context header or binding".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported problem with its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
