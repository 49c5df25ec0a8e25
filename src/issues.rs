//! Issue types for annotation site analysis.
//!
//! Each issue is self-contained with everything the reporter needs to display
//! it: location, source line, message and an optional hint.

use localizable_expand::{DIAGNOSTIC_DOMAIN, Diagnostic, LocalizableDiagnostic};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
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

impl From<localizable_expand::Severity> for Severity {
    fn from(severity: localizable_expand::Severity) -> Self {
        match severity {
            localizable_expand::Severity::Error => Severity::Error,
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EnumRequired,
    InvalidArguments,
    EmptyKeyEnum,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EnumRequired => {
                write!(f, "{}", LocalizableDiagnostic::EnumRequired.qualified_id())
            }
            Rule::InvalidArguments => write!(f, "{}.invalidArguments", DIAGNOSTIC_DOMAIN),
            Rule::EmptyKeyEnum => write!(f, "{}.emptyKeyEnum", DIAGNOSTIC_DOMAIN),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// Where an issue was found. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// The full source line, when the file content is available.
    pub source_line: Option<String>,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
            source_line: None,
        }
    }

    /// Attach the source line this location points at.
    pub fn with_source(mut self, content: &str) -> Self {
        self.source_line = self
            .line
            .checked_sub(1)
            .and_then(|idx| content.lines().nth(idx))
            .map(str::to_string);
        self
    }

    /// Location of a span. Columns from `proc_macro2` are 0-based.
    pub fn from_span(file_path: impl Into<String>, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self::new(file_path, start.line, start.column + 1)
    }
}

// ============================================================
// Issue Types
// ============================================================

/// `#[localizable]` on an item without a directly nested enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRequiredIssue {
    pub location: SourceLocation,
    /// Name of the annotated item, if it has one.
    pub type_name: Option<String>,
}

/// Attribute arguments that do not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentsIssue {
    pub location: SourceLocation,
    pub error: String,
}

/// Key enum without variants: the attribute generates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyKeyEnumIssue {
    pub location: SourceLocation,
    pub type_name: String,
}

/// A source file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub location: SourceLocation,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EnumRequired(EnumRequiredIssue),
    InvalidArguments(InvalidArgumentsIssue),
    EmptyKeyEnum(EmptyKeyEnumIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    /// Issue for an expansion diagnostic.
    pub fn from_diagnostic(
        diagnostic: &Diagnostic,
        file_path: &str,
        content: &str,
        type_name: Option<String>,
    ) -> Self {
        let location = SourceLocation::from_span(file_path, diagnostic.span).with_source(content);
        match diagnostic.kind {
            LocalizableDiagnostic::EnumRequired => {
                Issue::EnumRequired(EnumRequiredIssue {
                    location,
                    type_name,
                })
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::EnumRequired(_) => LocalizableDiagnostic::EnumRequired.severity().into(),
            Issue::InvalidArguments(_) | Issue::ParseError(_) => Severity::Error,
            Issue::EmptyKeyEnum(_) => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::EnumRequired(_) => Rule::EnumRequired,
            Issue::InvalidArguments(_) => Rule::InvalidArguments,
            Issue::EmptyKeyEnum(_) => Rule::EmptyKeyEnum,
            Issue::ParseError(_) => Rule::ParseError,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Issue::EnumRequired(issue) => &issue.location,
            Issue::InvalidArguments(issue) => &issue.location,
            Issue::EmptyKeyEnum(issue) => &issue.location,
            Issue::ParseError(issue) => &issue.location,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::EnumRequired(_) => LocalizableDiagnostic::EnumRequired.message().to_string(),
            Issue::InvalidArguments(issue) => {
                format!("Invalid #[localizable] arguments: {}", issue.error)
            }
            Issue::EmptyKeyEnum(issue) => {
                format!("Key enum of `{}` has no variants; nothing is generated", issue.type_name)
            }
            Issue::ParseError(issue) => format!("Failed to parse file: {}", issue.error),
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            Issue::EnumRequired(issue) => Some(match &issue.type_name {
                Some(name) => format!(
                    "declare the keys inside an inline module: `mod {} {{ enum Strings {{ .. }} }}`",
                    name
                ),
                None => "declare the keys in an enum inside an inline module".to_string(),
            }),
            Issue::InvalidArguments(_) => {
                Some("expected `bundle = <expr>` and/or `crate = <path>`".to_string())
            }
            Issue::EmptyKeyEnum(_) | Issue::ParseError(_) => None,
        }
    }
}
