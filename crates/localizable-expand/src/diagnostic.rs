use std::fmt;

use proc_macro2::{Span, TokenStream};

/// Domain every diagnostic identifier is qualified with.
pub const DIAGNOSTIC_DOMAIN: &str = "LocalizableMacro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostics the expansion can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizableDiagnostic {
    /// The annotated item has no directly nested enum (`MissingKeyEnumeration`).
    EnumRequired,
}

impl LocalizableDiagnostic {
    pub fn message(&self) -> &'static str {
        match self {
            LocalizableDiagnostic::EnumRequired => {
                "The #[localizable] macro requires a nested enum with localization keys."
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            LocalizableDiagnostic::EnumRequired => "enumRequired",
        }
    }

    /// Identifier qualified with [`DIAGNOSTIC_DOMAIN`], e.g. `LocalizableMacro.enumRequired`.
    pub fn qualified_id(&self) -> String {
        format!("{}.{}", DIAGNOSTIC_DOMAIN, self.id())
    }

    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// A diagnostic attached to the attribute that triggered the expansion.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: LocalizableDiagnostic,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: LocalizableDiagnostic, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// `compile_error!` invocation pointing at the attribute.
    pub fn to_compile_error(&self) -> TokenStream {
        syn::Error::new(self.span, self.message()).to_compile_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {}",
            self.severity(),
            self.kind.qualified_id(),
            self.message()
        )
    }
}

impl std::error::Error for Diagnostic {}
