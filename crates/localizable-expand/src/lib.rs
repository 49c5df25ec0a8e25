//! Localizable expansion engine
//!
//! The syntax-tree transformation behind the `#[localizable]` attribute. It is
//! a pure function over `syn` items: given an annotated module that nests an
//! enum of localization keys, it produces one accessor item per variant.
//!
//! ```text
//! #[localizable]                       pub(super) static welcome: LazyLock<String>
//! mod Login {                    =>        = LazyLock::new(|| localized!("Login.welcome"));
//!     enum Strings {                   pub(super) fn title(value0: String) -> String {
//!         welcome,                         localized!(format!("Login.title {}", value0))
//!         title(String),               }
//!     }
//! }
//! ```
//!
//! ## Module Structure
//!
//! - `args`: attribute argument parsing (`bundle = ...`, `crate = ...`)
//! - `site`: the annotated item and what can be derived from it
//! - `access`: visibility lookup table
//! - `case`: key enum variants and their parameters
//! - `declaration`: generated accessors and their syntax
//! - `diagnostic`: the missing key enum diagnostic
//! - `expander`: the expansion pipeline and proc-macro entry point

mod access;
mod args;
mod case;
mod declaration;
mod diagnostic;
mod expander;
mod site;

pub use access::AccessLevel;
pub use args::LocalizableArgs;
pub use case::{KeyCase, KeyParam};
pub use declaration::{EmitContext, GeneratedDeclaration};
pub use diagnostic::{DIAGNOSTIC_DOMAIN, Diagnostic, LocalizableDiagnostic, Severity};
pub use expander::{Expansion, expand, expand_attribute, expand_in_place};
pub use site::{AnnotationSite, FALLBACK_TYPE_NAME, SiteKind, attrs_mut};
