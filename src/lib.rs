//! Localizable - typed accessors for localized strings
//!
//! `#[localizable]` turns the cases of an enum nested in a module into
//! accessors that resolve localized strings at runtime:
//!
//! ```
//! use localizable::localizable;
//!
//! #[localizable]
//! #[allow(non_snake_case, non_camel_case_types)]
//! mod Login {
//!     enum Strings {
//!         welcome,
//!         title(String),
//!     }
//! }
//!
//! // Without an installed bundle, every key resolves to itself.
//! assert_eq!(*Login::welcome, "Login.welcome");
//! assert_eq!(Login::title("Ada".into()), "Login.title Ada");
//! ```
//!
//! ## Module Structure
//!
//! - `bundle`: Runtime lookup (`Lookup`, `Bundle`, `localized!`)
//! - `cli`: Command-line interface (`check`, `expand`, `keys`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Project scanning and whole-file expansion
//! - `issues`: Issue types reported by the CLI

pub mod bundle;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;

pub use bundle::{Bundle, Lookup, localized_string};
pub use localizable_macros::localizable;
