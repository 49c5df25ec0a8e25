//! The `#[localizable]` attribute.
//!
//! This crate only registers the attribute with the compiler. The expansion
//! lives in `localizable-expand`, and most users depend on the `localizable`
//! crate, which re-exports the attribute next to the runtime it calls into.

use proc_macro::TokenStream;

/// Generate localized string accessors from a nested key enum.
///
/// Apply to an inline module that declares an enum. Every variant becomes an
/// accessor keyed `<Module>.<variant>`:
///
/// - unit variants become `static` values resolved on first use
/// - variants with fields become functions taking those fields and appending
///   them, space-separated, to the key
///
/// # Attributes
///
/// - `bundle = <expr>` - Optional bundle every lookup is resolved in; the main
///   bundle is used otherwise
/// - `crate = <path>` - Path of the runtime crate (default `::localizable`)
///
/// # Example
///
/// ```ignore
/// #[localizable(bundle = crate::BUNDLE)]
/// mod Login {
///     enum Strings {
///         welcome,
///         title(String),
///         message { msg1: String, msg2: i32 },
///     }
/// }
///
/// println!("{}", *Login::welcome);
/// println!("{}", Login::title("Ada".into()));
/// ```
#[proc_macro_attribute]
pub fn localizable(attr: TokenStream, item: TokenStream) -> TokenStream {
    localizable_expand::expand_attribute(attr.into(), item.into()).into()
}
