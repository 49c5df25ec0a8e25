use proc_macro2::TokenStream;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Path, Token, parse::Parser, punctuated::Punctuated};

/// Arguments accepted by `#[localizable(...)]`.
///
/// Only name-value pairs are recognized. Anything else in the list is ignored,
/// and when a name appears twice the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct LocalizableArgs {
    /// `bundle = <expr>`. Never evaluated, re-emitted verbatim into every lookup.
    pub bundle: Option<Expr>,
    /// `crate = <path>`. Path of the runtime crate used by generated code.
    pub krate: Option<Path>,
}

impl LocalizableArgs {
    /// Parse the tokens inside the attribute's parentheses.
    pub fn parse(tokens: TokenStream) -> syn::Result<Self> {
        if tokens.is_empty() {
            return Ok(Self::default());
        }
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(tokens)?;
        Self::from_metas(metas)
    }

    /// Parse the arguments of an attribute found in a parsed source file.
    pub fn from_attribute(attr: &Attribute) -> syn::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(list) => Self::parse(list.tokens.clone()),
            Meta::NameValue(meta) => Err(syn::Error::new_spanned(
                meta,
                "expected `#[localizable]` or `#[localizable(bundle = ...)]`",
            )),
        }
    }

    fn from_metas(metas: Punctuated<Meta, Token![,]>) -> syn::Result<Self> {
        let mut args = Self::default();

        for meta in metas {
            let Meta::NameValue(meta) = meta else {
                continue;
            };
            if meta.path.is_ident("bundle") {
                args.bundle.get_or_insert(meta.value);
            } else if meta.path.is_ident("crate") && args.krate.is_none() {
                args.krate = Some(crate_path(meta.value)?);
            }
        }

        Ok(args)
    }
}

/// Accepts both `crate = ::my_crate` and the serde-style `crate = "::my_crate"`.
fn crate_path(value: Expr) -> syn::Result<Path> {
    match value {
        Expr::Path(expr) if expr.qself.is_none() => Ok(expr.path),
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => lit.parse(),
        other => Err(syn::Error::new_spanned(
            other,
            "`crate` expects a path, e.g. `crate = ::localizable`",
        )),
    }
}
