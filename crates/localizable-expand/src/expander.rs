use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Item, parse_quote};

use crate::{
    access::AccessLevel,
    args::LocalizableArgs,
    case::KeyCase,
    declaration::{EmitContext, GeneratedDeclaration},
    diagnostic::{Diagnostic, LocalizableDiagnostic},
    site::{AnnotationSite, FALLBACK_TYPE_NAME},
};

/// Result of expanding one annotation site.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Namespace of every key in this expansion.
    pub type_name: String,
    pub access: Option<AccessLevel>,
    /// One declaration per key case, in case order.
    pub declarations: Vec<GeneratedDeclaration>,
    pub emit: EmitContext,
}

impl Expansion {
    /// The declarations as items, ready to be appended to the module.
    pub fn items(&self) -> Vec<Item> {
        self.declarations
            .iter()
            .map(|decl| decl.to_item(&self.emit))
            .collect()
    }
}

/// Expand an annotation site.
///
/// Fails only when the site has no directly nested enum, in which case nothing
/// is generated and the diagnostic points at `attr_span`.
pub fn expand(
    site: &AnnotationSite<'_>,
    args: &LocalizableArgs,
    attr_span: Span,
) -> Result<Expansion, Diagnostic> {
    let Some(key_enum) = site.key_enum() else {
        return Err(Diagnostic::new(
            LocalizableDiagnostic::EnumRequired,
            attr_span,
        ));
    };

    let type_name = site
        .type_name()
        .unwrap_or_else(|| FALLBACK_TYPE_NAME.to_string());
    let access = site.access_level();
    let declarations = KeyCase::collect(key_enum)
        .iter()
        .map(|case| GeneratedDeclaration::from_case(case, &type_name))
        .collect();

    Ok(Expansion {
        type_name,
        access,
        declarations,
        emit: EmitContext::new(access, args),
    })
}

/// Expand `item` and splice the generated members into it.
///
/// On success the generated items are appended to the module body and the key
/// enum is marked `#[allow(dead_code)]`, since nothing refers to it once the
/// accessors exist. On failure `item` is left untouched.
pub fn expand_in_place(
    item: &mut Item,
    args: &LocalizableArgs,
    attr_span: Span,
) -> Result<Expansion, Diagnostic> {
    let expansion = expand(&AnnotationSite::new(item), args, attr_span)?;

    if let Item::Mod(module) = item
        && let Some((_, content)) = &mut module.content
    {
        if let Some(key_enum) = content.iter_mut().find_map(|member| match member {
            Item::Enum(key_enum) => Some(key_enum),
            _ => None,
        }) {
            key_enum.attrs.push(parse_quote!(#[allow(dead_code)]));
        }
        content.extend(expansion.items());
    }

    Ok(expansion)
}

/// Entry point for the `#[localizable]` attribute macro.
///
/// A diagnostic is emitted as `compile_error!` next to the unchanged item, so
/// the rest of the crate still sees the original declarations.
pub fn expand_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match LocalizableArgs::parse(attr) {
        Ok(args) => args,
        Err(err) => {
            let err = err.to_compile_error();
            return quote!(#item #err);
        }
    };

    let mut parsed: Item = match syn::parse2(item) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    match expand_in_place(&mut parsed, &args, Span::call_site()) {
        Ok(_) => parsed.into_token_stream(),
        Err(diagnostic) => {
            let err = diagnostic.to_compile_error();
            quote!(#parsed #err)
        }
    }
}
