use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Expr, Ident, Item, Path, Type, Visibility, parse_quote};

use crate::{
    access::{AccessLevel, member_visibility},
    args::LocalizableArgs,
    case::KeyCase,
};

/// An accessor generated for one key case.
#[derive(Debug, Clone)]
pub enum GeneratedDeclaration {
    /// Case without parameters: a lazily resolved `static`.
    Constant {
        name: Ident,
        key: String,
        attrs: Vec<Attribute>,
    },
    /// Case with parameters: a function interpolating its arguments after the key.
    Function {
        name: Ident,
        key: String,
        params: Vec<(Ident, Type)>,
        attrs: Vec<Attribute>,
    },
}

impl GeneratedDeclaration {
    pub fn from_case(case: &KeyCase, type_name: &str) -> Self {
        let name = case.name.clone();
        let key = case.key(type_name);
        let attrs = case.attrs.clone();

        if case.params.is_empty() {
            return GeneratedDeclaration::Constant { name, key, attrs };
        }

        let params = case
            .param_names()
            .into_iter()
            .zip(case.params.iter().map(|param| param.ty.clone()))
            .collect();
        GeneratedDeclaration::Function {
            name,
            key,
            params,
            attrs,
        }
    }

    pub fn name(&self) -> &Ident {
        match self {
            GeneratedDeclaration::Constant { name, .. } => name,
            GeneratedDeclaration::Function { name, .. } => name,
        }
    }

    /// The key without arguments, e.g. `Login.title`.
    pub fn key(&self) -> &str {
        match self {
            GeneratedDeclaration::Constant { key, .. } => key,
            GeneratedDeclaration::Function { key, .. } => key,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            GeneratedDeclaration::Constant { .. } => 0,
            GeneratedDeclaration::Function { params, .. } => params.len(),
        }
    }

    /// Format string of the lookup key: the key followed by one
    /// space-separated `{}` per argument.
    pub fn key_template(&self) -> String {
        format!("{}{}", self.key(), " {}".repeat(self.arity()))
    }

    pub fn to_item(&self, cx: &EmitContext) -> Item {
        let vis = &cx.vis;

        match self {
            GeneratedDeclaration::Constant { name, key, attrs } => {
                let lookup = cx.lookup(quote!(#key));
                parse_quote! {
                    #(#attrs)*
                    #[allow(non_upper_case_globals)]
                    #vis static #name: ::std::sync::LazyLock<::std::string::String> =
                        ::std::sync::LazyLock::new(|| #lookup);
                }
            }
            GeneratedDeclaration::Function { name, params, attrs, .. } => {
                let template = self.key_template();
                let names = params.iter().map(|(name, _)| name);
                let args = names.clone();
                let types = params.iter().map(|(_, ty)| ty);
                let lookup = cx.lookup(quote!(::std::format!(#template, #(#args),*)));
                parse_quote! {
                    #(#attrs)*
                    #[allow(non_snake_case)]
                    #vis fn #name(#(#names: #types),*) -> ::std::string::String {
                        #lookup
                    }
                }
            }
        }
    }
}

/// Everything shared by the accessors of one expansion.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub vis: Visibility,
    pub krate: Path,
    pub bundle: Option<Expr>,
}

impl EmitContext {
    pub fn new(access: Option<AccessLevel>, args: &LocalizableArgs) -> Self {
        Self {
            vis: member_visibility(access),
            krate: args
                .krate
                .clone()
                .unwrap_or_else(|| parse_quote!(::localizable)),
            bundle: args.bundle.clone(),
        }
    }

    /// `localized!(<key>)`, or `localized!(<key>, bundle: <bundle>)` when a
    /// bundle was given.
    fn lookup(&self, key: TokenStream) -> TokenStream {
        let krate = &self.krate;
        match &self.bundle {
            Some(bundle) => quote!(#krate::localized!(#key, bundle: #bundle)),
            None => quote!(#krate::localized!(#key)),
        }
    }
}
