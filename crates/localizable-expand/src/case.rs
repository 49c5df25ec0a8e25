use quote::format_ident;
use syn::{Attribute, Fields, Ident, ItemEnum, Type, Variant};

use crate::site::unraw;

/// One parameter of a key case.
#[derive(Debug, Clone)]
pub struct KeyParam {
    /// Field name for struct-like variants, `None` for tuple fields.
    pub label: Option<Ident>,
    /// Carried through untouched; never resolved or checked.
    pub ty: Type,
}

/// One variant of the key enum.
#[derive(Debug, Clone)]
pub struct KeyCase {
    pub name: Ident,
    pub params: Vec<KeyParam>,
    /// `#[cfg(..)]` and doc attributes of the variant, repeated on its accessor.
    pub attrs: Vec<Attribute>,
}

impl KeyCase {
    /// Collect every variant of the key enum, in declaration order.
    pub fn collect(key_enum: &ItemEnum) -> Vec<KeyCase> {
        key_enum.variants.iter().map(KeyCase::from_variant).collect()
    }

    pub fn from_variant(variant: &Variant) -> Self {
        let params = match &variant.fields {
            Fields::Unit => Vec::new(),
            Fields::Named(fields) => fields
                .named
                .iter()
                .map(|field| KeyParam {
                    label: field.ident.clone(),
                    ty: field.ty.clone(),
                })
                .collect(),
            Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .map(|field| KeyParam {
                    label: None,
                    ty: field.ty.clone(),
                })
                .collect(),
        };

        Self {
            name: variant.ident.clone(),
            params,
            attrs: variant
                .attrs
                .iter()
                .filter(|attr| carried_attribute(attr))
                .cloned()
                .collect(),
        }
    }

    /// Lookup key: `<type_name>.<case name>`.
    pub fn key(&self, type_name: &str) -> String {
        format!("{}.{}", type_name, unraw(&self.name))
    }

    /// Parameter names for the generated function.
    ///
    /// Labels are kept; unlabeled parameters become `value<index>`, where the
    /// index is the parameter's position in the case.
    pub fn param_names(&self) -> Vec<Ident> {
        self.params
            .iter()
            .enumerate()
            .map(|(idx, param)| {
                param
                    .label
                    .clone()
                    .unwrap_or_else(|| format_ident!("value{}", idx))
            })
            .collect()
    }
}

/// Attribute macros see their input before cfg-stripping, so a variant's
/// `cfg` has to follow it onto the accessor.
fn carried_attribute(attr: &Attribute) -> bool {
    ["cfg", "cfg_attr", "doc"]
        .iter()
        .any(|name| attr.path().is_ident(name))
}
