use syn::{Attribute, Ident, Item, ItemEnum, Type, Visibility, ext::IdentExt};

use crate::access::AccessLevel;

/// Namespace used when no name can be derived from the annotated item.
pub const FALLBACK_TYPE_NAME: &str = "Localizable";

/// Kind of item carrying the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Module,
    Struct,
    Enum,
    Union,
    Trait,
    /// `impl Type { .. }`, the extension of an existing type.
    Impl,
    Other,
}

/// The item an `#[localizable]` attribute is attached to.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationSite<'a> {
    item: &'a Item,
}

impl<'a> AnnotationSite<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &'a Item {
        self.item
    }

    pub fn kind(&self) -> SiteKind {
        match self.item {
            Item::Mod(_) => SiteKind::Module,
            Item::Struct(_) => SiteKind::Struct,
            Item::Enum(_) => SiteKind::Enum,
            Item::Union(_) => SiteKind::Union,
            Item::Trait(_) => SiteKind::Trait,
            Item::Impl(_) => SiteKind::Impl,
            _ => SiteKind::Other,
        }
    }

    /// Name used as the key namespace.
    ///
    /// Declared names win. For an `impl` block it is the last path segment of
    /// the self type, generic arguments dropped: `impl ui::Account<T>` gives
    /// `Account`.
    pub fn type_name(&self) -> Option<String> {
        match self.item {
            Item::Mod(item) => Some(unraw(&item.ident)),
            Item::Struct(item) => Some(unraw(&item.ident)),
            Item::Enum(item) => Some(unraw(&item.ident)),
            Item::Union(item) => Some(unraw(&item.ident)),
            Item::Trait(item) => Some(unraw(&item.ident)),
            Item::Impl(item) => last_segment(&item.self_ty),
            _ => None,
        }
    }

    pub fn visibility(&self) -> Option<&'a Visibility> {
        match self.item {
            Item::Mod(item) => Some(&item.vis),
            Item::Struct(item) => Some(&item.vis),
            Item::Enum(item) => Some(&item.vis),
            Item::Union(item) => Some(&item.vis),
            Item::Trait(item) => Some(&item.vis),
            _ => None,
        }
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        self.visibility().and_then(AccessLevel::from_visibility)
    }

    /// Items declared directly inside the site.
    ///
    /// Only inline modules can nest item declarations in Rust; every other
    /// kind has no members.
    pub fn members(&self) -> &'a [Item] {
        match self.item {
            Item::Mod(item) => item
                .content
                .as_ref()
                .map_or(&[][..], |(_, items)| items.as_slice()),
            _ => &[],
        }
    }

    /// The first enum among the direct members.
    pub fn key_enum(&self) -> Option<&'a ItemEnum> {
        self.members().iter().find_map(|member| match member {
            Item::Enum(item) => Some(item),
            _ => None,
        })
    }
}

/// Mutable access to an item's outer attributes.
pub fn attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(item) => Some(&mut item.attrs),
        Item::Enum(item) => Some(&mut item.attrs),
        Item::ExternCrate(item) => Some(&mut item.attrs),
        Item::Fn(item) => Some(&mut item.attrs),
        Item::ForeignMod(item) => Some(&mut item.attrs),
        Item::Impl(item) => Some(&mut item.attrs),
        Item::Macro(item) => Some(&mut item.attrs),
        Item::Mod(item) => Some(&mut item.attrs),
        Item::Static(item) => Some(&mut item.attrs),
        Item::Struct(item) => Some(&mut item.attrs),
        Item::Trait(item) => Some(&mut item.attrs),
        Item::TraitAlias(item) => Some(&mut item.attrs),
        Item::Type(item) => Some(&mut item.attrs),
        Item::Union(item) => Some(&mut item.attrs),
        Item::Use(item) => Some(&mut item.attrs),
        _ => None,
    }
}

pub(crate) fn unraw(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn last_segment(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|segment| unraw(&segment.ident)),
        Type::Reference(reference) => last_segment(&reference.elem),
        Type::Paren(paren) => last_segment(&paren.elem),
        Type::Group(group) => last_segment(&group.elem),
        _ => None,
    }
}
