use syn::{Visibility, parse_quote};

/// Explicit access level carried from the annotated item to generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
}

/// Restricted visibilities, keyed by the single path segment inside `pub(..)`.
///
/// `None` means the restriction is no wider than the module itself, so nothing
/// explicit is carried over.
const RESTRICTED_LEVELS: &[(&str, Option<AccessLevel>)] = &[
    ("crate", Some(AccessLevel::Crate)),
    ("super", Some(AccessLevel::Crate)),
    ("self", None),
];

impl AccessLevel {
    /// Look up the access level for an item's visibility.
    ///
    /// `pub(in path)` and unrecognized restrictions map to [`AccessLevel::Crate`].
    pub fn from_visibility(vis: &Visibility) -> Option<Self> {
        match vis {
            Visibility::Public(_) => Some(Self::Public),
            Visibility::Inherited => None,
            Visibility::Restricted(restricted) => {
                if restricted.in_token.is_some() {
                    return Some(Self::Crate);
                }
                let Some(ident) = restricted.path.get_ident() else {
                    return Some(Self::Crate);
                };
                RESTRICTED_LEVELS
                    .iter()
                    .find(|(name, _)| ident == name)
                    .map_or(Some(Self::Crate), |(_, level)| *level)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "pub",
            AccessLevel::Crate => "pub(crate)",
        }
    }
}

/// Visibility for generated members.
///
/// Without an explicit level the members get the default that makes them
/// reachable wherever the module itself is, which is `pub(super)`.
pub(crate) fn member_visibility(level: Option<AccessLevel>) -> Visibility {
    match level {
        Some(AccessLevel::Public) => parse_quote!(pub),
        Some(AccessLevel::Crate) => parse_quote!(pub(crate)),
        None => parse_quote!(pub(super)),
    }
}
