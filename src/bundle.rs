//! Runtime lookup for generated accessors.
//!
//! Generated code calls [`localized!`](crate::localized), which resolves a key
//! against a [`Lookup`] implementation: an explicit `bundle = ...` or the
//! process-wide [`Bundle::main`].
//!
//! Keys produced by accessors with parameters carry their arguments after the
//! key, separated by spaces (`Login.title Ada`). Resolution looks the base key
//! up and fills `{0}`, `{1}`, ... positionally. The last placeholder takes the
//! rest of the text, so only the final argument may contain spaces.

use std::{
    collections::HashMap,
    fs,
    path::Path,
    rc::Rc,
    sync::{Arc, LazyLock, OnceLock},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Anything that maps keys to string templates.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<T: Lookup + ?Sized> Lookup for Box<T> {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<T: Lookup + ?Sized> Lookup for Rc<T> {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<T: Lookup + ?Sized> Lookup for Arc<T> {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<T: Lookup, F: FnOnce() -> T> Lookup for LazyLock<T, F> {
    fn lookup(&self, key: &str) -> Option<&str> {
        LazyLock::force(self).lookup(key)
    }
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

static MAIN_BUNDLE: OnceLock<Bundle> = OnceLock::new();
static EMPTY_BUNDLE: Bundle = Bundle {
    name: None,
    strings: None,
};

/// A flat catalog of dotted keys to string templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    name: Option<String>,
    strings: Option<HashMap<String, String>>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bundle with a name, used in error messages.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            strings: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Insert a template, replacing any previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.strings
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), template.into());
    }

    /// Builder form of [`Bundle::insert`].
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn len(&self) -> usize {
        self.strings.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings
            .iter()
            .flat_map(|strings| strings.keys().map(String::as_str))
    }

    /// Parse a JSON catalog.
    ///
    /// Nested objects are flattened into dotted keys, so
    /// `{"Login": {"welcome": "Hi"}}` defines `Login.welcome`. Every leaf must
    /// be a string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Failed to parse bundle JSON")?;
        let mut bundle = Self::new();
        flatten_json(&value, String::new(), &mut bundle)?;
        Ok(bundle)
    }

    /// Load a JSON catalog from disk, named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle file: {:?}", path))?;
        let mut bundle = Self::from_json_str(&content)
            .with_context(|| format!("Failed to load bundle: {:?}", path))?;
        bundle.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Ok(bundle)
    }

    /// The bundle used when an accessor names none.
    ///
    /// Empty until [`Bundle::install_main`] is called, in which case every
    /// lookup resolves to its key.
    pub fn main() -> &'static Bundle {
        MAIN_BUNDLE.get().unwrap_or(&EMPTY_BUNDLE)
    }

    /// Install the main bundle. Can only happen once per process; a second
    /// call hands the bundle back.
    ///
    /// Install it before any accessor is read. Accessors for keys without
    /// parameters are `static`s that resolve on first use and keep that
    /// value, so one read earlier stays the bare key for the rest of the
    /// process. Function accessors look up on every call and are unaffected.
    pub fn install_main(bundle: Bundle) -> std::result::Result<(), Bundle> {
        MAIN_BUNDLE.set(bundle)
    }
}

impl Lookup for Bundle {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.as_ref()?.get(key).map(String::as_str)
    }
}

fn flatten_json(value: &Value, prefix: String, bundle: &mut Bundle) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, bundle)?;
            }
        }
        other if prefix.is_empty() => bail!("Bundle JSON must be an object, found {}", other),
        Value::String(s) => bundle.insert(prefix, s.clone()),
        other => bail!("Value for \"{}\" must be a string, found {}", prefix, other),
    }
    Ok(())
}

/// Resolve `key` in `bundle`.
///
/// An exact match wins. Otherwise the text after the first space is treated as
/// positional arguments for the template of the part before it. Unknown keys
/// resolve to themselves.
pub fn localized_string<L: Lookup + ?Sized>(bundle: &L, key: &str) -> String {
    if let Some(template) = bundle.lookup(key) {
        return template.to_string();
    }

    if let Some((base, rest)) = key.split_once(' ')
        && let Some(template) = bundle.lookup(base)
    {
        let arg_count = placeholder_count(template).max(1);
        let args: Vec<&str> = rest.splitn(arg_count, ' ').collect();
        return fill_placeholders(template, &args);
    }

    key.to_string()
}

/// Number of positional slots a template uses: highest `{n}` index plus one.
fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        rest = &rest[start + 1..];
        let Some(end) = rest.find('}') else {
            break;
        };
        if let Ok(index) = rest[..end].parse::<usize>() {
            count = count.max(index + 1);
        }
        rest = &rest[end + 1..];
    }
    count
}

/// Replace every `{n}` with `args[n]`. Placeholders without an argument are
/// left as they are.
fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substituted = after.find('}').and_then(|end| {
            let arg = after[..end].parse::<usize>().ok().and_then(|i| args.get(i))?;
            Some((arg, end))
        });
        match substituted {
            Some((arg, end)) => {
                result.push_str(arg);
                rest = &after[end + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Resolve a key against the main bundle, or against `bundle: <expr>`.
///
/// ```
/// use localizable::{Bundle, localized};
///
/// let bundle = Bundle::new().with("Login.title", "Hello, {0}!");
/// assert_eq!(localized!("Login.title Ada", bundle: bundle), "Hello, Ada!");
/// assert_eq!(localized!("Login.unknown"), "Login.unknown");
/// ```
#[macro_export]
macro_rules! localized {
    ($key:expr, bundle: $bundle:expr $(,)?) => {
        $crate::localized_string(&$bundle, ::core::convert::AsRef::<str>::as_ref(&$key))
    };
    ($key:expr $(,)?) => {
        $crate::localized_string(
            $crate::Bundle::main(),
            ::core::convert::AsRef::<str>::as_ref(&$key),
        )
    };
}
