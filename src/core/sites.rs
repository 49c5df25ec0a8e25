//! Expansion of `#[localizable]` sites inside parsed source files.
//!
//! The CLI works on whole files rather than on macro input: it parses a file
//! with `syn`, finds every annotated item, strips the attribute and splices the
//! generated accessors in place. The result is what the compiler would see
//! after macro expansion, restricted to this one attribute.

use std::fs;

use localizable_expand::{
    AnnotationSite, GeneratedDeclaration, LocalizableArgs, attrs_mut, expand_in_place,
};
use serde::Serialize;
use syn::{
    Attribute, File, Item,
    spanned::Spanned,
    visit_mut::{self, VisitMut},
};

use crate::issues::{
    EmptyKeyEnumIssue, InvalidArgumentsIssue, Issue, ParseErrorIssue, SourceLocation,
};

/// What kind of accessor a key produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessorKind {
    Static,
    Function,
}

/// One key generated at a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedKey {
    pub key: String,
    pub accessor: String,
    pub kind: AccessorKind,
    pub arity: usize,
}

impl From<&GeneratedDeclaration> for GeneratedKey {
    fn from(decl: &GeneratedDeclaration) -> Self {
        let kind = match decl {
            GeneratedDeclaration::Constant { .. } => AccessorKind::Static,
            GeneratedDeclaration::Function { .. } => AccessorKind::Function,
        };
        Self {
            key: decl.key().to_string(),
            accessor: decl.name().to_string(),
            kind,
            arity: decl.arity(),
        }
    }
}

/// A successfully expanded site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedSite {
    pub type_name: String,
    /// Location of the attribute.
    pub location: SourceLocation,
    pub keys: Vec<GeneratedKey>,
}

/// Per-file outcome of expansion. Holds only owned data, so it can leave the
/// thread that parsed the file.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    pub file_path: String,
    pub sites: Vec<ExpandedSite>,
    pub issues: Vec<Issue>,
}

impl FileAnalysis {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

/// A parsed file after expansion, plus what happened at each site.
pub struct ExpandedSource {
    pub file: File,
    pub analysis: FileAnalysis,
}

impl ExpandedSource {
    /// Render the expanded file as formatted Rust source.
    pub fn render(&self) -> String {
        prettyplease::unparse(&self.file)
    }
}

/// Walks a file and expands every annotated item it finds.
struct SiteExpander<'a> {
    attributes: &'a [String],
    content: &'a str,
    analysis: FileAnalysis,
}

impl<'a> SiteExpander<'a> {
    fn new(file_path: &str, content: &'a str, attributes: &'a [String]) -> Self {
        Self {
            attributes,
            content,
            analysis: FileAnalysis::new(file_path),
        }
    }

    fn is_site_attribute(&self, attr: &Attribute) -> bool {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| self.attributes.iter().any(|name| segment.ident == name))
    }

    fn location(&self, span: proc_macro2::Span) -> SourceLocation {
        SourceLocation::from_span(&self.analysis.file_path, span).with_source(self.content)
    }

    fn expand_site(&mut self, item: &mut Item) {
        let Some(index) = attrs_mut(item)
            .and_then(|attrs| attrs.iter().position(|attr| self.is_site_attribute(attr)))
        else {
            return;
        };
        let Some(attr) = attrs_mut(item).map(|attrs| attrs[index].clone()) else {
            return;
        };

        let args = match LocalizableArgs::from_attribute(&attr) {
            Ok(args) => args,
            Err(err) => {
                let location = self.location(err.span());
                self.analysis
                    .issues
                    .push(Issue::InvalidArguments(InvalidArgumentsIssue {
                        location,
                        error: err.to_string(),
                    }));
                return;
            }
        };

        // The key enum and the generated members must not see the attribute
        // again, so it is removed before expanding and restored on failure.
        if let Some(attrs) = attrs_mut(item) {
            attrs.remove(index);
        }

        let attr_span = attr.span();
        match expand_in_place(item, &args, attr_span) {
            Ok(expansion) => {
                let location = self.location(attr_span);
                if expansion.declarations.is_empty() {
                    self.analysis
                        .issues
                        .push(Issue::EmptyKeyEnum(EmptyKeyEnumIssue {
                            location: location.clone(),
                            type_name: expansion.type_name.clone(),
                        }));
                }
                self.analysis.sites.push(ExpandedSite {
                    type_name: expansion.type_name,
                    location,
                    keys: expansion.declarations.iter().map(GeneratedKey::from).collect(),
                });
            }
            Err(diagnostic) => {
                let type_name = AnnotationSite::new(item).type_name();
                if let Some(attrs) = attrs_mut(item) {
                    attrs.insert(index, attr);
                }
                self.analysis.issues.push(Issue::from_diagnostic(
                    &diagnostic,
                    &self.analysis.file_path,
                    self.content,
                    type_name,
                ));
            }
        }
    }
}

impl VisitMut for SiteExpander<'_> {
    fn visit_item_mut(&mut self, item: &mut Item) {
        // Inner sites first, so an annotated module nested in another one is
        // expanded before its parent collects members.
        visit_mut::visit_item_mut(self, item);
        self.expand_site(item);
    }
}

/// Parse `content` and expand every site in it.
///
/// A file that does not parse yields a [`ParseErrorIssue`] and no source.
pub fn expand_source(
    file_path: &str,
    content: &str,
    attributes: &[String],
) -> Result<ExpandedSource, Issue> {
    let mut file = syn::parse_file(content).map_err(|err| {
        Issue::ParseError(ParseErrorIssue {
            location: SourceLocation::from_span(file_path, err.span()).with_source(content),
            error: err.to_string(),
        })
    })?;

    let mut expander = SiteExpander::new(file_path, content, attributes);
    expander.visit_file_mut(&mut file);

    Ok(ExpandedSource {
        file,
        analysis: expander.analysis,
    })
}

/// Read, parse and expand one file, keeping only the analysis.
pub fn analyze_file(file_path: &str, attributes: &[String]) -> FileAnalysis {
    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) => {
            let mut analysis = FileAnalysis::new(file_path);
            analysis.issues.push(Issue::ParseError(ParseErrorIssue {
                location: SourceLocation::new(file_path, 1, 1),
                error: format!("Failed to read file: {}", err),
            }));
            return analysis;
        }
    };

    match expand_source(file_path, &content, attributes) {
        Ok(expanded) => expanded.analysis,
        Err(issue) => {
            let mut analysis = FileAnalysis::new(file_path);
            analysis.issues.push(issue);
            analysis
        }
    }
}
