// ==============================================================================
// Library API: the `JsDoc` Builder
// ==============================================================================
//
// `JsDoc` strings the pieces together the same way the CLI does:
//
//   load JSON -> resolve includes -> resolve member namespaces -> render
//
// It follows the non-consuming builder pattern (C-BUILDER): configuration
// methods take `&mut self` and return `&mut Self`, terminal methods take
// `&self`, so one builder can process any number of documents.

use std::io::Write;
use std::path::{Path, PathBuf};

use miette::Context;

use crate::import::{IncludeContext, load_document, parse_document};
use crate::model::Document;
use crate::render::{RenderOptions, Renderer};

/// Builder for rendering resolved XPIDL documents as JSDoc stubs.
///
/// # Examples
///
/// ```no_run
/// use xpidl_jsdoc::JsDoc;
///
/// let output = JsDoc::new()
///     .include_dir("dist/idl")
///     .generate("obj/nsICalculator.json")?;
/// print!("{}", output.text);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsDoc {
    include_dirs: Vec<PathBuf>,
    options: RenderOptions,
}

/// Result of rendering one document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsDocOutput {
    /// The rendered JSDoc text.
    pub text: String,
    /// Files the document depends on.
    pub deps: Vec<String>,
}

impl JsDoc {
    pub fn new() -> Self {
        JsDoc::default()
    }

    /// Add an include search directory. Searched in order added, after the
    /// working directory. Only consulted for documents that do not carry their
    /// own dependency list.
    pub fn include_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// Re-emit doc comments inside the generated blocks.
    pub fn print_doc_comments(&mut self, enabled: bool) -> &mut Self {
        self.options.print_doc_comments = enabled;
        self
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.options)
    }

    /// Load a resolved-AST file and run include and member resolution on it.
    pub fn load(&self, path: impl AsRef<Path>) -> miette::Result<Document> {
        let doc = load_document(path.as_ref())?;
        self.resolve(doc)
    }

    /// Like [`load`](Self::load), for JSON already in memory.
    pub fn load_str_named(&self, source: &str, name: &str) -> miette::Result<Document> {
        let doc = parse_document(source, name)?;
        self.resolve(doc)
    }

    fn resolve(&self, mut doc: Document) -> miette::Result<Document> {
        IncludeContext::new(self.include_dirs.clone())
            .resolve_includes(&mut doc)
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("resolve includes of {}", doc.filename))?;
        doc.resolve()
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("resolve {}", doc.filename))?;
        Ok(doc)
    }

    /// Render a resolved document to `out`, interface by interface.
    ///
    /// On error, the blocks of interfaces before the failing one have already
    /// been written.
    pub fn render_to<W: Write + ?Sized>(&self, doc: &Document, out: &mut W) -> miette::Result<()> {
        self.renderer()
            .render_document(doc, out)
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("render {}", doc.filename))
    }

    /// Load, resolve, and render a resolved-AST file.
    pub fn generate(&self, path: impl AsRef<Path>) -> miette::Result<JsDocOutput> {
        let doc = self.load(path)?;
        self.generate_impl(doc)
    }

    /// Load, resolve, and render resolved-AST JSON. Uses `"<input>"` as the
    /// source name in diagnostics.
    pub fn generate_str(&self, source: &str) -> miette::Result<JsDocOutput> {
        self.generate_str_named(source, "<input>")
    }

    pub fn generate_str_named(&self, source: &str, name: &str) -> miette::Result<JsDocOutput> {
        let doc = self.load_str_named(source, name)?;
        self.generate_impl(doc)
    }

    fn generate_impl(&self, doc: Document) -> miette::Result<JsDocOutput> {
        let text = self
            .renderer()
            .render_to_string(&doc)
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("render {}", doc.filename))?;
        Ok(JsDocOutput {
            text,
            deps: doc.deps.unwrap_or_default(),
        })
    }
}
