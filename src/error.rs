// ==============================================================================
// Error Types
// ==============================================================================
//
// `IdlError` covers every fatal condition the generator can hit, from an
// interface that skipped resolution to a failed write on the output sink.
// `ParseDiagnostic` carries a source span and is used when the resolved-AST
// JSON itself is malformed, so the user sees the offending line.

use std::fmt;
use std::io;
use std::path::PathBuf;

use miette::{LabeledSpan, NamedSource, SourceSpan};

/// Fatal errors raised while loading, resolving, or rendering a document.
#[derive(Debug)]
pub enum IdlError {
    /// An interface reached the renderer without a filled name map.
    UnresolvedInterface { name: String },
    /// An interface's `uuid` attribute does not have the 8-4-4-4-12 hex shape.
    MalformedUuid { interface: String, uuid: String },
    /// Two members of one interface share a name.
    DuplicateMember { interface: String, name: String },
    /// An `include` production names a file that is in none of the search
    /// directories.
    IncludeNotFound { filename: String, searched: Vec<PathBuf> },
    /// The resolved-AST JSON parsed but does not describe a valid document.
    Load(String),
    /// Bad combination of command-line options.
    Usage(String),
    Io { source: io::Error },
}

impl fmt::Display for IdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdlError::UnresolvedInterface { name } => {
                write!(f, "interface `{name}` was not resolved")
            }
            IdlError::MalformedUuid { interface, uuid } => {
                write!(f, "interface `{interface}` has a malformed uuid: `{uuid}`")
            }
            IdlError::DuplicateMember { interface, name } => {
                write!(f, "name `{name}` specified twice in interface `{interface}`")
            }
            IdlError::IncludeNotFound { filename, .. } => {
                write!(f, "include file not found: {filename}")
            }
            IdlError::Load(msg) => write!(f, "{msg}"),
            IdlError::Usage(msg) => write!(f, "{msg}"),
            IdlError::Io { source } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for IdlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdlError::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for IdlError {
    fn from(source: io::Error) -> Self {
        IdlError::Io { source }
    }
}

impl miette::Diagnostic for IdlError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            IdlError::UnresolvedInterface { .. } => "xpidl_jsdoc::unresolved_interface",
            IdlError::MalformedUuid { .. } => "xpidl_jsdoc::malformed_uuid",
            IdlError::DuplicateMember { .. } => "xpidl_jsdoc::duplicate_member",
            IdlError::IncludeNotFound { .. } => "xpidl_jsdoc::include_not_found",
            IdlError::Load(_) => "xpidl_jsdoc::load",
            IdlError::Usage(_) => "xpidl_jsdoc::usage",
            IdlError::Io { .. } => "xpidl_jsdoc::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            IdlError::UnresolvedInterface { .. } => Some(Box::new(
                "run member resolution (`Document::resolve`) before rendering",
            )),
            IdlError::MalformedUuid { .. } => Some(Box::new(
                "uuids are written as 8-4-4-4-12 hex digits, e.g. `00000000-0000-0000-c000-000000000046`",
            )),
            IdlError::IncludeNotFound { searched, .. } => {
                let dirs: Vec<String> = searched.iter().map(|d| d.display().to_string()).collect();
                Some(Box::new(format!("searched: {}", dirs.join(", "))))
            }
            _ => None,
        }
    }
}

/// A load error with source location information for rich diagnostics.
#[derive(Debug)]
pub struct ParseDiagnostic {
    pub src: NamedSource<String>,
    pub span: SourceSpan,
    pub message: String,
    pub label: Option<String>,
    pub help: Option<String>,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseDiagnostic {}

impl miette::Diagnostic for ParseDiagnostic {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = self.label.clone().unwrap_or_else(|| self.message.clone());
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label),
            self.span,
        ))))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }
}

pub type Result<T> = std::result::Result<T, IdlError>;
