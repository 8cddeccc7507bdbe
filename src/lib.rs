//! XPIDL to JSDoc: render resolved XPIDL interfaces as JSDoc documentation
//! stubs.
//!
//! The IDL itself is parsed and resolved by an external front end, which
//! hands over a JSON rendition of its resolved tree. This crate loads that
//! tree, resolves each interface's member namespace, and writes one block per
//! interface:
//!
//! ```text
//! /**
//!  * Calculator IDL
//!  * @typedef {Object} Calculator
//!  * @property total readonly attribute long total;
//!  * @property Add void add (in long a, in long b);
//! */
//! var Calculator = {};
//! ```
//!
//! # Rendering a document
//!
//! ```no_run
//! use xpidl_jsdoc::JsDoc;
//!
//! let output = JsDoc::new()
//!     .include_dir("dist/idl")
//!     .generate("obj/nsICalculator.json")?;
//! std::fs::write("nsICalculator.js", &output.text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Building the tree directly
//!
//! ```
//! use xpidl_jsdoc::model::{Attribute, Interface};
//! use xpidl_jsdoc::{RenderOptions, Renderer};
//!
//! let mut iface = Interface::new("nsIThing", "00000000-0000-0000-c000-000000000046")
//!     .with_member(Attribute {
//!         name: "value".into(),
//!         ty: "long".into(),
//!         ..Attribute::default()
//!     });
//! iface.resolve()?;
//!
//! let mut out = Vec::new();
//! Renderer::new(RenderOptions::default()).render_interface(&iface, &mut out)?;
//! assert!(String::from_utf8(out)?.contains(" * @property value attribute long value;"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error handling
//!
//! The builder returns [`miette::Result`]; lower-level functions return
//! [`IdlError`], which implements [`miette::Diagnostic`].

pub mod compiler;
pub mod depfile;
pub mod doc_comments;
pub mod error;
pub mod import;
pub mod model;
pub mod naming;
pub mod render;
pub mod resolve;
pub mod uuid;

// Re-export the small number of public API at the crate root.
pub use compiler::{JsDoc, JsDocOutput};
pub use error::{IdlError, ParseDiagnostic};
pub use render::{RenderOptions, Renderer};
