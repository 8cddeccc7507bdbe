// ==============================================================================
// Interface Renderer
// ==============================================================================
//
// Turns each resolved interface into a JSDoc block and an empty placeholder
// object:
//
//     /**
//      * Calculator IDL
//      * @typedef {Object} Calculator
//      * @property total attribute long total;
//      * @property Add void add (in long a, in long b);
//     */
//     var Calculator = {};
//
// Members are written in declaration order, straight to the sink. Constants
// and raw code blocks are not part of the callable surface and produce no
// lines. Every check that can fail runs before the first byte of an
// interface is written, so a failing interface never leaves a partial block
// behind (earlier interfaces stay written).

use std::io::Write;

use crate::doc_comments::doc_comment_lines;
use crate::error::{IdlError, Result};
use crate::model::{Document, Interface, Member, Production, ToIdl};
use crate::naming::{attribute_native_name, method_native_name};
use crate::uuid::IidParts;

/// Renderer configuration, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Re-emit the interface's and members' doc comments inside the block.
    pub print_doc_comments: bool,
}

/// Writes JSDoc stubs for the interfaces of a resolved document.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Render every interface production of `doc`, in order, separated by a
    /// blank line. Other productions are skipped.
    pub fn render_document<W: Write + ?Sized>(&self, doc: &Document, out: &mut W) -> Result<()> {
        let mut first = true;
        for production in &doc.productions {
            let Production::Interface(iface) = production else {
                continue;
            };
            self.check(iface)?;
            if !first {
                writeln!(out)?;
            }
            first = false;
            self.write_interface(iface, out)?;
        }
        Ok(())
    }

    /// Render a single interface block.
    pub fn render_interface<W: Write + ?Sized>(&self, iface: &Interface, out: &mut W) -> Result<()> {
        self.check(iface)?;
        self.write_interface(iface, out)
    }

    /// Render a whole document into a string.
    pub fn render_to_string(&self, doc: &Document) -> Result<String> {
        let mut buf = Vec::new();
        self.render_document(doc, &mut buf)?;
        // Every byte written comes from `String`s, so this never replaces anything.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn check(&self, iface: &Interface) -> Result<()> {
        if !iface.is_resolved() {
            return Err(IdlError::UnresolvedInterface {
                name: iface.name.clone(),
            });
        }
        IidParts::for_interface(iface)?;
        Ok(())
    }

    fn write_interface<W: Write + ?Sized>(&self, iface: &Interface, out: &mut W) -> Result<()> {
        let implclass = &iface.name;

        writeln!(out, "/**")?;
        writeln!(out, " * {implclass} IDL")?;
        if self.options.print_doc_comments {
            self.write_doc_comments(&iface.doc_comments, out)?;
        }
        writeln!(out, " * @typedef {{Object}} {implclass}")?;

        for member in &iface.members {
            let (native_name, member_idl) = match member {
                Member::Const(_) | Member::CData(_) => continue,
                Member::Attribute(a) => (attribute_native_name(a).to_string(), a.to_idl()),
                Member::Method(m) => (method_native_name(m), m.to_idl()),
            };
            if self.options.print_doc_comments {
                self.write_doc_comments(member.doc_comments(), out)?;
            }
            writeln!(out, " * @property {native_name} {member_idl}")?;
        }

        writeln!(out, "*/")?;
        writeln!(out, "var {implclass} = {{}};")?;
        Ok(())
    }

    fn write_doc_comments<W: Write + ?Sized>(&self, comments: &[String], out: &mut W) -> Result<()> {
        for line in comments.iter().flat_map(|c| doc_comment_lines(c)) {
            if line.is_empty() {
                writeln!(out, " *")?;
            } else {
                writeln!(out, " * {line}")?;
            }
        }
        Ok(())
    }
}
