use std::path::PathBuf;

use super::interface::{ConstMember, Interface};

/// A resolved IDL document: the top-level productions of one `.idl` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub productions: Vec<Production>,
    /// Files this document depends on. Either supplied by the front end or
    /// filled by include resolution; `None` until one of the two happens.
    pub deps: Option<Vec<String>>,
}

/// A top-level production. Only interfaces produce documentation.
#[derive(Debug, Clone, PartialEq)]
pub enum Production {
    Interface(Interface),
    Const(ConstMember),
    CData(CData),
    Include(Include),
}

/// A `#include "file.idl"` production.
#[derive(Debug, Clone, PartialEq)]
pub struct Include {
    pub filename: String,
    /// Location the include was found at, once resolved.
    pub resolved: Option<PathBuf>,
}

/// A raw `%{C++ ... %}` block passed through verbatim by header generators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CData {
    pub data: String,
}

impl Document {
    pub fn new(filename: impl Into<String>) -> Self {
        Document {
            filename: filename.into(),
            productions: Vec::new(),
            deps: None,
        }
    }

    /// Iterate over the interface productions in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.productions.iter().filter_map(|p| match p {
            Production::Interface(iface) => Some(iface),
            _ => None,
        })
    }
}
