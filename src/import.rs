// ==============================================================================
// Resolved-AST Loading and Include Resolution
// ==============================================================================
//
// The IDL front end runs out of process and hands its resolved tree over as
// JSON. This module:
//   - `parse_document` / `load_document`: convert that JSON into the `model`
//     types, reporting syntax errors with a source span;
//   - `IncludeContext`: locate the files named by `include` productions and
//     record them as document dependencies.
//
// The front end normally ships the full dependency list (transitive includes
// included) as `deps`, and it is used as is. Include search is the fallback
// for documents without one: it only finds files, mirroring xpidl's order of
// the bare name first, then each include directory. The included IDL is never
// read.

use std::path::{Path, PathBuf};

use miette::{Context, NamedSource};
use serde_json::{Map, Value};

use crate::error::{IdlError, ParseDiagnostic, Result};
use crate::model::{
    Attribute, CData, ConstMember, Document, IdlAttribute, Include, Interface, Member, Method,
    Param, ParamDirection, Production,
};

/// Parse JSON with C-style comment stripping (`//` and `/* */`).
///
/// Hand-maintained fixtures tend to carry comments; the stripper blanks them
/// out in place, so line and column numbers in errors stay accurate.
fn parse_json_with_comments(input: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_reader(
        json_comments::CommentSettings::c_style().strip_comments(input.as_bytes()),
    )
}

// ==============================================================================
// Include Context: Search Paths
// ==============================================================================

/// Search directories for `include` productions.
pub struct IncludeContext {
    pub include_dirs: Vec<PathBuf>,
}

impl IncludeContext {
    pub fn new(include_dirs: Vec<PathBuf>) -> Self {
        IncludeContext { include_dirs }
    }

    /// Locate an included file. Searches:
    /// 1. `filename` as given, relative to the working directory
    /// 2. In each include directory, in order
    pub fn resolve_include(&self, filename: &str) -> Result<PathBuf> {
        let bare = PathBuf::from(filename);
        if bare.is_file() {
            return Ok(bare);
        }

        for dir in &self.include_dirs {
            let candidate = dir.join(filename);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let mut searched = vec![PathBuf::from(".")];
        searched.extend(self.include_dirs.iter().cloned());
        Err(IdlError::IncludeNotFound {
            filename: filename.to_string(),
            searched,
        })
    }

    /// Fill `doc.deps` with the located `include` files, in include order.
    ///
    /// A dependency list supplied by the front end already covers transitive
    /// includes and is kept as is; nothing is searched in that case.
    pub fn resolve_includes(&self, doc: &mut Document) -> Result<()> {
        if doc.deps.is_some() {
            return Ok(());
        }
        let mut deps = Vec::new();
        for production in &mut doc.productions {
            let Production::Include(include) = production else {
                continue;
            };
            let path = self.resolve_include(&include.filename)?;
            deps.push(path.display().to_string());
            include.resolved = Some(path);
        }
        doc.deps = Some(deps);
        Ok(())
    }
}

// ==============================================================================
// Document Loading
// ==============================================================================

/// Read and convert a resolved-AST JSON file.
pub fn load_document(path: &Path) -> miette::Result<Document> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| IdlError::Io { source: e })
        .map_err(miette::Report::new)
        .wrap_err_with(|| format!("read {}", path.display()))?;
    parse_document(&source, &path.display().to_string())
}

/// Convert resolved-AST JSON text into a [`Document`]. `source_name` is used in
/// diagnostics and as the fallback document filename.
pub fn parse_document(source: &str, source_name: &str) -> miette::Result<Document> {
    let json = parse_json_with_comments(source).map_err(|e| {
        let offset = line_col_to_offset(source, e.line(), e.column());
        let span_len = usize::from(offset < source.len());
        miette::Report::new(ParseDiagnostic {
            src: NamedSource::new(source_name, source.to_string()),
            span: (offset, span_len).into(),
            message: format!("invalid resolved-AST JSON: {e}"),
            label: Some("here".to_string()),
            help: None,
        })
    })?;

    json_to_document(&json, source_name)
        .map_err(miette::Report::new)
        .wrap_err_with(|| format!("load {source_name}"))
}

/// Map serde_json's 1-based line/column to a byte offset, clamped to the
/// source length.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

// ==============================================================================
// JSON -> Model Conversion
// ==============================================================================

fn json_to_document(json: &Value, source_name: &str) -> Result<Document> {
    let obj = as_object(json, "document")?;
    reject_unknown_keys(obj, "document", &["filename", "productions", "deps"])?;
    let filename = match obj.get("filename") {
        Some(v) => as_str(v, "document `filename`")?.to_string(),
        None => source_name.to_string(),
    };

    let mut doc = Document::new(filename);
    doc.deps = match obj.get("deps") {
        None | Some(Value::Null) => None,
        Some(_) => Some(string_array(obj, "deps")?),
    };
    for (i, production) in array_field(obj, "productions")?.iter().enumerate() {
        let production = json_to_production(production)
            .map_err(|e| IdlError::Load(format!("production at index {i}: {e}")))?;
        doc.productions.push(production);
    }
    Ok(doc)
}

fn json_to_production(json: &Value) -> Result<Production> {
    let obj = as_object(json, "production")?;
    match required_str(obj, "kind")? {
        "interface" => json_to_interface(obj).map(Production::Interface),
        "const" => json_to_const(obj).map(Production::Const),
        "cdata" => json_to_cdata(obj).map(Production::CData),
        "include" => json_to_include(obj).map(Production::Include),
        other => Err(IdlError::Load(format!("unknown production kind `{other}`"))),
    }
}

fn json_to_include(obj: &Map<String, Value>) -> Result<Include> {
    reject_unknown_keys(obj, "include", &["kind", "filename"])?;
    Ok(Include {
        filename: required_str(obj, "filename")?.to_string(),
        resolved: None,
    })
}

fn json_to_interface(obj: &Map<String, Value>) -> Result<Interface> {
    let name = required_str(obj, "name")?.to_string();
    reject_unknown_keys(
        obj,
        &format!("interface `{name}`"),
        &["kind", "name", "base", "attributes", "doccomments", "members"],
    )?;

    let attrs = obj
        .get("attributes")
        .ok_or_else(|| IdlError::Load(format!("interface `{name}` missing 'attributes'")))?;
    // Only these interface attributes are read; the rest never reach the
    // output.
    let attrs = as_object(attrs, "interface attributes")?;
    let uuid = required_str(attrs, "uuid").map_err(|_| {
        IdlError::Load(format!(
            "interface `{name}` is missing required attribute 'uuid'"
        ))
    })?;

    let mut iface = Interface::new(name, uuid);
    iface.base = optional_str(obj, "base")?;
    iface.attributes.scriptable = flag(attrs, "scriptable")?;
    iface.attributes.function = flag(attrs, "function")?;
    iface.doc_comments = string_array(obj, "doccomments")?;

    for (i, member) in array_field(obj, "members")?.iter().enumerate() {
        let member = json_to_member(member).map_err(|e| {
            IdlError::Load(format!("member at index {i} of interface `{}`: {e}", iface.name))
        })?;
        iface.members.push(member);
    }
    Ok(iface)
}

fn json_to_member(json: &Value) -> Result<Member> {
    let obj = as_object(json, "member")?;
    match required_str(obj, "kind")? {
        "attribute" => json_to_attribute(obj).map(Member::Attribute),
        "method" => json_to_method(obj).map(Member::Method),
        "const" => json_to_const(obj).map(Member::Const),
        "cdata" => json_to_cdata(obj).map(Member::CData),
        other => Err(IdlError::Load(format!("unknown member kind `{other}`"))),
    }
}

fn json_to_attribute(obj: &Map<String, Value>) -> Result<Attribute> {
    let name = required_str(obj, "name")?.to_string();
    reject_unknown_keys(
        obj,
        &format!("attribute `{name}`"),
        &["kind", "name", "type", "readonly", "attributes", "doccomments"],
    )?;
    Ok(Attribute {
        ty: required_str(obj, "type")?.to_string(),
        readonly: flag(obj, "readonly")?,
        attributes: attlist(obj)?,
        doc_comments: string_array(obj, "doccomments")?,
        name,
    })
}

fn json_to_method(obj: &Map<String, Value>) -> Result<Method> {
    let name = required_str(obj, "name")?.to_string();
    reject_unknown_keys(
        obj,
        &format!("method `{name}`"),
        &["kind", "name", "type", "params", "raises", "attributes", "doccomments"],
    )?;
    let params = array_field(obj, "params")?
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json_to_param(p).map_err(|e| {
                IdlError::Load(format!("param at index {i} of method `{name}`: {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Method {
        ty: required_str(obj, "type")?.to_string(),
        params,
        raises: string_array(obj, "raises")?,
        attributes: attlist(obj)?,
        doc_comments: string_array(obj, "doccomments")?,
        name,
    })
}

fn json_to_param(json: &Value) -> Result<Param> {
    let obj = as_object(json, "param")?;
    reject_unknown_keys(obj, "param", &["direction", "type", "name", "attributes"])?;
    let direction = match obj.get("direction") {
        None => ParamDirection::In,
        Some(v) => {
            let s = as_str(v, "param `direction`")?;
            ParamDirection::parse(s).ok_or_else(|| {
                IdlError::Load(format!(
                    "invalid param direction `{s}` (expected `in`, `out`, or `inout`)"
                ))
            })?
        }
    };
    Ok(Param {
        direction,
        name: required_str(obj, "name")?.to_string(),
        ty: required_str(obj, "type")?.to_string(),
        attributes: attlist(obj)?,
    })
}

fn json_to_const(obj: &Map<String, Value>) -> Result<ConstMember> {
    reject_unknown_keys(obj, "const", &["kind", "name", "type", "value"])?;
    let value = match obj.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(IdlError::Load(format!(
                "const `value` must be a string or number, got {other}"
            )));
        }
        None => return Err(IdlError::Load("const missing 'value'".to_string())),
    };
    Ok(ConstMember {
        name: required_str(obj, "name")?.to_string(),
        ty: required_str(obj, "type")?.to_string(),
        value,
    })
}

fn json_to_cdata(obj: &Map<String, Value>) -> Result<CData> {
    reject_unknown_keys(obj, "cdata", &["kind", "data"])?;
    Ok(CData {
        data: optional_str(obj, "data")?.unwrap_or_default(),
    })
}

// ==============================================================================
// Helpers
// ==============================================================================

fn as_object<'a>(json: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    json.as_object()
        .ok_or_else(|| IdlError::Load(format!("{what} must be a JSON object, got {json}")))
}

fn as_str<'a>(json: &'a Value, what: &str) -> Result<&'a str> {
    json.as_str()
        .ok_or_else(|| IdlError::Load(format!("{what} must be a string, got {json}")))
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match obj.get(key) {
        Some(v) => as_str(v, &format!("`{key}`")),
        None => Err(IdlError::Load(format!("missing '{key}'"))),
    }
}

/// An optional string field. `null` counts as absent.
fn optional_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => as_str(v, &format!("`{key}`")).map(|s| Some(s.to_string())),
    }
}

/// A boolean flag, `false` when absent.
fn flag(obj: &Map<String, Value>, key: &str) -> Result<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(IdlError::Load(format!(
            "`{key}` must be a boolean, got {other}"
        ))),
    }
}

/// An array field, empty when absent.
fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a [Value]> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(IdlError::Load(format!(
            "`{key}` must be an array, got {other}"
        ))),
    }
}

/// The `attributes` array of a member or param: `"name"` or `"name(value)"`
/// entries, kept in declaration order.
fn attlist(obj: &Map<String, Value>) -> Result<Vec<IdlAttribute>> {
    string_array(obj, "attributes")?
        .iter()
        .map(|entry| {
            let attr = IdlAttribute::parse(entry);
            if attr.name.is_empty() || attr.name.contains(['(', ')', ' ']) {
                return Err(IdlError::Load(format!("malformed attribute `{entry}`")));
            }
            Ok(attr)
        })
        .collect()
}

/// Keys outside `known` are most likely typos; refuse them rather than drop
/// them silently.
fn reject_unknown_keys(obj: &Map<String, Value>, what: &str, known: &[&str]) -> Result<()> {
    match obj.keys().find(|k| !known.contains(&k.as_str())) {
        Some(key) => Err(IdlError::Load(format!("unknown key `{key}` in {what}"))),
        None => Ok(()),
    }
}

fn string_array(obj: &Map<String, Value>, key: &str) -> Result<Vec<String>> {
    array_field(obj, key)?
        .iter()
        .map(|v| as_str(v, &format!("`{key}` entry")).map(str::to_string))
        .collect()
}
