// ==============================================================================
// Native Name Derivation
// ==============================================================================
//
// Pure string rules mapping IDL declarations onto the identifiers a native
// implementation would use. The documentation renderer only needs the two
// `*_native_name` rules; the parameter-name rules complete the set used for
// full native signatures.

use crate::model::{Attribute, Method};

/// Uppercase the first character of an identifier, leaving the rest as is.
pub fn first_cap(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The setter/getter parameter name for an attribute: `value` -> `aValue`.
pub fn attribute_param_name(a: &Attribute) -> String {
    format!("a{}", first_cap(&a.name))
}

/// Parameter names of an attribute accessor, with the implicit JS context
/// first when requested.
pub fn attribute_param_names(a: &Attribute) -> String {
    let mut names = vec![attribute_param_name(a)];
    if a.implicit_jscontext() {
        names.insert(0, "cx".to_string());
    }
    names.join(", ")
}

/// The binary name override if set, otherwise the attribute name unchanged.
pub fn attribute_native_name(a: &Attribute) -> &str {
    a.binaryname().unwrap_or(&a.name)
}

/// The binary name override if set, otherwise the method name with its first
/// letter capitalized.
pub fn method_native_name(m: &Method) -> String {
    match m.binaryname() {
        Some(binaryname) => binaryname.to_string(),
        None => first_cap(&m.name),
    }
}

/// Argument names of a native method call, including the trailing implicit
/// arguments (`cx`, `_argc`, `_retval`).
pub fn method_param_names(m: &Method) -> String {
    let mut names: Vec<&str> = m.params.iter().map(|p| p.name.as_str()).collect();

    if m.implicit_jscontext() {
        names.push("cx");
    }
    if m.optional_argc() {
        names.push("_argc");
    }
    if !m.notxpcom() && !m.returns_void() {
        names.push("_retval");
    }

    names.join(", ")
}
