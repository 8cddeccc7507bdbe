// ==============================================================================
// IDL Self-Description
// ==============================================================================
//
// Documentable members render their own declaration back to IDL source text.
// The renderer never looks inside a member beyond its name and binary name;
// everything else reaches the output through `to_idl`.
//
// Member attribute lists are written sorted by name, so
// `[noscript, binaryname(Foo)]` always comes back as
// `[binaryname(Foo),noscript] `. Parameter attribute lists keep their
// declaration order.

use super::interface::{Attribute, IdlAttribute, Method, Param};

/// Render a declaration as IDL source text.
pub trait ToIdl {
    fn to_idl(&self) -> String;
}

impl ToIdl for Attribute {
    fn to_idl(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        format!(
            "{}{readonly}attribute {} {};",
            attlist_to_idl(&self.attributes),
            self.ty,
            self.name
        )
    }
}

impl ToIdl for Method {
    fn to_idl(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ToIdl::to_idl).collect();
        let raises = if self.raises.is_empty() {
            String::new()
        } else {
            format!(" raises ({})", self.raises.join(","))
        };

        format!(
            "{}{} {} ({}){raises};",
            attlist_to_idl(&self.attributes),
            self.ty,
            self.name,
            params.join(", ")
        )
    }
}

impl ToIdl for Param {
    fn to_idl(&self) -> String {
        format!(
            "{}{} {} {}",
            param_attlist_to_idl(&self.attributes),
            self.direction.as_str(),
            self.ty,
            self.name
        )
    }
}

fn entry_to_idl(a: &IdlAttribute) -> String {
    match &a.value {
        Some(v) => format!("{}({v})", a.name),
        None => a.name.clone(),
    }
}

fn attlist_to_idl(attlist: &[IdlAttribute]) -> String {
    if attlist.is_empty() {
        return String::new();
    }
    let mut sorted: Vec<&IdlAttribute> = attlist.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    let items: Vec<String> = sorted.into_iter().map(entry_to_idl).collect();
    format!("[{}] ", items.join(","))
}

fn param_attlist_to_idl(attlist: &[IdlAttribute]) -> String {
    if attlist.is_empty() {
        return String::new();
    }
    let items: Vec<String> = attlist.iter().map(entry_to_idl).collect();
    format!("[{}] ", items.join(", "))
}
