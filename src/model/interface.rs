use indexmap::IndexMap;

use super::document::CData;

/// Member name to member index, in declaration order.
pub type NameMap = IndexMap<String, usize>;

/// An XPIDL interface.
///
/// The name map is private to the crate: it is only ever filled by
/// [`Interface::resolve`](crate::model::Interface::resolve), so an interface
/// built by hand starts out unresolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub base: Option<String>,
    pub attributes: InterfaceAttributes,
    /// Raw `/** ... */` comments attached to the interface.
    pub doc_comments: Vec<String>,
    pub members: Vec<Member>,
    pub(crate) namemap: Option<NameMap>,
}

/// The bracketed attribute list in front of an `interface` keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterfaceAttributes {
    pub uuid: String,
    pub scriptable: bool,
    pub function: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            base: None,
            attributes: InterfaceAttributes {
                uuid: uuid.into(),
                ..InterfaceAttributes::default()
            },
            doc_comments: Vec::new(),
            members: Vec::new(),
            namemap: None,
        }
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.namemap.is_some()
    }

    pub fn namemap(&self) -> Option<&NameMap> {
        self.namemap.as_ref()
    }

    /// Look up a member by name. Returns `None` for unknown names and for
    /// unresolved interfaces.
    pub fn member(&self, name: &str) -> Option<&Member> {
        let idx = *self.namemap.as_ref()?.get(name)?;
        self.members.get(idx)
    }
}

/// A member of an interface body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Attribute(Attribute),
    Method(Method),
    Const(ConstMember),
    CData(CData),
}

impl Member {
    /// The member's declared name. Raw code blocks have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Attribute(a) => Some(&a.name),
            Member::Method(m) => Some(&m.name),
            Member::Const(c) => Some(&c.name),
            Member::CData(_) => None,
        }
    }

    /// The member's raw doc comments. Constants and code blocks carry none.
    pub fn doc_comments(&self) -> &[String] {
        match self {
            Member::Attribute(a) => &a.doc_comments,
            Member::Method(m) => &m.doc_comments,
            Member::Const(_) | Member::CData(_) => &[],
        }
    }
}

impl From<Attribute> for Member {
    fn from(a: Attribute) -> Self {
        Member::Attribute(a)
    }
}

impl From<Method> for Member {
    fn from(m: Method) -> Self {
        Member::Method(m)
    }
}

impl From<ConstMember> for Member {
    fn from(c: ConstMember) -> Self {
        Member::Const(c)
    }
}

impl From<CData> for Member {
    fn from(c: CData) -> Self {
        Member::CData(c)
    }
}

/// `[attlist] readonly attribute <type> <name>;`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    pub name: String,
    pub ty: String,
    pub readonly: bool,
    /// The bracketed attribute list, in declaration order.
    pub attributes: Vec<IdlAttribute>,
    pub doc_comments: Vec<String>,
}

impl Attribute {
    pub fn binaryname(&self) -> Option<&str> {
        find_value(&self.attributes, "binaryname")
    }

    pub fn implicit_jscontext(&self) -> bool {
        has_attribute(&self.attributes, "implicit_jscontext")
    }
}

/// `[attlist] <type> <name> (<params>) raises (<exceptions>);`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Method {
    pub name: String,
    /// Return type.
    pub ty: String,
    pub params: Vec<Param>,
    pub raises: Vec<String>,
    /// The bracketed attribute list, in declaration order.
    pub attributes: Vec<IdlAttribute>,
    pub doc_comments: Vec<String>,
}

impl Method {
    pub fn returns_void(&self) -> bool {
        self.ty == "void"
    }

    pub fn binaryname(&self) -> Option<&str> {
        find_value(&self.attributes, "binaryname")
    }

    pub fn implicit_jscontext(&self) -> bool {
        has_attribute(&self.attributes, "implicit_jscontext")
    }

    pub fn optional_argc(&self) -> bool {
        has_attribute(&self.attributes, "optional_argc")
    }

    pub fn notxpcom(&self) -> bool {
        has_attribute(&self.attributes, "notxpcom")
    }
}

fn has_attribute(attlist: &[IdlAttribute], name: &str) -> bool {
    attlist.iter().any(|a| a.name == name)
}

fn find_value<'a>(attlist: &'a [IdlAttribute], name: &str) -> Option<&'a str> {
    attlist
        .iter()
        .find(|a| a.name == name)
        .and_then(|a| a.value.as_deref())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Param {
    pub direction: ParamDirection,
    pub name: String,
    pub ty: String,
    pub attributes: Vec<IdlAttribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl ParamDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamDirection::In => "in",
            ParamDirection::Out => "out",
            ParamDirection::InOut => "inout",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(ParamDirection::In),
            "out" => Some(ParamDirection::Out),
            "inout" => Some(ParamDirection::InOut),
            _ => None,
        }
    }
}

/// One entry of a bracketed attribute list, such as `noscript` or
/// `size_is(count)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl IdlAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        IdlAttribute {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        IdlAttribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Parse `name` or `name(value)`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some((name, rest)) = s.split_once('(')
            && let Some(value) = rest.strip_suffix(')')
        {
            return IdlAttribute::with_value(name.trim(), value.trim());
        }
        IdlAttribute::new(s)
    }
}

/// `const <type> <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstMember {
    pub name: String,
    pub ty: String,
    /// The value expression as written in the IDL.
    pub value: String,
}
