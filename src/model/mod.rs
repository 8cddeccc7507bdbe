// ==============================================================================
// Resolved XPIDL AST
// ==============================================================================
//
// The typed tree handed over by the IDL front end. Nothing in this crate
// parses IDL; the loader in `import.rs` builds these types from the
// resolved-AST JSON, and tests build them directly.

pub mod document;
pub mod idl;
pub mod interface;

pub use document::{CData, Document, Include, Production};
pub use idl::ToIdl;
pub use interface::{
    Attribute, ConstMember, IdlAttribute, Interface, InterfaceAttributes, Member, Method, NameMap,
    Param, ParamDirection,
};
