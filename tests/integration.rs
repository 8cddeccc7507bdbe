// ==============================================================================
// Integration Tests: Render Resolved-AST Fixtures Through the Library API
// ==============================================================================
//
// Each test loads a fixture from `tests/fixtures`, runs it through the same
// load -> resolve -> render pipeline the CLI uses, and compares the result
// against a golden `.js` file or an `insta` snapshot.

mod common;

use common::{INCLUDE_DIR, chain_messages, fixture, load_golden};
use pretty_assertions::assert_eq;
use xpidl_jsdoc::model::{Attribute, Document, Interface, Method, Production};
use xpidl_jsdoc::{IdlError, JsDoc, RenderOptions, Renderer};

// ==============================================================================
// Golden Output
// ==============================================================================

#[test]
fn test_calculator_matches_golden() {
    let output = JsDoc::new()
        .include_dir(INCLUDE_DIR)
        .generate(fixture("nsICalculator.json"))
        .expect("nsICalculator.json renders");
    assert_eq!(output.text, load_golden("nsICalculator.js"));
    assert_eq!(output.deps, ["tests/fixtures/include/nsISupports.idl"]);
}

#[test]
fn test_calculator_with_doc_comments() {
    let output = JsDoc::new()
        .include_dir(INCLUDE_DIR)
        .print_doc_comments(true)
        .generate(fixture("nsICalculator.json"))
        .expect("nsICalculator.json renders");
    insta::assert_snapshot!("calculator_doc_comments", output.text);
}

/// The worked example: one method, one attribute, no overrides.
#[test]
fn test_minimal_calculator_block() {
    let mut iface = Interface::new("Calculator", "8a7a4c1e-2b7e-4f3d-9c6a-0d1e2f3a4b5c")
        .with_member(Attribute {
            name: "total".into(),
            ty: "long".into(),
            ..Attribute::default()
        })
        .with_member(Method {
            name: "add".into(),
            ty: "void".into(),
            ..Method::default()
        });
    iface.resolve().expect("resolves");

    let mut out = Vec::new();
    Renderer::new(RenderOptions::default())
        .render_interface(&iface, &mut out)
        .expect("renders");
    insta::assert_snapshot!("minimal_calculator", String::from_utf8(out).expect("utf-8"));
}

// ==============================================================================
// Structural Properties
// ==============================================================================

#[test]
fn test_one_block_per_interface_and_one_line_per_member() {
    let jsdoc = JsDoc::new().include_dir(INCLUDE_DIR).clone();
    let doc = jsdoc.load(fixture("nsICalculator.json")).expect("loads");
    let output = jsdoc.generate(fixture("nsICalculator.json")).expect("renders");

    let interfaces: Vec<&Interface> = doc.interfaces().collect();
    assert_eq!(output.text.matches("/**\n").count(), interfaces.len());
    assert_eq!(output.text.matches("\n*/\n").count(), interfaces.len());

    let documentable = interfaces
        .iter()
        .flat_map(|i| &i.members)
        .filter(|m| {
            matches!(
                m,
                xpidl_jsdoc::model::Member::Attribute(_) | xpidl_jsdoc::model::Member::Method(_)
            )
        })
        .count();
    assert_eq!(output.text.matches(" * @property ").count(), documentable);
    assert_eq!(documentable, 6);
}

#[test]
fn test_rendering_twice_is_identical() {
    let jsdoc = JsDoc::new().include_dir(INCLUDE_DIR).clone();
    let first = jsdoc.generate(fixture("nsICalculator.json")).expect("first");
    let second = jsdoc.generate(fixture("nsICalculator.json")).expect("second");
    assert_eq!(first.text, second.text);
    assert_eq!(first.deps, second.deps);
}

#[test]
fn test_consts_and_cdata_only_render_nothing() {
    let output = JsDoc::new()
        .generate(fixture("consts_only.json"))
        .expect("renders");
    assert_eq!(output.text, "");
    assert!(output.deps.is_empty());
}

// ==============================================================================
// Include Resolution
// ==============================================================================

#[test]
fn test_include_relative_to_working_directory() {
    let output = JsDoc::new()
        .generate(fixture("cwd_include.json"))
        .expect("include found from the working directory");
    assert_eq!(output.deps, ["tests/fixtures/include/nsISupports.idl"]);
    assert!(output.text.contains(" * @property value attribute long value;\n"));
}

#[test]
fn test_resolver_deps_are_used_as_is() {
    // nsISupports.idl is on no search path: the supplied list wins and no
    // include is searched for.
    let output = JsDoc::new()
        .generate(fixture("resolver_deps.json"))
        .expect("renders without include search");
    assert_eq!(
        output.deps,
        ["dist/idl/nsISupports.idl", "dist/idl/nsrootidl.idl"]
    );
    assert!(output.text.contains(" * @property ready readonly attribute boolean ready;\n"));
}

#[test]
fn test_member_attributes_round_trip() {
    let output = JsDoc::new()
        .include_dir(INCLUDE_DIR)
        .generate(fixture("nsICalculator.json"))
        .expect("nsICalculator.json renders");
    assert!(output.text.contains(
        " * @property DisplayLabel [binaryname(DisplayLabel),noscript] attribute AString label;\n"
    ));
    assert!(output.text.contains(" * @property Evaluate [implicit_jscontext,must_use] long evaluate "));
}

#[test]
fn test_include_requires_search_dir() {
    let err = JsDoc::new()
        .generate(fixture("nsICalculator.json"))
        .unwrap_err();
    let messages = chain_messages(&err);
    assert!(
        messages
            .iter()
            .any(|m| m == "include file not found: nsISupports.idl"),
        "got: {messages:?}"
    );
}

// ==============================================================================
// Fatal Errors Stop Rendering
// ==============================================================================

#[test]
fn test_malformed_uuid_keeps_earlier_blocks() {
    let jsdoc = JsDoc::new();
    let doc = jsdoc.load(fixture("bad_uuid.json")).expect("loads");

    let mut out = Vec::new();
    let err = jsdoc.render_to(&doc, &mut out).unwrap_err();
    let messages = chain_messages(&err);
    assert!(
        messages
            .iter()
            .any(|m| m == "interface `nsIBroken` has a malformed uuid: `not-a-uuid`"),
        "got: {messages:?}"
    );

    let written = String::from_utf8(out).expect("utf-8");
    assert_eq!(
        written,
        "/**\n * nsIGood IDL\n * @typedef {Object} nsIGood\n * @property Ping void ping ();\n*/\nvar nsIGood = {};\n"
    );
}

#[test]
fn test_unresolved_interface_is_rejected() {
    let mut resolved = Interface::new("nsIFirst", "1f2e3d4c-5b6a-4978-8695-a4b3c2d1e0f9");
    resolved.resolve().expect("resolves");
    let unresolved = Interface::new("nsISecond", "2f2e3d4c-5b6a-4978-8695-a4b3c2d1e0f9");

    let mut doc = Document::new("handmade.idl");
    doc.productions.push(Production::Interface(resolved));
    doc.productions.push(Production::Interface(unresolved));

    let mut out = Vec::new();
    let err = Renderer::default()
        .render_document(&doc, &mut out)
        .unwrap_err();
    assert!(
        matches!(err, IdlError::UnresolvedInterface { ref name } if name == "nsISecond"),
        "got: {err:?}"
    );
    let written = String::from_utf8(out).expect("utf-8");
    assert!(written.ends_with("var nsIFirst = {};\n"));
    assert!(!written.contains("nsISecond"));
}
