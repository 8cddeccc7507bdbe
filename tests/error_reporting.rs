// ==============================================================================
// Error Reporting Tests
// ==============================================================================
//
// These check what the user actually sees when something goes wrong: the
// rendered `miette` diagnostic for malformed JSON (with a source snippet and
// label), and the codes, help text, and cause chains of the fatal
// `IdlError`s. Rendering goes through `GraphicalTheme::none()` so the output
// carries no color or box-drawing characters.

mod common;

use std::path::PathBuf;

use common::{INCLUDE_DIR, chain_messages, fixture, render_diagnostic};
use pretty_assertions::assert_eq;
use xpidl_jsdoc::import::{IncludeContext, load_document, parse_document};
use xpidl_jsdoc::{IdlError, JsDoc};

// ==============================================================================
// Malformed JSON
// ==============================================================================

#[test]
fn test_syntax_error_points_at_source() {
    let err = load_document(&fixture("syntax_error.json")).unwrap_err();
    let rendered = render_diagnostic(&err);

    assert!(rendered.contains("invalid resolved-AST"), "got:\n{rendered}");
    assert!(rendered.contains("syntax_error.json"), "got:\n{rendered}");
    assert!(
        rendered.contains(r#""nsIBroken" "attributes""#),
        "snippet should show the offending line, got:\n{rendered}"
    );
    assert!(rendered.contains("here"), "got:\n{rendered}");
}

#[test]
fn test_inline_syntax_error_uses_source_name() {
    let err = parse_document("{ \"productions\": [", "inline.json").unwrap_err();
    let rendered = render_diagnostic(&err);
    assert!(rendered.contains("inline.json"), "got:\n{rendered}");
}

// ==============================================================================
// Structurally Invalid Documents
// ==============================================================================

#[test]
fn test_missing_uuid_names_interface() {
    let err = parse_document(
        r#"{ "productions": [
            { "kind": "interface", "name": "nsINoUuid", "attributes": {} }
        ] }"#,
        "nouuid.json",
    )
    .unwrap_err();
    assert_eq!(
        chain_messages(&err),
        [
            "load nouuid.json",
            "production at index 0: interface `nsINoUuid` is missing required attribute 'uuid'",
        ]
    );
}

#[test]
fn test_unknown_production_kind() {
    let err = parse_document(
        r#"{ "productions": [{ "kind": "typedef", "name": "PRTime" }] }"#,
        "typedef.json",
    )
    .unwrap_err();
    let messages = chain_messages(&err);
    assert_eq!(
        messages.last().map(String::as_str),
        Some("production at index 0: unknown production kind `typedef`")
    );
}

#[test]
fn test_misspelled_member_key() {
    let err = parse_document(
        r#"{ "productions": [{
            "kind": "interface", "name": "nsITypo",
            "attributes": { "uuid": "00000000-0000-0000-c000-000000000046" },
            "members": [{ "kind": "attribute", "name": "x", "type": "long", "readOnly": true }]
        }] }"#,
        "typo.json",
    )
    .unwrap_err();
    assert_eq!(
        chain_messages(&err).last().map(String::as_str),
        Some(
            "production at index 0: member at index 0 of interface `nsITypo`: \
             unknown key `readOnly` in attribute `x`"
        )
    );
}

#[test]
fn test_duplicate_member_chain() {
    let err = JsDoc::new()
        .generate_str_named(
            r#"{ "filename": "nsIDup.idl", "productions": [{
                "kind": "interface", "name": "nsIDup",
                "attributes": { "uuid": "00000000-0000-0000-c000-000000000046" },
                "members": [
                    { "kind": "attribute", "name": "count", "type": "long" },
                    { "kind": "attribute", "name": "count", "type": "long" }
                ]
            }] }"#,
            "nsIDup.json",
        )
        .unwrap_err();
    assert_eq!(
        chain_messages(&err),
        [
            "resolve nsIDup.idl",
            "name `count` specified twice in interface `nsIDup`",
        ]
    );
}

// ==============================================================================
// Fatal Render Errors
// ==============================================================================

#[test]
fn test_malformed_uuid_chain() {
    let jsdoc = JsDoc::new();
    let err = jsdoc.generate(fixture("bad_uuid.json")).unwrap_err();
    assert_eq!(
        chain_messages(&err),
        [
            "render nsIMixed.idl",
            "interface `nsIBroken` has a malformed uuid: `not-a-uuid`",
        ]
    );
}

#[test]
fn test_malformed_uuid_diagnostic() {
    let err = miette::Report::new(IdlError::MalformedUuid {
        interface: "nsIBroken".to_string(),
        uuid: "not-a-uuid".to_string(),
    });
    let rendered = render_diagnostic(&err);
    assert!(rendered.contains("xpidl_jsdoc::malformed_uuid"), "got:\n{rendered}");
    assert!(rendered.contains("help:"), "got:\n{rendered}");
    assert!(rendered.contains("8-4-4-4-12"), "got:\n{rendered}");
}

#[test]
fn test_include_not_found_lists_search_path() {
    let context = IncludeContext::new(vec![PathBuf::from(INCLUDE_DIR)]);
    let err = context.resolve_include("nsINowhere.idl").unwrap_err();
    assert_eq!(err.to_string(), "include file not found: nsINowhere.idl");

    let rendered = render_diagnostic(&miette::Report::new(err));
    assert!(
        rendered.contains("xpidl_jsdoc::include_not_found"),
        "got:\n{rendered}"
    );
    assert!(
        rendered.contains("searched: ., tests/fixtures/include"),
        "got:\n{rendered}"
    );
}

#[test]
fn test_unreadable_input_names_path() {
    let err = load_document(&fixture("does-not-exist.json")).unwrap_err();
    let messages = chain_messages(&err);
    assert_eq!(messages[0], "read tests/fixtures/does-not-exist.json");
    assert_eq!(messages.len(), 3, "context, IdlError::Io, io::Error: {messages:?}");
}
