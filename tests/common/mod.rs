// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Each test file that imports this module compiles its own copy, so not every
// function is used in every binary. Suppress the resulting dead_code warnings.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use miette::{GraphicalReportHandler, GraphicalTheme};

pub const FIXTURES: &str = "tests/fixtures";
pub const INCLUDE_DIR: &str = "tests/fixtures/include";

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(FIXTURES).join(name)
}

/// Read a golden file, normalizing `\r\n` so checkouts on Windows compare
/// equal.
pub fn load_golden(name: &str) -> String {
    let path = fixture(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {e}", path.display()))
        .replace("\r\n", "\n")
}

/// Render a diagnostic to a deterministic string: no unicode, no color, 80
/// columns.
pub fn render_diagnostic(report: &miette::Report) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::none()).with_width(80);
    let mut buf = String::new();
    handler
        .render_report(&mut buf, report.as_ref())
        .expect("render to String is infallible");
    buf
}

/// Every message in the report's cause chain, outermost first.
pub fn chain_messages(report: &miette::Report) -> Vec<String> {
    report.chain().map(|e| e.to_string()).collect()
}
