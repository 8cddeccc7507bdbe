// ==============================================================================
// Doc-Comment Cleanup
// ==============================================================================
//
// The front end hands doc comments over raw, delimiters and all:
//
//     /**
//      * Adds two numbers.
//      */
//
// Before they can be re-emitted inside a JSDoc block they need the `/**` and
// `*/` delimiters removed and the leading star (or whitespace) column
// stripped, otherwise the output would contain nested comment markers.

/// Turn one raw `/** ... */` comment into its plain text lines.
///
/// Any `*/` left in the text is written as `*\/` so it cannot close the
/// enclosing JSDoc block. Returns no lines for an empty comment.
pub fn doc_comment_lines(raw: &str) -> Vec<String> {
    let inner = raw
        .trim()
        .strip_prefix("/**")
        .and_then(|s| s.strip_suffix("*/"))
        .unwrap_or(raw);
    let trimmed = inner.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    strip_indents(trimmed)
        .lines()
        .map(|line| line.trim_end().replace("*/", "*\\/"))
        .collect()
}

/// Strip the common indentation of a doc comment body.
///
/// Star-prefixed bodies (every line after the first starts with `*` once
/// leading whitespace is removed) lose the star column; otherwise the common
/// leading whitespace of the continuation lines is removed.
pub fn strip_indents(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();

    if let Some(stripped) = strip_star_column(&lines) {
        return stripped;
    }
    if let Some(stripped) = strip_common_whitespace(&lines) {
        return stripped;
    }
    strip_star(body).to_string()
}

fn strip_star(line: &str) -> &str {
    let rest = line.strip_prefix('*').unwrap_or(line);
    rest.strip_prefix(' ').unwrap_or(rest)
}

fn strip_star_column(lines: &[&str]) -> Option<String> {
    if lines.len() < 2 || !lines[0].starts_with('*') {
        return None;
    }
    let continuation_starred = lines[1..].iter().all(|line| {
        let trimmed = line.trim_start();
        trimmed.is_empty() || trimmed.starts_with('*')
    });
    if !continuation_starred {
        return None;
    }

    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| strip_star(line.trim_start()))
        .collect();
    Some(stripped.join("\n"))
}

fn strip_common_whitespace(lines: &[&str]) -> Option<String> {
    if lines.len() < 2 {
        return None;
    }

    let indent = lines[1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(common_prefix)?;
    if indent.is_empty() {
        return None;
    }

    let mut out = vec![lines[0]];
    out.extend(
        lines[1..]
            .iter()
            .map(|line| line.strip_prefix(indent).unwrap_or(line)),
    );
    Some(out.join("\n"))
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len: usize = a
        .chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(c, _)| c.len_utf8())
        .sum();
    &a[..len]
}
