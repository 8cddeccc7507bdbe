// ==============================================================================
// Make-Style Dependency File
// ==============================================================================
//
// One rule line, `<output>: <dep> <dep> ...`, so that make rebuilds the
// documentation whenever an included IDL file changes. Dependency paths always
// use forward slashes.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Format the dependency rule for `output`.
pub fn format_depfile(output: &str, deps: &[String]) -> String {
    let deps: Vec<String> = deps.iter().map(|d| d.replace('\\', "/")).collect();
    format!("{output}: {}\n", deps.join(" "))
}

/// Write the dependency rule to `path`, creating parent directories as needed.
pub fn write_depfile(path: &Path, output: &str, deps: &[String]) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, format_depfile(output, deps))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rule_lists_deps_in_order() {
        let deps = vec!["idl/nsISupports.idl".to_string(), "idl/nsIFoo.idl".to_string()];
        assert_eq!(
            format_depfile("out/foo.js", &deps),
            "out/foo.js: idl/nsISupports.idl idl/nsIFoo.idl\n"
        );
    }

    #[test]
    fn backslashes_become_slashes() {
        let deps = vec![r"C:\src\idl\nsIFoo.idl".to_string()];
        assert_eq!(
            format_depfile("foo.js", &deps),
            "foo.js: C:/src/idl/nsIFoo.idl\n"
        );
    }

    #[test]
    fn no_deps_still_writes_a_rule() {
        assert_eq!(format_depfile("foo.js", &[]), "foo.js: \n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = Path::new("tmp/depfile-test/nested");
        let _ = fs::remove_dir_all("tmp/depfile-test");
        let path = dir.join("foo.js.pp");
        write_depfile(&path, "foo.js", &["a.idl".to_string()]).expect("write depfile");
        assert_eq!(
            fs::read_to_string(&path).expect("read depfile"),
            "foo.js: a.idl\n"
        );
    }
}
