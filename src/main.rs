// ==============================================================================
// CLI for the XPIDL JSDoc Generator
// ==============================================================================
//
//   xpidl-jsdoc [-I DIR]... [-o OUTPUT] [-d DEPFILE] [--print-doc-comments] INPUT
//
// INPUT is the resolved-AST JSON emitted by the IDL front end. Output goes to
// stdout unless `-o` names a file; `-d` additionally writes a make-style
// dependency file and therefore needs a real output path to name as target.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use miette::Context;

use xpidl_jsdoc::depfile::write_depfile;
use xpidl_jsdoc::{IdlError, JsDoc};

const USAGE: &str = "\
Usage: xpidl-jsdoc [OPTIONS] <INPUT>

Render the interfaces of a resolved XPIDL document as JSDoc stubs.

Arguments:
  <INPUT>  Resolved-AST JSON produced by the IDL front end

Options:
  -I <DIR>              Directory to search for included files (repeatable)
  -o <OUTPUT>           Output file (default is stdout)
  -d <DEPFILE>          Generate a make dependency file (requires -o)
      --print-doc-comments
                        Copy doc comments into the generated blocks
  -h, --help            Print help
";

// ==============================================================================
// CLI Argument Definitions
// ==============================================================================

struct Cli {
    input: PathBuf,
    include_dirs: Vec<PathBuf>,
    output: Option<PathBuf>,
    depfile: Option<PathBuf>,
    print_doc_comments: bool,
}

enum Parsed {
    Run(Cli),
    Help,
}

fn parse_args() -> Result<Parsed, lexopt::Error> {
    use lexopt::prelude::*;

    let mut input = None;
    let mut include_dirs = Vec::new();
    let mut output = None;
    let mut depfile = None;
    let mut print_doc_comments = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('I') => include_dirs.push(PathBuf::from(parser.value()?)),
            Short('o') => output = Some(PathBuf::from(parser.value()?)),
            Short('d') => depfile = Some(PathBuf::from(parser.value()?)),
            Long("print-doc-comments") => print_doc_comments = true,
            Short('h') | Long("help") => return Ok(Parsed::Help),
            Value(val) if input.is_none() => input = Some(PathBuf::from(val)),
            _ => return Err(arg.unexpected()),
        }
    }

    let input = input.ok_or("missing required argument <INPUT>")?;
    // `-o -` is the explicit spelling of stdout.
    let output = output.filter(|p: &PathBuf| p.as_os_str() != "-");

    Ok(Parsed::Run(Cli {
        input,
        include_dirs,
        output,
        depfile,
        print_doc_comments,
    }))
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<ExitCode> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let cli = match parse_args() {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Help) => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return Ok(ExitCode::from(1));
        }
    };

    run(cli)?;
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> miette::Result<()> {
    if cli.depfile.is_some() && cli.output.is_none() {
        return Err(miette::Report::new(IdlError::Usage(
            "-d requires -o".to_string(),
        )));
    }

    let mut jsdoc = JsDoc::new();
    for dir in cli.include_dirs {
        jsdoc.include_dir(dir);
    }
    jsdoc.print_doc_comments(cli.print_doc_comments);

    let doc = jsdoc.load(&cli.input)?;
    let renderer = jsdoc.renderer();

    match &cli.output {
        Some(path) => {
            // The file is closed when it goes out of scope, on success and on
            // error alike.
            let mut file = File::create(path)
                .map_err(|e| IdlError::Io { source: e })
                .map_err(miette::Report::new)
                .wrap_err_with(|| format!("create {}", path.display()))?;
            renderer
                .render_document(&doc, &mut file)
                .map_err(miette::Report::new)
                .wrap_err_with(|| format!("render {}", doc.filename))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            let rendered = renderer
                .render_document(&doc, &mut stdout)
                .and_then(|()| stdout.flush().map_err(IdlError::from));
            match rendered {
                Ok(()) => {}
                // A downstream reader that closed early (`| head`) is not an
                // error.
                Err(IdlError::Io { source }) if source.kind() == io::ErrorKind::BrokenPipe => {
                    return Ok(());
                }
                Err(e) => {
                    return Err(miette::Report::new(e))
                        .wrap_err_with(|| format!("render {}", doc.filename));
                }
            }
        }
    }

    if let (Some(depfile), Some(output)) = (&cli.depfile, &cli.output) {
        let deps = doc.deps.as_deref().unwrap_or_default();
        write_depfile(depfile, &output.display().to_string(), deps)
            .map_err(miette::Report::new)
            .wrap_err_with(|| format!("write {}", depfile.display()))?;
    }

    Ok(())
}
