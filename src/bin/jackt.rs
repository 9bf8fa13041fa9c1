//! Command-line interface for the Jack tokenizer
//! This binary tokenizes a .jack file and writes the token stream as XML
//! (or JSON) next to the input.
//!
//! Usage:
//!   jackt `<path>` [--format `<format>`] [--output `<path>`]
//!   jackt                      - prompt for the input path interactively
//!
//! The default output path follows the nand2tetris convention: `Main.jack`
//! produces `MainT.xml` in the same directory. Invalid tokens are reported
//! on stderr with line numbers and do not fail the run.

use clap::{Arg, Command};
use jack_tokenizer::jack::{emitter, pipeline};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn main() {
    let command = Command::new("jackt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tokenizer for the Jack language")
        .arg(
            Arg::new("path")
                .help("Path to the .jack file (prompted for interactively if absent)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'xml' or 'json'")
                .default_value("xml"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output path ('-' for stdout; default: <input stem>T.<ext> next to the input)"),
        );

    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            if e.use_stderr() {
                std::process::exit(1);
            }
            return;
        }
    };

    let input = match matches.get_one::<String>("path") {
        Some(path) => path.clone(),
        None => prompt_for_path(),
    };
    let format = matches.get_one::<String>("format").unwrap();
    let output = matches.get_one::<String>("output");

    let source = std::fs::read_to_string(&input).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", input, e);
        std::process::exit(1);
    });

    let result = pipeline::tokenize_source(&source);
    for diagnostic in &result.diagnostics {
        eprintln!("{}: {}", input, diagnostic);
    }

    let (rendered, extension) = match format.as_str() {
        "xml" => (emitter::render_xml(&result.tokens), "xml"),
        "json" => {
            let json = emitter::render_json(&result.tokens).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            });
            (json, "json")
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: xml, json");
            std::process::exit(1);
        }
    };

    match output.map(String::as_str) {
        Some("-") => print!("{}", rendered),
        Some(path) => write_output(Path::new(path), &rendered),
        None => write_output(&derived_output_path(Path::new(&input), extension), &rendered),
    }
}

/// Ask for the input path on stdin when no argument was given.
fn prompt_for_path() -> String {
    print!("Enter the path to the .jack file: ");
    let _ = io::stdout().flush();
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });
    buffer.trim().to_string()
}

/// Derive the output path: input stem + 'T' + the format's extension, in the
/// input's directory (`Main.jack` -> `MainT.xml`).
fn derived_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}T.{}", stem, extension))
}

fn write_output(path: &Path, rendered: &str) {
    std::fs::write(path, rendered).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {}", path.display(), e);
        std::process::exit(1);
    });
}
