//! `jatsdoc` — bat for JATS XML articles.
//!
//! Reads full-text articles (JATS XML from PMC / Europe PMC, or PDF) and
//! dumps their tables as markdown, or their plain text, to stdout. When
//! stdout is a terminal the output is pretty-printed as syntax-highlighted
//! markdown via `bat`; when piped, plain markdown is emitted.

use jatsdoc::error::{self, JatsdocError};
use jatsdoc::{fulltext, ArticleId, Format};

use bat::{Input, PrettyPrinter};
use is_terminal::IsTerminal;
use std::io::{self, Read, Write};
use std::process;

const USAGE: &str = "\
jatsdoc - bat for JATS XML articles (tables and full text)

Usage: jatsdoc [OPTIONS] [FILE...]
       cat FILE | jatsdoc [OPTIONS]
       jatsdoc --identify ID...

Options:
  -t, --text        Print the article's plain text instead of its tables
  -p, --plain       Force plain output (no colors, no decorations)
  -I, --identify    Classify the arguments as DOI, PMID, or PMCID
  -h, --help        Show this help

Tables are only available from JATS XML; text works for XML and PDF.
Format is detected by content, not file extension. Set RUST_LOG=debug
to trace extraction decisions and BAT_THEME to pick a theme.";

/// Maximum input file size (256 MiB). Prevents accidental OOM from
/// huge files.
const MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

/// Output mode selection.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    /// Detect automatically: pretty markdown to terminal, raw when piped.
    Auto,
    /// Never go through bat.
    Plain,
}

/// What to pull out of each article.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Extract {
    Tables,
    Text,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut mode = Mode::Auto;
    let mut extract = Extract::Tables;
    let mut identify = false;
    let mut files: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            "-t" | "--text" => extract = Extract::Text,
            "-p" | "--plain" => mode = Mode::Plain,
            "-I" | "--identify" => identify = true,
            "-" => files.push("-".to_string()),
            s if s.starts_with('-') => {
                eprintln!("jatsdoc: unknown option: {s}");
                eprintln!("{USAGE}");
                process::exit(1);
            }
            _ => files.push(arg.clone()),
        }
    }

    if identify {
        process::exit(run_identify(&files));
    }

    // No files specified → read from stdin
    if files.is_empty() {
        files.push("-".to_string());
    }

    let mut exit_code = 0;
    for (i, path) in files.iter().enumerate() {
        let (buf, filename) = if path == "-" {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("jatsdoc: stdin: {e}");
                exit_code = 1;
                continue;
            }
            (buf, "stdin".to_string())
        } else {
            match std::fs::read(path) {
                Ok(b) => (b, path.clone()),
                Err(e) => {
                    eprintln!("jatsdoc: {path}: {e}");
                    exit_code = 1;
                    continue;
                }
            }
        };

        if buf.len() > MAX_INPUT_SIZE {
            #[allow(clippy::cast_precision_loss)] // only used in error message
            let size_mib = buf.len() as f64 / (1024.0 * 1024.0);
            eprintln!(
                "jatsdoc: {filename}: too large ({size_mib:.1} MiB, max {} MiB)",
                MAX_INPUT_SIZE / (1024 * 1024),
            );
            exit_code = 1;
            continue;
        }

        let multiple = files.len() > 1;

        if let Err(e) = run(&buf, &filename, mode, extract, multiple && i > 0) {
            eprintln!("jatsdoc: {filename}: {e}");
            exit_code = 1;
        }
    }

    if exit_code != 0 {
        process::exit(exit_code);
    }
}

/// Print `kind<TAB>value` for each identifier; returns the exit code.
fn run_identify(ids: &[String]) -> i32 {
    let mut exit_code = 0;
    for raw in ids {
        match ArticleId::parse(raw) {
            Ok(id) => println!("{}\t{id}", id.kind()),
            Err(e) => {
                eprintln!("jatsdoc: {e}");
                exit_code = 1;
            }
        }
    }
    exit_code
}

fn run(
    data: &[u8],
    filename: &str,
    mode: Mode,
    extract: Extract,
    needs_separator: bool,
) -> error::Result<()> {
    let format = Format::detect(data)?;
    log::debug!("{filename}: {format} content, {} bytes", data.len());

    let content = match extract {
        Extract::Tables => {
            let tables = fulltext::extract_tables(data)?;
            if tables.is_empty() {
                log::info!("{filename}: no tables found");
                return Ok(());
            }
            tables.join("\n\n") + "\n"
        }
        Extract::Text => fulltext::extract_text(data)?,
    };

    let is_tty = io::stdout().is_terminal();
    let pretty = is_tty && mode != Mode::Plain;

    if needs_separator && !pretty {
        io::stdout().write_all(b"\n")?;
    }

    if pretty {
        pretty_print(&content, filename)?;
    } else {
        io::stdout().write_all(content.as_bytes())?;
    }

    Ok(())
}

fn pretty_print(content: &str, filename: &str) -> error::Result<()> {
    let input = Input::from_bytes(content.as_bytes())
        .name(filename)
        .title(filename);

    let theme = std::env::var("BAT_THEME").unwrap_or_else(|_| "ansi".to_string());

    PrettyPrinter::new()
        .input(input)
        .language("Markdown")
        .theme(&theme)
        .header(true)
        .line_numbers(false)
        .grid(true)
        .colored_output(true)
        .true_color(true)
        .paging_mode(bat::PagingMode::QuitIfOneScreen)
        .print()
        .map_err(|e| JatsdocError::Render(e.to_string()))?;

    Ok(())
}
