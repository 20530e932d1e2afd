use man::prelude::*;
use std::path::Path;

fn main() {
    let page = Manual::new("jatsdoc")
        .about("cat(1) for JATS XML articles — renders tables to markdown with bat")
        .flag(
            Flag::new()
                .short("-t")
                .long("--text")
                .help("Print the article's plain text instead of its tables."),
        )
        .flag(
            Flag::new()
                .short("-p")
                .long("--plain")
                .help("Force plain output (no colors, no decorations)."),
        )
        .flag(Flag::new().short("-I").long("--identify").help(
            "Treat the arguments as article identifiers and print the \
                     detected type (doi, pmid, or pmcid) and value of each, \
                     separated by a tab.",
        ))
        .flag(
            Flag::new()
                .short("-h")
                .long("--help")
                .help("Show help information."),
        )
        .arg(Arg::new("[FILE...]"))
        .custom(
            Section::new("description")
                .paragraph(
                    "jatsdoc reads full-text scientific articles and dumps their \
                     tables to the terminal as markdown. Multi-row headers with \
                     row and column spans are flattened into one header row \
                     (Group > Subgroup), footnote markers are kept, citation \
                     cross-references are removed, and table footnotes are \
                     rendered as a bulleted legend.",
                )
                .paragraph(
                    "Format is detected by content, not file extension. Tables \
                     are extracted from JATS XML (as served by PubMed Central \
                     and Europe PMC). Plain text (\\fB--text\\fR) is available \
                     for JATS XML and PDF.",
                )
                .paragraph(
                    "When stdout is a terminal, output is pretty-printed as \
                     syntax-highlighted markdown via bat(1) with paging. When \
                     piped, plain markdown is emitted.",
                )
                .paragraph(
                    "Multiple files can be specified and will be processed in \
                     order. Use \\fB-\\fR to read from stdin explicitly. Maximum \
                     input size is 256 MiB.",
                ),
        )
        .example(
            Example::new()
                .text("View the tables of an article in the terminal")
                .command("jatsdoc PMC11009113.xml"),
        )
        .example(
            Example::new()
                .text("Save the tables as markdown")
                .command("jatsdoc --plain PMC11009113.xml > tables.md"),
        )
        .example(
            Example::new()
                .text("Read from stdin")
                .command(
                    "curl -s https://www.ebi.ac.uk/europepmc/webservices/rest/PMC11009113/fullTextXML | jatsdoc",
                ),
        )
        .example(
            Example::new()
                .text("Classify identifiers")
                .command("jatsdoc --identify 10.1038/s41592-023-02085-6 38036853"),
        )
        .custom(
            Section::new("environment")
                .paragraph(
                    "\\fBRUST_LOG\\fR sets log verbosity (default \\fBwarn\\fR); \
                     \\fBdebug\\fR traces skipped tables and legend detection.",
                )
                .paragraph("\\fBBAT_THEME\\fR selects the bat theme (default \\fBansi\\fR).")
                .paragraph(
                    "jatsdoc respects the \\fBNO_COLOR\\fR environment variable. \
                     When set, colored output is suppressed even on a terminal.",
                ),
        )
        .custom(Section::new("see also").paragraph("bat(1), batdoc(1), pdftotext(1)"))
        .render();

    // Write to OUT_DIR (standard cargo output directory)
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("jatsdoc.1");
    std::fs::write(&out_path, &page).unwrap();

    // Also write to target/man/ so packaging scripts have a stable path
    // that doesn't depend on the hash-based OUT_DIR.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let man_dir = Path::new(&manifest_dir).join("target").join("man");
    std::fs::create_dir_all(&man_dir).unwrap();
    std::fs::write(man_dir.join("jatsdoc.1"), &page).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
