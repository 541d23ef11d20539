//! ungdoc CLI - Google Docs conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use ungdoc::render::{self, HtmlRenderer, SkipTablesVisitor};
use ungdoc::{
    parse_file, ConvertOptions, Document, ExtractionStats, GoogleDocConverter, JsonFormat,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "ungdoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Google Docs documents to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input document (Docs API JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert documents to all formats (HTML, text, JSON)
    Convert {
        /// Input documents (Docs API JSON)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a document to HTML
    Html {
        /// Input document (Docs API JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit inline border styling on tables
        #[arg(long)]
        no_table_styles: bool,

        /// Open links in the same tab
        #[arg(long)]
        same_tab: bool,

        /// Leave tables out of the output
        #[arg(long)]
        skip_tables: bool,
    },

    /// Extract plain text for search indexing
    Text {
        /// Input document (Docs API JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a document to the JSON viewer payload
    Json {
        /// Input document (Docs API JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document (Docs API JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { inputs, output }) => cmd_convert(&inputs, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            no_table_styles,
            same_tab,
            skip_tables,
        }) => cmd_html(
            &input,
            output.as_deref(),
            no_table_styles,
            same_tab,
            skip_tables,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&[input], cli.output.as_deref())
            } else {
                println!("{}", "Usage: ungdoc <FILE> [OUTPUT]".yellow());
                println!("       ungdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| {
        if let [single] = inputs {
            let stem = single.file_stem().unwrap_or_default().to_string_lossy();
            PathBuf::from(format!("{}_output", stem))
        } else {
            PathBuf::from("ungdoc_output")
        }
    });

    fs::create_dir_all(&output_dir)?;
    log::debug!(
        "Converting {} document(s) into {}",
        inputs.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Converting...");

    let converter = GoogleDocConverter::new();
    let options = ConvertOptions::new().with_stats(true);
    let results: Vec<(&PathBuf, Result<Written, String>)> = inputs
        .par_iter()
        .map(|input| {
            let result = write_all_formats(&converter, input, &output_dir, &options)
                .map_err(|e| e.to_string());
            pb.inc(1);
            (input, result)
        })
        .collect();

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let mut totals = ExtractionStats::new();
    let mut failures = 0;
    for (input, result) in &results {
        match result {
            Ok(written) => {
                for (i, file) in written.files.iter().enumerate() {
                    let branch = if i + 1 == written.files.len() { "└─" } else { "├─" };
                    println!("  {} {}", branch.dimmed(), file);
                }
                totals.merge(&written.stats);
            }
            Err(e) => {
                failures += 1;
                eprintln!("  {} {}: {}", "✗".red(), input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} document(s), {} heading(s), {} table(s), {} word(s)",
        "Converted".green().bold(),
        results.len() - failures,
        totals.heading_count,
        totals.table_count,
        totals.word_count
    );

    if failures > 0 {
        return Err(format!("{} of {} documents failed", failures, inputs.len()).into());
    }
    Ok(())
}

/// Files written for one input and the statistics of its HTML rendering.
struct Written {
    files: Vec<String>,
    stats: ExtractionStats,
}

fn write_all_formats(
    converter: &GoogleDocConverter,
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> ungdoc::Result<Written> {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let results = converter.convert_all_formats(input, options)?;

    let mut written = Written {
        files: Vec::with_capacity(results.len()),
        stats: ExtractionStats::new(),
    };
    for result in results {
        let name = result.file_name(&stem);
        fs::write(output_dir.join(&name), &result.content)?;
        written.files.push(name);
        if let Some(stats) = result.stats {
            written.stats.merge(&stats);
        }
    }
    Ok(written)
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    no_table_styles: bool,
    same_tab: bool,
    skip_tables: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let options = RenderOptions::new()
        .with_table_styles(!no_table_styles)
        .with_links_in_new_tab(!same_tab);

    let mut renderer = HtmlRenderer::new(options);
    if skip_tables {
        renderer = renderer.with_visitor(SkipTablesVisitor);
    }
    let html = renderer.render(&doc);

    write_or_print(output, &html)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let text = render::extract_text(&doc);
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    print_info(input, &doc);
    Ok(())
}

fn print_info(input: &Path, doc: &Document) {
    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref id) = doc.document_id {
        println!("{}: {}", "ID".bold(), id);
    }
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref revision) = doc.revision_id {
        println!("{}: {}", "Revision".bold(), revision);
    }
    println!(
        "{}: {}",
        "Body".bold(),
        if doc.has_body() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = render::to_html_with_stats(doc, &RenderOptions::default()).stats;

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Ignored elements".bold(), stats.ignored_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    let tables: Vec<_> = doc.blocks().iter().filter_map(|b| b.as_table()).collect();
    if !tables.is_empty() {
        println!();
        println!("{}", "Tables".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for (i, table) in tables.iter().enumerate() {
            println!(
                "  {} {}: {} x {}",
                "Table".bold(),
                i + 1,
                table.row_count(),
                table.column_count()
            );
        }
    }
}

fn cmd_version() {
    println!("{} {}", "ungdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Docs conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/ungdoc".dimmed());
    println!("License: MIT");
}
