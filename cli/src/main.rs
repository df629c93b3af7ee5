//! mdpdf CLI - Markdown to minimal PDF converter

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use mdpdf::{convert_file, format_file, inspect_file, ConvertOptions, FormatOptions, PageLayout};

/// Default markup source when no input is given.
const DEFAULT_INPUT: &str = "content/resume/resume.md";

/// Default PDF destination when no output is given.
const DEFAULT_OUTPUT: &str = "static/resume/resume.pdf";

#[derive(Parser)]
#[command(name = "mdpdf")]
#[command(version)]
#[command(about = "Convert flat Markdown into a minimal, text-extractable PDF", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to PDF
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Print the conversion report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the formatted lines without writing a PDF
    Lines {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Maximum characters per line
        #[arg(long, default_value_t = mdpdf::format::DEFAULT_WRAP_WIDTH)]
        wrap_width: usize,
    },

    /// Check a generated PDF and show its structure
    Info {
        /// PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct LayoutArgs {
    /// Maximum characters per line
    #[arg(long, default_value_t = mdpdf::format::DEFAULT_WRAP_WIDTH)]
    wrap_width: usize,

    /// Font size in points
    #[arg(long)]
    font_size: Option<u32>,

    /// Distance between baselines in points
    #[arg(long)]
    line_height: Option<u32>,

    /// Left and top margin in points
    #[arg(long)]
    margin: Option<u32>,

    /// Use A4 paper instead of US Letter
    #[arg(long)]
    a4: bool,
}

impl LayoutArgs {
    fn to_options(&self) -> ConvertOptions {
        let mut layout = if self.a4 {
            PageLayout::a4()
        } else {
            PageLayout::letter()
        };
        if let Some(size) = self.font_size {
            layout = layout.with_font_size(size);
        }
        if let Some(height) = self.line_height {
            layout = layout.with_line_height(height);
        }
        if let Some(margin) = self.margin {
            layout = layout.with_margins(margin, margin);
        }

        ConvertOptions::new()
            .with_layout(layout)
            .with_wrap_width(self.wrap_width)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            layout,
            json,
        }) => {
            let output = output.unwrap_or_else(|| input.with_extension("pdf"));
            cmd_convert(&input, &output, &layout.to_options(), json)
        }
        Some(Commands::Lines { input, wrap_width }) => cmd_lines(&input, wrap_width),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            cmd_convert(&input, &output, &ConvertOptions::default(), false)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Converting {} -> {}", input.display(), output.display());
    let report = convert_file(input, output, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.to_string().green());
    if report.dropped_chars > 0 {
        println!(
            "{} {} character(s) had no Latin-1 form and were dropped",
            "Warning:".yellow().bold(),
            report.dropped_chars
        );
    }

    Ok(())
}

fn cmd_lines(input: &Path, wrap_width: usize) -> Result<(), Box<dyn std::error::Error>> {
    if wrap_width == 0 {
        return Err("wrap width must be positive".into());
    }
    let options = FormatOptions::new().with_wrap_width(wrap_width);
    let lines = format_file(input, &options)?;

    for line in &lines {
        println!("{}", line);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = inspect_file(input)?;

    if json {
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), summary.version);
    println!("{}: {}", "Pages".bold(), summary.page_count);
    println!("{}: {}", "Objects".bold(), summary.object_count);
    println!("{}: {}", "Size".bold(), summary.byte_size);
    println!("{}: {}", "Xref offset".bold(), summary.xref_offset);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to minimal PDF converter");
    println!();
    println!("License: MIT");
}
