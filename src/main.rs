use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output encoding for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Count distinct URLs after normalizing them into a canonical form.
#[derive(Debug, Parser)]
#[command(name = "urlcount", version, about)]
struct Cli {
    /// Files with one URL per line; reads stdin when omitted or `-`
    files: Vec<PathBuf>,

    /// Group counts by top-level domain (last two domain labels)
    #[arg(long, env = "URLCOUNT_PER_TLD")]
    per_tld: bool,

    /// Print the distinct canonical URLs instead of their count
    #[arg(long, conflicts_with = "per_tld")]
    list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "URLCOUNT_FORMAT")]
    format: OutputFormat,

    /// Log rejected URLs and summaries to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let urls = read_urls(&cli.files)?;
    info!(count = urls.len(), "read urls");

    let output = render(&cli, &urls)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes()).context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_urls(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        return read_lines(io::stdin().lock()).context("failed to read stdin");
    }

    let mut urls = Vec::new();
    for path in files {
        if path.as_os_str() == "-" {
            urls.extend(read_lines(io::stdin().lock()).context("failed to read stdin")?);
            continue;
        }

        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let lines = read_lines(BufReader::new(file))
            .with_context(|| format!("failed to read {}", path.display()))?;
        urls.extend(lines);
    }

    Ok(urls)
}

/// Read one URL per line, trimming whitespace and skipping blank lines.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let url = line.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

fn render(cli: &Cli, urls: &[String]) -> Result<String> {
    let mut out = String::new();

    if cli.per_tld {
        let counts = urlcount::count_unique_urls_per_tld(urls);
        match cli.format {
            OutputFormat::Text => {
                for (tld, count) in &counts {
                    writeln!(out, "{}\t{}", tld, count)?;
                }
            }
            OutputFormat::Json => {
                out.push_str(&serde_json::to_string_pretty(&counts)?);
                out.push('\n');
            }
        }
    } else if cli.list {
        let unique = urlcount::unique_urls(urls);
        match cli.format {
            OutputFormat::Text => {
                for url in &unique {
                    out.push_str(url);
                    out.push('\n');
                }
            }
            OutputFormat::Json => {
                out.push_str(&serde_json::to_string_pretty(&unique)?);
                out.push('\n');
            }
        }
    } else {
        let count = urlcount::count_unique_urls(urls);
        match cli.format {
            OutputFormat::Text => writeln!(out, "{}", count)?,
            OutputFormat::Json => {
                out.push_str(&serde_json::json!({ "unique": count }).to_string());
                out.push('\n');
            }
        }
    }

    Ok(out)
}
