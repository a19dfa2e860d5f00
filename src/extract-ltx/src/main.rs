use std::path::{Path, PathBuf};

use clap::Parser;
use extract_ltx::{ExtractorOptions, SiteExtractor, render_condensed, render_full, setup_logging};

#[derive(Parser)]
#[command(name = "extract-llmstxt")]
#[command(about = "Generate llms.txt and llms-full.txt from a built documentation site", long_about = None)]
struct ExtractCli {
    /// Path to the built site directory
    #[arg(long, default_value = "_site")]
    site_dir: PathBuf,

    /// Base URL for the documentation
    #[arg(long, default_value = "https://docs.trustgraph.ai", value_parser = validate_url)]
    base_url: String,

    /// Output directory for the generated files
    #[arg(long, default_value = ".", value_parser = validate_output_dir)]
    output_dir: PathBuf,
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_output_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && !path.is_dir() {
        return Err(format!("Output path is not a directory: {}", path.display()));
    }

    if !path.exists() {
        return Err(format!("Output directory does not exist: {}", path.display()));
    }

    Ok(path)
}

fn main() {
    setup_logging("extract_ltx=info");

    let cli = ExtractCli::parse();

    if !cli.site_dir.exists() {
        println!("Error: Site directory '{}' does not exist.", cli.site_dir.display());
        println!("Make sure to run 'bundle exec jekyll build' first.");
        std::process::exit(1);
    }

    let options = ExtractorOptions::builder()
        .site_dir(cli.site_dir)
        .base_url(cli.base_url)
        .build();

    let extractor = match SiteExtractor::new(options) {
        Ok(extractor) => extractor,
        Err(e) => {
            println!("Error: HTML extraction is unavailable: {}", e);
            std::process::exit(1);
        }
    };

    println!("Parsing documentation site...");
    let pages = extractor.parse_site();
    println!("Found {} pages", pages.len());

    println!("Generating llms.txt...");
    let llms_content = render_condensed(&pages, extractor.options());
    write_artifact(&cli.output_dir.join("llms.txt"), &llms_content);

    println!("Generating llms-full.txt...");
    let llms_full_content = render_full(&pages, extractor.options());
    write_artifact(&cli.output_dir.join("llms-full.txt"), &llms_full_content);

    println!("Done!");
}

/// Writes one artifact, overwriting any existing file, and reports its size.
fn write_artifact(path: &Path, content: &str) {
    if let Err(e) = std::fs::write(path, content) {
        println!("ERROR: Cannot write file ({}) due to: {}", path.display(), e);
        std::process::exit(1);
    }
    println!("Generated {} ({} characters)", path.display(), content.chars().count());
}
