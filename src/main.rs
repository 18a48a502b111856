use clap::{Parser, Subcommand};
use gal_manifest::{config, emit, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gal-manifest")]
#[command(about = "Image manifest generator for static photo galleries")]
#[command(long_about = "\
Image manifest generator for static photo galleries

Walks a directory of category folders and writes manifest.json at the
scan root, mapping each category to its sorted relative image paths.
The file is only rewritten when its content changes.

Directory structure:

  photos/
  ├── manifest.json                # Output
  ├── Events/                      # Category = top-level folder
  │   ├── cover.jpg                # 'cover'/'hero'/zero-padded names sort first
  │   ├── summer/party-01.jpg      # Nesting is fine, paths stay relative
  │   ├── _drafts/                 # Underscore-prefixed = skipped
  │   └── .trash/                  # Hidden = skipped
  └── Fashion/
      └── look1.webp

Categories default to every top-level folder (minus tooling directories
like .git and node_modules). Set CATEGORIES=Events,Fashion or pass
--categories to restrict the manifest to exactly those names, in that
order — listed categories without a folder get an empty list.")]
#[command(version)]
struct Cli {
    /// Scan root containing the category directories
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output file (defaults to <root>/manifest.json)
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Restrict the manifest to these categories, comma-separated
    #[arg(long, env = "CATEGORIES", value_delimiter = ',', global = true)]
    categories: Vec<String>,

    /// Drop auto-detected categories that contain no images
    #[arg(long, global = true)]
    skip_empty: bool,

    /// Override the featured-name pattern (regex, matched against filenames)
    #[arg(long, global = true)]
    featured_pattern: Option<String>,

    /// Include .heic files in the scan
    #[arg(long, global = true)]
    heic: bool,

    /// Diagnostic output (accepts 1/0/true/false/yes/no)
    #[arg(
        long,
        env = "VERBOSE",
        default_value = "true",
        default_missing_value = "true",
        num_args = 0..=1,
        value_parser = parse_boolish,
        global = true
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan categories and write the manifest
    Build,
    /// Scan and report without writing anything
    Check,
}

/// Parse a boolean-ish environment value. An empty value (variable set
/// but blank) keeps the default of enabled.
fn parse_boolish(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

impl Cli {
    fn to_config(&self) -> config::ManifestConfig {
        let mut cfg = config::ManifestConfig {
            categories: config::parse_category_list(&self.categories),
            include_empty: !self.skip_empty,
            verbose: self.verbose,
            ..config::ManifestConfig::default()
        };
        if let Some(pattern) = &self.featured_pattern {
            cfg.featured_pattern = pattern.clone();
        }
        if self.heic {
            cfg.extensions.push("heic".to_string());
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = cli.to_config();
    config.validate()?;

    let out_path = cli
        .out
        .clone()
        .unwrap_or_else(|| cli.root.join("manifest.json"));

    match cli.command {
        Command::Build => {
            let manifest = scan::build_manifest(&cli.root, &config)?;
            output::print_build_output(&manifest, &cli.root, config.verbose);
            let document = emit::to_json_document(&manifest)?;
            let outcome = emit::write_if_changed(&out_path, &document)?;
            println!("{}", output::format_outcome(&out_path, outcome));
        }
        Command::Check => {
            let manifest = scan::build_manifest(&cli.root, &config)?;
            output::print_build_output(&manifest, &cli.root, true);
            println!(
                "Found {} images in {} categories",
                manifest.image_count(),
                manifest.len()
            );
        }
    }

    Ok(())
}
