use clap::{Parser, Subcommand};
use headkit::{config, output, tags};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once; called a single time at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "headkit")]
#[command(about = "Render HTML <head> tags from TOML")]
#[command(long_about = "\
Render HTML <head> tags from TOML

A site-wide head.toml holds what every page shares. Page files are layered
on top of it: tables merge key by key, everything else is replaced.

  head.toml             # template, favicons, theme color, robots
  pages/
  ├── index.toml        # title, description, open_graph overrides
  └── about.toml

Run 'headkit gen-config' to print a documented head.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site-wide head config
    #[arg(long, default_value = "head.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site config, or each page layered over it
    Render {
        /// Page config files
        pages: Vec<PathBuf>,
        /// Print element descriptors as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Load and validate configs without rendering
    Check {
        /// Page config files
        pages: Vec<PathBuf>,
    },
    /// Print a stock head.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { pages, json } => {
            for (label, page) in targets(&cli.config, &pages) {
                let head = config::load_head(&cli.config, page)?;
                let elements = tags::render(&head);
                if json {
                    println!("{}", serde_json::to_string_pretty(&elements)?);
                } else {
                    output::print_render_output(&label, &elements);
                }
            }
        }
        Command::Check { pages } => {
            for (label, page) in targets(&cli.config, &pages) {
                let head = config::load_head(&cli.config, page)?;
                output::print_check_output(&label, &head);
            }
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve what to load: the site config alone, or each page over it.
fn targets<'a>(site: &'a Path, pages: &'a [PathBuf]) -> Vec<(String, Option<&'a Path>)> {
    if pages.is_empty() {
        vec![(site.display().to_string(), None)]
    } else {
        pages
            .iter()
            .map(|page| (page.display().to_string(), Some(page.as_path())))
            .collect()
    }
}
