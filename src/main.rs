//! MangaMad CLI - browse mangamad.com from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mangamad::config::Config;
use mangamad::console::Console;
use mangamad::error::Result;
use mangamad::sources::{MangaMad, MangasPage, Source, create_http_client};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Browse the MangaMad manga site.
#[derive(Parser, Debug)]
#[command(name = "mangamad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the most popular series.
    Popular {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// List recently updated series.
    Latest {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Search series by title and filters.
    Search {
        /// Title to search for.
        #[arg(default_value = "")]
        query: String,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Sort order (value or label, see `filters`).
        #[arg(long)]
        sort: Option<String>,

        /// Genre (value or label, see `filters`).
        #[arg(long)]
        genre: Option<String>,

        /// Publication status (value or label, see `filters`).
        #[arg(long)]
        status: Option<String>,
    },

    /// Show series details and its chapter count.
    Details {
        /// Series path or URL.
        url: String,
    },

    /// List the chapters of a series.
    Chapters {
        /// Series path or URL.
        url: String,
    },

    /// List the page images of a chapter.
    Pages {
        /// Chapter path or URL.
        url: String,
    },

    /// List the search filters and their options.
    Filters,

    /// Write the default configuration file.
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let console = Console::new();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path().context("Failed to locate config directory")?,
    };

    if let Command::InitConfig = args.command {
        Config::default()
            .save_to(&config_path)
            .context("Failed to write configuration")?;
        console.success(&format!("Wrote {}", config_path.display()));
        return Ok(());
    }

    let config = Config::load_from(&config_path).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_logging(&config, args.verbose);

    let client = create_http_client(&config.source).context("Failed to create HTTP client")?;
    let source = MangaMad::new(client, &config.source).context("Failed to create source")?;

    if let Err(err) = run(&source, args.command, args.json, &console).await {
        console.error(&format!("{:#}", err));
        std::process::exit(1);
    }
    Ok(())
}

/// Installs the log subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(source: &dyn Source, command: Command, json: bool, console: &Console) -> Result<()> {
    match command {
        Command::Popular { page } => {
            let result = source
                .popular_manga(page)
                .await
                .context("Failed to fetch popular series")?;
            print_listing(&result, json, console)
        }
        Command::Latest { page } => {
            let result = source
                .latest_updates(page)
                .await
                .context("Failed to fetch latest updates")?;
            print_listing(&result, json, console)
        }
        Command::Search {
            query,
            page,
            sort,
            genre,
            status,
        } => {
            let mut filters = source.filter_list();
            for (param, value) in [("sort", sort), ("genre", genre), ("status", status)] {
                if let (Some(value), Some(filter)) = (value, filters.get_mut(param)) {
                    filter.select_value(&value)?;
                }
            }

            let result = source
                .search_manga(page, &query, &filters)
                .await
                .context("Search failed")?;
            print_listing(&result, json, console)
        }
        Command::Details { url } => {
            if !json {
                console.step(&format!("Fetching {}", url));
            }
            let (detail, chapters) =
                futures::try_join!(source.manga_details(&url), source.chapter_list(&url))
                    .context("Failed to fetch series")?;

            if json {
                return print_json(&detail);
            }
            console.detail(&detail);
            console.section(&format!("{} chapters", chapters.len()));
            if let Some(last) = chapters.last() {
                console.info(&format!("Latest: {}", console.chapter_line(last)));
            }
            Ok(())
        }
        Command::Chapters { url } => {
            let chapters = source
                .chapter_list(&url)
                .await
                .context("Failed to fetch chapter list")?;

            if json {
                return print_json(&chapters);
            }
            if chapters.is_empty() {
                console.warning("No chapters found");
            }
            for chapter in &chapters {
                println!("{}", console.chapter_line(chapter));
            }
            Ok(())
        }
        Command::Pages { url } => {
            let pages = source
                .page_list(&url)
                .await
                .context("Failed to fetch chapter pages")?;

            if json {
                return print_json(&pages);
            }
            if pages.is_empty() {
                console.warning("No page images found");
            }
            for page in &pages {
                println!("{}", console.page_line(page));
            }
            Ok(())
        }
        Command::Filters => {
            let filters = source.filter_list();
            if json {
                return print_json(&filters);
            }
            for filter in filters.iter() {
                console.section(&format!("{} (--{})", filter.name(), filter.param()));
                for option in filter.options() {
                    println!("  {:<20} {}", option.value, console.muted(option.label));
                }
            }
            Ok(())
        }
        Command::InitConfig => anyhow::bail!("init-config doesn't need a source"),
    }
}

fn print_listing(page: &MangasPage, json: bool, console: &Console) -> Result<()> {
    if json {
        return print_json(page);
    }

    if page.entries.is_empty() {
        console.warning("No series found");
    }
    for entry in &page.entries {
        println!("{}", console.entry_line(entry));
    }
    if page.has_next_page {
        console.info("More results on the next page");
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
