//! `folio` command-line host.
//!
//! # Responsibility
//! - Drive the core controller against a portfolio page stored on disk.
//! - Print rendered fragments and catalog diagnostics, or write the page back
//!   with its regions filled in.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::{
    derive_tag_vocabulary, init_logging, try_load_catalog_from_path, FilterRenderController,
    HtmlPage, MemorySurface, PageConfig, PageSurface,
};
use log::warn;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "folio: render and inspect portfolio pages", long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level used with `--log-dir`.
    #[arg(long, global = true, default_value = folio_core::default_log_level())]
    log_level: String,

    /// JSON file overriding page element ids and timing.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the chip row and project grid for a page.
    Render {
        /// HTML page embedding the projects payload.
        page: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// Which rendered region to print.
        #[arg(long, value_enum, default_value_t = Region::All)]
        region: Region,
    },
    /// Write the page with its grid, chip row and year regions filled in.
    Build {
        /// HTML page embedding the projects payload.
        page: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// Destination file. Prints to stdout when unset.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the tag vocabulary, one tag per line.
    Tags {
        page: PathBuf,
    },
    /// Validate the embedded payload and report the project count.
    Check {
        page: PathBuf,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Search text applied before rendering.
    #[arg(long)]
    search: Option<String>,
    /// Tag chip to activate; repeatable. Repeats of one tag count once.
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Region {
    All,
    Chips,
    Grid,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            page,
            filter,
            region,
        } => render(&page, &config, filter, region),
        Commands::Build {
            page,
            filter,
            output,
        } => build(&page, &config, filter, output.as_deref()),
        Commands::Tags { page } => {
            let catalog = try_load_catalog_from_path(&page, &config)?;
            for tag in derive_tag_vocabulary(&catalog.projects) {
                println!("{tag}");
            }
            Ok(())
        }
        Commands::Check { page } => {
            let catalog = try_load_catalog_from_path(&page, &config)
                .with_context(|| format!("payload check failed for `{}`", page.display()))?;
            println!("ok: {} projects", catalog.len());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    PageConfig::from_json(&raw).with_context(|| format!("invalid config `{}`", path.display()))
}

fn read_page(page: &Path) -> Result<String> {
    std::fs::read_to_string(page).with_context(|| format!("failed to read page `{}`", page.display()))
}

/// Clicks each distinct tag once, in first-seen order, then commits the search.
fn apply_filters<S: PageSurface>(
    controller: &mut FilterRenderController<S>,
    filter: FilterArgs,
) -> Result<()> {
    let mut seen = HashSet::new();
    for tag in filter.tags.iter().filter(|tag| seen.insert(tag.as_str())) {
        if controller.on_chip_click(tag).is_none() {
            warn!("event=cli_tag module=cli status=ignored tag={tag}");
            bail!("no chip for tag `{tag}`");
        }
    }
    if let Some(text) = filter.search {
        controller.on_search_input(text, std::time::Instant::now());
        controller.flush_pending_search();
    }
    Ok(())
}

fn render(page: &Path, config: &PageConfig, filter: FilterArgs, region: Region) -> Result<()> {
    let page_html = read_page(page)?;

    let mut controller = FilterRenderController::new(config.clone(), MemorySurface::default());
    controller.init(&page_html);
    apply_filters(&mut controller, filter)?;

    let surface = controller.into_surface();
    if matches!(region, Region::All | Region::Chips) {
        println!("{}", surface.chip_row_html);
    }
    if matches!(region, Region::All | Region::Grid) {
        println!("{}", surface.grid_html);
    }
    Ok(())
}

fn build(
    page: &Path,
    config: &PageConfig,
    filter: FilterArgs,
    output: Option<&Path>,
) -> Result<()> {
    let page_html = read_page(page)?;

    let surface = HtmlPage::new(page_html.as_str(), config);
    let mut controller = FilterRenderController::new(config.clone(), surface);
    controller.init(&page_html);
    apply_filters(&mut controller, filter)?;

    let built = controller.into_surface();
    for element_id in built.missing_regions() {
        eprintln!("warning: page has no region with id `{element_id}`");
    }

    match output {
        Some(path) => std::fs::write(path, built.html())
            .with_context(|| format!("failed to write page `{}`", path.display())),
        None => {
            print!("{}", built.html());
            Ok(())
        }
    }
}
