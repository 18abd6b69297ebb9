//! `aanya`: stock list manager for the terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aanya_cli::shell::Shell;
use aanya_cli::{Config, deliver_export, load_store, render};
use aanya_inventory::{CategoryFilter, FilterState, Inventory, Notice, StockFilter, Workbench};

#[derive(Parser)]
#[command(name = "aanya")]
#[command(about = "Track per-size clothing stock: list, filter, edit and export")]
struct Cli {
    /// JSON file with items to start from (default: built-in sample list)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show items matching the given filters
    List {
        /// Category to show (default: all)
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive text to find in name or color
        #[arg(long, default_value = "")]
        search: String,

        /// Stock level: all, good, low or out
        #[arg(long, default_value = "all")]
        stock: String,
    },

    /// Show total, low-stock and out-of-stock counters
    Summary,

    /// Export the whole stock list as CSV
    Export {
        /// Directory to write the CSV into (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive session (default)
    Shell,
}

fn main() -> anyhow::Result<()> {
    aanya_observability::init();

    let cli = Cli::parse();
    let config = Config::from_env().with_seed_override(cli.seed);
    let store = load_store(&config)?;
    let workbench =
        Workbench::new(Inventory::new(store)).with_export_options(config.export_options());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Shell) {
        Command::List {
            category,
            search,
            stock,
        } => {
            let stock: StockFilter = stock.parse()?;
            let filter = FilterState::new(CategoryFilter::from(category.as_str()), search, stock);
            render::write_items(&mut out, &workbench.inventory().filtered(&filter))?;
        }
        Command::Summary => {
            render::write_summary(&mut out, &workbench.summary())?;
        }
        Command::Export { output } => {
            let export = workbench.export()?;
            match output {
                Some(dir) => {
                    let outcome = deliver_export(&export, &dir);
                    let notice = Notice::from_export(&outcome.as_ref().map(|_| export.rows));
                    render::write_notice(&mut out, &notice)?;
                    let path = outcome?;
                    tracing::info!(path = %path.display(), "export written");
                }
                None => writeln!(out, "{}", export.content)?,
            }
        }
        Command::Shell => {
            let mut shell = Shell::new(workbench);
            shell.run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}
