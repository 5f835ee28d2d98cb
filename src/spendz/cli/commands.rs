//! # CLI Layer
//!
//! This module is **one possible UI client** for spendz, not the application
//! itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_paths()`: Resolves the spendz home, config and data file
//! - `init_context()`: Opens the store and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_category_totals, print_config, print_expenses, print_messages, print_total,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use spendz::api::{AddRequest, ConfigAction, SpendzApi, SpendzPaths};
use spendz::commands;
use spendz::config::{resolve_data_file, SpendzConfig};
use spendz::error::{Result, SpendzError};
use spendz::store::fs_backend::FsBackend;
use spendz::store::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "SPENDZ_HOME";

struct AppContext {
    api: SpendzApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (paths, config) = init_paths(&cli)?;
    let open = || init_context(&paths, &config);

    match cli.command {
        // Config never opens the store, so it keeps working on a corrupt data file.
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value),
        Some(Commands::Add {
            amount,
            category,
            note,
            date,
        }) => handle_add(
            &mut open()?,
            AddRequest {
                amount,
                category: category.unwrap_or_default(),
                note,
                date,
            },
        ),
        Some(Commands::List) | None => handle_list(&open()?),
        Some(Commands::Total) => handle_total(&open()?),
        Some(Commands::Categories) => handle_categories(&open()?),
        Some(Commands::Search { fragment }) => handle_search(&open()?, fragment.join(" ")),
        Some(Commands::Delete { id }) => handle_delete(&mut open()?, id),
        Some(Commands::Export { path }) => handle_export(&open()?, path),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("spendz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn spendz_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "spendz", "spendz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SpendzError::Config("Could not determine a home directory".to_string()))
}

fn init_paths(cli: &Cli) -> Result<(SpendzPaths, SpendzConfig)> {
    let home = spendz_home()?;
    let config = SpendzConfig::load(&home).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
        SpendzConfig::default()
    });
    let data_file = resolve_data_file(cli.file.as_deref(), &config, &home);
    tracing::debug!(home = %home.display(), data_file = %data_file.display(), "resolved paths");
    Ok((SpendzPaths { home, data_file }, config))
}

fn init_context(paths: &SpendzPaths, config: &SpendzConfig) -> Result<AppContext> {
    let store = FileStore::open(FsBackend::new(&paths.data_file))?;
    let api = SpendzApi::new(store).with_default_category(config.default_category.clone());
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, request: AddRequest) -> Result<()> {
    let result = ctx.api.add_expense(request)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_expenses()?;
    print_expenses(&result.listed_expenses);
    print_messages(&result.messages);
    Ok(())
}

fn handle_total(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.total()?;
    if let Some(total) = result.total {
        print_total(total);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.total_by_category()?;
    print_category_totals(&result.category_totals, result.total);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, fragment: String) -> Result<()> {
    let result = ctx.api.search_expenses(&fragment)?;
    if !result.listed_expenses.is_empty() {
        print_expenses(&result.listed_expenses);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_expense(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export_expenses(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &SpendzPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
