use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use memory_journal::{cli, config, server, state, store};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load().context("failed to load config")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command {
        Commands::Serve { port, static_dir, model, ollama_url, skip_model_check } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = static_dir {
                config.static_dir = Some(dir);
            }
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(url) = ollama_url {
                config.ollama_url = url;
            }

            let data_dir = config.resolve_data_dir()?;
            let state = state::AppState::new(&config, &data_dir)
                .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;

            if !skip_model_check {
                state.ollama.check_model().await?;
            }

            server::start_server(&config, state).await?;
        }

        Commands::List => {
            let data_dir = config.resolve_data_dir()?;
            let store = store::EntryStore::open(&data_dir)?;
            let entries = store.list();

            if entries.is_empty() {
                println!("No memories yet.");
            }
            for entry in entries {
                println!("{} {}  {}", entry.date, entry.time, entry.title);
                if let Some(file_name) = entry.memory_file() {
                    println!("    file: {}", file_name);
                }
            }
        }

        Commands::Purge { yes } => {
            let data_dir = config.resolve_data_dir()?;
            let mut store = store::EntryStore::open(&data_dir)?;

            if store.is_empty() {
                println!("No memories to delete.");
                return Ok(());
            }

            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Delete all {} memories? This cannot be undone.", store.len()))
                    .default(false)
                    .interact()?;

            if confirmed {
                let removed = store.clear()?;
                println!("✔ Deleted {} memories", removed);
            } else {
                println!("Cancelled.");
            }
        }

        Commands::Config { set_model, set_ollama_url, set_port, show } => {
            let changed = set_model.is_some() || set_ollama_url.is_some() || set_port.is_some();

            if let Some(model) = set_model {
                config.model = model;
            }
            if let Some(url) = set_ollama_url {
                config.ollama_url = url;
            }
            if let Some(port) = set_port {
                config.port = port;
            }
            if changed {
                config.save()?;
                println!("✔ Saved {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!("  model: {}", config.model);
                println!("  ollama url: {}", config.ollama_url);
                println!("  port: {}", config.port);
                println!("  data dir: {}", config.resolve_data_dir()?.display());
                println!(
                    "  static dir: {}",
                    config
                        .static_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "(none)".into())
                );
            }
        }
    }

    Ok(())
}
