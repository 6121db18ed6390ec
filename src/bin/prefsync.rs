//! Command-line access to a user's preferences.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use prefsync::clients::RestClient;
use prefsync::core::config::AppConfig;
use prefsync::core::models::{Preference, PreferenceList};
use prefsync::preferences::{PreferenceStore, TracingNotifier};

#[derive(Parser, Debug)]
#[command(name = "prefsync")]
#[command(about = "Show and change user preferences on the log server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a user's preferences, sorted by name
    Show { user: String },
    /// Set one or more preferences (`name=value`) and save them
    Set {
        user: String,
        #[arg(required = true, value_name = "NAME=VALUE")]
        assignments: Vec<String>,
    },
}

fn parse_assignment(raw: &str) -> Result<Preference> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("expected NAME=VALUE, got {raw:?}");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("preference name is empty in {raw:?}");
    }
    let value = serde_json::from_str::<Value>(value.trim())
        .unwrap_or_else(|_| Value::String(value.trim().to_string()));
    Ok(Preference::new(name, value))
}

fn apply(list: &mut PreferenceList, update: Preference) {
    match list.iter_mut().find(|p| p.name == update.name) {
        Some(existing) => existing.value = update.value,
        None => list.push(update),
    }
}

fn print_list(list: &[Preference]) {
    for pref in list {
        println!("{}={}", pref.name, pref.enabled());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    prefsync::setup_logging();
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("loading configuration")?;
    let client = RestClient::new(&config)?;
    let store = PreferenceStore::new(client, TracingNotifier);

    match cli.command {
        Command::Show { user } => {
            let list = store.load(&user).await?;
            print_list(&list);
        }
        Command::Set { user, assignments } => {
            let updates = assignments
                .iter()
                .map(|raw| parse_assignment(raw))
                .collect::<Result<Vec<_>>>()?;

            let mut list = store.load(&user).await?;
            for update in updates {
                apply(&mut list, update);
            }
            let saved = store.save(list).await?;
            info!(user = %user, count = saved.len(), "Preferences updated");

            // Re-read so the printed order and values match what the server holds.
            print_list(&store.load(&user).await?);
        }
    }

    Ok(())
}
