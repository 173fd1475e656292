use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use remote_config::config::load_settings;
use remote_config::observability::init_logging;
use remote_config::{ClientSettings, ConfigSection, ConfigWithDefaults, JsonObject};

#[derive(Parser)]
#[command(name = "config-cli")]
#[command(about = "Inspect and edit sections on a remote config service", long_about = None)]
struct Cli {
    /// Service base URL (overrides the settings file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// TOML settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a whole section
    Show { name: String },
    /// Read one key, falling back to defaults
    Get {
        name: String,
        key: String,
        /// Class sub-object to read from
        #[arg(short, long)]
        class: Option<String>,
        /// Defaults as a JSON object
        #[arg(short, long)]
        defaults: Option<String>,
    },
    /// Write one key; VALUE is parsed as JSON, or taken as a string
    Set {
        name: String,
        key: String,
        value: String,
        /// Class sub-object to write into
        #[arg(short, long)]
        class: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging("remote_config=info")?;

    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => ClientSettings::default(),
    };
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }

    match cli.command {
        Commands::Show { name } => {
            let section = ConfigSection::create(&name, &settings).await?;
            print_json(&Value::Object(section.data().as_ref().clone()))?;
        }
        Commands::Get {
            name,
            key,
            class,
            defaults,
        } => {
            let defaults = defaults
                .map(|raw| serde_json::from_str::<JsonObject>(&raw))
                .transpose()?;
            let section = Arc::new(ConfigSection::create(&name, &settings).await?);
            let view = ConfigWithDefaults::new(section, defaults, class);
            print_json(&view.get(&key).unwrap_or(Value::Null))?;
        }
        Commands::Set {
            name,
            key,
            value,
            class,
        } => {
            let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            let section = Arc::new(ConfigSection::create(&name, &settings).await?);
            let view = ConfigWithDefaults::new(section, None, class);
            let body = view.set(&key, value).await?;
            print_json(&Value::Object(body))?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
