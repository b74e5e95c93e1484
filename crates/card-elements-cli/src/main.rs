use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use card_elements::enums::{self, EnumRegistry};
use card_elements::{ElementBuilder, ElementKind, ElementsConfig};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "card-elements")]
#[command(about = "Build Adaptive Card element JSON from parameter objects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one element and print its JSON.
    Build {
        #[arg(long)]
        kind: String,
        /// Parameter file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        params: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        compact: bool,
    },
    /// List buildable element kinds.
    Kinds,
    /// Print enum registries as `key = value` lines.
    Enums {
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Build {
            kind,
            params,
            config,
            compact,
        } => build(&kind, &params, config.as_deref(), compact),
        Commands::Kinds => {
            for kind in ElementKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
        Commands::Enums { name } => print_enums(name.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn build(kind: &str, params: &Path, config: Option<&Path>, compact: bool) -> Result<()> {
    let kind = ElementKind::parse(kind).ok_or_else(|| {
        let known: Vec<&str> = ElementKind::ALL.iter().map(|kind| kind.as_str()).collect();
        anyhow!("unknown element kind `{kind}` (expected one of: {})", known.join(", "))
    })?;
    let config = load_config(config)?;
    let params = read_params(params)?;
    let element = ElementBuilder::from_config(&config)
        .build_value(kind, &params)
        .with_context(|| format!("failed to build {kind}"))?;
    let rendered = if compact {
        serde_json::to_string(&element)?
    } else {
        serde_json::to_string_pretty(&element)?
    };
    println!("{rendered}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ElementsConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            ElementsConfig::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ElementsConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn read_params(path: &Path) -> Result<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read parameters from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read parameters {}", path.display()))?
    };
    serde_json::from_str(&text).context("parameters are not valid JSON")
}

fn print_enums(name: Option<&str>) -> Result<()> {
    let selected: Vec<&EnumRegistry> = match name {
        Some(name) => vec![enums::registry(name).ok_or_else(|| anyhow!("unknown enum `{name}`"))?],
        None => enums::registries().iter().collect(),
    };
    for registry in selected {
        println!("{}", registry.name);
        for (key, value) in registry.entries {
            println!("  {key} = {value}");
        }
    }
    Ok(())
}
