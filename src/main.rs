use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use languagetool_asciidoc::config::{self, Config};

mod cli;
use cli::{Cli, Commands};

fn start_dir_for(input_path: &Path) -> PathBuf {
    match input_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn load_config(explicit: Option<&Path>, file: &Path) -> io::Result<Config> {
    let (cfg, cfg_path) = config::load(explicit, &start_dir_for(file))?;
    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ast { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let tree = languagetool_asciidoc::parse(&file, &cfg)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            print!("{tree}");
            Ok(())
        }
        Commands::Check { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let matches = languagetool_asciidoc::check(&file, &cfg)
                .with_context(|| format!("failed to check {}", file.display()))?;
            for m in &matches {
                println!("{m}");
            }
            Ok(())
        }
    }
}
