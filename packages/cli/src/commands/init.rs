use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Undo levels to keep
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Default output file name
    #[arg(short, long)]
    pub output_name: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path(cwd);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(limit) = args.history_limit {
        config.history_limit = limit;
    }
    if let Some(name) = args.output_name {
        config.output_name = name;
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: paperflow inspect a.pdf b.pdf");
    println!("  2. Run: paperflow compose a.pdf b.pdf --order ... -o merged.pdf");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            history_limit: Some(20),
            output_name: None,
            force,
        }
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(args(false), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.output_name, "paperflow.pdf");
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        fs::write(Config::path(cwd), r#"{ "historyLimit": 7 }"#).unwrap();

        init(args(false), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().history_limit, 7);

        init(args(true), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().history_limit, 20);
    }
}
