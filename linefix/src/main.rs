//! Strip dangling lines from a generated source file.
//!
//! With no arguments, edits `frontend/src/app/router.tsx` using the built-in
//! rules (or `linefix.toml` if present in the working directory).

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use linefix::edit::edit;
use linefix::exit_codes;
use linefix::io::config::{
    DEFAULT_CONFIG_FILE, LinefixConfig, load_config, load_config_file, render_config,
};
use linefix::logging;
use linefix::report::report_lines;

#[derive(Parser)]
#[command(
    name = "linefix",
    version,
    about = "Remove dangling lines at fixed positions from a source file"
)]
struct Cli {
    /// File to edit (overrides `target` from the config file).
    #[arg(long)]
    target: Option<PathBuf>,

    /// TOML config with `target` and `[rules]` (default: `linefix.toml` if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit without editing.
    #[arg(long)]
    show_rules: bool,
}

fn main() {
    logging::init();
    match run(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let cfg = resolve_config(cli.config.as_deref(), cli.target)?;

    if cli.show_rules {
        print!("{}", render_config(&cfg)?);
        return Ok(exit_codes::OK);
    }

    let outcome = edit(&cfg.target, &cfg.rules)?;
    for line in report_lines(&cfg.target, &outcome) {
        println!("{}", line);
    }
    Ok(exit_codes::for_outcome(&outcome))
}

/// Load the config file (explicit, default or none) and apply `--target`.
fn resolve_config(config: Option<&Path>, target: Option<PathBuf>) -> Result<LinefixConfig> {
    let mut cfg = match config {
        Some(path) => load_config_file(path)?,
        None => load_config(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(target) = target {
        if target.as_os_str().is_empty() {
            bail!("--target must be a non-empty path");
        }
        cfg.target = target;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["linefix"]);
        assert!(cli.target.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.show_rules);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "linefix",
            "--target",
            "src/app.tsx",
            "--config",
            "fix.toml",
            "--show-rules",
        ]);
        assert_eq!(cli.target, Some(PathBuf::from("src/app.tsx")));
        assert_eq!(cli.config, Some(PathBuf::from("fix.toml")));
        assert!(cli.show_rules);
    }

    #[test]
    fn target_flag_overrides_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fix.toml");
        std::fs::write(&path, "target = \"from-config.tsx\"\n").expect("write");

        let cfg =
            resolve_config(Some(&path), Some(PathBuf::from("from-flag.tsx"))).expect("resolve");
        assert_eq!(cfg.target, PathBuf::from("from-flag.tsx"));

        let cfg = resolve_config(Some(&path), None).expect("resolve");
        assert_eq!(cfg.target, PathBuf::from("from-config.tsx"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("missing.toml");
        assert!(resolve_config(Some(&missing), None).is_err());
    }
}
