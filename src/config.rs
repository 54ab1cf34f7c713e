// src/config.rs  —  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  callsign-tag --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

pub const DEFAULT_CSS_PATH: &str = "callsign.css";

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name  = "callsign-tag",
    about = "Tag amateur radio call signs with flag and phonetics",
    version,
)]
pub struct Cli {
    /// Text or HTML file to annotate (default: stdin)
    pub input: Option<PathBuf>,

    /// Config file path (default: ~/.config/callsign-tag/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not show the territory flag
    #[arg(long, action)]
    pub no_flag: bool,

    /// Do not apply the monospace call sign style
    #[arg(long, action)]
    pub no_monospace: bool,

    /// Do not attach the phonetic spelling
    #[arg(long, action)]
    pub no_phonetic: bool,

    /// Only decorate existing <call-sign> elements, do not search free text
    #[arg(long, action)]
    pub no_search: bool,

    /// Also tag call signs whose prefix is not in the prefix table
    #[arg(long, action)]
    pub allow_unknown_prefix: bool,

    /// Stylesheet referenced by --standalone output
    #[arg(long)]
    pub css_path: Option<String>,

    /// Prepend the stylesheet <link> to the annotated output
    #[arg(long, action)]
    pub standalone: bool,

    /// Print one line per call sign found instead of annotated markup
    #[arg(long, action)]
    pub list: bool,

    /// Parse and decorate a single call sign (e.g. SM8AYA/5) and exit
    #[arg(long, value_name = "CALL")]
    pub decorate: Option<String>,

    /// Print the territory a prefix belongs to and exit
    #[arg(long, value_name = "PREFIX")]
    pub lookup: Option<String>,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub display: Option<DisplayCfg>,
    pub search:  Option<SearchCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayCfg {
    pub flag:      Option<bool>,
    pub monospace: Option<bool>,
    pub phonetic:  Option<bool>,
    pub css_path:  Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCfg {
    pub enabled:              Option<bool>,
    pub require_known_prefix: Option<bool>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
/// Passed by reference into the annotate entry points; never global.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub enable_flag:            bool,
    pub enable_monospace_style: bool,
    pub enable_phonetic:        bool,
    /// Scan free text; when off only existing <call-sign> elements are decorated
    pub enable_search:          bool,
    pub css_path:               String,
    /// Search mode only tags call signs whose prefix resolves to a territory
    pub require_known_prefix:   bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_flag:            true,
            enable_monospace_style: true,
            enable_phonetic:        true,
            enable_search:          true,
            css_path:               DEFAULT_CSS_PATH.into(),
            require_known_prefix:   true,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc = Self::parse_file(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
            log::info!("[config] loaded {}", path.display());
        } else {
            log::info!("[config] no config file at {}, using defaults", path.display());
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    pub fn parse_file(raw: &str) -> Result<FileConfig> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(d) = &fc.display {
            if let Some(v) = d.flag      { self.enable_flag            = v; }
            if let Some(v) = d.monospace { self.enable_monospace_style = v; }
            if let Some(v) = d.phonetic  { self.enable_phonetic        = v; }
            if let Some(v) = &d.css_path { self.css_path               = v.clone(); }
        }
        if let Some(s) = &fc.search {
            if let Some(v) = s.enabled              { self.enable_search        = v; }
            if let Some(v) = s.require_known_prefix { self.require_known_prefix = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_flag                { self.enable_flag            = false; }
        if cli.no_monospace           { self.enable_monospace_style = false; }
        if cli.no_phonetic            { self.enable_phonetic        = false; }
        if cli.no_search              { self.enable_search          = false; }
        if cli.allow_unknown_prefix   { self.require_known_prefix   = false; }
        if let Some(v) = &cli.css_path { self.css_path              = v.clone(); }
    }
}

fn default_config_path() -> PathBuf {
    config_dir().join("callsign-tag").join("config.toml")
}

fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_example_parses_to_defaults() {
        let fc = AppConfig::parse_file(DEFAULT_CONFIG_TOML).unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let fc = AppConfig::parse_file(
            "[display]\nflag = false\ncss_path = \"site/cs.css\"\n\n[search]\nenabled = false\n",
        )
        .unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert!(!cfg.enable_flag);
        assert!(!cfg.enable_search);
        assert!(cfg.enable_phonetic);
        assert_eq!(cfg.css_path, "site/cs.css");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let fc = AppConfig::parse_file("").unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(AppConfig::parse_file("[display]\nflag = \"maybe\"\n").is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let mut cfg = AppConfig::default();
        cfg.apply_file(&AppConfig::parse_file("[display]\ncss_path = \"a.css\"\n").unwrap());
        let cli = Cli {
            no_phonetic:          true,
            allow_unknown_prefix: true,
            css_path:             Some("b.css".into()),
            ..Default::default()
        };
        cfg.apply_cli(&cli);
        assert!(!cfg.enable_phonetic);
        assert!(!cfg.require_known_prefix);
        assert!(cfg.enable_flag);
        assert_eq!(cfg.css_path, "b.css");
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["callsign-tag", "--no-search", "--list", "log.txt"]);
        assert!(cli.no_search);
        assert!(cli.list);
        assert_eq!(cli.input, Some(PathBuf::from("log.txt")));
    }
}
