// src/main.rs  —  callsign-tag  entry point
use anyhow::{Context, Result};
use callsign_tag::callsign::{self, DecoratedCallsign, PrefixTable};
use callsign_tag::config::{self, AppConfig, Cli};
use callsign_tag::markup;
use clap::Parser;
use std::io::Read;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Prefix table ──────────────────────────────────────────────────────────
    let table = PrefixTable::builtin().context("Building the built-in prefix table")?;

    // ── --lookup  ─────────────────────────────────────────────────────────────
    if let Some(prefix) = &cli.lookup {
        match table.lookup_territory(prefix) {
            Some(t) => println!("{prefix}  {}  {t}", callsign::flag_emoji(t)),
            None    => println!("{prefix}  no territory"),
        }
        return Ok(());
    }

    // ── --decorate  ───────────────────────────────────────────────────────────
    if let Some(call) = &cli.decorate {
        let token = call.trim();
        let parsed = callsign::parse(token)
            .with_context(|| format!("Parsing call sign {token:?}"))?;
        let cs = callsign::decorate(parsed, token, table);
        println!("{}", describe(&cs));
        return Ok(());
    }

    // ── Load config + input ───────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    let input = read_input(&cli)?;

    // ── Annotate ──────────────────────────────────────────────────────────────
    let annotated = markup::annotate(&input, table, &cfg);

    if cli.list {
        for cs in &annotated.callsigns {
            println!("{}", describe(cs));
        }
        return Ok(());
    }

    if cli.standalone {
        if let Some(link) = markup::stylesheet_link(&cfg) {
            println!("{link}");
        }
    }
    print!("{}", annotated.text);
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading input {:?}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Reading stdin")?;
            Ok(buf)
        }
    }
}

/// One-line summary: token, parts, territory, phonetic spelling.
fn describe(cs: &DecoratedCallsign) -> String {
    let p = &cs.parsed;
    let portable = p.portable_digit.map(|d| format!(" /{d}")).unwrap_or_default();
    let territory = match &cs.territory {
        Some(t) => format!("{} {t}", callsign::flag_emoji(t)),
        None    => "--".into(),
    };
    format!(
        "{:<10} {} {} {}{}  {:<8} {}",
        cs.token, p.prefix, p.area_digit, p.suffix, portable, territory, cs.phonetic()
    )
}
