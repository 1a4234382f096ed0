// WolframAlpha Launcher - Command-Line Host
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use wolfram_launcher::config::Cli;
use wolfram_launcher::core::logger;
use wolfram_launcher::plugins::{DesktopHost, HostEvent};
use wolfram_launcher::{DisplayItem, HttpProvider, LauncherPlugin, WolframPlugin, log_info};

type Plugin = WolframPlugin<DesktopHost, HttpProvider>;

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_from_args(args.debug, args.trace, args.journald)
        .context("Failed to initialize logger")?;

    let mut plugin = WolframPlugin::new(DesktopHost::new(&args.settings), HttpProvider::new());
    plugin.on_start();
    if !plugin.config().is_configured() {
        log_info!(
            "No API key: set [main] apiKey in {} or WOLFRAM_APP_ID",
            args.settings.display()
        );
    }

    match args.query_text() {
        Some(text) => run_once(&plugin, &text, args.pick, args.json),
        None => run_interactive(&mut plugin, args.json),
    }
}

/// The launcher shows our items after the keyword was picked from the catalog
fn suggest(plugin: &Plugin, text: &str) -> Vec<DisplayItem> {
    plugin.on_suggest(text, &plugin.on_catalog())
}

fn run_once(plugin: &Plugin, text: &str, pick: Option<usize>, json: bool) -> Result<()> {
    let items = suggest(plugin, text);
    print_items(&items, json)?;

    if let Some(index) = pick {
        execute(plugin, &items, index)?;
    }
    Ok(())
}

fn run_interactive(plugin: &mut Plugin, json: bool) -> Result<()> {
    println!("Type a query, end it with \\ to send. !N runs item N, :reload rereads settings, :quit exits.");

    let stdin = io::stdin();
    let mut items = Vec::new();

    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" | ":q" => break,
            ":reload" => plugin.on_events(HostEvent::PackageConfigChanged),
            _ => {
                if let Some(index) = line.strip_prefix('!') {
                    match index.trim().parse::<usize>() {
                        Ok(index) => {
                            if let Err(e) = execute(plugin, &items, index) {
                                eprintln!("{:#}", e);
                            }
                        }
                        Err(_) => eprintln!("Not an item number: {}", index),
                    }
                } else {
                    items = suggest(plugin, line);
                    print_items(&items, json)?;
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, ":W ")?;
    stdout.flush()?;
    Ok(())
}

fn print_items(items: &[DisplayItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        println!("{:>2}. {}", i + 1, item.label);
        println!("    {}", item.short_desc);
    }
    Ok(())
}

fn execute(plugin: &Plugin, items: &[DisplayItem], index: usize) -> Result<()> {
    let Some(item) = index.checked_sub(1).and_then(|i| items.get(i)) else {
        bail!("No item {} (have {})", index, items.len());
    };
    plugin.on_execute(item, None)
}
