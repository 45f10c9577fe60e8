//! Utility Toolkit Demo - CLI entry point
//! Author: kartik4091
//! Created: 2026-10-18
//!
//! Runs the fixed demonstration. Every flag is optional; without any the run
//! writes `test.txt` in the working directory and prints each section to stdout.
//! A failing section is reported on stderr and the process still exits 0;
//! only invalid configuration exits 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};
use tracing::{error, info};
use utilkit::{Demo, Logger, Result, ToolkitConfig, UtilityConfig};

fn main() {
    let matches = build_cli().get_matches();

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let mut logger = Logger::with_level(&config.log_level);
    logger.init();

    info!("🚀 Utility Toolkit Demo v{} - Starting...", env!("CARGO_PKG_VERSION"));

    let demo = Demo::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = demo.run(&mut out) {
        let _ = out.flush();
        error!("❌ Demonstration failed: {}", e);
        let chain = e.chain();
        eprintln!("Error: {}", chain[0]);
        for cause in &chain[1..] {
            eprintln!("  caused by: {}", cause);
        }
    }

    let _ = out.flush();
}

fn build_cli() -> Command {
    Command::new("utilkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demonstrates the utility toolkit: strings, collections, files, dates, hashing, tasks and math")
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("JSON or YAML configuration file"))
        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .value_name("PATH")
            .help("File written and read back by the file section [default: test.txt]"))
        .arg(Arg::new("zone")
            .short('z')
            .long("zone")
            .value_name("ZONE")
            .help("Time zone for the date section: local, utc or +HH:MM"))
        .arg(Arg::new("delay-ms")
            .long("delay-ms")
            .value_name("MILLIS")
            .value_parser(clap::value_parser!(u64))
            .help("Delay inside the deferred task [default: 1000]"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .value_name("LEVEL")
            .value_parser(["error", "warn", "info", "debug", "trace"])
            .help("Log level for diagnostics on stderr"))
}

fn resolve_config(matches: &clap::ArgMatches) -> Result<ToolkitConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ToolkitConfig::from_file(&PathBuf::from(path))?,
        None => ToolkitConfig::default(),
    };

    if let Some(file) = matches.get_one::<String>("file") {
        config.set("demo_file", file.clone())?;
    }
    if let Some(zone) = matches.get_one::<String>("zone") {
        config.set("zone", zone.clone())?;
    }
    if let Some(delay) = matches.get_one::<u64>("delay-ms") {
        config.task_delay_ms = *delay;
    }
    if let Some(level) = matches.get_one::<String>("verbose") {
        config.set("log_level", level.clone())?;
    }

    config.validate()?;
    Ok(config)
}
