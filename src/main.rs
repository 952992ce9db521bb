// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the rxm binary entry point. It loads pool configurations
// from a JSON config file or from command-line flags, reports each pool's
// color-coded summary and enablement, and exits non-zero when no pool is
// usable with the current build's capabilities.

use clap::Parser;
use log::{info, warn};
use rxm_miner::{PoolConfig, Result};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process;

const LOG_TARGET: &str = "rxm::main";

/// Command-line arguments for the rxm pool-config checker
#[derive(Parser, Debug)]
#[command(
    name = "rxm",
    version,
    about = "Validate and summarize upstream pool configurations",
    long_about = "Loads pool configurations from a JSON config file (a \"pools\" array) or from\n\
                  command-line flags, reports each pool's mode and enablement, and exits\n\
                  non-zero when no pool is usable with this build's capabilities.\n\n\
                  Examples:\n\
                    rxm --config config.json\n\
                    rxm -o stratum+ssl://pool.example.com:443 -u YOUR_WALLET\n\
                    rxm -o daemon.example.com:18081 --daemon"
)]
struct Args {
    /// Path to a JSON config file containing a "pools" array
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pool URL (format: [stratum+tcp://|stratum+ssl://]host:port)
    #[arg(short = 'o', long = "url", value_name = "URL")]
    url: Option<String>,

    /// Wallet address or pool login
    #[arg(short = 'u', long = "user", value_name = "WALLET")]
    user: Option<String>,

    /// Pool password (usually 'x' or a worker identifier)
    #[arg(short = 'p', long = "pass", value_name = "PASSWORD", default_value = "x")]
    pass: String,

    /// Rig identifier reported to the pool
    #[arg(long = "rig-id", value_name = "NAME")]
    rig_id: Option<String>,

    /// Force a TLS connection regardless of the URL scheme
    #[arg(long)]
    tls: bool,

    /// Treat the URL as a daemon-RPC endpoint instead of a pool
    #[arg(long)]
    daemon: bool,

    /// Keep-alive interval in seconds (0 disables)
    #[arg(long, value_name = "SECONDS")]
    keepalive: Option<i32>,
}

/// Build the pool list from the config file or, failing that, from flags.
/// Every path goes through the JSON codec so the binary exercises the same
/// decode the miner uses.
fn load_pools(args: &Args) -> Result<Vec<PoolConfig>> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&text)?;

        let pools = root
            .get("pools")
            .and_then(Value::as_array)
            .ok_or("config file has no \"pools\" array")?;

        return Ok(pools.iter().map(PoolConfig::from_value).collect());
    }

    let Some(url) = &args.url else {
        return Ok(Vec::new());
    };

    let object = json!({
        "url": url,
        "user": args.user,
        "pass": args.pass,
        "rig-id": args.rig_id,
        "tls": args.tls,
        "daemon": args.daemon,
        "keepalive": args.keepalive,
    });

    Ok(vec![PoolConfig::from_value(&object)])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let pools = load_pools(&args)?;

    if pools.is_empty() {
        eprintln!("❌ Error: no pools configured; pass --config FILE or -o URL");
        process::exit(1);
    }

    let mut usable = 0;
    for (index, pool) in pools.iter().enumerate() {
        if !pool.is_valid() {
            warn!(target: LOG_TARGET, "pool #{}: invalid or missing url, skipped", index + 1);
            continue;
        }

        info!(
            target: LOG_TARGET,
            "pool #{}: {} mode={:?} user={}",
            index + 1,
            pool.printable_name(),
            pool.mode(),
            pool.user(),
        );
        pool.print();

        if pool.is_enabled() {
            usable += 1;
        } else {
            warn!(
                target: LOG_TARGET,
                "pool #{}: disabled or unsupported by this build", index + 1
            );
        }
    }

    if usable == 0 {
        eprintln!("❌ Error: no usable pool in this configuration");
        process::exit(1);
    }

    info!(target: LOG_TARGET, "{} of {} pool(s) usable", usable, pools.len());
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Stand-alone config checker over the pool-connection core.
//   - Note: Flag-built pools go through the same JSON decode path as
//     config-file pools.
