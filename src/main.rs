use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use vpnstatus::configuration::{Settings, DEFAULT_CONFIG_PATH};
use vpnstatus::registry::{self, KEYS};
use vpnstatus::{Registry, VpnStatus};

/// Ask VPN providers whether this connection goes through them.
#[derive(Debug, Parser)]
#[command(name = "vpnstatus", version, about)]
struct Cli {
    /// Provider keys to check (default: every provider enabled in the config)
    providers: Vec<String>,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log requests and results
    #[arg(short, long)]
    verbose: bool,

    /// List known provider keys and exit
    #[arg(long)]
    list: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    key: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a VpnStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "vpnstatus",
            if cli.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .parse_default_env()
        .init();

    if cli.list {
        for key in KEYS {
            println!("{:<24}{}", key, registry::display_name(key).unwrap_or(key));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let settings = Settings::load(&cli.config)?;
    let keys: Vec<String> = if cli.providers.is_empty() {
        settings
            .enabled_keys()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        cli.providers.iter().map(|k| k.to_lowercase()).collect()
    };

    let checks = Registry::http(&settings.client)?;
    let results = checks.probe_many(&keys).await;
    let all_ok = results.iter().all(|(_, r)| r.is_ok());

    if cli.json {
        let reports: Vec<Report<'_>> = results
            .iter()
            .map(|(key, res)| Report {
                key,
                ok: res.is_ok(),
                status: res.as_ref().ok(),
                error: res.as_ref().err().map(|e| e.to_string()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (key, res) in &results {
            match res {
                Ok(status) => println!("{}", status),
                Err(e) => println!(
                    "{}: ERROR - {}",
                    registry::display_name(key).unwrap_or(key.as_str()),
                    e
                ),
            }
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
