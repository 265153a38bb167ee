use vpnstatus::configuration::ClientSettings;
use vpnstatus::Registry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let key = std::env::args().nth(1).unwrap_or_else(|| "mullvad".to_string());
    let registry = Registry::http(&ClientSettings::default())?;

    println!("Checking {}...", key);
    match registry.probe(&key).await {
        Ok(status) => println!("{}", status),
        Err(e) => println!("could not determine status: {}", e),
    }
    Ok(())
}
