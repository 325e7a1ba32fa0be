// src/bin/history_dump.rs
use dotenv::dotenv;
use log::info;

use fincalc_suite::config::AppConfig;
use fincalc_suite::services::history::HistoryLedger;
use fincalc_suite::services::store::FileStore;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    info!("Reading history from {}", config.history_dir.display());

    let ledger = HistoryLedger::with_options(
        FileStore::new(config.history_dir.clone()),
        config.history_key.clone(),
        None,
    );

    if ledger.is_empty() {
        println!("No calculations yet");
        return Ok(());
    }

    for entry in ledger.entries() {
        println!("{} ({})", entry.calculator, entry.timestamp);
        for field in &entry.fields {
            println!("  {}: {}", field.label, field.value);
        }
    }
    println!("{} entries", ledger.len());
    Ok(())
}
