// src/lib.rs

pub mod config;
pub mod services;
pub mod models;
pub mod handlers;
pub mod routes;

use std::sync::Arc;
use tokio::sync::Mutex;

use services::history::HistoryLedger;
use services::store::KeyValueStore;

/// The ledger as shared by the HTTP handlers. One lock serializes load, append and clear.
pub type SharedLedger = Arc<Mutex<HistoryLedger<Box<dyn KeyValueStore>>>>;

pub fn share_ledger(ledger: HistoryLedger<Box<dyn KeyValueStore>>) -> SharedLedger {
    Arc::new(Mutex::new(ledger))
}
