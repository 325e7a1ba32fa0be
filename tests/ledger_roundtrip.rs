use fincalc_suite::models::{
    CalculationInput, DurationUnit, EmiInput, HistoryEntry, RecurringDepositInput,
};
use fincalc_suite::services::calculations::calculate;
use fincalc_suite::services::formatting::history_fields;
use fincalc_suite::services::history::{HistoryLedger, DEFAULT_HISTORY_KEY};
use fincalc_suite::services::store::{FileStore, KeyValueStore};

fn record(ledger: &mut HistoryLedger<FileStore>, input: CalculationInput) {
    let result = calculate(&input).unwrap();
    ledger
        .append(input.kind().label(), history_fields(&input, &result))
        .unwrap();
}

#[test]
fn fresh_ledger_sees_entries_newest_first() {
    let dir = tempfile::tempdir().unwrap();

    let mut ledger = HistoryLedger::new(FileStore::new(dir.path()));
    record(
        &mut ledger,
        CalculationInput::RecurringDeposit(RecurringDepositInput {
            monthly_deposit: 1000.0,
            annual_rate_percent: 6.0,
            months: 12,
        }),
    );
    record(
        &mut ledger,
        CalculationInput::Emi(EmiInput {
            principal: 100_000.0,
            annual_rate_percent: 12.0,
            tenure: 1.0,
            unit: DurationUnit::Years,
        }),
    );
    let written: Vec<HistoryEntry> = ledger.entries().to_vec();

    let reopened = HistoryLedger::new(FileStore::new(dir.path()));
    assert_eq!(reopened.entries(), written.as_slice());

    let first = &reopened.entries()[0];
    assert_eq!(first.calculator, "EMI Calculator");
    assert_eq!(first.fields[0].value, "$100,000.00");
    assert_eq!(first.fields[2].value, "12 months");
    assert_eq!(first.fields[3].value, "$8,884.88");

    let second = &reopened.entries()[1];
    assert_eq!(second.calculator, "Recurring Deposit");
    let maturity = second
        .fields
        .iter()
        .find(|f| f.label == "Maturity Amount")
        .unwrap();
    assert_eq!(maturity.value, "$12,390.00");
}

#[test]
fn clear_then_load_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut ledger = HistoryLedger::new(store.clone());
    record(
        &mut ledger,
        CalculationInput::RecurringDeposit(RecurringDepositInput {
            monthly_deposit: 10.0,
            annual_rate_percent: 1.0,
            months: 2,
        }),
    );
    assert!(store.get(DEFAULT_HISTORY_KEY).unwrap().is_some());

    ledger.clear().unwrap();
    assert!(store.get(DEFAULT_HISTORY_KEY).unwrap().is_none());
    assert!(HistoryLedger::new(store).is_empty());
}

#[test]
fn persisted_blob_is_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut ledger = HistoryLedger::with_options(store.clone(), "history", None);
    ledger.append("Simple Interest", vec![]).unwrap();

    let blob = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["calculator"], "Simple Interest");
    assert!(entries[0]["timestamp"].is_string());
    assert!(entries[0]["fields"].as_array().unwrap().is_empty());
}
