// src/services/formatting.rs
//! Display strings for calculator results and the labelled field maps stored
//! in history entries. Amounts are always rendered as en-US dollars.

use crate::models::{
    CalculationInput, CalculationResult, DurationUnit, HistoryField,
};

/// `1234.5` -> `$1,234.50`, `-5.0` -> `-$5.00`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to $0.00, which en-US renders without a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn format_period(value: f64, unit: DurationUnit) -> String {
    format!("{} {}", value, unit.as_str())
}

fn months_of(value: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Months => value,
        DurationUnit::Years => value * 12.0,
    }
}

/// Ordered field map recorded in the history ledger for one calculation.
///
/// Returns an empty map when the result does not belong to the input's
/// calculator.
pub fn history_fields(input: &CalculationInput, result: &CalculationResult) -> Vec<HistoryField> {
    match (input, result) {
        (CalculationInput::SimpleInterest(i), CalculationResult::SimpleInterest(r)) => vec![
            HistoryField::new("Principal", format_currency(i.principal)),
            HistoryField::new("Interest Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new("Time Period", format_period(i.time, i.unit)),
            HistoryField::new("Interest Earned", format_currency(r.interest)),
            HistoryField::new("Total Amount", format_currency(r.total)),
        ],
        (CalculationInput::CompoundInterest(i), CalculationResult::CompoundInterest(r)) => vec![
            HistoryField::new("Principal", format_currency(i.principal)),
            HistoryField::new("Interest Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new("Time Period", format_period(i.time, i.unit)),
            HistoryField::new("Compounding Frequency", i.frequency.label()),
            HistoryField::new("Interest Earned", format_currency(r.interest)),
            HistoryField::new("Total Amount", format_currency(r.total)),
        ],
        (CalculationInput::Emi(i), CalculationResult::Emi(r)) => vec![
            HistoryField::new("Loan Amount", format_currency(i.principal)),
            HistoryField::new("Interest Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new(
                "Loan Tenure",
                format_period(months_of(i.tenure, i.unit), DurationUnit::Months),
            ),
            HistoryField::new("Monthly EMI", format_currency(r.emi)),
            HistoryField::new("Total Interest", format_currency(r.total_interest)),
            HistoryField::new("Total Payment", format_currency(r.total_payment)),
        ],
        (CalculationInput::FixedDeposit(i), CalculationResult::FixedDeposit(r)) => vec![
            HistoryField::new("Deposit Amount", format_currency(i.principal)),
            HistoryField::new("Interest Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new("Tenure", format_period(i.time, i.unit)),
            HistoryField::new("Compounding Frequency", i.frequency.label()),
            HistoryField::new("Maturity Amount", format_currency(r.maturity)),
            HistoryField::new("Interest Earned", format_currency(r.interest)),
        ],
        (CalculationInput::RecurringDeposit(i), CalculationResult::RecurringDeposit(r)) => vec![
            HistoryField::new("Monthly Deposit", format_currency(i.monthly_deposit)),
            HistoryField::new("Interest Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new("Tenure", format!("{} months", i.months)),
            HistoryField::new("Total Deposited", format_currency(r.total_deposit)),
            HistoryField::new("Maturity Amount", format_currency(r.maturity)),
            HistoryField::new("Interest Earned", format_currency(r.interest)),
        ],
        (CalculationInput::Sip(i), CalculationResult::Sip(r)) => vec![
            HistoryField::new("Monthly Investment", format_currency(i.monthly_investment)),
            HistoryField::new("Expected Return Rate", format_percent(i.annual_rate_percent)),
            HistoryField::new(
                "Duration",
                format_period(months_of(i.duration, i.unit), DurationUnit::Months),
            ),
            HistoryField::new("Total Amount Invested", format_currency(r.total_invested)),
            HistoryField::new("Future Value", format_currency(r.future_value)),
            HistoryField::new("Wealth Gained", format_currency(r.wealth_gained)),
        ],
        (CalculationInput::Inflation(i), CalculationResult::Inflation(r)) => vec![
            HistoryField::new("Current Amount", format_currency(i.current_amount)),
            HistoryField::new("Inflation Rate", format_percent(i.annual_inflation_percent)),
            HistoryField::new("Time Period", format_period(i.time, i.unit)),
            HistoryField::new("Future Value Needed", format_currency(r.future_value)),
            HistoryField::new("Purchasing Power Loss", format_currency(r.purchasing_power_loss)),
        ],
        _ => Vec::new(),
    }
}
