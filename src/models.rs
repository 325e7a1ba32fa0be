// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Months,
    Years,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }
}

/// Number of times per year interest is capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundingFrequency(pub u32);

impl CompoundingFrequency {
    pub const ANNUALLY: Self = Self(1);
    pub const SEMI_ANNUALLY: Self = Self(2);
    pub const QUARTERLY: Self = Self(4);
    pub const MONTHLY: Self = Self(12);
    pub const DAILY: Self = Self(365);

    pub fn per_year(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> String {
        match self.0 {
            1 => "Annually".to_string(),
            2 => "Semi-Annually".to_string(),
            4 => "Quarterly".to_string(),
            12 => "Monthly".to_string(),
            365 => "Daily".to_string(),
            n => format!("{} times per year", n),
        }
    }
}

impl Default for CompoundingFrequency {
    fn default() -> Self {
        Self::ANNUALLY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    SimpleInterest,
    CompoundInterest,
    Emi,
    FixedDeposit,
    RecurringDeposit,
    Sip,
    Inflation,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 7] = [
        CalculatorKind::SimpleInterest,
        CalculatorKind::CompoundInterest,
        CalculatorKind::Emi,
        CalculatorKind::FixedDeposit,
        CalculatorKind::RecurringDeposit,
        CalculatorKind::Sip,
        CalculatorKind::Inflation,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::SimpleInterest => "simple_interest",
            CalculatorKind::CompoundInterest => "compound_interest",
            CalculatorKind::Emi => "emi",
            CalculatorKind::FixedDeposit => "fixed_deposit",
            CalculatorKind::RecurringDeposit => "recurring_deposit",
            CalculatorKind::Sip => "sip",
            CalculatorKind::Inflation => "inflation",
        }
    }

    /// Label used for history entries.
    pub fn label(&self) -> &'static str {
        match self {
            CalculatorKind::SimpleInterest => "Simple Interest",
            CalculatorKind::CompoundInterest => "Compound Interest",
            CalculatorKind::Emi => "EMI Calculator",
            CalculatorKind::FixedDeposit => "Fixed Deposit",
            CalculatorKind::RecurringDeposit => "Recurring Deposit",
            CalculatorKind::Sip => "SIP Calculator",
            CalculatorKind::Inflation => "Inflation Calculator",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// Inputs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub time: f64,
    pub unit: DurationUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub time: f64,
    pub unit: DurationUnit,
    #[serde(default)]
    pub frequency: CompoundingFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure: f64,
    pub unit: DurationUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub time: f64,
    pub unit: DurationUnit,
    #[serde(default)]
    pub frequency: CompoundingFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    pub monthly_deposit: f64,
    pub annual_rate_percent: f64,
    pub months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: f64,
    pub annual_rate_percent: f64,
    pub duration: f64,
    pub unit: DurationUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationInput {
    pub current_amount: f64,
    pub annual_inflation_percent: f64,
    pub time: f64,
    pub unit: DurationUnit,
}

/// Raw request for one calculator. The `calculator` tag selects the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationInput {
    SimpleInterest(SimpleInterestInput),
    CompoundInterest(CompoundInterestInput),
    Emi(EmiInput),
    FixedDeposit(FixedDepositInput),
    RecurringDeposit(RecurringDepositInput),
    Sip(SipInput),
    Inflation(InflationInput),
}

fn clamp(value: f64) -> f64 {
    if value < 0.0 { 0.0 } else { value }
}

impl CalculationInput {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationInput::SimpleInterest(_) => CalculatorKind::SimpleInterest,
            CalculationInput::CompoundInterest(_) => CalculatorKind::CompoundInterest,
            CalculationInput::Emi(_) => CalculatorKind::Emi,
            CalculationInput::FixedDeposit(_) => CalculatorKind::FixedDeposit,
            CalculationInput::RecurringDeposit(_) => CalculatorKind::RecurringDeposit,
            CalculationInput::Sip(_) => CalculatorKind::Sip,
            CalculationInput::Inflation(_) => CalculatorKind::Inflation,
        }
    }

    /// Negative field values become zero, mirroring what the input widgets do.
    pub fn clamped(mut self) -> Self {
        match &mut self {
            CalculationInput::SimpleInterest(i) => {
                i.principal = clamp(i.principal);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
                i.time = clamp(i.time);
            }
            CalculationInput::CompoundInterest(i) => {
                i.principal = clamp(i.principal);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
                i.time = clamp(i.time);
            }
            CalculationInput::Emi(i) => {
                i.principal = clamp(i.principal);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
                i.tenure = clamp(i.tenure);
            }
            CalculationInput::FixedDeposit(i) => {
                i.principal = clamp(i.principal);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
                i.time = clamp(i.time);
            }
            CalculationInput::RecurringDeposit(i) => {
                i.monthly_deposit = clamp(i.monthly_deposit);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
            }
            CalculationInput::Sip(i) => {
                i.monthly_investment = clamp(i.monthly_investment);
                i.annual_rate_percent = clamp(i.annual_rate_percent);
                i.duration = clamp(i.duration);
            }
            CalculationInput::Inflation(i) => {
                i.current_amount = clamp(i.current_amount);
                i.annual_inflation_percent = clamp(i.annual_inflation_percent);
                i.time = clamp(i.time);
            }
        }
        self
    }
}

// Results

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub interest: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositResult {
    pub maturity: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositResult {
    pub maturity: f64,
    pub total_deposit: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub future_value: f64,
    pub total_invested: f64,
    pub wealth_gained: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    pub future_value: f64,
    pub purchasing_power_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    SimpleInterest(InterestResult),
    CompoundInterest(InterestResult),
    Emi(EmiResult),
    FixedDeposit(FixedDepositResult),
    RecurringDeposit(RecurringDepositResult),
    Sip(SipResult),
    Inflation(InflationResult),
}

// History

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryField {
    pub label: String,
    pub value: String,
}

impl HistoryField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        HistoryField {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub calculator: String,
    pub timestamp: String,
    pub fields: Vec<HistoryField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_input_deserializes() {
        let input: CalculationInput = serde_json::from_value(json!({
            "calculator": "fixed_deposit",
            "principal": 5000.0,
            "annual_rate_percent": 7.0,
            "time": 18.0,
            "unit": "months",
            "frequency": 4
        }))
        .unwrap();

        assert_eq!(input.kind(), CalculatorKind::FixedDeposit);
        match input {
            CalculationInput::FixedDeposit(fd) => {
                assert_eq!(fd.unit, DurationUnit::Months);
                assert_eq!(fd.frequency, CompoundingFrequency::QUARTERLY);
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn frequency_defaults_to_annual() {
        let input: CompoundInterestInput = serde_json::from_value(json!({
            "principal": 100.0,
            "annual_rate_percent": 5.0,
            "time": 1.0,
            "unit": "years"
        }))
        .unwrap();
        assert_eq!(input.frequency, CompoundingFrequency::ANNUALLY);
    }

    #[test]
    fn clamped_zeroes_negative_fields() {
        let input = CalculationInput::Sip(SipInput {
            monthly_investment: -500.0,
            annual_rate_percent: 12.0,
            duration: -3.0,
            unit: DurationUnit::Years,
        })
        .clamped();

        assert_eq!(
            input,
            CalculationInput::Sip(SipInput {
                monthly_investment: 0.0,
                annual_rate_percent: 12.0,
                duration: 0.0,
                unit: DurationUnit::Years,
            })
        );
    }

    #[test]
    fn result_serializes_as_its_fields() {
        let value = serde_json::to_value(CalculationResult::CompoundInterest(InterestResult {
            interest: 50.0,
            total: 1050.0,
        }))
        .unwrap();
        assert_eq!(value, json!({ "interest": 50.0, "total": 1050.0 }));
    }

    #[test]
    fn frequency_labels() {
        assert_eq!(CompoundingFrequency::SEMI_ANNUALLY.label(), "Semi-Annually");
        assert_eq!(CompoundingFrequency::DAILY.label(), "Daily");
        assert_eq!(CompoundingFrequency(52).label(), "52 times per year");
    }
}
