// src/services/calculations.rs
use log::debug;
use thiserror::Error;

use crate::models::{
    CalculationInput, CalculationResult, CompoundInterestInput, CompoundingFrequency,
    DurationUnit, EmiInput, EmiResult, FixedDepositInput, FixedDepositResult, InflationInput,
    InflationResult, InterestResult, RecurringDepositInput, RecurringDepositResult,
    SimpleInterestInput, SipInput, SipResult,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Compounding frequency must be at least once per year")]
    InvalidFrequency,

    #[error("Calculation of {field} did not produce a finite value")]
    NonFiniteResult { field: &'static str },
}

pub type Result<T> = std::result::Result<T, CalcError>;

fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult { field })
    }
}

fn to_years(time: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Months => time / 12.0,
        DurationUnit::Years => time,
    }
}

fn to_months(time: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Months => time,
        DurationUnit::Years => time * 12.0,
    }
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / (12.0 * 100.0)
}

// (1 + r)^n - 1 without losing tiny rates to `1.0 + r` rounding
fn growth_minus_one(r: f64, months: f64) -> f64 {
    (months * r.ln_1p()).exp_m1()
}

// principal * (1 + r/n)^(n*t), shared by compound interest and fixed deposits
fn compound_amount(
    principal: f64,
    annual_rate_percent: f64,
    time: f64,
    unit: DurationUnit,
    frequency: CompoundingFrequency,
) -> Result<f64> {
    let principal = require_non_negative("principal", principal)?;
    let rate = require_non_negative("annual_rate_percent", annual_rate_percent)? / 100.0;
    let time = require_non_negative("time", time)?;
    if frequency.per_year() == 0 {
        return Err(CalcError::InvalidFrequency);
    }

    let n = f64::from(frequency.per_year());
    let years = to_years(time, unit);
    let amount = principal * (1.0 + rate / n).powf(n * years);
    require_finite("amount", amount)
}

pub fn simple_interest(input: &SimpleInterestInput) -> Result<InterestResult> {
    let principal = require_non_negative("principal", input.principal)?;
    let rate = require_non_negative("annual_rate_percent", input.annual_rate_percent)? / 100.0;
    let time = require_non_negative("time", input.time)?;

    let interest = principal * rate * to_years(time, input.unit);
    let total = principal + interest;

    Ok(InterestResult {
        interest: require_finite("interest", interest)?,
        total: require_finite("total", total)?,
    })
}

pub fn compound_interest(input: &CompoundInterestInput) -> Result<InterestResult> {
    let amount = compound_amount(
        input.principal,
        input.annual_rate_percent,
        input.time,
        input.unit,
        input.frequency,
    )?;

    Ok(InterestResult {
        interest: amount - input.principal,
        total: amount,
    })
}

/// Equated monthly installment for an amortized loan.
///
/// A rate too small to register over the tenure (zero included) reduces the
/// payment to `principal / months`; the closed form would divide zero by zero.
pub fn emi(input: &EmiInput) -> Result<EmiResult> {
    let principal = require_non_negative("principal", input.principal)?;
    let annual_rate = require_non_negative("annual_rate_percent", input.annual_rate_percent)?;
    let tenure = require_non_negative("tenure", input.tenure)?;

    let months = to_months(tenure, input.unit);
    if months == 0.0 {
        return Err(CalcError::InvalidInput { field: "tenure", value: input.tenure });
    }

    let r = monthly_rate(annual_rate);
    let accrued = growth_minus_one(r, months);
    let emi = if accrued == 0.0 {
        principal / months
    } else {
        principal * r * (1.0 + accrued) / accrued
    };
    let emi = require_finite("emi", emi)?;

    let total_payment = emi * months;
    // interest is never negative for r >= 0; anything below zero is rounding
    let total_interest = (total_payment - principal).max(0.0);

    Ok(EmiResult {
        emi,
        total_interest: require_finite("total_interest", total_interest)?,
        total_payment: require_finite("total_payment", total_payment)?,
    })
}

pub fn fixed_deposit(input: &FixedDepositInput) -> Result<FixedDepositResult> {
    let maturity = compound_amount(
        input.principal,
        input.annual_rate_percent,
        input.time,
        input.unit,
        input.frequency,
    )?;

    Ok(FixedDepositResult {
        maturity,
        interest: maturity - input.principal,
    })
}

/// Recurring deposit maturity using the notional-interest approximation:
/// each installment earns simple interest for the months it stays deposited.
pub fn recurring_deposit(input: &RecurringDepositInput) -> Result<RecurringDepositResult> {
    let deposit = require_non_negative("monthly_deposit", input.monthly_deposit)?;
    let annual_rate = require_non_negative("annual_rate_percent", input.annual_rate_percent)?;
    let months = f64::from(input.months);

    let total_deposit = deposit * months;
    let interest = deposit * (months * (months + 1.0) / 2.0) * (annual_rate / 100.0 / 12.0);
    let maturity = total_deposit + interest;

    Ok(RecurringDepositResult {
        maturity: require_finite("maturity", maturity)?,
        total_deposit: require_finite("total_deposit", total_deposit)?,
        interest: require_finite("interest", interest)?,
    })
}

/// Future value of a monthly SIP with contributions at the start of each month.
pub fn sip(input: &SipInput) -> Result<SipResult> {
    let monthly = require_non_negative("monthly_investment", input.monthly_investment)?;
    let annual_rate = require_non_negative("annual_rate_percent", input.annual_rate_percent)?;
    let duration = require_non_negative("duration", input.duration)?;

    let months = to_months(duration, input.unit);
    let r = monthly_rate(annual_rate);
    let accrued = growth_minus_one(r, months);
    let future_value = if accrued == 0.0 {
        monthly * months
    } else {
        monthly * (accrued / r) * (1.0 + r)
    };
    let future_value = require_finite("future_value", future_value)?;
    let total_invested = monthly * months;

    Ok(SipResult {
        future_value,
        total_invested,
        wealth_gained: (future_value - total_invested).max(0.0),
    })
}

pub fn inflation(input: &InflationInput) -> Result<InflationResult> {
    let current = require_non_negative("current_amount", input.current_amount)?;
    let rate =
        require_non_negative("annual_inflation_percent", input.annual_inflation_percent)? / 100.0;
    let time = require_non_negative("time", input.time)?;

    let future_value = current * (1.0 + rate).powf(to_years(time, input.unit));
    let future_value = require_finite("future_value", future_value)?;

    Ok(InflationResult {
        future_value,
        purchasing_power_loss: future_value - current,
    })
}

pub fn calculate(input: &CalculationInput) -> Result<CalculationResult> {
    debug!("Running {} calculator", input.kind());
    let result = match input {
        CalculationInput::SimpleInterest(i) => CalculationResult::SimpleInterest(simple_interest(i)?),
        CalculationInput::CompoundInterest(i) => {
            CalculationResult::CompoundInterest(compound_interest(i)?)
        }
        CalculationInput::Emi(i) => CalculationResult::Emi(emi(i)?),
        CalculationInput::FixedDeposit(i) => CalculationResult::FixedDeposit(fixed_deposit(i)?),
        CalculationInput::RecurringDeposit(i) => {
            CalculationResult::RecurringDeposit(recurring_deposit(i)?)
        }
        CalculationInput::Sip(i) => CalculationResult::Sip(sip(i)?),
        CalculationInput::Inflation(i) => CalculationResult::Inflation(inflation(i)?),
    };
    Ok(result)
}
