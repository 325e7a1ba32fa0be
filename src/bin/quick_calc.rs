// src/bin/quick_calc.rs
use log::{error, info};

use fincalc_suite::models::{
    CalculationInput, CompoundInterestInput, CompoundingFrequency, DurationUnit, EmiInput,
    FixedDepositInput, InflationInput, RecurringDepositInput, SimpleInterestInput, SipInput,
};
use fincalc_suite::services::calculations::calculate;
use fincalc_suite::services::formatting::history_fields;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Running every calculator on sample inputs...");

    let samples = vec![
        CalculationInput::SimpleInterest(SimpleInterestInput {
            principal: 10_000.0,
            annual_rate_percent: 5.0,
            time: 3.0,
            unit: DurationUnit::Years,
        }),
        CalculationInput::CompoundInterest(CompoundInterestInput {
            principal: 10_000.0,
            annual_rate_percent: 5.0,
            time: 3.0,
            unit: DurationUnit::Years,
            frequency: CompoundingFrequency::MONTHLY,
        }),
        CalculationInput::Emi(EmiInput {
            principal: 100_000.0,
            annual_rate_percent: 12.0,
            tenure: 12.0,
            unit: DurationUnit::Months,
        }),
        CalculationInput::FixedDeposit(FixedDepositInput {
            principal: 50_000.0,
            annual_rate_percent: 7.0,
            time: 18.0,
            unit: DurationUnit::Months,
            frequency: CompoundingFrequency::QUARTERLY,
        }),
        CalculationInput::RecurringDeposit(RecurringDepositInput {
            monthly_deposit: 1000.0,
            annual_rate_percent: 6.0,
            months: 12,
        }),
        CalculationInput::Sip(SipInput {
            monthly_investment: 5000.0,
            annual_rate_percent: 12.0,
            duration: 10.0,
            unit: DurationUnit::Years,
        }),
        CalculationInput::Inflation(InflationInput {
            current_amount: 100_000.0,
            annual_inflation_percent: 6.0,
            time: 10.0,
            unit: DurationUnit::Years,
        }),
    ];

    let mut failures = 0;
    for input in &samples {
        match calculate(input) {
            Ok(result) => {
                println!("{}", input.kind().label());
                for field in history_fields(input, &result) {
                    println!("  {:<24} {}", field.label, field.value);
                }
            }
            Err(e) => {
                error!("{} failed: {}", input.kind().label(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} calculators failed", failures);
    }
    Ok(())
}
