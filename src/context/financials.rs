//! Savings projections and investment defaults.
//!
//! Every default here is a nullish default: a field explicitly set to `0` is an
//! answer and is kept, only null or absent fields receive the computed value.

use crate::value::{non_null, Record, Value};
use serde::{Deserialize, Serialize};

pub const HOURLY_RATE: &str = "stundensatz_eur";
pub const QUICK_WIN_1_HOURS: &str = "qw1_monat_stunden";
pub const QUICK_WIN_2_HOURS: &str = "qw2_monat_stunden";

pub const MONTHLY_HOURS_SAVED: &str = "monatsersparnis_stunden";
pub const MONTHLY_EUR_SAVED: &str = "monatsersparnis_eur";
pub const YEARLY_HOURS_SAVED: &str = "jahresersparnis_stunden";
pub const YEARLY_EUR_SAVED: &str = "jahresersparnis_eur";

pub const CAPEX_CONSERVATIVE: &str = "capex_konservativ_eur";
pub const OPEX_CONSERVATIVE: &str = "opex_konservativ_eur";
pub const CAPEX_REALISTIC: &str = "capex_realistisch_eur";
pub const OPEX_REALISTIC: &str = "opex_realistisch_eur";

const MONTHS_PER_YEAR: f64 = 12.0;

/// Fallback figures used when the form leaves a financial input empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialDefaults {
    /// Hourly rate in EUR
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    /// Conservative one-off investment in EUR
    #[serde(default = "default_capex_conservative")]
    pub capex_conservative: f64,

    /// Conservative yearly running cost in EUR
    #[serde(default = "default_opex_conservative")]
    pub opex_conservative: f64,
}

fn default_hourly_rate() -> f64 {
    60.0
}

fn default_capex_conservative() -> f64 {
    2000.0
}

fn default_opex_conservative() -> f64 {
    600.0
}

impl Default for FinancialDefaults {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            capex_conservative: default_capex_conservative(),
            opex_conservative: default_opex_conservative(),
        }
    }
}

impl FinancialDefaults {
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("hourly_rate", self.hourly_rate),
            ("capex_conservative", self.capex_conservative),
            ("opex_conservative", self.opex_conservative),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                ));
            }
        }
        Ok(())
    }
}

/// Coerced field value, or `default` when the field is null or absent.
fn number_or(form: &Record, key: &str, default: f64) -> f64 {
    non_null(form, key).map(Value::to_number).unwrap_or(default)
}

/// Field value as supplied, or the computed figure when the field is null or absent.
fn override_or(form: &Record, key: &str, computed: f64) -> Value {
    non_null(form, key)
        .cloned()
        .unwrap_or(Value::Number(computed))
}

pub fn derive_financials(form: &Record, defaults: &FinancialDefaults, ctx: &mut Record) {
    let hourly_rate = number_or(form, HOURLY_RATE, defaults.hourly_rate);
    let quick_win_1 = number_or(form, QUICK_WIN_1_HOURS, 0.0);
    let quick_win_2 = number_or(form, QUICK_WIN_2_HOURS, 0.0);

    // NaN from a non-numeric input flows through every sum below.
    let monthly_hours = quick_win_1 + quick_win_2;
    let monthly_eur = monthly_hours * hourly_rate;

    ctx.insert(HOURLY_RATE.to_string(), Value::Number(hourly_rate));
    ctx.insert(QUICK_WIN_1_HOURS.to_string(), Value::Number(quick_win_1));
    ctx.insert(QUICK_WIN_2_HOURS.to_string(), Value::Number(quick_win_2));

    // Yearly figures derive from the computed monthly figures, not from a monthly override.
    let projections = [
        (MONTHLY_HOURS_SAVED, monthly_hours),
        (MONTHLY_EUR_SAVED, monthly_eur),
        (YEARLY_HOURS_SAVED, monthly_hours * MONTHS_PER_YEAR),
        (YEARLY_EUR_SAVED, monthly_eur * MONTHS_PER_YEAR),
    ];
    for (key, computed) in projections {
        ctx.insert(key.to_string(), override_or(form, key, computed));
    }

    let capex_conservative = number_or(form, CAPEX_CONSERVATIVE, defaults.capex_conservative);
    let opex_conservative = number_or(form, OPEX_CONSERVATIVE, defaults.opex_conservative);
    let capex_realistic = number_or(form, CAPEX_REALISTIC, capex_conservative);
    let opex_realistic = number_or(form, OPEX_REALISTIC, opex_conservative);

    ctx.insert(CAPEX_CONSERVATIVE.to_string(), Value::Number(capex_conservative));
    ctx.insert(OPEX_CONSERVATIVE.to_string(), Value::Number(opex_conservative));
    ctx.insert(CAPEX_REALISTIC.to_string(), Value::Number(capex_realistic));
    ctx.insert(OPEX_REALISTIC.to_string(), Value::Number(opex_realistic));
}
