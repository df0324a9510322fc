//! Business case summary derived from a built context.

use crate::context::financials::{CAPEX_REALISTIC, MONTHLY_EUR_SAVED, MONTHLY_HOURS_SAVED};
use crate::value::{Record, Value};
use serde::{Deserialize, Serialize};

pub const KEY_BREAK_EVEN_MONTHS: &str = "roi_break_even_monate";
pub const KEY_ROI_12M_PERCENT: &str = "roi_12m_prozent";
pub const KEY_INVESTMENT: &str = "roi_investition_eur";

/// Break-even and first-year return for the realistic investment scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessCase {
    pub monthly_hours: f64,
    pub monthly_value_eur: f64,
    pub investment_eur: f64,
    pub break_even_months: f64,
    pub roi_12m_percent: f64,
}

impl BusinessCase {
    /// Compute from the financial fields of a built context.
    pub fn from_context(ctx: &Record) -> Self {
        let number = |key: &str| ctx.get(key).map(Value::to_number).unwrap_or(0.0);

        let monthly_hours = number(MONTHLY_HOURS_SAVED);
        let monthly_value_eur = number(MONTHLY_EUR_SAVED);
        let investment_eur = number(CAPEX_REALISTIC);

        let break_even_months = if monthly_value_eur > 0.0 {
            investment_eur / monthly_value_eur
        } else {
            0.0
        };
        let roi_12m_percent =
            (monthly_value_eur * 12.0 - investment_eur) / investment_eur.max(1.0) * 100.0;

        Self {
            monthly_hours,
            monthly_value_eur,
            investment_eur,
            break_even_months,
            roi_12m_percent,
        }
    }

    /// Render as extras so the figures can be merged into a context.
    pub fn into_extras(self) -> Record {
        let mut extras = Record::new();
        extras.insert(
            KEY_BREAK_EVEN_MONTHS.to_string(),
            Value::Number(self.break_even_months),
        );
        extras.insert(
            KEY_ROI_12M_PERCENT.to_string(),
            Value::Number(self.roi_12m_percent),
        );
        extras.insert(KEY_INVESTMENT.to_string(), Value::Number(self.investment_eur));
        extras
    }
}
