//! Business case output.

use crate::business_case::BusinessCase;
use crate::error::ContextError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_business_case_text(case: &BusinessCase) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Business case", "Value"]);
    table.add_row(vec![
        "Time saved".to_string(),
        format!("{:.0} h/month", case.monthly_hours),
    ]);
    table.add_row(vec![
        "Value".to_string(),
        format!("{:.0} EUR/month", case.monthly_value_eur),
    ]);
    table.add_row(vec![
        "Investment".to_string(),
        format!("{:.0} EUR", case.investment_eur),
    ]);
    table.add_row(vec![
        "Break-even".to_string(),
        format!("{:.1} months", case.break_even_months),
    ]);
    table.add_row(vec![
        "ROI (12 months)".to_string(),
        format!("{:.0}%", case.roi_12m_percent),
    ]);
    table.to_string()
}

pub fn format_business_case_json(case: &BusinessCase) -> Result<String, ContextError> {
    Ok(serde_json::to_string_pretty(case)?)
}
