use serde::{Deserialize, Serialize};

use crate::FinancialStatementPeriod;

/// Annual revenue growth applied to the projection.
pub const GROWTH_RATE: f64 = 1.05;
/// Share of revenue assumed to convert to free cash flow.
pub const FCF_MARGIN: f64 = 0.15;
/// Per-year discount factor.
pub const DISCOUNT_FACTOR: f64 = 0.97;
pub const PROJECTION_YEARS: i32 = 5;

/// One projected year. Amounts are in billions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfPoint {
    pub year: String,
    pub revenue: f64,
    pub fcf: f64,
    pub dcf: f64,
}

/// Illustrative five-year cash-flow projection seeded from the newest period's revenue.
///
/// For year `n` in `1..=5`: `revenue = base * 1.05^n`, `fcf = revenue * 0.15`,
/// `dcf = fcf * 0.97^n`. Returns an empty projection when there is no period
/// or the newest period carries no usable year.
pub fn project_dcf(periods: &[FinancialStatementPeriod]) -> Vec<DcfPoint> {
    let Some(latest) = periods.first() else {
        return Vec::new();
    };
    let Ok(base_year) = latest.year_label().parse::<i32>() else {
        return Vec::new();
    };
    let base_revenue = latest.revenue() / 1e9;

    (1..=PROJECTION_YEARS)
        .map(|n| {
            let revenue = base_revenue * GROWTH_RATE.powi(n);
            let fcf = revenue * FCF_MARGIN;
            DcfPoint {
                year: (base_year + n).to_string(),
                revenue,
                fcf,
                dcf: fcf * DISCOUNT_FACTOR.powi(n),
            }
        })
        .collect()
}
