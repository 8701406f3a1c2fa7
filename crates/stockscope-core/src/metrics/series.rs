use serde::{Deserialize, Serialize};

use crate::FinancialStatementPeriod;

const BILLION: f64 = 1e9;

/// One bar of a yearly chart. `value` is in billions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: String,
    pub value: f64,
}

/// Revenue per period, oldest first. Periods arrive newest first.
pub fn build_revenue_series(periods: &[FinancialStatementPeriod]) -> Vec<ChartPoint> {
    build_series(periods, FinancialStatementPeriod::revenue)
}

/// Net income per period, oldest first. Losses stay negative.
pub fn build_profit_series(periods: &[FinancialStatementPeriod]) -> Vec<ChartPoint> {
    build_series(periods, FinancialStatementPeriod::net_income)
}

/// Revenue of the newest period in billions, zero when there is none.
pub fn latest_revenue_billions(periods: &[FinancialStatementPeriod]) -> f64 {
    periods
        .first()
        .map(|period| to_billions(period.revenue()))
        .unwrap_or(0.0)
}

/// Scale to billions, rounded to two decimals.
pub fn to_billions(value: f64) -> f64 {
    (value / BILLION * 100.0).round() / 100.0
}

fn build_series<F>(periods: &[FinancialStatementPeriod], metric: F) -> Vec<ChartPoint>
where
    F: Fn(&FinancialStatementPeriod) -> f64,
{
    periods
        .iter()
        .rev()
        .map(|period| ChartPoint {
            year: period.year_label(),
            value: to_billions(metric(period)),
        })
        .collect()
}
