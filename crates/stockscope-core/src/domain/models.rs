use serde::{Deserialize, Serialize};

/// One hit of a ticker search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub currency_name: Option<String>,
}

/// Company reference data for a single ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub sic_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub list_date: Option<String>,
}

/// A reported value with its unit, e.g. `{ "value": 3.9e11, "unit": "USD" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Income statement lines used by the charts. Every line may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    #[serde(default)]
    pub revenues: Option<DataPoint>,
    #[serde(default)]
    pub net_income_loss: Option<DataPoint>,
    #[serde(default)]
    pub gross_profit: Option<DataPoint>,
    #[serde(default)]
    pub basic_earnings_per_share: Option<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default)]
    pub income_statement: Option<IncomeStatement>,
}

/// One filing period of the financials endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatementPeriod {
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub fiscal_period: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub financials: Financials,
}

impl FinancialStatementPeriod {
    /// Total revenue in reported units, zero when not reported.
    pub fn revenue(&self) -> f64 {
        self.income_line(|statement| statement.revenues.as_ref())
    }

    /// Net income (loss) in reported units, zero when not reported.
    pub fn net_income(&self) -> f64 {
        self.income_line(|statement| statement.net_income_loss.as_ref())
    }

    pub fn gross_profit(&self) -> f64 {
        self.income_line(|statement| statement.gross_profit.as_ref())
    }

    pub fn basic_eps(&self) -> f64 {
        self.income_line(|statement| statement.basic_earnings_per_share.as_ref())
    }

    /// Chart label for the period: the fiscal year, else the year of `end_date`, else empty.
    pub fn year_label(&self) -> String {
        if let Some(year) = self.fiscal_year.as_deref().map(str::trim) {
            if !year.is_empty() {
                return year.to_owned();
            }
        }
        self.end_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .unwrap_or_default()
            .to_owned()
    }

    fn income_line<F>(&self, select: F) -> f64
    where
        F: Fn(&IncomeStatement) -> Option<&DataPoint>,
    {
        self.financials
            .income_statement
            .as_ref()
            .and_then(select)
            .map(|point| point.value)
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }
}

/// Previous-session bar as returned by the `prev` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    #[serde(rename = "c", default)]
    pub close: f64,
    #[serde(rename = "o", default)]
    pub open: f64,
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    #[serde(rename = "v", default)]
    pub volume: Option<f64>,
    /// Session start, unix milliseconds.
    #[serde(rename = "t", default)]
    pub timestamp_ms: Option<i64>,
}

/// OHLCV bar of the aggregates endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateBar {
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v", default)]
    pub volume: f64,
}

/// Provider list envelope: `{ "status": "OK", "results": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Provider single-object envelope: `{ "status": "OK", "results": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsItem<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub results: Option<T>,
}
