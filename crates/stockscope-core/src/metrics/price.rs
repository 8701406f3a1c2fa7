use serde::{Deserialize, Serialize};

use crate::PriceSnapshot;

/// Day move derived from the previous-session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub current_price: f64,
    pub previous_close: f64,
    pub change: f64,
    /// Percentage with two decimals, e.g. `"1.34"` or `"-5.00"`.
    pub change_percent: String,
}

/// Current price is the snapshot close; the snapshot open stands in for the previous close.
///
/// The percentage is `"0.00"` whenever the reference price is not positive.
pub fn compute_price_change(snapshot: &PriceSnapshot) -> PriceChange {
    let current_price = snapshot.close;
    let previous_close = snapshot.open;
    let change = current_price - previous_close;
    let change_percent = if previous_close > 0.0 {
        format!("{:.2}", change / previous_close * 100.0)
    } else {
        String::from("0.00")
    };

    PriceChange {
        current_price,
        previous_close,
        change,
        change_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(open: f64, close: f64) -> PriceSnapshot {
        PriceSnapshot {
            open,
            close,
            ..PriceSnapshot::default()
        }
    }

    #[test]
    fn computes_gain() {
        let change = compute_price_change(&snapshot(187.0, 189.5));
        assert_eq!(change.current_price, 189.5);
        assert_eq!(change.previous_close, 187.0);
        assert_eq!(change.change, 2.5);
        assert_eq!(change.change_percent, "1.34");
    }

    #[test]
    fn computes_loss() {
        let change = compute_price_change(&snapshot(200.0, 190.0));
        assert_eq!(change.change, -10.0);
        assert_eq!(change.change_percent, "-5.00");
    }

    #[test]
    fn zero_reference_price_yields_flat_percent() {
        let change = compute_price_change(&snapshot(0.0, 12.0));
        assert_eq!(change.change, 12.0);
        assert_eq!(change.change_percent, "0.00");
    }
}
