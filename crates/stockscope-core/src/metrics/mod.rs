//! # Derived Metrics
//!
//! Pure transformations from provider payloads to chart-ready values. No I/O
//! and no shared state: identical input always yields identical output.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`format_currency`] | `$2.30T` / `$1.50B` / `$4.20M` / `$12,345` |
//! | [`build_revenue_series`] | revenue per year in billions, oldest first |
//! | [`build_profit_series`] | net income per year in billions, oldest first |
//! | [`compute_price_change`] | price, reference price, change, percent |
//! | [`project_dcf`] | five-year illustrative FCF / DCF projection |
//! | [`synthesize_segments`] | placeholder three-way revenue split |
//! | [`growth_color_band`] | treemap color category |

mod dcf;
mod format;
mod price;
mod segments;
mod series;

pub use dcf::{project_dcf, DcfPoint, DISCOUNT_FACTOR, FCF_MARGIN, GROWTH_RATE, PROJECTION_YEARS};
pub use format::format_currency;
pub use price::{compute_price_change, PriceChange};
pub use segments::{growth_color_band, synthesize_segments, GrowthBand, Segment, SEGMENT_SPLITS};
pub use series::{
    build_profit_series, build_revenue_series, latest_revenue_billions, to_billions, ChartPoint,
};
