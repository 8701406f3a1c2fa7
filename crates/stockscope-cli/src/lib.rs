//! # Stockscope Research Client
//!
//! Client side of stockscope: talks to the proxy over HTTP and turns the
//! relayed provider payloads into a research dashboard.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Typed calls to the proxy routes |
//! | [`session`] | Ticker selection with stale-response protection |
//! | [`debounce`] | Trailing debounce for search-as-you-type |
//! | [`dashboard`] | Dashboard assembly from the derived metrics |

pub mod client;
pub mod dashboard;
pub mod debounce;
pub mod session;

pub use client::{ClientError, ProxyClient, API_BASE_URL_VAR, DEFAULT_API_BASE_URL};
pub use dashboard::{Dashboard, Section, SectionFailure, SectionResults};
pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE};
pub use session::{ResearchSession, SelectOutcome};
