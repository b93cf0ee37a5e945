//! # almanac-rules
//!
//! Calendar-fact resolution for table generation: US DST transition
//! instants and NYSE observed market holidays.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"DstSource::resolve_dst()"| B["DstTransition"]
//!     A -->|"HolidaySource::resolve_holidays()"| C["Vec of Holiday"]
//!     D["DstRule"] -->|"date_for()"| E["NaiveDate"]
//!     E -->|"tzdata localization"| B
//!     F["nth_weekday_of_month()"] --> E
//!     G["easter_sunday()"] -->|"- 2 days"| H["good_friday()"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_rules::{DstSource, HolidaySource, NyseCalendar, UsDstRules};
//! use chrono_tz::America::New_York;
//!
//! let transition = UsDstRules::new(New_York).resolve_dst(2024)?;
//! assert_eq!(transition.start().date_naive().to_string(), "2024-03-10");
//!
//! let holidays = NyseCalendar::new().resolve_holidays(2024)?;
//! assert_eq!(holidays.len(), 10);
//! ```
//!
//! Both resolvers are pure functions of the year for a fixed rule
//! database version; the [`DstSource`]/[`HolidaySource`] traits exist so
//! downstream code can substitute fixtures in tests.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | Nth-weekday-of-month date arithmetic |
//! | `easter` | Gregorian computus |
//! | `dst` | US DST transition rules and tzdata localization |
//! | `holidays` | NYSE observed-holiday calendar |
//! | `source` | Capability traits over the rule oracles |
//! | `error` | Error types |

mod dst;
mod easter;
mod error;
mod holidays;
mod source;
mod weekday;

pub use dst::{DstRule, DstTransition, UsDstRules, US_RULE_FIRST_YEAR};
pub use easter::{easter_sunday, good_friday};
pub use error::RulesError;
pub use holidays::{Holiday, NyseCalendar, JUNETEENTH_FIRST_YEAR, NYSE_RULE_FIRST_YEAR};
pub use source::{DstSource, HolidaySource};
pub use weekday::{last_weekday_of_month, nth_weekday_of_month, observed_date};
