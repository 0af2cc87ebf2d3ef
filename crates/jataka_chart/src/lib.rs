//! Vedic birth chart assembly.
//!
//! Orchestrates the full derivation: a JSON-shaped birth record is
//! validated into a [`BirthMoment`], converted to a UT Julian Day, and
//! pushed through the injected ephemeris gateway to produce one
//! immutable [`VedicChart`] — planets, houses, Moon nakshatra, tithi,
//! and the three-level Vimshottari timeline. Any stage failure aborts
//! the whole assembly with the failing stage named; partial charts are
//! never returned.
//!
//! The engine holds no state between invocations. Charts for different
//! birth moments may be computed concurrently against one gateway.

pub mod assemble;
pub mod error;
pub mod input;
pub mod json;
pub mod resolve;

pub use assemble::{VedicChart, compute_chart, compute_chart_from_record};
pub use error::{ChartError, ChartErrorKind, ChartStage, ChartWarning};
pub use input::{BirthRecord, TimezoneSpec};
pub use json::{ChartJson, chart_to_json, chart_to_json_string};
pub use resolve::resolve_positions;

pub use jataka_time::BirthMoment;
