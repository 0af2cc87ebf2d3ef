//! Civil birth input and Julian Day conversion.
//!
//! A chart computation starts from a validated [`BirthMoment`] — civil
//! calendar date, local clock time, timezone offset, and geographic
//! coordinates. The only instant the rest of the engine ever sees is the
//! UT Julian Day produced by [`BirthMoment::to_jd_ut`]; civil local time
//! is never passed to an ephemeris lookup.

pub mod birth;
pub mod error;
pub mod julian;

pub use birth::BirthMoment;
pub use error::TimeError;
pub use julian::{calendar_to_jd, jd_to_calendar};
