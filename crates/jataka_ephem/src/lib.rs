//! Ephemeris gateway boundary.
//!
//! The chart engine never computes planetary positions itself; it queries
//! an injected [`EphemerisGateway`] for sidereal body positions and house
//! cusps at a UT Julian Day. Production deployments back the trait with a
//! real astronomical library loaded from `EphemerisConfig::data_path`;
//! tests use the deterministic [`FixtureGateway`].
//!
//! Gateway output is an explicit, versioned schema ([`BodyPosition`],
//! [`HouseFrame`]); anything shape-wise wrong in an implementation
//! surfaces as a typed [`GatewayError`] at this boundary, never as a
//! missing field downstream.

pub mod body;
pub mod config;
pub mod error;
pub mod fixture;
pub mod gateway;

pub use body::{ALL_QUERY_BODIES, Body};
pub use config::{Ayanamsa, EphemerisConfig, HouseSystem, NodeKind};
pub use error::{GatewayError, GatewayOp};
pub use fixture::FixtureGateway;
pub use gateway::{BodyPosition, EphemerisGateway, HouseFrame};
