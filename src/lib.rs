//! Blocking, typed client for the API-Football v3 sports statistics API.
//!
//! [`FootballApi`] wraps authenticated GETs to the provider, unwraps the
//! `{results, response}` envelope, and maps payloads onto domain objects:
//! [`Country`], [`League`], [`Fixture`] with its two [`TeamInFixture`]
//! sides and their [`TeamFixtureStatistics`]. Every operation is a single
//! synchronous round trip except fixture construction, which fetches its
//! league by id, and the live-fixture listings, which build each fixture in
//! full (one extra call per entry).

pub mod client;
pub mod error;
pub mod gateway;
pub mod model;

pub use client::FootballApi;
pub use error::{Error, Result};
pub use gateway::{Diagnostic, RawResponse, Transport, UreqTransport};
pub use model::Envelope;
pub use model::country::{Country, CountryRecord};
pub use model::fixture::Fixture;
pub use model::league::{League, LeagueSummary};
pub use model::statistics::{StatValue, TeamFixtureStatistics};
pub use model::team::{Team, TeamInFixture};
