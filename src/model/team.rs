use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::Result;
use crate::model::statistics::{StatValue, TeamFixtureStatistics};

/// Bare team reference as it appears inside statistics blocks and other
/// embedded payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, logo_url: {}",
            self.id,
            self.name,
            self.logo.as_deref().unwrap_or("None"),
        )
    }
}

/// One side's entry in a fixture payload's `teams` sub-object. The winner
/// flag is null while a match is in play.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SideEntry {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub winner: Option<bool>,
}

/// A team as it took part in one specific fixture: identity, outcome so far,
/// and its statistics block. Only ever built as part of a `Fixture`.
#[derive(Debug, Clone)]
pub struct TeamInFixture {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub winner: Option<bool>,
    pub goals: Option<i64>,
    pub statistics: TeamFixtureStatistics,
}

impl TeamInFixture {
    pub(crate) fn new(
        side: SideEntry,
        goals: Option<i64>,
        stats: &HashMap<String, StatValue>,
    ) -> Result<TeamInFixture> {
        Ok(TeamInFixture {
            id: side.id,
            name: side.name,
            logo: side.logo,
            winner: side.winner,
            goals,
            statistics: TeamFixtureStatistics::from_map(stats)?,
        })
    }
}

impl fmt::Display for TeamInFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, goals: {:?}, winner: {:?}",
            self.id, self.name, self.goals, self.winner,
        )
    }
}
