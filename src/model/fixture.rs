use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::client::FootballApi;
use crate::error::{Error, Result};
use crate::gateway::Transport;
use crate::model::league::League;
use crate::model::statistics::StatValue;
use crate::model::team::{SideEntry, Team, TeamInFixture};

/// Goals scored per period, null for periods not yet played.
#[derive(Debug, Clone, Deserialize)]
pub struct Periods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<i64>,
}

/// The `fixture` sub-object of a fixtures payload entry.
#[derive(Debug, Clone, Deserialize)]
struct FixtureMeta {
    id: i64,
    referee: Option<String>,
    date: String,
    timestamp: i64,
    periods: Periods,
    venue: Venue,
    status: FixtureStatus,
}

#[derive(Debug, Clone, Deserialize)]
struct LeagueRef {
    id: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct Sides {
    home: SideEntry,
    away: SideEntry,
}

#[derive(Debug, Clone, Deserialize)]
struct Goals {
    home: Option<i64>,
    away: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
struct StatPair {
    #[serde(rename = "type")]
    kind: String,
    value: StatValue,
}

/// One team's block in the flat `statistics` array: a team reference plus
/// its sequence of `{type, value}` pairs.
#[derive(Debug, Clone, Deserialize)]
struct StatisticsBlock {
    team: Team,
    statistics: Vec<StatPair>,
}

/// Everything a single fixtures payload entry carries that this crate maps.
#[derive(Debug, Clone, Deserialize)]
struct FixtureEntry {
    fixture: FixtureMeta,
    league: LeagueRef,
    teams: Sides,
    goals: Goals,
    #[serde(default)]
    statistics: Vec<StatisticsBlock>,
}

/// One scheduled or played match: metadata, its league (fetched by id while
/// the fixture is built), and both teams with their statistics.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub id: i64,
    pub referee: Option<String>,
    pub date: DateTime<FixedOffset>,
    pub timestamp: i64,
    pub periods: Periods,
    pub venue: Venue,
    pub status: FixtureStatus,
    pub league: League,
    pub home_team: TeamInFixture,
    pub away_team: TeamInFixture,
}

impl Fixture {
    /// Look a fixture up by id, using the client's default timezone for the
    /// reported times. Construction is all-or-nothing: the nested league
    /// fetch or any mapping failure fails the whole fixture.
    pub fn by_id<T: Transport>(api: &FootballApi<T>, id: i64) -> Result<Fixture> {
        let envelope = api.fetch(
            "fixtures",
            &[
                ("timezone", api.default_timezone().to_string()),
                ("id", id.to_string()),
            ],
        )?;
        let entry = envelope
            .entries()?
            .first()
            .ok_or_else(|| Error::NotFound { entity: "fixture", query: id.to_string() })?
            .clone();
        let entry: FixtureEntry = crate::model::from_value(entry, "fixture entry")?;
        Self::assemble(api, entry)
    }

    fn assemble<T: Transport>(api: &FootballApi<T>, entry: FixtureEntry) -> Result<Fixture> {
        let meta = entry.fixture;
        let date = DateTime::parse_from_rfc3339(&meta.date)
            .map_err(|e| Error::MalformedResponse(format!("fixture date `{}`: {}", meta.date, e)))?;
        let league = League::by_id(api, entry.league.id)?;
        let (home_stats, away_stats) =
            partition_statistics(entry.statistics, entry.teams.home.id)?;
        let home_team = TeamInFixture::new(entry.teams.home, entry.goals.home, &home_stats)?;
        let away_team = TeamInFixture::new(entry.teams.away, entry.goals.away, &away_stats)?;
        Ok(Fixture {
            id: meta.id,
            referee: meta.referee,
            date,
            timestamp: meta.timestamp,
            periods: meta.periods,
            venue: meta.venue,
            status: meta.status,
            league,
            home_team,
            away_team,
        })
    }
}

/// Split the flat statistics array into (home, away) maps of stat type name
/// to value. A block belongs to home when its team id equals the home team
/// id, otherwise to away. Exactly two blocks, one per side, are required.
fn partition_statistics(
    blocks: Vec<StatisticsBlock>,
    home_id: i64,
) -> Result<(HashMap<String, StatValue>, HashMap<String, StatValue>)> {
    if blocks.len() != 2 {
        return Err(Error::MalformedResponse(format!(
            "expected exactly two statistics blocks, got {}",
            blocks.len(),
        )));
    }
    let mut home = None;
    let mut away = None;
    for block in blocks {
        let stats: HashMap<String, StatValue> = block
            .statistics
            .into_iter()
            .map(|pair| (pair.kind, pair.value))
            .collect();
        if block.team.id == home_id {
            home = Some(stats);
        } else {
            away = Some(stats);
        }
    }
    match (home, away) {
        (Some(home), Some(away)) => Ok((home, away)),
        _ => Err(Error::MalformedResponse(
            "statistics blocks do not cover both teams".into(),
        )),
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Fixture -> Id: {}, Referee: {}, Date: {}, Periods: {:?}, {:?}",
            self.id,
            self.referee.as_deref().unwrap_or("None"),
            self.date,
            self.periods.first,
            self.periods.second,
        )?;
        writeln!(f, "League -> {}", self.league)?;
        writeln!(
            f,
            "Venue -> {} ({})",
            self.venue.name.as_deref().unwrap_or("None"),
            self.venue.city.as_deref().unwrap_or("None"),
        )?;
        writeln!(f, "Status -> {} ({})", self.status.long, self.status.short)?;
        writeln!(f, "Home Team -> {}", self.home_team)?;
        writeln!(f, "Home Team Statistics -> {}", self.home_team.statistics)?;
        writeln!(f, "Away Team -> {}", self.away_team)?;
        write!(f, "Away Team Statistics -> {}", self.away_team.statistics)
    }
}
