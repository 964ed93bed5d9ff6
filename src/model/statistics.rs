use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single statistic value as the API sends it: usually an integer, a
/// percentage string for possession and pass accuracy, or null when the
/// provider has no data for that stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{}", n),
            StatValue::Float(x) => write!(f, "{}", x),
            StatValue::Text(s) => write!(f, "{}", s),
            StatValue::Null => write!(f, "None"),
        }
    }
}

/// The sixteen statistic keys the provider reports per team per fixture, in
/// the order they appear in the payload.
pub const REQUIRED_KEYS: [&str; 16] = [
    "Shots on Goal",
    "Shots off Goal",
    "Total Shots",
    "Blocked Shots",
    "Shots insidebox",
    "Shots outsidebox",
    "Fouls",
    "Corner Kicks",
    "Offsides",
    "Ball Possession",
    "Yellow Cards",
    "Red Cards",
    "Goalkeeper Saves",
    "Total passes",
    "Passes accurate",
    "Passes %",
];

/// One team's full statistics block for one fixture. Built from the
/// partitioned stat map; every one of the sixteen keys must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamFixtureStatistics {
    pub shots_on_goal: StatValue,
    pub shots_off_goal: StatValue,
    pub total_shots: StatValue,
    pub blocked_shots: StatValue,
    pub shots_insidebox: StatValue,
    pub shots_outsidebox: StatValue,
    pub fouls: StatValue,
    pub corner_kicks: StatValue,
    pub offsides: StatValue,
    pub ball_possession: StatValue,
    pub yellow_cards: StatValue,
    pub red_cards: StatValue,
    pub goalkeeper_saves: StatValue,
    pub total_passes: StatValue,
    pub passes_accurate: StatValue,
    pub passes_percentage: StatValue,
}

impl TeamFixtureStatistics {
    /// Build from a map of stat type name to value. Fails with
    /// `MissingField` naming the first absent key, in [`REQUIRED_KEYS`]
    /// order.
    pub fn from_map(stats: &HashMap<String, StatValue>) -> Result<TeamFixtureStatistics> {
        let get = |key: &str| -> Result<StatValue> {
            stats
                .get(key)
                .cloned()
                .ok_or_else(|| Error::MissingField(key.to_string()))
        };
        for key in REQUIRED_KEYS {
            get(key)?;
        }
        Ok(TeamFixtureStatistics {
            shots_on_goal: get("Shots on Goal")?,
            shots_off_goal: get("Shots off Goal")?,
            total_shots: get("Total Shots")?,
            blocked_shots: get("Blocked Shots")?,
            shots_insidebox: get("Shots insidebox")?,
            shots_outsidebox: get("Shots outsidebox")?,
            fouls: get("Fouls")?,
            corner_kicks: get("Corner Kicks")?,
            offsides: get("Offsides")?,
            ball_possession: get("Ball Possession")?,
            yellow_cards: get("Yellow Cards")?,
            red_cards: get("Red Cards")?,
            goalkeeper_saves: get("Goalkeeper Saves")?,
            total_passes: get("Total passes")?,
            passes_accurate: get("Passes accurate")?,
            passes_percentage: get("Passes %")?,
        })
    }
}

impl fmt::Display for TeamFixtureStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TotalShots: {}, ShotsOnGoal: {}, ShotsOffGoal: {}, BlockedShots: {}, \
             ShotsInsideBox: {}, ShotsOutsideBox: {}, Fouls: {}, CornerKicks: {}, \
             Offsides: {}, BallPossession: {}, YellowCards: {}, RedCards: {}, \
             GoalkeeperSaves: {}, TotalPasses: {}, PassesAccurate: {}, PassesPercentage: {}",
            self.total_shots,
            self.shots_on_goal,
            self.shots_off_goal,
            self.blocked_shots,
            self.shots_insidebox,
            self.shots_outsidebox,
            self.fouls,
            self.corner_kicks,
            self.offsides,
            self.ball_possession,
            self.yellow_cards,
            self.red_cards,
            self.goalkeeper_saves,
            self.total_passes,
            self.passes_accurate,
            self.passes_percentage,
        )
    }
}
