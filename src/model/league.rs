use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::client::FootballApi;
use crate::error::{Error, Result};
use crate::gateway::Transport;
use crate::model::country::Country;
use crate::model::fixture::Fixture;
use crate::model::{req_i64, req_str};

/// The `league` sub-object of a leagues listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub logo: String,
}

/// A league with its embedded country and the season years the provider
/// covers for it. Live fixtures fetched through [`League::live_fixtures`]
/// are kept on the league.
#[derive(Debug, Clone)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub logo: String,
    pub country: Country,
    pub seasons: Vec<i64>,
    pub live: Vec<Fixture>,
}

impl League {
    /// Look a league up by id. The provider must return exactly one entry;
    /// the embedded country object is reused directly rather than fetched
    /// again. Season years come from the entry's `seasons` array, which is
    /// what makes [`League::standings`] callable afterwards.
    pub fn by_id<T: Transport>(api: &FootballApi<T>, id: i64) -> Result<League> {
        let envelope = api.fetch("leagues", &[("id", id.to_string())])?;
        let entries = envelope.entries()?;
        if entries.len() > 1 {
            return Err(Error::Ambiguous { entity: "league", query: id.to_string() });
        }
        let entry = entries
            .first()
            .ok_or_else(|| Error::NotFound { entity: "league", query: id.to_string() })?;
        let league = entry
            .get("league")
            .ok_or_else(|| Error::MissingField("league".into()))?;
        let country_fields = entry
            .get("country")
            .ok_or_else(|| Error::MissingField("country".into()))?;
        let seasons = entry
            .get("seasons")
            .and_then(Value::as_array)
            .map(|seasons| {
                seasons
                    .iter()
                    .filter_map(|season| season.get("year").and_then(Value::as_i64))
                    .collect()
            })
            .unwrap_or_default();
        Ok(League {
            id: req_i64(league, "id")?,
            name: req_str(league, "name")?,
            kind: req_str(league, "type")?,
            logo: req_str(league, "logo")?,
            country: Country::from_fields(country_fields)?,
            seasons,
            live: Vec::new(),
        })
    }

    /// Fetch the raw standings document for one season. The season must be
    /// among this league's known season years; anything else is rejected
    /// before touching the network.
    pub fn standings<T: Transport>(&self, api: &FootballApi<T>, season: i64) -> Result<Value> {
        if !self.seasons.contains(&season) {
            return Err(Error::InvalidArgument(format!(
                "season {} isn't a valid season for league {}",
                season, self.id,
            )));
        }
        api.fetch_document(
            "standings",
            &[("league", self.id.to_string()), ("season", season.to_string())],
        )
    }

    /// Fetch the fixtures currently being played in this league, building
    /// each one in full by id (one extra call per fixture). The result is
    /// stored on the league and returned.
    pub fn live_fixtures<T: Transport>(
        &mut self,
        api: &FootballApi<T>,
        timezone: Option<&str>,
    ) -> Result<&[Fixture]> {
        let mut params = vec![("live", "all".to_string())];
        if let Some(tz) = timezone {
            params.push(("timezone", tz.to_string()));
        }
        params.push(("league", self.id.to_string()));
        let envelope = api.fetch("fixtures", &params)?;
        let entries = envelope.entries()?;
        info!(league = self.id, count = entries.len(), "live fixtures in league");
        let mut fixtures = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = entry
                .get("fixture")
                .map(|fixture| req_i64(fixture, "id"))
                .ok_or_else(|| Error::MissingField("fixture".into()))??;
            fixtures.push(Fixture::by_id(api, id)?);
        }
        self.live = fixtures;
        Ok(&self.live)
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "League: {}, Id: {}, Type: {}, Country: {}",
            self.name, self.id, self.kind, self.country.name,
        )
    }
}
