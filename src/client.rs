use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::gateway::{Gateway, Transport, UreqTransport};
use crate::model::country::CountryRecord;
use crate::model::fixture::Fixture;
use crate::model::league::LeagueSummary;
use crate::model::{Envelope, from_value, req_i64};

const BASE_URL: &str = "https://v3.football.api-sports.io/";

/// Timezone used for fixture lookups until [`FootballApi::set_timezone`]
/// records a different one.
const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Blocking client for the API-Football v3 API. Owns the credentialed
/// gateway and the default timezone for fixture lookups; entities borrow it
/// for their own fetches.
#[derive(Debug)]
pub struct FootballApi<T: Transport = UreqTransport> {
    gateway: Gateway<T>,
    timezone: Option<String>,
}

impl FootballApi<UreqTransport> {
    /// Client over the real HTTP transport. The two strings are the
    /// provider's API key and host, attached as headers to every call.
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self::with_transport(api_key, api_host, UreqTransport::default())
    }
}

impl<T: Transport> FootballApi<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
        transport: T,
    ) -> Self {
        FootballApi {
            gateway: Gateway::new(api_key.into(), api_host.into(), transport),
            timezone: None,
        }
    }

    /// One authenticated GET against an endpoint path, unwrapped into the
    /// API's `{results, response}` envelope.
    pub(crate) fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Envelope> {
        let response = self.gateway.get(&format!("{}{}", BASE_URL, path), params)?;
        from_value(response.json()?, "envelope")
    }

    /// Same as [`Self::fetch`] but handing back the whole JSON document,
    /// for endpoints whose payload is returned raw (standings).
    pub(crate) fn fetch_document(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        self.gateway.get(&format!("{}{}", BASE_URL, path), params)?.json()
    }

    /// Timezone applied to fixture lookups.
    pub fn default_timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// All timezone identifiers the provider accepts.
    pub fn list_timezones(&self) -> Result<Vec<String>> {
        let envelope = self.fetch("timezone", &[])?;
        from_value(envelope.response, "timezone list")
    }

    /// Record the default timezone for subsequent fixture lookups. The value
    /// must be one the provider lists; anything else is rejected.
    pub fn set_timezone(&mut self, timezone: &str) -> Result<()> {
        let known = self.list_timezones()?;
        if !known.iter().any(|tz| tz == timezone) {
            return Err(Error::InvalidArgument(format!(
                "{} doesn't exist in this API, use list_timezones to see the possible values",
                timezone,
            )));
        }
        self.timezone = Some(timezone.to_string());
        Ok(())
    }

    /// All countries the provider covers. `mode` selects the projected
    /// fields: `full` everything, `basic` name only, `with-flag` name and
    /// flag, `with-code` name and code. Any other value falls through to the
    /// full records.
    pub fn list_countries(&self, mode: &str) -> Result<Vec<CountryRecord>> {
        let envelope = self.fetch("countries", &[])?;
        let records: Vec<CountryRecord> = from_value(envelope.response, "countries list")?;
        Ok(records.into_iter().map(|record| record.project(mode)).collect())
    }

    /// Summaries of every league, taken from the `league` sub-object of each
    /// listing entry.
    pub fn list_leagues(&self) -> Result<Vec<LeagueSummary>> {
        let envelope = self.fetch("leagues", &[])?;
        envelope
            .entries()?
            .iter()
            .map(|entry| {
                let league = entry
                    .get("league")
                    .ok_or_else(|| Error::MissingField("league".into()))?;
                from_value(league.clone(), "league summary")
            })
            .collect()
    }

    /// Every fixture currently being played, each built in full by id (one
    /// extra call per fixture).
    pub fn all_live_fixtures(&self) -> Result<Vec<Fixture>> {
        let envelope = self.fetch("fixtures", &[("live", "all".to_string())])?;
        let entries = envelope.entries()?;
        info!(count = entries.len(), "live fixtures");
        let mut fixtures = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = entry
                .get("fixture")
                .map(|fixture| req_i64(fixture, "id"))
                .ok_or_else(|| Error::MissingField("fixture".into()))??;
            fixtures.push(Fixture::by_id(self, id)?);
        }
        Ok(fixtures)
    }
}
