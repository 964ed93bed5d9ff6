use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::FootballApi;
use crate::error::{Error, Result};
use crate::gateway::Transport;
use crate::model::req_str;

/// A country the provider covers. Leaf entity; name, code, and flag URL are
/// all required whenever one is built from a raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub flag: String,
}

impl Country {
    /// Look a country up by name. The provider must return exactly one
    /// match: zero is `NotFound`, several is `Ambiguous`.
    pub fn from_name<T: Transport>(api: &FootballApi<T>, name: &str) -> Result<Country> {
        let envelope = api.fetch("countries", &[("name", name.to_string())])?;
        match envelope.results {
            0 => Err(Error::NotFound { entity: "country", query: name.to_string() }),
            1 => {
                let entry = envelope.entries()?.first().ok_or_else(|| {
                    Error::MalformedResponse("results is 1 but response is empty".into())
                })?;
                Self::from_fields(entry)
            }
            _ => Err(Error::Ambiguous { entity: "country", query: name.to_string() }),
        }
    }

    /// Build a country from an already-fetched object, e.g. the `country`
    /// sub-object embedded in a league payload. No network call.
    pub fn from_fields(fields: &Value) -> Result<Country> {
        Ok(Country {
            name: req_str(fields, "name")?,
            code: req_str(fields, "code")?,
            flag: req_str(fields, "flag")?,
        })
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "country: {}, code: {}", self.name, self.code)
    }
}

/// One record of the countries listing. `code` and `flag` are optional so
/// projection modes can blank them; blanked fields stay out of serialized
/// output entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl CountryRecord {
    /// Apply a listing projection mode. `basic` keeps only the name,
    /// `with-flag` name and flag, `with-code` name and code. `full` and any
    /// unrecognized mode leave the record untouched, matching the provider
    /// client this crate is compatible with.
    pub(crate) fn project(mut self, mode: &str) -> CountryRecord {
        match mode {
            "basic" => {
                self.code = None;
                self.flag = None;
            }
            "with-flag" => self.code = None,
            "with-code" => self.flag = None,
            _ => {}
        }
        self
    }
}
