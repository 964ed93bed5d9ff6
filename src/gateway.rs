use std::fmt;

use serde_json::Value;
use tracing::{error, info_span};

use crate::error::{Error, Result};

/// Request/response context captured when the upstream answers with a fault
/// status. Attached to [`Error::Server`] and [`Error::UnknownApi`] so callers
/// can log it; nothing is printed as a side effect of normal operation.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "Params: {:?}", self.params)?;
        writeln!(f, "Headers: {:?}", self.headers)?;
        write!(f, "Body: {}", self.body)
    }
}

/// One completed HTTP exchange: status, response headers, and the raw body.
/// The body is kept as text and parsed into JSON on demand.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    fn into_diagnostic(self, params: &[(&str, String)]) -> Diagnostic {
        Diagnostic {
            url: self.url,
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            headers: self.headers,
            body: self.body,
        }
    }
}

/// The one capability the rest of the crate needs from HTTP: send a GET with
/// headers and query parameters, get back status plus body. Entities and the
/// client borrow a gateway over this trait instead of inheriting transport
/// behavior, which also lets tests substitute a canned implementation.
pub trait Transport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<RawResponse>;
}

/// Production transport over a shared blocking `ureq` agent.
#[derive(Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        // Non-2xx statuses must come back as responses, not errors, so the
        // gateway can capture their bodies for diagnostics.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        UreqTransport { agent }
    }
}

impl Transport for UreqTransport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<RawResponse> {
        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        for (name, value) in params {
            request = request.query(*name, value);
        }
        let response = {
            let _span = info_span!("api_fetch", url = %url).entered();
            request.call()?
        };
        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or("<non-utf8>").to_string(),
                )
            })
            .collect();
        let body = response.into_body().read_to_string()?;
        Ok(RawResponse {
            status,
            url: url.to_string(),
            headers: response_headers,
            body,
        })
    }
}

/// Wraps outbound GETs with the provider's two credential headers and
/// classifies the response status. A call either yields a 200 response or an
/// error; there are no retries and no timeout handling beyond the
/// transport's own defaults.
#[derive(Debug)]
pub struct Gateway<T: Transport> {
    transport: T,
    api_key: String,
    api_host: String,
}

impl<T: Transport> Gateway<T> {
    pub fn new(api_key: String, api_host: String, transport: T) -> Self {
        Gateway { transport, api_key, api_host }
    }

    /// Perform an authenticated GET and classify the status: 200 passes the
    /// response through, 204 is an upstream fault, anything else is an
    /// unknown API error. Fault responses are logged and their full context
    /// attached to the returned error.
    pub fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse> {
        let headers = [
            ("x-rapidapi-key", self.api_key.as_str()),
            ("x-rapidapi-host", self.api_host.as_str()),
        ];
        let response = self.transport.get(url, &headers, params)?;
        match response.status {
            200 => Ok(response),
            204 => {
                let diagnostic = response.into_diagnostic(params);
                error!(%diagnostic, "API-Football server fault (204 No Content)");
                Err(Error::Server { diagnostic })
            }
            status => {
                let diagnostic = response.into_diagnostic(params);
                error!(status, %diagnostic, "unexpected API status");
                Err(Error::UnknownApi { status, diagnostic })
            }
        }
    }
}
