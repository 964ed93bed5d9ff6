use thiserror::Error;

use crate::gateway::Diagnostic;

/// Everything that can go wrong between issuing a request and handing back a
/// domain object. All variants are terminal for the operation that raised
/// them; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered 204 No Content, which this provider only does when
    /// something is wrong on their side.
    #[error("API-Football server fault (204 No Content) for {}", .diagnostic.url)]
    Server { diagnostic: Diagnostic },

    /// Any status outside {200, 204}.
    #[error("unexpected API status {status} for {}", .diagnostic.url)]
    UnknownApi { status: u16, diagnostic: Diagnostic },

    /// The request never produced a usable response (DNS, TLS, I/O).
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A by-name or by-id lookup matched nothing.
    #[error("no {entity} matched `{query}`")]
    NotFound { entity: &'static str, query: String },

    /// A lookup that must match exactly one record matched several.
    #[error("`{query}` matched more than one {entity}")]
    Ambiguous { entity: &'static str, query: String },

    /// A caller-supplied value was rejected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload lacked a key the mapping requires.
    #[error("missing field `{0}` in response payload")]
    MissingField(String),

    /// A payload had an unexpected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
