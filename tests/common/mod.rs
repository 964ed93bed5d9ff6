#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use football_api::{RawResponse, Result, Transport};

/// One canned response: matched by endpoint path plus required query
/// parameters, so one stub can serve the nested-call chains.
pub struct StubRoute {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
    pub status: u16,
    pub body: String,
}

pub fn route(
    path: &'static str,
    params: &[(&'static str, &str)],
    status: u16,
    body: serde_json::Value,
) -> StubRoute {
    StubRoute {
        path,
        params: params.iter().map(|(k, v)| (*k, (*v).to_string())).collect(),
        status,
        body: body.to_string(),
    }
}

/// Envelope body around a payload, the shape every endpoint answers with.
pub fn envelope(results: i64, response: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "results": results, "response": response })
}

pub fn load_sample(name: &str) -> serde_json::Value {
    let path = format!("{}/tests/{}", env!("CARGO_MANIFEST_DIR"), name);
    let body = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path, e));
    serde_json::from_str(&body).expect("sample is not valid JSON")
}

/// Transport that answers from canned routes, counting calls and recording
/// the headers of the most recent request.
pub struct StubTransport {
    routes: Vec<StubRoute>,
    calls: AtomicUsize,
    last_headers: Mutex<Vec<(String, String)>>,
}

/// Install a fmt subscriber once so `RUST_LOG` controls log output from the
/// code under test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl StubTransport {
    pub fn new(routes: Vec<StubRoute>) -> Self {
        init_tracing();
        StubTransport {
            routes,
            calls: AtomicUsize::new(0),
            last_headers: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_headers(&self) -> Vec<(String, String)> {
        self.last_headers.lock().unwrap().clone()
    }
}

impl StubTransport {
    fn handle(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_headers.lock().unwrap() = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let matched = self.routes.iter().find(|route| {
            url.ends_with(&format!("/{}", route.path))
                && route
                    .params
                    .iter()
                    .all(|(k, v)| params.iter().any(|(pk, pv)| pk == k && pv == v))
        });
        match matched {
            Some(route) => Ok(RawResponse {
                status: route.status,
                url: url.to_string(),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: route.body.clone(),
            }),
            None => panic!("no stub route for {} with params {:?}", url, params),
        }
    }
}

impl Transport for StubTransport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<RawResponse> {
        self.handle(url, headers, params)
    }
}

// Tests usually hand the client a borrow so they can keep inspecting the
// call count and captured headers afterwards.
impl Transport for &StubTransport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<RawResponse> {
        self.handle(url, headers, params)
    }
}
