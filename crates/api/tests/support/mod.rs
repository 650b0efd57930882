#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode},
    Router,
};
use organisations::{ConceptResponse, ConceptsClient};
use organisations_api::{create_router, AppState, ServiceInfo};
use std::sync::{Arc, Mutex};
use tower::ServiceExt as _;

pub const CACHE_CONTROL: &str = "max-age=3600, public";

/// Canned concepts API answer.
#[derive(Clone)]
pub enum Upstream {
    Respond(u16, String),
    Fail(String),
}

/// Records every call and answers with a canned response.
pub struct StubConceptsClient {
    upstream: Upstream,
    healthy: bool,
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ConceptsClient for StubConceptsClient {
    async fn get_concept(
        &self,
        uuid: &str,
        transaction_id: &str,
    ) -> organisations::Result<ConceptResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((uuid.to_string(), transaction_id.to_string()));

        match &self.upstream {
            Upstream::Respond(status, body) => Ok(ConceptResponse {
                status: StatusCode::from_u16(*status).unwrap(),
                body: body.clone().into_bytes(),
            }),
            Upstream::Fail(message) => Err(organisations::Error::Upstream(message.clone())),
        }
    }

    async fn check_connectivity(&self) -> organisations::Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(organisations::Error::Upstream("concepts API unreachable".into()))
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub client: Arc<StubConceptsClient>,
}

impl TestApp {
    pub fn new(upstream: Upstream) -> Self {
        Self::with_health(upstream, true)
    }

    pub fn with_health(upstream: Upstream, healthy: bool) -> Self {
        let client = Arc::new(StubConceptsClient {
            upstream,
            healthy,
            calls: Mutex::new(Vec::new()),
        });
        let state = AppState::new(
            client.clone(),
            HeaderValue::from_static(CACHE_CONTROL),
            ServiceInfo {
                system_code: "public-org-api".into(),
                name: "Public Organisations API".into(),
                panic_guide: "https://example.org/runbook".into(),
            },
        );

        Self {
            router: create_router(Arc::new(state)),
            client,
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.client.calls.lock().unwrap().clone()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
        self.request(Method::GET, uri, &[]).await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> (StatusCode, HeaderMap, Bytes) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, headers, body)
    }
}

pub fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

pub fn organisation_concept(uuid: &str, related: serde_json::Value) -> String {
    serde_json::json!({
        "id": format!("http://api.ft.com/things/{uuid}"),
        "apiUrl": format!("http://api.ft.com/concepts/{uuid}"),
        "type": "http://www.ft.com/ontology/organisation/Organisation",
        "prefLabel": "Google Inc",
        "related": related,
    })
    .to_string()
}

pub fn related(predicate: &str, uuid: &str, label: &str) -> serde_json::Value {
    serde_json::json!({
        "predicate": format!("http://www.ft.com/ontology/{predicate}"),
        "concept": {
            "id": format!("http://api.ft.com/things/{uuid}"),
            "apiUrl": format!("http://api.ft.com/concepts/{uuid}"),
            "type": "http://www.ft.com/ontology/organisation/Organisation",
            "prefLabel": label,
        }
    })
}
