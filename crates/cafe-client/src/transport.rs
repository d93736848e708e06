//! HTTP seam between the order flow and the backend.

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use cafe_model::OrderRequest;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Backend operations used by menu loading and order submission.
pub trait OrderTransport {
    /// `GET /menu`: the raw attribute records.
    fn fetch_records(&self) -> Result<Vec<Value>, TransportError>;

    /// `POST /orders`: the decoded response body. Non-2xx is an error.
    fn post_order(&self, request: &OrderRequest) -> Result<Value, TransportError>;
}

/// [`OrderTransport`] over a blocking `reqwest` client.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn user_agent() -> String {
        format!("cafe-client/{}", env!("CARGO_PKG_VERSION"))
    }
}

/// Turn a non-success response into [`TransportError::Status`].
fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}

impl OrderTransport for HttpTransport {
    fn fetch_records(&self) -> Result<Vec<Value>, TransportError> {
        let url = self.config.endpoint("menu");
        debug!(%url, "fetching menu records");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, Self::user_agent())
            .header(ACCEPT, "application/json")
            .send()?;
        let records: Vec<Value> = check_status(response)?.json()?;

        debug!(records = records.len(), "menu records received");
        Ok(records)
    }

    fn post_order(&self, request: &OrderRequest) -> Result<Value, TransportError> {
        let url = self.config.endpoint("orders");
        debug!(%url, items = request.items.len(), "posting order");

        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, Self::user_agent())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;
        let response = check_status(response)?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(status, bytes = body.len(), "order response received");
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
