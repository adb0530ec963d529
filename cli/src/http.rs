use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use service::api::{HttpTransport, TransportResponse};

/// Request timeout; a call still pending after this duration fails.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP transport backed by `reqwest`.  One client is built per
/// process; it could be reused for further calls, though this program
/// issues exactly one request per invocation.
pub struct BlockingTransport {
    client: reqwest::blocking::Client,
}

impl BlockingTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for BlockingTransport {
    fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<TransportResponse> {
        let mut req = self.client.post(url).body(body);
        for (k, v) in headers {
            req = req.header(k.as_str(), v.as_str());
        }
        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(TransportResponse { status, body })
    }
}
