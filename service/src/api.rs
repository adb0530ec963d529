use std::collections::HashMap;

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::Config;
use crate::model::LiveDetectionRequest;

/// Fixed live-detection endpoint of the BioID Web Service.
pub const LIVE_DETECTION_ENDPOINT: &str = "https://bws.bioid.com/extension/livedetection";

/// Trait representing the HTTP capability.  The binary provides a blocking
/// `reqwest` implementation; tests provide stubs so request construction
/// can be verified without a network.
pub trait HttpTransport {
    fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<TransportResponse>;
}

/// Response returned by the transport: the numeric status code and the raw
/// body bytes, for any status.  Interpreting the status is the caller's
/// responsibility.
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Basic credentials from the BWS app id and secret (RFC 7617).
fn basic_auth(app_id: &str, app_secret: &str) -> String {
    STANDARD.encode(format!("{app_id}:{app_secret}"))
}

/// Issue the single authenticated POST carrying both encoded images.
/// Appends `?state=true` in detailed mode, and returns the status code and
/// raw response bytes regardless of the status value.
pub fn send_live_detection<T: HttpTransport>(
    transport: &T,
    config: &Config,
    liveimage1: &str,
    liveimage2: &str,
) -> Result<(u16, Vec<u8>)> {
    let mut endpoint = LIVE_DETECTION_ENDPOINT.to_string();
    if config.detailed {
        endpoint.push_str("?state=true");
    }

    let body = serde_json::to_string(&LiveDetectionRequest {
        liveimage1,
        liveimage2,
    })?;

    let mut headers = HashMap::new();
    headers.insert(
        "Content-Type".to_string(),
        "application/json;charset=utf-8".to_string(),
    );
    headers.insert(
        "Authorization".to_string(),
        format!("Basic {}", basic_auth(&config.app_id, &config.app_secret)),
    );

    let resp = transport.post(&endpoint, &headers, body)?;
    Ok((resp.status, resp.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    type Seen = (String, HashMap<String, String>, String);

    #[derive(Default)]
    struct RecordingTransport {
        seen: RefCell<Option<Seen>>,
    }

    impl HttpTransport for RecordingTransport {
        fn post(
            &self,
            url: &str,
            headers: &HashMap<String, String>,
            body: String,
        ) -> Result<TransportResponse> {
            *self.seen.borrow_mut() = Some((url.to_string(), headers.clone(), body));
            Ok(TransportResponse {
                status: 200,
                body: b"ok".to_vec(),
            })
        }
    }

    fn config(detailed: bool) -> Config {
        Config {
            app_id: "id".to_string(),
            app_secret: "secret".to_string(),
            image1: PathBuf::from("one.png"),
            image2: PathBuf::from("two.png"),
            detailed,
        }
    }

    #[test]
    fn posts_to_the_fixed_endpoint() {
        let transport = RecordingTransport::default();
        send_live_detection(&transport, &config(false), "a", "b").unwrap();
        let (url, _, _) = transport.seen.borrow().clone().unwrap();
        assert_eq!(url, LIVE_DETECTION_ENDPOINT);
    }

    #[test]
    fn detailed_mode_appends_state_query() {
        let transport = RecordingTransport::default();
        send_live_detection(&transport, &config(true), "a", "b").unwrap();
        let (url, _, _) = transport.seen.borrow().clone().unwrap();
        assert_eq!(
            url,
            "https://bws.bioid.com/extension/livedetection?state=true"
        );
    }

    #[test]
    fn body_carries_exactly_the_two_images() {
        let transport = RecordingTransport::default();
        send_live_detection(&transport, &config(false), "img-one", "img-two").unwrap();
        let (_, _, body) = transport.seen.borrow().clone().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["liveimage1"], "img-one");
        assert_eq!(obj["liveimage2"], "img-two");
    }

    #[test]
    fn sets_content_type_and_basic_auth_headers() {
        let transport = RecordingTransport::default();
        send_live_detection(&transport, &config(false), "a", "b").unwrap();
        let (_, headers, _) = transport.seen.borrow().clone().unwrap();
        assert_eq!(headers["Content-Type"], "application/json;charset=utf-8");
        // base64("id:secret")
        assert_eq!(headers["Authorization"], "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn returns_status_and_body_untouched() {
        let transport = RecordingTransport::default();
        let (status, body) = send_live_detection(&transport, &config(false), "a", "b").unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, b"ok");
    }
}
