// src/client/nomp.rs
use crate::status::decode::decode_status;
use crate::status::model::Status;
use crate::transport::Transport;
use crate::utils::error::NompError;
use url::Url;

/// Client for the stats API of a NOMP pool server
///
/// Holds the pool's base URL, the User-Agent to present, and the transport
/// used for the actual HTTP exchange. The client itself keeps no mutable
/// state across calls: each [`get_pool_status`](NompClient::get_pool_status)
/// is one independent request/decode cycle, and a client shared behind a
/// reference may be used concurrently as long as the transport permits it.
pub struct NompClient<T: Transport> {
    /// Base URL of the pool's web frontend; the API lives under `api/`
    base_url: Url,
    /// User-Agent header value; empty means "send none"
    user_agent: String,
    /// HTTP transport collaborator
    transport: T,
}

impl<T: Transport> NompClient<T> {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the pool frontend (e.g.
    ///   "http://pool.example.com/"); requests go to `<base_url>api/stats`
    /// * `transport` - HTTP transport to issue requests through
    /// * `user_agent` - User-Agent header value, or "" to send none
    ///
    /// # Errors
    /// Returns `NompError::UrlError` if the base URL does not parse
    pub fn new(base_url: &str, transport: T, user_agent: &str) -> Result<Self, NompError> {
        Ok(NompClient {
            base_url: Url::parse(base_url)?,
            user_agent: user_agent.to_string(),
            transport,
        })
    }

    /// Toggles raw request/response dump logging on the transport
    pub fn set_debug(&mut self, debug: bool) {
        self.transport.set_debug(debug);
    }

    /// Fetches and normalizes the pool server's current status
    ///
    /// Issues one GET to the `stats` endpoint, decodes the JSON payload and
    /// applies the full normalization pass (numeric coercion, equihash unit
    /// correction, worker hashrate redistribution). No retries: the first
    /// error aborts the call.
    ///
    /// # Errors
    /// - `NompError::TransportError` / `NompError::HttpError` for network
    ///   failures or non-success status codes
    /// - `NompError::JsonError` if the payload is not valid JSON
    /// - `NompError::MalformedNumber` if a numeric-or-string field holds a
    ///   value that is not a number
    pub async fn get_pool_status(&self) -> Result<Status, NompError> {
        let url = self.base_url.join("api/stats")?;
        let response = self.transport.fetch(&url, &self.user_agent).await?;

        // The transport contract guarantees JSON on success; anything else
        // means the collaborator is broken, not the server.
        if !response.content_type.starts_with("application/json") {
            return Err(NompError::TransportError(format!(
                "unexpected content type {:?} from transport",
                response.content_type
            )));
        }

        decode_status(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport stub that serves a canned response and records the URL
    /// and User-Agent it was asked for
    struct FixtureTransport {
        content_type: String,
        body: Vec<u8>,
        seen: Mutex<Option<(Url, String)>>,
    }

    impl FixtureTransport {
        fn json(body: &str) -> Self {
            FixtureTransport {
                content_type: "application/json".into(),
                body: body.as_bytes().to_vec(),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Transport for FixtureTransport {
        async fn fetch(
            &self,
            url: &Url,
            user_agent: &str,
        ) -> Result<TransportResponse, NompError> {
            *self.seen.lock().unwrap() = Some((url.clone(), user_agent.to_string()));
            Ok(TransportResponse {
                content_type: self.content_type.clone(),
                body: self.body.clone(),
            })
        }

        fn set_debug(&mut self, _debug: bool) {}
    }

    /// Transport stub that always fails like a dead server would
    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn fetch(
            &self,
            _url: &Url,
            _user_agent: &str,
        ) -> Result<TransportResponse, NompError> {
            Err(NompError::TransportError(
                "GET http://dummy.com/api/stats returned 502 Bad Gateway".into(),
            ))
        }

        fn set_debug(&mut self, _debug: bool) {}
    }

    /// The two-pool payload a real NOMP server emits: pool "test1" with one
    /// worker reporting only a display-string hashrate, pool "test2" idle,
    /// and the share counters mixing native numbers with quoted strings.
    const SAMPLE: &str = r#"{
        "time": 1474239882,
        "global": {"workers": 21, "hashrate": 0},
        "algos": {
            "test1": {"workers": 1, "hashrate": 2433814.801066667, "hashrateString": "2.43 MH"},
            "test2": {"workers": 0, "hashrate": 0, "hashrateString": "0.00 KH"}
        },
        "pools": {
            "test1": {
                "name": "test1",
                "symbol": "TEST1",
                "algorithm": "test1",
                "poolStats": {
                    "validShares": 0,
                    "validBlocks": 0,
                    "invalidShares": "1359059",
                    "totalPaid": "13579727.61959752997063333"
                },
                "blocks": {"pending": 0, "confirmed": 6769, "orphaned": 0},
                "workers": {
                    "worker1": {"shares": 0.17, "invalidshares": 0, "hashrateString": "2.43 MH"}
                },
                "hashrate": 2433814.801066667,
                "workerCount": 1,
                "hashrateString": "2.43 MH"
            },
            "test2": {
                "name": "test2",
                "symbol": "TEST2",
                "algorithm": "test2",
                "poolStats": {
                    "validShares": "15402335",
                    "validBlocks": "3966",
                    "invalidShares": "388455",
                    "totalPaid": "4591548.98264059998791708"
                },
                "blocks": {"pending": 0, "confirmed": 3527, "orphaned": 0},
                "workers": {},
                "hashrate": 0,
                "workerCount": 0,
                "hashrateString": "0.00 KH"
            }
        }
    }"#;

    #[tokio::test]
    async fn test_get_pool_status() {
        let client =
            NompClient::new("http://dummy.com/", FixtureTransport::json(SAMPLE), "").unwrap();

        let status = client.get_pool_status().await.unwrap();

        assert_eq!(status.time, 1474239882);
        assert_eq!(status.global.workers, 21);
        assert_eq!(status.algos["test1"].hashrate, 2433814.801066667);
        assert_eq!(status.algos["test2"].hashrate_string, "0.00 KH");

        let test1 = &status.pools["test1"];
        assert_eq!(test1.symbol, "TEST1");
        assert_eq!(test1.stats.valid_shares, 0);
        assert_eq!(test1.stats.invalid_shares, 1359059);
        assert!((test1.stats.total_paid - 13579727.619597530).abs() < 1e-6);
        assert_eq!(test1.blocks.confirmed, 6769);
        assert_eq!(test1.worker_count, 1);

        // One worker holds 100% of shares, so redistribution hands it the
        // whole pool aggregate
        let worker1 = &test1.workers["worker1"];
        assert_eq!(worker1.shares, 0.17);
        assert!((worker1.hashrate - 2433814.801066667).abs() < 1e-6);

        let test2 = &status.pools["test2"];
        assert_eq!(test2.stats.valid_shares, 15402335);
        assert_eq!(test2.stats.valid_blocks, 3966);
        assert!(test2.workers.is_empty());
        assert_eq!(test2.hashrate, 0.0);
    }

    #[tokio::test]
    async fn test_requests_api_stats_with_user_agent() {
        let client = NompClient::new(
            "http://dummy.com/",
            FixtureTransport::json("{}"),
            "nomp-client-rs test",
        )
        .unwrap();

        client.get_pool_status().await.unwrap();

        let seen = client.transport.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.0.as_str(), "http://dummy.com/api/stats");
        assert_eq!(seen.1, "nomp-client-rs test");
    }

    #[tokio::test]
    async fn test_transport_error_aborts_call() {
        let client = NompClient::new("http://dummy.com/", FailingTransport, "").unwrap();

        let err = client.get_pool_status().await.unwrap_err();
        assert!(matches!(err, NompError::TransportError(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let client = NompClient::new(
            "http://dummy.com/",
            FixtureTransport::json("<html>not json</html>"),
            "",
        )
        .unwrap();

        assert!(matches!(
            client.get_pool_status().await.unwrap_err(),
            NompError::JsonError(_)
        ));
    }

    #[test]
    fn test_invalid_base_url_rejected_up_front() {
        assert!(matches!(
            NompClient::new("not a url", FailingTransport, ""),
            Err(NompError::UrlError(_))
        ));
    }
}
