pub mod auth;
pub mod blogs;
pub mod body;
pub mod contacts;
pub mod envelope;
pub mod partners;
pub mod projects;
pub mod properties;
pub mod query;
pub mod reviews;
pub mod transport;
pub mod wishlist;

pub use body::{FileUpload, MultipartForm, RequestBody};
pub use envelope::{Ack, ListPage};
pub use transport::{Clock, FixedClock, RawResponse, RequestOptions, ReqwestTransport, SystemClock, Transport};

use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::error::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client for the portal REST API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish()
    }
}

impl ApiClient {
    /// Create a client talking HTTP through `reqwest`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport), Arc::new(SystemClock)))
    }

    /// Create a client over any transport and clock
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            clock,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One best-effort round trip: no retry, no backoff
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let prepared = transport::prepare(&self.base_url, endpoint, options, self.clock.as_ref())?;
        debug!("{} {}", prepared.method, prepared.url);

        let response = self.transport.execute(prepared).await?;
        transport::parse_response(response)
    }

    pub(crate) async fn fetch_list<T, F>(&self, path: &str, filters: &F, auth: Option<&AuthContext>) -> Result<ListPage<T>>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let endpoint = query::with_query(path, filters)?;
        let options = RequestOptions::get().with_bearer(auth.and_then(AuthContext::bearer))?;
        envelope::list(self.request(&endpoint, options).await?)
    }

    pub(crate) async fn fetch_entity<T: DeserializeOwned>(
        &self,
        path: &str,
        wrappers: &[&str],
        auth: Option<&AuthContext>,
    ) -> Result<T> {
        let options = RequestOptions::get().with_bearer(auth.and_then(AuthContext::bearer))?;
        envelope::entity(self.request(path, options).await?, wrappers)
    }

    pub(crate) async fn send_entity<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        wrappers: &[&str],
        auth: Option<&AuthContext>,
    ) -> Result<T> {
        let options = RequestOptions::method(method)
            .with_body(body)
            .with_bearer(auth.and_then(AuthContext::bearer))?;
        envelope::entity(self.request(path, options).await?, wrappers)
    }

    pub(crate) async fn remove(&self, path: &str, auth: &AuthContext) -> Result<Ack> {
        let options = RequestOptions::method(Method::DELETE).with_bearer(auth.bearer())?;
        envelope::ack(self.request(path, options).await?)
    }
}

/// `/{collection}/{id}` with the id percent-encoded
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{collection}/{encoded}")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::api::transport::PreparedRequest;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    pub const BASE: &str = "http://portal.test/api";
    pub const NOW: i64 = 1_700_000_000_000;

    /// Transport that records requests and replays queued responses
    #[derive(Default)]
    pub struct FakeTransport {
        pub requests: Mutex<Vec<PreparedRequest>>,
        responses: Mutex<VecDeque<Result<RawResponse>>>,
    }

    impl FakeTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn respond(&self, status: u16, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(RawResponse::new(status, body)));
        }

        pub fn fail_unreachable(&self) {
            self.responses.lock().unwrap().push_back(Err(ApiError::Unreachable {
                url: BASE.to_string(),
                reason: "connection refused".to_string(),
            }));
        }

        pub fn requests(&self) -> Vec<PreparedRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn last(&self) -> PreparedRequest {
            self.requests().pop().expect("no request was sent")
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn execute(&self, request: PreparedRequest) -> Result<RawResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(RawResponse::new(200, "")))
        }
    }

    pub fn client(transport: &Arc<FakeTransport>) -> ApiClient {
        ApiClient::with_transport(BASE, transport.clone(), Arc::new(FixedClock(NOW)))
    }

    /// Request URL with the base and cache-busting parameter removed
    pub fn path_of(request: &PreparedRequest) -> String {
        let path = request.url.strip_prefix(BASE).unwrap_or(&request.url);
        let suffix = format!("_={NOW}");
        path.trim_end_matches(suffix.as_str())
            .trim_end_matches(['?', '&'])
            .to_string()
    }
}
