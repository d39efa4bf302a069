// Async HTTP client for the AlertOps REST API v2.
//
// Base path: /api/v2/
// Auth: api-key header

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::models;
use crate::transport::{RetryPolicy, TransportConfig};

// ── Accepted statuses per verb ───────────────────────────────────────

const READ_OK: &[StatusCode] = &[StatusCode::OK];
const CREATE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT];
const WRITE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

/// Status and raw body of an accepted response.
struct Accepted {
    status: StatusCode,
    body: String,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the AlertOps REST API.
///
/// Stateless per call: every request carries the `api-key` header and
/// the JSON content headers, and transient failures are retried
/// according to the configured [`RetryPolicy`]. Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `api-key` as a sensitive default header on every request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("api-key", key_value);

        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, http, transport.retry.clone())
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(
        base_url: &str,
        http: reqwest::Client,
        retry: RetryPolicy,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        Ok(Self {
            http,
            base_url,
            retry,
        })
    }

    /// The API root every path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append an absolute API path (e.g. `"/api/v2/users"`) to the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Join `segments` into an absolute path, percent-encoding each one so
    /// a `/`, `?` or `#` inside a segment stays part of it.
    fn encoded_path(&self, segments: &[&str]) -> Result<String, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .extend(segments);
        Ok(url.path().to_owned())
    }

    /// `/api/v2/schedules/{group}/{id}`; schedules are addressed under their group.
    fn schedule_path(&self, group: &str, id: &str) -> Result<String, Error> {
        self.encoded_path(&["api", "v2", "schedules", group, id])
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET `path` and decode the 200 body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let accepted = self.execute(Method::GET, path, None, READ_OK).await?;
        decode(accepted.body)
    }

    /// POST `body` to `path` and decode the response.
    ///
    /// An accepted status with an empty body is a decode error.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let accepted = self
            .execute(Method::POST, path, Some(payload), CREATE_OK)
            .await?;
        decode(accepted.body)
    }

    /// PUT `body` to `path`, decoding the response only when one is present.
    ///
    /// Returns `None` for 204 and for an empty 200 body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let accepted = self
            .execute(Method::PUT, path, Some(payload), WRITE_OK)
            .await?;
        if accepted.status == StatusCode::NO_CONTENT || accepted.body.trim().is_empty() {
            return Ok(None);
        }
        decode(accepted.body).map(Some)
    }

    /// PUT `body` to `path` and ignore whatever comes back.
    pub async fn put_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let payload = serde_json::to_vec(body)?;
        self.execute(Method::PUT, path, Some(payload), WRITE_OK)
            .await
            .map(drop)
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute(Method::DELETE, path, None, WRITE_OK)
            .await
            .map(drop)
    }

    // ── Retry loop ───────────────────────────────────────────────────

    /// Send one logical request, retrying transient failures.
    ///
    /// The body is serialized once by the caller and resent verbatim.
    /// Dropping the returned future aborts both the in-flight request and
    /// any pending backoff sleep.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<Vec<u8>>,
        accepted: &[StatusCode],
    ) -> Result<Accepted, Error> {
        let url = self.url(path)?;
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let mut request = self.http.request(method.clone(), url.clone());
            if let Some(bytes) = &payload {
                request = request.body(bytes.clone());
            }

            let err = match request.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if accepted.contains(&status) {
                        let body = resp.text().await?;
                        return Ok(Accepted { status, body });
                    }
                    parse_error(&method, &url, status, resp).await
                }
                Err(e) => Error::Transport(e),
            };

            if err.is_transient() && attempt < max_attempts {
                let delay = self.retry.backoff(attempt);
                warn!(
                    %method,
                    %url,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            debug!(%method, %url, status = ?err.status(), attempt, "request failed");
            return Err(err);
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Users ────────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<models::UserList, Error> {
        self.get("/api/v2/users").await
    }

    pub async fn create_user(&self, user: &models::User) -> Result<models::User, Error> {
        self.post("/api/v2/users", user).await
    }

    pub async fn get_user(&self, id: &str) -> Result<models::User, Error> {
        self.get(&format!("/api/v2/users/{id}")).await
    }

    pub async fn update_user(&self, id: &str, user: &models::User) -> Result<(), Error> {
        self.put_no_response(&format!("/api/v2/users/{id}"), user)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/v2/users/{id}")).await
    }

    // ── Groups ───────────────────────────────────────────────────────

    pub async fn list_groups(&self) -> Result<models::GroupList, Error> {
        self.get("/api/v2/groups").await
    }

    pub async fn create_group(&self, group: &models::Group) -> Result<models::Group, Error> {
        self.post("/api/v2/groups", group).await
    }

    pub async fn get_group(&self, id: &str) -> Result<models::Group, Error> {
        self.get(&format!("/api/v2/groups/{id}")).await
    }

    pub async fn update_group(&self, id: &str, group: &models::Group) -> Result<(), Error> {
        self.put_no_response(&format!("/api/v2/groups/{id}"), group)
            .await
    }

    pub async fn delete_group(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/v2/groups/{id}")).await
    }

    // ── Schedules ────────────────────────────────────────────────────
    //
    // Created at the collection root, then addressed under the owning group.

    pub async fn list_schedules(&self) -> Result<models::ScheduleList, Error> {
        self.get("/api/v2/schedules").await
    }

    pub async fn create_schedule(
        &self,
        schedule: &models::Schedule,
    ) -> Result<models::Schedule, Error> {
        self.post("/api/v2/schedules", schedule).await
    }

    pub async fn get_schedule(&self, group: &str, id: &str) -> Result<models::Schedule, Error> {
        self.get(&self.schedule_path(group, id)?).await
    }

    pub async fn update_schedule(
        &self,
        group: &str,
        id: &str,
        schedule: &models::Schedule,
    ) -> Result<(), Error> {
        self.put_no_response(&self.schedule_path(group, id)?, schedule)
            .await
    }

    pub async fn delete_schedule(&self, group: &str, id: &str) -> Result<(), Error> {
        self.delete(&self.schedule_path(group, id)?).await
    }

    // ── Workflows ────────────────────────────────────────────────────

    pub async fn list_workflows(&self) -> Result<models::WorkflowList, Error> {
        self.get("/api/v2/workflows").await
    }

    pub async fn create_workflow(
        &self,
        workflow: &models::Workflow,
    ) -> Result<models::Workflow, Error> {
        self.post("/api/v2/workflows", workflow).await
    }

    pub async fn get_workflow(&self, id: &str) -> Result<models::Workflow, Error> {
        self.get(&format!("/api/v2/workflows/{id}")).await
    }

    pub async fn update_workflow(
        &self,
        id: &str,
        workflow: &models::Workflow,
    ) -> Result<(), Error> {
        self.put_no_response(&format!("/api/v2/workflows/{id}"), workflow)
            .await
    }

    pub async fn delete_workflow(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/v2/workflows/{id}")).await
    }

    // ── Escalation policies ──────────────────────────────────────────

    pub async fn list_escalation_policies(&self) -> Result<models::EscalationPolicyList, Error> {
        self.get("/api/v2/escalation_policies").await
    }

    pub async fn create_escalation_policy(
        &self,
        policy: &models::EscalationPolicy,
    ) -> Result<models::EscalationPolicy, Error> {
        self.post("/api/v2/escalation_policies", policy).await
    }

    pub async fn get_escalation_policy(
        &self,
        id: &str,
    ) -> Result<models::EscalationPolicy, Error> {
        self.get(&format!("/api/v2/escalation_policies/{id}"))
            .await
    }

    pub async fn update_escalation_policy(
        &self,
        id: &str,
        policy: &models::EscalationPolicy,
    ) -> Result<(), Error> {
        self.put_no_response(&format!("/api/v2/escalation_policies/{id}"), policy)
            .await
    }

    pub async fn delete_escalation_policy(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/v2/escalation_policies/{id}"))
            .await
    }

    // ── Inbound integrations ─────────────────────────────────────────

    pub async fn create_inbound_integration(
        &self,
        integration: &models::InboundIntegration,
    ) -> Result<models::InboundIntegration, Error> {
        self.post("/api/v2/integrations/inbound", integration)
            .await
    }

    pub async fn get_inbound_integration(
        &self,
        id: &str,
    ) -> Result<models::InboundIntegration, Error> {
        self.get(&format!("/api/v2/integrations/inbound/{id}"))
            .await
    }

    pub async fn update_inbound_integration(
        &self,
        id: &str,
        integration: &models::InboundIntegration,
    ) -> Result<(), Error> {
        self.put_no_response(&format!("/api/v2/integrations/inbound/{id}"), integration)
            .await
    }

    pub async fn delete_inbound_integration(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/v2/integrations/inbound/{id}"))
            .await
    }
}

// ── Response handling ────────────────────────────────────────────────

fn decode<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn parse_error(
    method: &Method,
    url: &Url,
    status: StatusCode,
    resp: reqwest::Response,
) -> Error {
    if status == StatusCode::UNAUTHORIZED {
        return Error::InvalidApiKey;
    }

    Error::Api {
        method: method.to_string(),
        url: url.to_string(),
        status: status.as_u16(),
        body: resp.text().await.unwrap_or_default(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = Client::from_reqwest(
            "https://api.alertops.com///",
            reqwest::Client::new(),
            RetryPolicy::none(),
        )
        .unwrap();
        let url = client.url("/api/v2/users/7").unwrap();
        assert_eq!(url.as_str(), "https://api.alertops.com/api/v2/users/7");
    }

    #[test]
    fn schedule_path_encodes_the_group_as_one_segment() {
        let client = Client::from_reqwest(
            "https://api.alertops.com",
            reqwest::Client::new(),
            RetryPolicy::none(),
        )
        .unwrap();
        assert_eq!(
            client.schedule_path("on call/eu", "42").unwrap(),
            "/api/v2/schedules/on%20call%2Feu/42"
        );
        assert_eq!(
            client.schedule_path("ops?x#y", "7").unwrap(),
            "/api/v2/schedules/ops%3Fx%23y/7"
        );
        let url = client.url("/api/v2/schedules/on%20call%2Feu/42").unwrap();
        assert_eq!(url.path(), "/api/v2/schedules/on%20call%2Feu/42");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::from_reqwest("not a url", reqwest::Client::new(), RetryPolicy::none())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn decode_error_keeps_body_and_preview() {
        let err = decode::<models::User>("<html>oops</html>".into()).unwrap_err();
        match err {
            Error::Deserialization { message, body } => {
                assert!(message.contains("<html>oops</html>"));
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let key = SecretString::from("bad\nkey".to_owned());
        let err = Client::from_api_key(
            "https://api.alertops.com",
            &key,
            &TransportConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Authentication { .. }));
    }
}
