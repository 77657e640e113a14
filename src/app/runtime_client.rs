//! HTTP client for the runtime engine's deployment API.
//!
//! The modeler itself never talks to the runtime engine except through this
//! module: one GET to export the model artifact (deploy only) and one POST to
//! the configured engine endpoint with HTTP Basic credentials. Credentials are
//! attached per request and never stored on the client, so nothing has to be
//! scrubbed from shared state afterwards.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Action issued against the runtime engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeAction {
    Deploy,
    Activate,
    Suspend,
}

impl RuntimeAction {
    /// Lowercase form, matching the engine's URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeAction::Deploy => "deploy",
            RuntimeAction::Activate => "activate",
            RuntimeAction::Suspend => "suspend",
        }
    }

    /// Display form with the first character uppercased, for dialog titles
    /// and notifications.
    pub fn capitalized(&self) -> &'static str {
        match self {
            RuntimeAction::Deploy => "Deploy",
            RuntimeAction::Activate => "Activate",
            RuntimeAction::Suspend => "Suspend",
        }
    }
}

impl fmt::Display for RuntimeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator credentials for the runtime engine, collected by the deploy
/// dialog. Never persisted and never logged.
#[derive(Clone, Default)]
pub struct LoginDetail {
    pub name: String,
    pub password: String,
}

impl fmt::Debug for LoginDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDetail")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginDetail {
    /// Presence check only; the engine decides whether the credentials are
    /// actually valid.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.password.is_empty()
    }

    /// Standard Base64 of `name:password`, the Basic-auth credential.
    pub fn basic_credential(&self) -> String {
        BASE64.encode(format!("{}:{}", self.name, self.password))
    }

    /// `Authorization` header value for one request. Marked sensitive so the
    /// transport never logs it.
    pub fn authorization_header(&self) -> HeaderValue {
        let mut value = HeaderValue::from_str(&format!("Basic {}", self.basic_credential()))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        value.set_sensitive(true);
        value
    }
}

/// Everything that can go wrong during one submission, with the exact
/// operator-facing message as its Display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Username, password or target environment missing. No request is made.
    MissingInput(RuntimeAction),
    /// The modeler could not produce the export artifact (deploy only).
    ExportFailed,
    /// Engine answered 401.
    WrongCredentials,
    /// Engine answered 400 with an `error` field; carried verbatim.
    Rejected(String),
    /// Transport-level failure before any status code was received.
    EngineUnavailable,
    /// Any other non-2xx status.
    Other,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::MissingInput(action) => write!(
                f,
                "Please give username, password, environment for {}!",
                action
            ),
            ActionError::ExportFailed => write!(
                f,
                "Cannot generate export file for deployment! Please ask system administrator for help!"
            ),
            ActionError::WrongCredentials => write!(f, "Wrong username or password! try again"),
            ActionError::Rejected(message) => f.write_str(message),
            ActionError::EngineUnavailable => write!(
                f,
                "Runtime engine is unreachable! Please ask system administrator for help!"
            ),
            ActionError::Other => write!(
                f,
                "Something went wrong, please ask system administrator for help!"
            ),
        }
    }
}

impl std::error::Error for ActionError {}

#[derive(Deserialize)]
struct EngineErrorBody {
    error: Option<String>,
}

/// Map a non-2xx engine response to an [`ActionError`].
///
/// 401 wins regardless of body; 400 surfaces the server-supplied `error`
/// field verbatim when present.
pub fn classify_response(status: StatusCode, body: &str) -> ActionError {
    match status.as_u16() {
        401 => ActionError::WrongCredentials,
        400 => serde_json::from_str::<EngineErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(ActionError::Rejected)
            .unwrap_or(ActionError::Other),
        _ => ActionError::Other,
    }
}

/// URL of the export artifact for a process model.
pub fn export_url(app_base_url: &str, process_id: &str) -> String {
    format!(
        "{}/rest/models/{}/exportForDeploy",
        app_base_url.trim_end_matches('/'),
        process_id
    )
}

/// Resolve the engine URL for an action.
///
/// Deploy posts to the configured deploy URL as-is. Suspend and activate
/// replace the `deploy` path segment with their own and append the process
/// key: `http://host/deploy` + `proc1` becomes `http://host/suspend/proc1`.
/// Only path segments are substituted, so a host name containing "deploy"
/// is left alone.
pub fn resolve_action_url(deploy_url: &str, action: RuntimeAction, process_key: &str) -> String {
    if action == RuntimeAction::Deploy {
        return deploy_url.to_string();
    }

    match Url::parse(deploy_url) {
        Ok(mut parsed) => {
            let mut segments: Vec<String> = parsed
                .path_segments()
                .map(|segments| {
                    segments
                        .filter(|segment| !segment.is_empty())
                        .map(|segment| {
                            if segment == "deploy" {
                                action.as_str().to_string()
                            } else {
                                segment.to_string()
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
            segments.push(process_key.to_string());
            parsed.set_path(&segments.join("/"));
            parsed.to_string()
        }
        // Not parseable as an absolute URL; fall back to plain segment
        // substitution so the operator still sees what was attempted.
        Err(_) => format!(
            "{}/{}",
            deploy_url.replacen("deploy", action.as_str(), 1),
            process_key
        ),
    }
}

/// Blocking client for the export and action calls. Lives on the worker
/// thread spawned per submission; the UI thread never touches it.
pub struct RuntimeClient {
    http: Client,
    app_base_url: String,
}

impl RuntimeClient {
    pub fn new(app_base_url: String) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(RuntimeClient { http, app_base_url })
    }

    /// Fetch the exportable artifact for a process model. The bytes are
    /// opaque to the modeler; they are forwarded to the engine unchanged.
    pub fn export_for_deploy(&self, process_id: &str) -> Result<Vec<u8>, ActionError> {
        let url = export_url(&self.app_base_url, process_id);
        debug!(%url, "requesting export artifact");

        let response = self.http.get(&url).send().map_err(|err| {
            debug!(error = %err, "export request failed");
            ActionError::ExportFailed
        })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "export request rejected");
            return Err(ActionError::ExportFailed);
        }

        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|err| {
                debug!(error = %err, "failed to read export body");
                ActionError::ExportFailed
            })
    }

    /// Run one action against the engine. Deploy exports first and aborts
    /// without posting when the export fails; suspend and activate post an
    /// empty JSON object to the resolved URL.
    pub fn run_action(
        &self,
        action: RuntimeAction,
        deploy_url: &str,
        process_id: &str,
        process_key: &str,
        login: &LoginDetail,
    ) -> Result<(), ActionError> {
        match action {
            RuntimeAction::Deploy => {
                let artifact = self.export_for_deploy(process_id)?;
                self.post(action, deploy_url, artifact, "application/octet-stream", login)
            }
            RuntimeAction::Activate | RuntimeAction::Suspend => {
                let url = resolve_action_url(deploy_url, action, process_key);
                self.post(action, &url, b"{}".to_vec(), "application/json", login)
            }
        }
    }

    fn post(
        &self,
        action: RuntimeAction,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
        login: &LoginDetail,
    ) -> Result<(), ActionError> {
        debug!(%action, %url, "posting action to runtime engine");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, login.authorization_header())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .map_err(|err| {
                debug!(%action, error = %err, "action request failed to send");
                ActionError::EngineUnavailable
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(%action, %status, "action accepted by runtime engine");
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        debug!(%action, %status, "action rejected by runtime engine");
        Err(classify_response(status, &body))
    }
}
