// Cloud session: authentication plus the four device exchanges.
//
// Wraps `reqwest::Client` with service-specific URL construction, the
// auth-token header, and error-envelope decoding. Token lifecycle: a
// stored token is reused when present; a 401 on any call drops it and
// performs one credential login before retrying that call once.

use std::sync::RwLock;

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{
    ControlParameters, ControlRequest, DeviceRecord, DeviceStatus, ErrorEnvelope,
    GroupListResponse, LoginRequest, LoginResponse,
};
use crate::token::TokenCache;
use crate::transport::TransportConfig;

/// Production endpoint of the climate cloud service.
pub const DEFAULT_BASE_URL: &str = "https://accsmart.panasonic.com";

/// Header carrying the access token on authenticated calls.
const AUTH_HEADER: &str = "X-User-Authorization";

/// Everything needed to construct a [`CloudSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub base_url: Url,
    pub username: String,
    pub password: SecretString,
    /// Where the access token is persisted between invocations.
    pub token_path: PathBuf,
    pub transport: TransportConfig,
}

/// Authenticated HTTP session with the climate cloud service.
pub struct CloudSession {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
    token: RwLock<Option<String>>,
    cache: TokenCache,
}

impl CloudSession {
    /// Build a session from its config. No network traffic happens here.
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Ok(Self {
            http,
            base_url: config.base_url,
            username: config.username,
            password: config.password,
            token: RwLock::new(None),
            cache: TokenCache::new(config.token_path),
        })
    }

    /// Establish credentials: reuse the stored access token when present,
    /// otherwise exchange username/password for a fresh one.
    ///
    /// A stale stored token is not detected here -- the first
    /// authenticated call that sees a 401 drops it and re-logs in.
    pub async fn login(&self) -> Result<(), Error> {
        if let Some(stored) = self.cache.load()? {
            trace!("adopting stored access token");
            *self.token.write().expect("token lock poisoned") = Some(stored);
            return Ok(());
        }
        self.credential_login().await
    }

    /// List all registered devices, flattened out of their groups in the
    /// order the service reports them.
    ///
    /// `GET /device/group`
    pub async fn get_devices(&self) -> Result<Vec<DeviceRecord>, Error> {
        let groups: GroupListResponse = self.request(Method::GET, "device/group", None).await?;
        let mut records = Vec::new();
        for group in groups.group_list {
            for device in group.device_list {
                records.push(DeviceRecord {
                    id: device.device_guid,
                    group: group.group_name.clone(),
                    name: device.device_name,
                    model: device.device_module_number,
                });
            }
        }
        debug!(count = records.len(), "listed devices");
        Ok(records)
    }

    /// Read the current status of one device.
    ///
    /// `GET /deviceStatus/now/{guid}`
    pub async fn get_device(&self, guid: &str) -> Result<DeviceStatus, Error> {
        let path = format!("deviceStatus/now/{guid}");
        self.request(Method::GET, &path, None).await
    }

    /// Write a sparse parameter update to one device.
    ///
    /// `POST /deviceStatus/control` -- the body carries exactly the
    /// parameters present in `parameters`, nothing else.
    pub async fn set_device(
        &self,
        guid: &str,
        parameters: &ControlParameters,
    ) -> Result<(), Error> {
        let body = serde_json::to_value(ControlRequest {
            device_guid: guid,
            parameters,
        })
        .map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: String::new(),
        })?;
        debug!(guid, "sending control request");
        let _: serde_json::Value = self
            .request(Method::POST, "deviceStatus/control", Some(body))
            .await?;
        Ok(())
    }

    /// Read the raw, unfiltered status payload of one device.
    ///
    /// `GET /deviceStatus/{guid}`
    pub async fn dump(&self, guid: &str) -> Result<serde_json::Value, Error> {
        let path = format!("deviceStatus/{guid}");
        self.request(Method::GET, &path, None).await
    }

    // ── Auth internals ───────────────────────────────────────────────

    /// Exchange username/password for a fresh token and persist it.
    ///
    /// `POST /auth/login`
    async fn credential_login(&self) -> Result<(), Error> {
        let url = self.api_url("auth/login");
        debug!("logging in with credentials");
        let response = self
            .http
            .post(url)
            .json(&LoginRequest {
                language: 0,
                login_id: &self.username,
                password: self.password.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let envelope = decode_envelope(&body);
            return Err(Error::Authentication {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("login rejected (HTTP {})", status.as_u16())),
            });
        }

        let login: LoginResponse = decode(&body)?;
        self.cache.store(&login.u_token)?;
        *self.token.write().expect("token lock poisoned") = Some(login.u_token);
        Ok(())
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    // ── Request plumbing ─────────────────────────────────────────────

    fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}")).expect("invalid API URL")
    }

    /// Issue one authenticated exchange.
    ///
    /// On a 401 the stored token is dropped, a credential login runs, and
    /// the call is retried exactly once. Any other failure propagates.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        let mut refreshed = false;

        loop {
            let token = match self.current_token() {
                Some(token) => token,
                None => {
                    self.credential_login().await?;
                    self.current_token().ok_or_else(|| Error::Authentication {
                        message: "login produced no token".into(),
                    })?
                }
            };

            let mut builder = self
                .http
                .request(method.clone(), url.clone())
                .header(AUTH_HEADER, &token);
            if let Some(ref json) = body {
                builder = builder.json(json);
            }

            trace!(%method, %url, "issuing request");
            let response = builder.send().await?;
            let status = response.status();
            let text = response.text().await?;

            if status == StatusCode::UNAUTHORIZED && !refreshed {
                debug!("stored token rejected, re-authenticating");
                self.cache.clear()?;
                *self.token.write().expect("token lock poisoned") = None;
                refreshed = true;
                continue;
            }

            if !status.is_success() {
                let envelope = decode_envelope(&text);
                return Err(Error::Response {
                    message: envelope
                        .message
                        .unwrap_or_else(|| format!("service error (HTTP {})", status.as_u16())),
                    code: envelope.code,
                    status: status.as_u16(),
                });
            }

            return decode(&text);
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

fn decode_envelope(body: &str) -> ErrorEnvelope {
    serde_json::from_str(body).unwrap_or(ErrorEnvelope {
        message: None,
        code: None,
    })
}
