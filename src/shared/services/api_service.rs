use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::domain::models::api::{endpoints, CSRF_HEADER};
use crate::domain::models::{
    AuthRequest, AuthResponse, ChatMode, ChatReply, GuestStatus, MessageRequest, ModeRequest,
};
use crate::shared::constants::{MESSAGE_FAILED_FALLBACK, MODE_FAILED_FALLBACK};
use crate::shared::errors::Result;

/// Everything the client asks of the Neurochat backend.
///
/// `?Send` because the browser build is single-threaded and its futures
/// hold `JsValue`s.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// `GET /guest/status`
    async fn guest_status(&self) -> Result<GuestStatus>;

    /// `POST /auth/chat/mode`, returns the confirmation text
    async fn set_mode(&self, mode: ChatMode) -> Result<String>;

    /// `POST /auth/chat/message`, returns the assistant reply
    async fn send_message(&self, message: &str) -> Result<String>;

    /// `POST /auth/login` or `/auth/signup` depending on the request
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse>;
}

/// HTTP implementation of [`ChatBackend`].
///
/// Uses `fetch` through gloo-net in the browser and reqwest with a cookie
/// store natively, so the backend session cookie survives between calls.
/// Response bodies are decoded whatever the status code; callers decide
/// what a non-2xx body means.
pub struct ApiService {
    base: ClientConfig,
    csrf_token: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn new(config: &ClientConfig) -> Self {
        let csrf_token = config
            .csrf_token
            .clone()
            .or_else(crate::shared::utils::dom::csrf_token);

        Self {
            base: config.clone(),
            csrf_token,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!("Cookie-enabled HTTP client unavailable ({}), using default", e);
                    reqwest::Client::new()
                }),
        }
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    // Generic GET request
    #[cfg(target_arch = "wasm32")]
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<(u16, T)> {
        let mut request = gloo_net::http::Request::get(&self.base.url(endpoint))
            .header("Content-Type", "application/json");
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        let data = response.json::<T>().await?;
        Ok((status, data))
    }

    // Generic POST request with a JSON body
    #[cfg(target_arch = "wasm32")]
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(u16, T)> {
        let mut request = gloo_net::http::Request::post(&self.base.url(endpoint));
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.json(body)?.send().await?;
        let status = response.status();
        let data = response.json::<T>().await?;
        Ok((status, data))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<(u16, T)> {
        let mut request = self
            .client
            .get(self.base.url(endpoint))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let data = response.json::<T>().await?;
        Ok((status, data))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(u16, T)> {
        let mut request = self.client.post(self.base.url(endpoint)).json(body);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let data = response.json::<T>().await?;
        Ok((status, data))
    }
}

#[async_trait(?Send)]
impl ChatBackend for ApiService {
    async fn guest_status(&self) -> Result<GuestStatus> {
        let (_status, data) = self.get::<GuestStatus>(endpoints::GUEST_STATUS).await?;
        Ok(data)
    }

    async fn set_mode(&self, mode: ChatMode) -> Result<String> {
        let (status, reply) = self
            .post::<ChatReply, _>(endpoints::CHAT_MODE, &ModeRequest { mode })
            .await?;
        reply.into_result(status, MODE_FAILED_FALLBACK)
    }

    async fn send_message(&self, message: &str) -> Result<String> {
        let body = MessageRequest {
            message: message.to_string(),
        };
        let (status, reply) = self
            .post::<ChatReply, _>(endpoints::CHAT_MESSAGE, &body)
            .await?;
        reply.into_result(status, MESSAGE_FAILED_FALLBACK)
    }

    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse> {
        let (_status, data) = self
            .post::<AuthResponse, _>(request.endpoint(), request)
            .await?;
        Ok(data)
    }
}
