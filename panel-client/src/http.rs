//! Authenticated HTTP access to the panel backend

use std::sync::Arc;

use reqwest::header::COOKIE;
use reqwest::{Client, IntoUrl, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum Error {
    /// Error within the reqwest library
    #[error("API error with reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Error returned by the server
    #[error("HTTP error from API: {0}")]
    Http(StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Thin wrapper issuing authenticated requests to the backend
///
/// Cheap to clone; clones share the connection pool and the current session
/// cookie. The cookie itself is owned by the session store, which installs
/// and removes it here.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    /// Session id attached as the `session` cookie when present
    session: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new<T: IntoUrl>(base_url: T) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: base_url.into_url()?,
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Replaces the session id sent with every subsequent request
    pub async fn set_session(&self, session_id: Option<String>) {
        *self.session.write().await = session_id;
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        let builder = self.client.request(method, url);
        match self.session.read().await.as_deref() {
            Some(id) => builder.header(COOKIE, format!("session={id}")),
            None => builder,
        }
    }

    /// GET returning a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).await.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(response.json().await?)
    }

    /// GET where only success matters
    pub async fn get_unit(&self, path: &str) -> Result<()> {
        let response = self.request(Method::GET, path).await.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(())
    }

    /// POST with a form-encoded body, returning a JSON body
    pub async fn post_form<F: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path)
            .await
            .form(form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(response.json().await?)
    }

    /// PUT with a JSON body where only success matters
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .request(Method::PUT, path)
            .await
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(())
    }

    /// PUT with a form-encoded body where only success matters
    pub async fn put_form<F: Serialize>(&self, path: &str, form: &F) -> Result<()> {
        let response = self
            .request(Method::PUT, path)
            .await
            .form(form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(())
    }

    /// Bodyless PUT where only success matters
    pub async fn put_unit(&self, path: &str) -> Result<()> {
        let response = self.request(Method::PUT, path).await.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status));
        }
        Ok(())
    }
}
