//! Typed client of the SportFinder REST API.
//!
//! Every resource lives in its own module and is exposed as a trait so that
//! the client logic can be exercised without a browser.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

mod comments;
mod courses;
mod directions;
mod facilities;
mod favorites;
mod metadata;
mod oauth;
mod posts;
mod reviews;
mod util;

pub use self::{
    comments::*, courses::*, directions::*, facilities::*, favorites::*, metadata::*, oauth::*,
    posts::*, reviews::*, util::*,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl Error {
    #[must_use]
    pub const fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Network,
            Self::Api(err) => err.kind(),
            Self::Decode(_) | Self::Encode(_) => ErrorKind::Other,
        }
    }
}

/// A non-2xx response of the backend.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Machine readable error code, if the backend sent one.
    pub code: Option<String>,
    /// The raw error body if it was valid JSON.
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Validation,
    Server,
    Other,
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        if self
            .code
            .as_deref()
            .is_some_and(|code| code.starts_with("DUPLICATE") || code.ends_with("ALREADY_EXISTS"))
        {
            return ErrorKind::Conflict;
        }
        match self.status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            400 | 422 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Other,
        }
    }
}

/// Whether a request should carry the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Bearer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

enum Body {
    Empty,
    Json(String),
    Form(String),
}

/// SportFinder API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    url: String,
    token: Option<String>,
}

impl Api {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// [`Auth::Bearer`] if a token is available.
    #[must_use]
    pub const fn optional_auth(&self) -> Auth {
        if self.has_token() {
            Auth::Bearer
        } else {
            Auth::Public
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.url
    }

    fn endpoint_url(&self, endpoint: &str, query: &Query) -> String {
        format!("{}{endpoint}{}", self.url, query.to_query_string())
    }

    fn request(&self, method: Method, url: &str, auth: Auth) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let builder = builder.header("Content-Type", "application/json");
        match (auth, self.token.as_deref()) {
            (Auth::Bearer, Some(token)) => builder.header("Authorization", &auth_header_value(token)),
            _ => builder,
        }
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &Query,
        body: Body,
        auth: Auth,
    ) -> Result<Response> {
        let url = self.endpoint_url(endpoint, query);
        log::debug!("{method:?} {url}");
        let builder = self.request(method, &url, auth);
        let request = match body {
            Body::Empty => builder.build()?,
            Body::Json(json) => builder.body(json)?,
            Body::Form(form) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(form)?,
        };
        let response = request.send().await?;
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let err = api_error(status, &text);
            log::debug!("{method:?} {url} failed with {status}: {err}");
            Err(err.into())
        }
    }

    pub async fn get<T>(&self, endpoint: &str, query: &Query, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .send(Method::Get, endpoint, query, Body::Empty, auth)
            .await?;
        into_typed(response).await
    }

    pub async fn post<D, T>(&self, endpoint: &str, data: &D, auth: Auth) -> Result<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Body::Json(to_json(data)?);
        let response = self
            .send(Method::Post, endpoint, &Query::new(), body, auth)
            .await?;
        into_typed(response).await
    }

    /// POST without a request body, ignoring the response body.
    pub async fn post_empty(&self, endpoint: &str, auth: Auth) -> Result<()> {
        self.send(Method::Post, endpoint, &Query::new(), Body::Empty, auth)
            .await?;
        Ok(())
    }

    pub async fn post_form<T>(&self, endpoint: &str, fields: &Query, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = Body::Form(fields.to_form_string());
        let response = self
            .send(Method::Post, endpoint, &Query::new(), body, auth)
            .await?;
        into_typed(response).await
    }

    /// PUT, ignoring the response body.
    pub async fn put<D>(&self, endpoint: &str, data: &D, auth: Auth) -> Result<()>
    where
        D: Serialize + ?Sized,
    {
        let body = Body::Json(to_json(data)?);
        self.send(Method::Put, endpoint, &Query::new(), body, auth)
            .await?;
        Ok(())
    }

    /// DELETE, ignoring the response body.
    pub async fn delete(&self, endpoint: &str, auth: Auth) -> Result<()> {
        self.send(Method::Delete, endpoint, &Query::new(), Body::Empty, auth)
            .await?;
        Ok(())
    }
}

fn to_json<D>(data: &D) -> Result<String>
where
    D: Serialize + ?Sized,
{
    serde_json::to_string(data).map_err(|err| Error::Encode(err.to_string()))
}

async fn into_typed<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let content_length = response.headers().get("Content-Length");
    let text = if status == 204 || content_length.as_deref() == Some("0") {
        String::new()
    } else {
        response.text().await?
    };
    decode_payload(status, content_length.as_deref(), &text).into_typed()
}
