use anyhow::{anyhow, Context};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use gte_shared::{
    errors::RequestError, session::Session, store_key::StoreKey, uac::ServerErrorBody,
};
use reqwest::{Method, StatusCode};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::store::{MemoryStore, SessionStore, SessionStoreExt as _};

pub mod auth;
pub mod register;
pub mod request_context;

use request_context::RequestContext;

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    store: Arc<dyn SessionStore>,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    server_address: String,
    session: Option<Arc<Session>>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Not supported on wasm, the browser decides when to give up
    pub request_timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(gte_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS.to_string())
    }
}

impl ClientInner {
    #[tracing::instrument(skip(session))]
    fn new(server_address: String, session: Option<Session>) -> Self {
        Self {
            server_address,
            session: session.map(Arc::new),
        }
    }
}

impl Client {
    /// Starts signed out with a fresh in memory store
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(server_address: String) -> Self {
        Self {
            api_client: reqwest::Client::new(),
            store: Arc::new(MemoryStore::default()),
            inner: Arc::new(Mutex::new(ClientInner::new(server_address, None))),
        }
    }

    /// Restores the session kept in `store` if there is one, without any
    /// network access
    ///
    /// Fails if the stored user cannot be decoded
    pub fn with_store(
        server_address: String,
        store: Arc<dyn SessionStore>,
    ) -> anyhow::Result<Self> {
        Self::with_options(server_address, store, ClientOptions::default())
    }

    #[tracing::instrument(name = "NEW CLIENT-CORE WITH STORE", skip(store))]
    pub fn with_options(
        server_address: String,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> anyhow::Result<Self> {
        let session = rehydrate(store.as_ref()).context("failed to restore stored session")?;
        match &session {
            Some(session) => info!(user_id = %session.user.user.id(), "restored stored session"),
            None => debug!("no stored session found"),
        }
        Ok(Self {
            api_client: build_api_client(&options)?,
            store,
            inner: Arc::new(Mutex::new(ClientInner::new(server_address, session))),
        })
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<T, F, O>(&self, method: Method, path: &str, args: &T, on_done: F)
    where
        T: serde::Serialize + Debug,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let request = self.build_request(method, path).json(&args);
        reqwest_cross::fetch(request, on_done)
    }

    /// Every request is built here so that the session's token is attached
    fn build_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.api_client.request(method, self.path_to_url(path));
        self.request_context().apply(request)
    }

    fn request_context(&self) -> RequestContext {
        RequestContext::new(self.session().map(|session| session.token.clone()))
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .server_address
        )
    }

    fn set_session(&self, session: Option<Arc<Session>>) {
        self.inner.lock().expect("mutex poisoned").session = session;
    }

    pub fn session(&self) -> Option<Arc<Session>> {
        self.inner.lock().expect("mutex poisoned").session.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").session.is_some()
    }

    /// The store the session is mirrored to, other collaborators may read the
    /// same keys
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_api_client(options: &ClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("unable to create reqwest client")
}

#[cfg(target_arch = "wasm32")]
fn build_api_client(options: &ClientOptions) -> anyhow::Result<reqwest::Client> {
    if options.request_timeout.is_some() {
        debug!("request timeout ignored on wasm");
    }
    reqwest::Client::builder()
        .build()
        .context("unable to create reqwest client")
}

/// A session is only restored if both the user and the token are present
fn rehydrate(store: &dyn SessionStore) -> anyhow::Result<Option<Session>> {
    let Some(token) = store.read_token()? else {
        return Ok(None);
    };
    let Some(user) = store.read_json(StoreKey::User)? else {
        return Ok(None);
    };
    Ok(Some(Session::new(user, token)))
}

/// Hands the outcome to the caller, it's fine if they stopped waiting
fn send_outcome<T>(tx: oneshot::Sender<T>, msg: T) {
    if tx.send(msg).is_err() {
        debug!("receiver dropped before the outcome was delivered");
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(
    response: reqwest::Result<reqwest::Response>,
) -> Result<(), RequestError> {
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_created(
    response: reqwest::Result<reqwest::Response>,
) -> Result<(), RequestError> {
    let (response, status) = extract_response(response)?;
    match status {
        StatusCode::CREATED => Ok(()),
        _ if status.is_success() => {
            Err(anyhow!("expected {} but got {status}", StatusCode::CREATED).into())
        }
        _ => Err(handle_error(response).await),
    }
}

#[tracing::instrument(err(Debug))]
async fn process_json_body<T>(
    response: reqwest::Result<reqwest::Response>,
) -> Result<T, RequestError>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(response
            .json()
            .await
            .context("failed to parse result as json")?)
    } else {
        Err(handle_error(response).await)
    }
}

/// Errors with a `message` in the body are the server talking to the user,
/// anything else is unexpected
#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> RequestError {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body").into();
    };
    if let Ok(ServerErrorBody { message }) = serde_json::from_str(&body) {
        return RequestError::Server(message);
    }
    if body.is_empty() {
        anyhow!("request failed with status code: {status} and no body").into()
    } else {
        anyhow!("request failed with status code: {status} and body: {body}").into()
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if response.is_err() {
        warn!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
