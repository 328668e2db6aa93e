use gte_client_core::{Client, MemoryStore, SessionStore};
use gte_shared::{
    errors::RequestError, req_args::SignInReqArgs, session::Session, store_key::StoreKey,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_TOKEN: &str = "tok-123";
pub const TEST_USER_ID: &str = "u1";

pub struct TestApp {
    pub server: MockServer,
    pub store: Arc<MemoryStore>,
    pub client: Client,
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(MemoryStore::default())).await
}

pub async fn spawn_app_with_store(store: Arc<MemoryStore>) -> TestApp {
    let server = MockServer::start().await;
    let client = Client::with_store(server.uri(), store.clone())
        .expect("failed to create client from store");
    TestApp {
        server,
        store,
        client,
    }
}

pub fn login_args() -> SignInReqArgs {
    SignInReqArgs::new("maria@example.com", "123456".to_string().into())
}

pub fn login_response_body() -> Value {
    json!({
        "currentUser": {
            "id": TEST_USER_ID,
            "name": "Maria",
            "email": "maria@example.com",
            "avatar": "avatars/old.png",
            "birthday": null,
            "createdAt": "2023-03-01T10:00:00Z",
            "telephone": [{"number": "31 99999-0000", "type": null}],
            "userFavoriteDishes": [
                {"id": "f1", "userId": TEST_USER_ID, "dishId": "d2"},
                {"id": "f2", "userId": TEST_USER_ID, "dishId": "missing"},
                {"id": "f3", "userId": TEST_USER_ID, "dishId": null},
                {"id": "f4", "userId": TEST_USER_ID, "dishId": "d1"},
            ],
        },
        "permissions": [
            {"id": "p1", "role": "admin"},
            {"id": "p2", "role": "client"},
        ],
        "dishes": [
            {"id": "d1", "name": "Feijoada", "price": 42.5},
            {"id": "d2", "name": "Moqueca", "price": "39.90"},
            {"id": 3, "name": null},
        ],
        "restaurants": [{"id": "r1", "name": "Casa Mineira", "city": "BH", "score": null}],
        "categories": [{"id": "c1", "name": "Brasileira", "description": null}],
        "orders": [
            {"id": "o1", "status": "open", "dishes": [{"id": "d1", "notes": null}]},
            {"id": "o2", "status": "closed"},
        ],
        "tokenData": {"token": TEST_TOKEN},
    })
}

impl TestApp {
    pub async fn mount_login_success(&self) {
        self.mount_login_response(login_response_body()).await;
    }

    pub async fn mount_login_response(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn sign_in(&self) -> Result<Arc<Session>, RequestError> {
        self.client
            .sign_in(login_args(), no_cb)
            .await
            .expect("failed to receive on rx")
    }

    /// Mounts a successful login and signs in
    pub async fn signed_in(&self) -> Arc<Session> {
        self.mount_login_success().await;
        self.sign_in().await.expect("sign in should succeed")
    }

    pub fn stored_json(&self, key: StoreKey) -> Option<Value> {
        self.store
            .get(key.as_str())
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).expect("stored value is not json"))
    }
}
