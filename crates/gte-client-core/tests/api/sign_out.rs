use crate::helpers::{no_cb, spawn_app};
use gte_client_core::SessionStore;
use gte_shared::{req_args::NewUserReqArgs, store_key::StoreKey};
use strum::IntoEnumIterator;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn sign_out_clears_every_key_and_session() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    for key in [
        StoreKey::OpenOrder,
        StoreKey::EditingDish,
        StoreKey::VisualizedDish,
        StoreKey::CurrentRestaurant,
        StoreKey::Permissions,
        StoreKey::Users,
    ] {
        app.store.set(key.as_str(), "{}").unwrap();
    }

    // Act
    app.client.sign_out();

    // Assert
    for key in StoreKey::iter() {
        assert!(app.store.get(key.as_str()).unwrap().is_none(), "{key}");
    }
    assert!(!app.client.is_signed_in());
    assert!(app.client.session().is_none());
}

#[tokio::test]
async fn sign_out_when_signed_out_is_a_no_op() {
    // Arrange
    let app = spawn_app().await;

    // Act
    app.client.sign_out();
    app.client.sign_out();

    // Assert
    assert!(app.store.is_empty());
    assert!(!app.client.is_signed_in());
}

#[tokio::test]
async fn sign_out_twice_after_sign_in() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;

    // Act
    app.client.sign_out();
    app.client.sign_out();

    // Assert
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn no_authorization_header_after_sign_out() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    Mock::given(method("POST"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&app.server)
        .await;
    app.client.sign_out();
    let args = NewUserReqArgs::new(
        "Maria",
        "maria@example.com",
        "123456".to_string().into(),
        "123456".to_string().into(),
    );

    // Act
    app.client
        .register_user(args, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    let requests = app.server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    assert_eq!(last.url.path(), "/user/");
    assert!(!last.headers.contains_key("authorization"));
}
