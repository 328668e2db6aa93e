use crate::helpers::{login_response_body, no_cb, spawn_app, TEST_TOKEN};
use gte_shared::{
    req_args::{AvatarFile, ProfileUpdateReqArgs},
    store_key::StoreKey,
};
use serde_json::json;
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn name_only_keeps_email() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    Mock::given(method("PUT"))
        .and(path("/user/u1"))
        .and(header("Authorization", TEST_TOKEN))
        .and(body_json(json!({"name": "New Name"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let session = app
        .client
        .update_profile(ProfileUpdateReqArgs::default().name("New Name"), None, no_cb)
        .await
        .unwrap()
        .unwrap()
        .expect("a stored user exists");

    // Assert
    let stored_user = app.stored_json(StoreKey::User).unwrap();
    assert_eq!(stored_user["name"], json!("New Name"));
    assert_eq!(stored_user["email"], json!("maria@example.com"));
    assert_eq!(session.user.user.name(), Some("New Name"));
    assert_eq!(session.token.as_str(), TEST_TOKEN);
    assert_eq!(app.client.session().unwrap(), session);
}

#[tokio::test]
async fn other_fields_are_sent_but_not_stored() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    Mock::given(method("PUT"))
        .and(path("/user/u1"))
        .and(body_json(json!({
            "email": "new@example.com",
            "birthday": "1990-05-17",
            "telephone": "31 99999-0000",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;
    let profile = ProfileUpdateReqArgs::default()
        .email("new@example.com")
        .birthday("1990-05-17")
        .extra_field("telephone", json!("31 99999-0000"));

    // Act
    app.client
        .update_profile(profile, None, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    let stored_user = app.stored_json(StoreKey::User).unwrap();
    assert_eq!(stored_user["email"], json!("new@example.com"));
    assert_eq!(stored_user["name"], json!("Maria"));
    assert_eq!(stored_user["birthday"], json!(null));
    assert_eq!(
        stored_user["telephone"],
        login_response_body()["currentUser"]["telephone"]
    );
}

#[tokio::test]
async fn avatar_is_uploaded_then_profile_sent() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    Mock::given(method("PATCH"))
        .and(path("/user/avatar/u1"))
        .and(header("Authorization", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"avatar": "avatars/new.png"})))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/u1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;
    let avatar = AvatarFile::new("me.png", vec![0x89, b'P', b'N', b'G']).mime_type("image/png");

    // Act
    let session = app
        .client
        .update_profile(ProfileUpdateReqArgs::default(), Some(avatar), no_cb)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(session.user.user.avatar(), Some("avatars/new.png"));
    let stored_user = app.stored_json(StoreKey::User).unwrap();
    assert_eq!(stored_user["avatar"], json!("avatars/new.png"));
    let requests = app.server.received_requests().await.unwrap();
    let methods: Vec<_> = requests.iter().map(|r| r.method.to_string()).collect();
    assert_eq!(methods, ["POST", "PATCH", "PUT"]);
    let upload_body = String::from_utf8_lossy(&requests[1].body);
    assert!(upload_body.contains(r#"name="avatar""#), "{upload_body}");
    assert!(upload_body.contains(r#"filename="me.png""#), "{upload_body}");
}

#[tokio::test]
async fn failed_avatar_upload_skips_profile_update() {
    // Arrange
    let app = spawn_app().await;
    app.signed_in().await;
    Mock::given(method("PATCH"))
        .and(path("/user/avatar/u1"))
        .respond_with(
            ResponseTemplate::new(413).set_body_json(json!({"message": "Arquivo muito grande"})),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;
    let avatar = AvatarFile::new("me.png", vec![1, 2, 3]);

    // Act
    let err = app
        .client
        .update_profile(ProfileUpdateReqArgs::default().name("X"), Some(avatar), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(err.user_message(), "Arquivo muito grande");
    let stored_user = app.stored_json(StoreKey::User).unwrap();
    assert_eq!(stored_user["avatar"], json!("avatars/old.png"));
    assert_eq!(stored_user["name"], json!("Maria"));
}

#[tokio::test]
async fn server_error_leaves_stored_user_unchanged() {
    // Arrange
    let app = spawn_app().await;
    let before = app.signed_in().await;
    Mock::given(method("PUT"))
        .and(path("/user/u1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Email já cadastrado"})),
        )
        .mount(&app.server)
        .await;

    // Act
    let err = app
        .client
        .update_profile(
            ProfileUpdateReqArgs::default().email("taken@example.com"),
            None,
            no_cb,
        )
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert!(err.is_server());
    assert_eq!(err.user_message(), "Email já cadastrado");
    assert_eq!(
        app.stored_json(StoreKey::User).unwrap()["email"],
        json!("maria@example.com")
    );
    assert_eq!(app.client.session().unwrap(), before);
}

#[tokio::test]
async fn no_stored_user_is_a_silent_no_op() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    // Act
    let outcome = app
        .client
        .update_profile(ProfileUpdateReqArgs::default().name("New Name"), None, no_cb)
        .await
        .unwrap();

    // Assert
    assert!(matches!(outcome, Ok(None)), "{outcome:?}");
    assert!(app.store.is_empty());
    assert!(!app.client.is_signed_in());
}
