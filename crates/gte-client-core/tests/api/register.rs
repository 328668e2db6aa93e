use crate::helpers::{no_cb, spawn_app};
use gte_shared::{
    errors::RequestError,
    req_args::NewUserReqArgs,
    uac::{FieldError, RegistrationError, RegistrationField},
};
use serde_json::json;
use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, ResponseTemplate,
};

fn valid_args() -> NewUserReqArgs {
    NewUserReqArgs::new(
        "Maria",
        "maria@example.com",
        "123456".to_string().into(),
        "123456".to_string().into(),
    )
}

#[tokio::test]
async fn created_is_success() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/user/"))
        .and(body_json(json!({
            "name": "Maria",
            "email": "maria@example.com",
            "password": "123456",
            "password_confirmation": "123456",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let outcome = app
        .client
        .register_user(valid_args(), no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok(), "{outcome:?}");
    assert!(!app.client.is_signed_in());
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn other_success_status_is_unknown() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.server)
        .await;

    // Act
    let err = app
        .client
        .register_user(valid_args(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert!(err.is_unknown(), "{err:?}");
    assert_eq!(err.registration_message(), "Erro ao cadastrar usuário");
}

#[tokio::test]
async fn server_message_is_reported() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/user/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Email já cadastrado"})),
        )
        .mount(&app.server)
        .await;

    // Act
    let err = app
        .client
        .register_user(valid_args(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert!(err.is_server());
    assert_eq!(err.user_message(), "Email já cadastrado");
    assert_eq!(err.registration_message(), "Erro ao cadastrar usuário");
}

#[tokio::test]
async fn invalid_payload_is_not_sent() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.server)
        .await;
    let args = NewUserReqArgs::new(
        "",
        "maria@example",
        "123456".to_string().into(),
        "654321".to_string().into(),
    );

    // Act
    let err = app
        .client
        .register_user(args, no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    let RequestError::Validation(errors) = err else {
        panic!("expected validation errors but got {err:?}");
    };
    assert_eq!(
        errors,
        vec![
            FieldError::new(RegistrationField::Name, RegistrationError::NameRequired),
            FieldError::new(RegistrationField::Email, RegistrationError::EmailInvalid),
            FieldError::new(
                RegistrationField::PasswordConfirmation,
                RegistrationError::PasswordsDoNotMatch
            ),
        ]
    );
}

#[tokio::test]
async fn registering_keeps_current_session() {
    // Arrange
    let app = spawn_app().await;
    let before = app.signed_in().await;
    Mock::given(method("POST"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&app.server)
        .await;

    // Act
    app.client
        .register_user(valid_args(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(app.client.session().unwrap(), before);
}
