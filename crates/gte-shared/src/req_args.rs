//! This module stores the expected format of the arguments for the requests.
//! Some structs are not serializable (they carry secrets) but are still
//! included here to know what needs to be sent

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Arguments for `POST /user/login`
#[derive(Clone)]
pub struct SignInReqArgs {
    pub email: String,
    pub password: SecretString,
}

impl SignInReqArgs {
    pub fn new<S: Into<String>>(email: S, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

impl Debug for SignInReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInReqArgs")
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

/// Arguments for `POST /user/`
///
/// `extra` is sent along with the named fields for forms that collect more
/// than the required minimum
#[derive(Clone)]
pub struct NewUserReqArgs {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
    pub extra: Map<String, Value>,
}

impl NewUserReqArgs {
    pub fn new<S: Into<String>, T: Into<String>>(
        name: S,
        email: T,
        password: SecretString,
        password_confirmation: SecretString,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password,
            password_confirmation,
            extra: Map::new(),
        }
    }

    pub fn extra_field<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The body to send. Exposes the passwords
    pub fn to_json_body(&self) -> Value {
        let mut body = self.extra.clone();
        body.insert("name".into(), self.name.clone().into());
        body.insert("email".into(), self.email.clone().into());
        body.insert(
            "password".into(),
            self.password.expose_secret().to_string().into(),
        );
        body.insert(
            "password_confirmation".into(),
            self.password_confirmation.expose_secret().to_string().into(),
        );
        Value::Object(body)
    }
}

impl Debug for NewUserReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUserReqArgs")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .field(
                "has_password_confirmation",
                &!self.password_confirmation.expose_secret().is_empty(),
            )
            .field("extra", &self.extra)
            .finish()
    }
}

/// Arguments for `PUT /user/{id}`
///
/// Everything set here is sent to the server, but only `name` and `email`
/// are mirrored into the locally stored user
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileUpdateReqArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileUpdateReqArgs {
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn birthday<S: Into<String>>(mut self, birthday: S) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    pub fn extra_field<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// New avatar image to upload as the multipart field `avatar`
#[derive(Clone)]
pub struct AvatarFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn mime_type<S: Into<String>>(mut self, mime_type: S) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl Debug for AvatarFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
