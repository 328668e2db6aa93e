use anyhow::Context as _;
use futures::channel::oneshot;
use gte_shared::{
    catalog::resolve_favorites,
    const_config::path::{PATH_USER_AVATAR, PATH_USER_LOGIN, PATH_USER_UPDATE},
    errors::RequestError,
    log_err_as_warn,
    req_args::{AvatarFile, ProfileUpdateReqArgs, SignInReqArgs},
    session::{Session, SessionUser},
    store_key::StoreKey,
    uac::{resolve_permission, AvatarResponse, LoginResponse},
};
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret as _;
use std::sync::Arc;
use strum::IntoEnumIterator as _;
use tracing::{info, instrument};

use crate::{
    client::{
        extract_response, handle_error, process_empty, process_json_body, send_outcome,
        UiCallBack,
    },
    store::{encode, SessionStoreExt as _},
    Client,
};

impl Client {
    /// On success the catalogs, the favorites, the user and the token are
    /// written to the store and the client is signed in. On failure nothing
    /// changes
    #[tracing::instrument(skip(ui_notify))]
    pub fn sign_in<F: UiCallBack>(
        &self,
        args: SignInReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<Arc<Session>, RequestError>> {
        let (tx, rx) = oneshot::channel();
        let args = serde_json::json!({
            "email": args.email,
            "password": args.password.expose_secret(),
        });
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_sign_in(resp, client).await;
            send_outcome(tx, msg);
            ui_notify();
        };

        self.initiate_request(PATH_USER_LOGIN.method, PATH_USER_LOGIN.path, &args, on_done);
        rx
    }

    /// Clears every key of the store and the in memory session
    ///
    /// Never fails, a key that cannot be removed is logged and skipped
    #[tracing::instrument]
    pub fn sign_out(&self) {
        for key in StoreKey::iter() {
            log_err_as_warn!(self.store.remove(key.as_str()));
        }
        self.set_session(None);
        info!("signed out");
    }

    /// Sends the profile (and the avatar if provided) to the server then
    /// mirrors `name`, `email` and the new avatar into the stored user
    ///
    /// Does nothing and resolves to `Ok(None)` if there is no stored user
    #[tracing::instrument(skip(ui_notify))]
    pub fn update_profile<F: UiCallBack>(
        &self,
        profile: ProfileUpdateReqArgs,
        avatar_file: Option<AvatarFile>,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<Option<Arc<Session>>, RequestError>> {
        let (tx, rx) = oneshot::channel();

        let stored_user = match self.store.read_json::<SessionUser>(StoreKey::User) {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!("no stored user, profile update skipped");
                send_outcome(tx, Ok(None));
                ui_notify();
                return rx;
            }
            Err(e) => {
                send_outcome(tx, Err(e.into()));
                ui_notify();
                return rx;
            }
        };

        let form = match avatar_file.map(avatar_form).transpose() {
            Ok(form) => form,
            Err(e) => {
                send_outcome(tx, Err(e.into()));
                ui_notify();
                return rx;
            }
        };

        let user_id = stored_user.user.id().clone();
        let is_avatar_upload = form.is_some();
        let body = profile.clone();
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg =
                process_update_profile(resp, client, stored_user, profile, is_avatar_upload)
                    .await;
            send_outcome(tx, msg);
            ui_notify();
        };

        match form {
            Some(form) => {
                let request = self
                    .build_request(
                        PATH_USER_AVATAR.method,
                        &PATH_USER_AVATAR.with_id(&user_id),
                    )
                    .multipart(form);
                reqwest_cross::fetch(request, on_done);
            }
            None => self.initiate_request(
                PATH_USER_UPDATE.method,
                &PATH_USER_UPDATE.with_id(&user_id),
                &body,
                on_done,
            ),
        }
        rx
    }

    /// Persists everything from a successful login then switches the
    /// in memory session
    fn establish_session(&self, login: LoginResponse) -> anyhow::Result<Arc<Session>> {
        let LoginResponse {
            current_user,
            permissions,
            dishes,
            restaurants,
            categories,
            orders,
            token_data,
        } = login;
        let favorites = resolve_favorites(&current_user.favorite_dish_ids(), &dishes);
        let user = SessionUser::new(current_user, resolve_permission(permissions));

        // Encode everything first so a value that cannot be encoded leaves
        // the store untouched
        let blobs = [
            (StoreKey::Categories, encode(StoreKey::Categories, &categories)?),
            (
                StoreKey::Restaurants,
                encode(StoreKey::Restaurants, &restaurants)?,
            ),
            (StoreKey::Dishes, encode(StoreKey::Dishes, &dishes)?),
            (StoreKey::Orders, encode(StoreKey::Orders, &orders)?),
            (StoreKey::Favorites, encode(StoreKey::Favorites, &favorites)?),
            (StoreKey::User, encode(StoreKey::User, &user)?),
        ];
        for (key, value) in blobs {
            self.store.set(key.as_str(), &value)?;
        }
        self.store.write_token(&token_data.token)?;

        let session = Arc::new(Session::new(user, token_data.token));
        self.set_session(Some(Arc::clone(&session)));
        info!(user_id = %session.user.user.id(), "signed in");
        Ok(session)
    }

    /// Writes the updated user and keeps the token of the current session
    fn store_updated_user(&self, user: SessionUser) -> anyhow::Result<Arc<Session>> {
        let token = match self.session() {
            Some(session) => session.token.clone(),
            None => self
                .store
                .read_token()?
                .context("no token available to keep the session")?,
        };
        self.store.write_json(StoreKey::User, &user)?;
        let session = Arc::new(Session::new(user, token));
        self.set_session(Some(Arc::clone(&session)));
        info!(user_id = %session.user.user.id(), "profile updated");
        Ok(session)
    }
}

fn avatar_form(avatar_file: AvatarFile) -> anyhow::Result<Form> {
    let AvatarFile {
        file_name,
        mime_type,
        bytes,
    } = avatar_file;
    let mut part = Part::bytes(bytes).file_name(file_name);
    if let Some(mime_type) = mime_type {
        part = part
            .mime_str(&mime_type)
            .with_context(|| format!("invalid mime type for avatar: {mime_type:?}"))?;
    }
    Ok(Form::new().part("avatar", part))
}

#[instrument(skip(client), ret, err(Debug))]
async fn process_sign_in(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
) -> Result<Arc<Session>, RequestError> {
    let (response, status) = extract_response(response)?;
    if !status.is_success() {
        return Err(handle_error(response).await);
    }
    let login_response: LoginResponse = response
        .json()
        .await
        .context("failed to parse login response as json")?;
    Ok(client.establish_session(login_response)?)
}

#[instrument(skip(client, stored_user), err(Debug))]
async fn process_update_profile(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
    mut stored_user: SessionUser,
    profile: ProfileUpdateReqArgs,
    is_avatar_upload: bool,
) -> Result<Option<Arc<Session>>, RequestError> {
    let user_id = stored_user.user.id().clone();
    if is_avatar_upload {
        let uploaded: AvatarResponse = process_json_body(response).await?;
        stored_user.user.set_avatar(uploaded.avatar);
        let update_response = client
            .build_request(PATH_USER_UPDATE.method, &PATH_USER_UPDATE.with_id(&user_id))
            .json(&profile)
            .send()
            .await;
        process_empty(update_response).await?;
    } else {
        process_empty(response).await?;
    }

    stored_user
        .user
        .apply_profile_overlay(profile.name.as_deref(), profile.email.as_deref());
    Ok(Some(client.store_updated_user(stored_user)?))
}
