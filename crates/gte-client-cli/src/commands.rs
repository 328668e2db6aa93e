use anyhow::{anyhow, Context as _};
use gte_client_core::{Client, FileStore};
use gte_shared::{
    const_config::registration::REGISTRATION_SUCCESS_MESSAGE,
    errors::RequestError,
    req_args::{AvatarFile, NewUserReqArgs, ProfileUpdateReqArgs, SignInReqArgs},
    session::Session,
};
use secrecy::SecretString;
use std::{path::Path, sync::Arc};
use tracing::error;

use crate::{
    cli::{Command, RegisterArgs, UpdateProfileArgs},
    configuration::ClientSettings,
};

/// No UI to wake up, results are awaited directly
fn no_cb() {}

#[tracing::instrument(skip(command))]
pub async fn run(command: Command, settings: &ClientSettings) -> anyhow::Result<()> {
    let store = FileStore::new(settings.store_dir.clone())?;
    let client = Client::with_options(
        settings.server_address.clone(),
        Arc::new(store),
        settings.client_options(),
    )?;

    match command {
        Command::Login { email, password } => {
            let args = SignInReqArgs::new(email, SecretString::from(password));
            let session = client
                .sign_in(args, no_cb)
                .await
                .context("sign in was dropped before completing")?
                .map_err(report)?;
            println!("Signed in as {}", describe_user(&session));
        }
        Command::Logout => {
            client.sign_out();
            println!("Signed out");
        }
        Command::Whoami => match client.session() {
            Some(session) => println!("{}", describe_user(&session)),
            None => println!("Not signed in"),
        },
        Command::UpdateProfile(args) => update_profile(&client, args).await?,
        Command::Register(args) => register(&client, args).await?,
    }
    Ok(())
}

async fn update_profile(client: &Client, args: UpdateProfileArgs) -> anyhow::Result<()> {
    let UpdateProfileArgs {
        name,
        email,
        birthday,
        avatar,
        avatar_mime_type,
    } = args;
    let profile = ProfileUpdateReqArgs {
        name,
        email,
        birthday,
        ..Default::default()
    };
    let avatar_file = avatar
        .map(|path| read_avatar(&path, avatar_mime_type))
        .transpose()?;

    let outcome = client
        .update_profile(profile, avatar_file, no_cb)
        .await
        .context("profile update was dropped before completing")?
        .map_err(report)?;
    match outcome {
        Some(session) => println!("Profile updated: {}", describe_user(&session)),
        None => println!("Not signed in, nothing to update"),
    }
    Ok(())
}

async fn register(client: &Client, args: RegisterArgs) -> anyhow::Result<()> {
    let RegisterArgs {
        name,
        email,
        password,
        password_confirmation,
    } = args;
    let args = NewUserReqArgs::new(
        name,
        email,
        SecretString::from(password),
        SecretString::from(password_confirmation),
    );
    client
        .register_user(args, no_cb)
        .await
        .context("registration was dropped before completing")?
        .map_err(report_registration)?;
    println!("{REGISTRATION_SUCCESS_MESSAGE}");
    Ok(())
}

fn read_avatar(path: &Path, mime_type: Option<String>) -> anyhow::Result<AvatarFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read avatar from {path:?}"))?;
    let file_name = path
        .file_name()
        .and_then(|x| x.to_str())
        .with_context(|| format!("avatar path has no usable file name: {path:?}"))?;
    let mut result = AvatarFile::new(file_name, bytes);
    if let Some(mime_type) = mime_type {
        result = result.mime_type(mime_type);
    }
    Ok(result)
}

/// Keeps the details in the logs and returns what the user should see
fn report(err: RequestError) -> anyhow::Error {
    error!(?err, "request failed");
    anyhow!(err.user_message())
}

fn report_registration(err: RequestError) -> anyhow::Error {
    error!(?err, "registration failed");
    match err {
        RequestError::Validation(errors) => anyhow!(errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        other => anyhow!(other.registration_message()),
    }
}

fn describe_user(session: &Session) -> String {
    let user = &session.user.user;
    let mut result = user
        .name()
        .map_or_else(|| user.id().to_string(), ToString::to_string);
    if let Some(email) = user.email() {
        result.push_str(&format!(" <{email}>"));
    }
    if let Some(role) = session.user.role() {
        result.push_str(&format!(" [{role}]"));
    }
    result
}
