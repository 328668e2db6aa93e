use futures::channel::oneshot;
use gte_shared::{
    const_config::path::PATH_USER_NEW, errors::RequestError, req_args::NewUserReqArgs,
    uac::validate_registration,
};
use tracing::info;

use crate::{
    client::{process_created, send_outcome, UiCallBack},
    Client,
};

impl Client {
    /// Creates a new account, does not sign in
    ///
    /// The payload is validated first and nothing is sent if it fails
    #[tracing::instrument(skip(ui_notify))]
    pub fn register_user<F: UiCallBack>(
        &self,
        args: NewUserReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<Result<(), RequestError>> {
        let (tx, rx) = oneshot::channel();
        if let Err(errors) = validate_registration(&args) {
            info!(?errors, "registration rejected locally");
            send_outcome(tx, Err(RequestError::Validation(errors)));
            ui_notify();
            return rx;
        }

        let body = args.to_json_body();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_created(resp).await;
            send_outcome(tx, msg);
            ui_notify();
        };
        self.initiate_request(PATH_USER_NEW.method, PATH_USER_NEW.path, &body, on_done);
        rx
    }
}
