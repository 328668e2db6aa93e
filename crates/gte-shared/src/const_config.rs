//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Used when the server address is not configured
    pub const CLIENT_DEFAULT_SERVER_ADDRESS: &str = "http://localhost:3333";
    pub const CLIENT_DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}

pub mod error {
    /// Shown to the user when the server did not explain what went wrong
    pub const ERROR_FALLBACK_MESSAGE: &str = "Não foi possível entrar";
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;
    pub const PATH_USER_AVATAR: PathSpec = PathSpec::patch("/user/avatar/");
    pub const PATH_USER_LOGIN: PathSpec = PathSpec::post("/user/login");
    pub const PATH_USER_NEW: PathSpec = PathSpec::post("/user/");
    pub const PATH_USER_UPDATE: PathSpec = PathSpec::put("/user/");
}

pub mod registration {
    pub const REGISTRATION_PASSWORD_MIN_LENGTH: usize = 6;
    /// Shown for any failed registration that was not rejected locally
    pub const REGISTRATION_ERROR_MESSAGE: &str = "Erro ao cadastrar usuário";
    pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Usuário cadastrado com sucesso!";
}
