#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("É necessário inserir um nome")]
    NameRequired,
    #[error("É necessário inserir um email")]
    EmailRequired,
    #[error("Insira um email válido")]
    EmailInvalid,
    #[error("É necessário inserir uma senha")]
    PasswordRequired,
    #[error("A senha deve conter no mínimo {min} caracteres")]
    PasswordTooShort { min: usize },
    #[error("As senhas não coincidem")]
    PasswordsDoNotMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RegistrationField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

/// A validation failure tied to the form field that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: RegistrationField,
    pub error: RegistrationError,
}

impl FieldError {
    pub fn new(field: RegistrationField, error: RegistrationError) -> Self {
        Self { field, error }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}
