use reqwest::Method;

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: reqwest::Method,
}

impl PathSpec {
    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn patch(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PATCH,
        }
    }

    /// For endpoints scoped to a resource, appends the id to the path
    pub fn with_id(&self, id: impl std::fmt::Display) -> String {
        format!("{}{id}", self.path)
    }
}
