use crate::config::Environment;

pub const DEV_BACKEND: &str = "http://127.0.0.1:8000";
pub const MESSAGE_PATH: &str = "/api/python";

/// Resolves app paths, applying the `/api/*` rewrite for the active environment.
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    environment: Environment,
    base_url: String,
}

impl ApiRoutes {
    pub fn new(environment: Environment, base_url: &str) -> Self {
        Self {
            environment,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, path: &str) -> String {
        let Some(rest) = path.strip_prefix("/api/") else {
            return format!("{}{}", self.base_url, path);
        };
        match self.environment {
            Environment::Development => format!("{}/api/{}", DEV_BACKEND, rest),
            // The production rewrite targets the API root and drops the sub-path.
            Environment::Production => format!("{}/api/", self.base_url),
        }
    }
}
