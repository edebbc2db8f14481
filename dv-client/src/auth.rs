use crate::error::{Error, Result};

/// Credential scheme attached to every outgoing request.
#[derive(Debug, Clone)]
pub enum Authenticator {
    /// Sends `Authorization: Bearer <token>`.
    Bearer { token: String },
    /// HTTP basic authentication.
    Basic { username: String, password: String },
    /// No credentials. Useful against local or test deployments.
    NoAuth,
}

impl Authenticator {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Builds an authenticator from `<PREFIX>_AUTH_TYPE` and its companion
    /// credential variables.
    ///
    /// Recognized types are `bearer` (reads `<PREFIX>_BEARER_TOKEN`) and
    /// `basic` (reads `<PREFIX>_USERNAME` and `<PREFIX>_PASSWORD`). When
    /// `<PREFIX>_AUTH_TYPE` is unset but `<PREFIX>_BEARER_TOKEN` is present,
    /// bearer is assumed; with no credential variables at all requests go out
    /// unauthenticated.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let var = |suffix: &str| std::env::var(format!("{prefix}_{suffix}"));
        match var("AUTH_TYPE") {
            Ok(auth_type) => match auth_type.to_lowercase().as_str() {
                "bearer" | "bearertoken" => {
                    let token = var("BEARER_TOKEN").map_err(|_| {
                        Error::InvalidConfiguration(format!("{prefix}_BEARER_TOKEN is not set"))
                    })?;
                    Ok(Self::Bearer { token })
                }
                "basic" => {
                    let username = var("USERNAME").map_err(|_| {
                        Error::InvalidConfiguration(format!("{prefix}_USERNAME is not set"))
                    })?;
                    let password = var("PASSWORD").map_err(|_| {
                        Error::InvalidConfiguration(format!("{prefix}_PASSWORD is not set"))
                    })?;
                    Ok(Self::Basic { username, password })
                }
                "noauth" | "none" => Ok(Self::NoAuth),
                other => Err(Error::InvalidConfiguration(format!(
                    "unsupported auth type: {other}"
                ))),
            },
            Err(_) => match var("BEARER_TOKEN") {
                Ok(token) => Ok(Self::Bearer { token }),
                Err(_) => Ok(Self::NoAuth),
            },
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::NoAuth => request,
        }
    }
}
