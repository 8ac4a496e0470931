#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request for {login} failed: {source}")]
    Transport {
        login: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned {status} for {login}")]
    Status { login: String, status: u16 },

    #[error("malformed response for {login}: {source}")]
    Decode {
        login: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Friend login the failed request was for, if any
    pub fn login(&self) -> Option<&str> {
        match self {
            FetchError::Client(_) | FetchError::InvalidUrl { .. } => None,
            FetchError::Transport { login, .. }
            | FetchError::Status { login, .. }
            | FetchError::Decode { login, .. } => Some(login.as_str()),
        }
    }
}
