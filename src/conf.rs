//! Environment and configuration utilities.

use std::{env, error, fmt};

/// Environment variable holding the Reddit app's client ID.
pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";

/// Environment variable holding the Reddit app's client secret.
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";

/// Client credentials for a Reddit "script" or "web" app.
///
/// Create an app at <https://www.reddit.com/prefs/apps> to get a client ID
/// and secret.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Creates credentials from a client ID and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        Self {
            client_id,
            client_secret,
        }
    }

    /// Reads credentials from `$REDDIT_CLIENT_ID` and `$REDDIT_CLIENT_SECRET`.
    ///
    /// Returns an error if either variable is unset or is not valid
    /// Unicode.
    pub fn from_env() -> ConfResult<Self> {
        let client_id = var(CLIENT_ID_VAR)?;
        let client_secret = var(CLIENT_SECRET_VAR)?;
        Ok(Self::new(client_id, client_secret))
    }

    /// The app's client ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use subwatch::conf::Credentials;
    /// let credentials = Credentials::new("my-client-id", "my-secret");
    /// assert_eq!(credentials.client_id(), "my-client-id");
    /// ```
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The app's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn var(name: &'static str) -> ConfResult<String> {
    env::var(name).map_err(|err| ConfError::EnvError(name, err))
}

/// Standard result type for reading configuration.
pub type ConfResult<T> = Result<T, ConfError>;

/// Indicates an error reading configuration.
#[derive(Debug)]
pub enum ConfError {
    /// An error occurred while reading the named environment variable.
    EnvError(&'static str, env::VarError),
}

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfError::EnvError(name, err) => write!(f, "Environment error: ${name}: {err}"),
        }
    }
}

impl error::Error for ConfError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfError::EnvError(_, err) => Some(err),
        }
    }
}
