use secrecy::{ExposeSecret, Secret};

/// Username/password pair used to request an auth token.
///
/// Sourced from configuration; tests pass it around explicitly instead of
/// reading ambient state.
#[derive(Clone)]
pub struct AuthCredentials {
    pub username: String,
    pub password: Secret<String>,
}

impl AuthCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }
}

/// Wire body of `POST /auth`.
#[derive(serde::Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a AuthCredentials> for AuthRequest<'a> {
    fn from(credentials: &'a AuthCredentials) -> Self {
        Self {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        }
    }
}

/// Outcome of a token request.
///
/// The service answers HTTP 200 both for accepted and rejected credentials;
/// a rejection carries an error body with no `token` field. Deserializing
/// either shape yields `token == None` for the rejection, which is the
/// signal callers assert on.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthToken {
    token: Option<String>,
}

impl AuthToken {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether the service actually issued a token.
    pub fn is_issued(&self) -> bool {
        self.token.is_some()
    }
}
