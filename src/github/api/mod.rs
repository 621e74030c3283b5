use secrecy::{ExposeSecret, SecretString};

pub mod client;

/// Token used to authenticate label updates against the GitHub API.
///
/// Can be exposed only through [`GithubToken::expose`], so that it does not end up in logs.
pub struct GithubToken(SecretString);

impl GithubToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret().as_str()
    }
}
