/// A username/secret pair handed to the clone primitive. Computed fresh for
/// every preparation, never cached and never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

/// The credential precedence over the three configured identity fields,
/// spelled out as a tagged selection so every mode is testable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialMode {
    /// Both `username` and `app_password` are configured.
    AppPassword {
        username: String,
        app_password: String,
    },
    /// A token is configured; the forge expects the fixed `x-token-auth` user.
    Token { token: String },
    /// Nothing configured, fetch anonymously.
    Anonymous,
}

impl CredentialMode {
    pub fn select(
        username: Option<&str>,
        token: Option<&str>,
        app_password: Option<&str>,
    ) -> CredentialMode {
        match (username, app_password, token) {
            (Some(username), Some(app_password), _) => CredentialMode::AppPassword {
                username: username.to_string(),
                app_password: app_password.to_string(),
            },
            (_, _, Some(token)) => CredentialMode::Token {
                token: token.to_string(),
            },
            _ => CredentialMode::Anonymous,
        }
    }

    pub fn into_credentials(self) -> Option<Credentials> {
        match self {
            CredentialMode::AppPassword {
                username,
                app_password,
            } => Some(Credentials {
                username,
                secret: app_password,
            }),
            CredentialMode::Token { token } => Some(Credentials {
                username: "x-token-auth".to_string(),
                secret: token,
            }),
            CredentialMode::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn username_and_app_password() {
        let credentials = CredentialMode::select(Some("u"), None, Some("p")).into_credentials();
        assert_eq!(
            credentials,
            Some(Credentials {
                username: "u".to_string(),
                secret: "p".to_string(),
            })
        );
    }

    #[test]
    fn token_only() {
        let credentials = CredentialMode::select(None, Some("t"), None).into_credentials();
        assert_eq!(
            credentials,
            Some(Credentials {
                username: "x-token-auth".to_string(),
                secret: "t".to_string(),
            })
        );
    }

    #[test]
    fn app_password_wins_over_token() {
        let mode = CredentialMode::select(Some("u"), Some("t"), Some("p"));
        assert_eq!(mode, CredentialMode::AppPassword {
            username: "u".to_string(),
            app_password: "p".to_string(),
        });
    }

    #[test]
    fn token_wins_over_lone_username() {
        let credentials = CredentialMode::select(Some("u"), Some("t"), None).into_credentials();
        assert_eq!(
            credentials,
            Some(Credentials {
                username: "x-token-auth".to_string(),
                secret: "t".to_string(),
            })
        );
    }

    #[test]
    fn nothing_configured_is_anonymous() {
        assert_eq!(
            CredentialMode::select(None, None, None),
            CredentialMode::Anonymous
        );
        assert_eq!(CredentialMode::Anonymous.into_credentials(), None);
    }

    #[test]
    fn lone_app_password_is_anonymous() {
        assert_eq!(
            CredentialMode::select(None, None, Some("p")),
            CredentialMode::Anonymous
        );
    }
}
