use std::path::Path;

use git2::{build::RepoBuilder, AutotagOption, Config, Cred, CredentialType, FetchOptions, RemoteCallbacks};
use log::{info, trace};

use crate::auth::Credentials;

use super::CloneRepository;

/// Clone primitive backed by libgit2. Supplied credentials take precedence;
/// otherwise the configured git credential helper is consulted.
pub struct GitClone {
    git_config: Config,
}

impl GitClone {
    pub fn new() -> Result<GitClone, git2::Error> {
        let git_config = Config::open_default()?;
        Ok(GitClone { git_config })
    }

    fn fetch_options<'a>(&'a self, credentials: Option<&'a Credentials>) -> FetchOptions<'a> {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username, allowed_types| {
            trace!(
                "Requested credentials for {}, username {:?}, allowed types {:?}",
                url,
                username,
                allowed_types
            );
            if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                if let Some(credentials) = credentials {
                    return Cred::userpass_plaintext(&credentials.username, &credentials.secret);
                }
                return Cred::credential_helper(&self.git_config, url, username);
            }
            if allowed_types.contains(CredentialType::USERNAME) {
                return Cred::username(username.unwrap_or("git"));
            }
            Err(git2::Error::from_str("no valid authentication available"))
        });

        let mut fetch_options = FetchOptions::new();
        fetch_options
            .remote_callbacks(callbacks)
            .download_tags(AutotagOption::None);

        fetch_options
    }
}

impl CloneRepository for GitClone {
    fn clone_repository(
        &self,
        url: &str,
        directory: &Path,
        credentials: Option<&Credentials>,
    ) -> anyhow::Result<()> {
        trace!("Cloning {} into {}", url, directory.display());

        RepoBuilder::new()
            .fetch_options(self.fetch_options(credentials))
            .clone(url, directory)?;

        info!("Cloned {} into {}", url, directory.display());
        Ok(())
    }
}
