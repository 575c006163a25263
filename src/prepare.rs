use std::{
    error::Error,
    path::{Component, Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    auth::CredentialMode,
    config::TemplatefetchConfig,
    git::{CloneRepository, GitClone},
    model::{
        reference::RepositoryReference,
        template::{parse_location_annotation, TemplateDescriptor},
        ParseError,
    },
};

const SUPPORTED_PROTOCOLS: &[&str] = &["bitbucket", "url"];

#[derive(Error, Debug)]
pub enum PrepareError {
    #[error("Wrong location protocol: {protocol}, expected one of {expected:?}")]
    UnsupportedProtocol {
        protocol: String,
        expected: &'static [&'static str],
    },
    #[error("Template path {path} escapes the checkout root {root}")]
    PathEscape { path: String, root: String },
    #[error("Error while resolving template location: {0}")]
    Parse(#[from] ParseError),
    #[error("Failed to allocate checkout directory in {directory}: {source}")]
    Allocation {
        directory: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Fetch(anyhow::Error),
}

/// Per-invocation options. The working directory defaults to the system temp
/// root; tests redirect it to an isolated sandbox.
#[derive(Debug, Clone, Default)]
pub struct PrepareOptions {
    pub working_directory: Option<PathBuf>,
}

/// The directories computed before the fetch: a freshly allocated unique root
/// and the checkout path inside it that is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub temp_root: PathBuf,
    pub checkout_path: PathBuf,
}

/// Preparer stage: resolves a template's location annotation, plans a
/// collision-free checkout directory and fetches the repository snapshot into
/// it. Returns the checkout path once the fetch has completed.
pub struct Preparer {
    username: Option<String>,
    token: Option<String>,
    app_password: Option<String>,
    git: Box<dyn CloneRepository>,
}

impl Preparer {
    pub fn builder() -> PreparerBuilder {
        PreparerBuilder::default()
    }

    pub fn from_config(config: TemplatefetchConfig) -> Result<Preparer, Box<dyn Error>> {
        let mut builder = Preparer::builder();
        if let Some(username) = config.username {
            builder = builder.username(username);
        }
        if let Some(token) = config.token {
            builder = builder.token(token);
        }
        if let Some(app_password) = config.app_password {
            builder = builder.app_password(app_password);
        }
        builder.try_build()
    }

    pub fn prepare(
        &self,
        template: &TemplateDescriptor,
        opts: &PrepareOptions,
    ) -> Result<PathBuf, PrepareError> {
        let resolved = parse_location_annotation(template)?;
        if !SUPPORTED_PROTOCOLS.contains(&resolved.protocol.as_str()) {
            return Err(PrepareError::UnsupportedProtocol {
                protocol: resolved.protocol,
                expected: SUPPORTED_PROTOCOLS,
            });
        }

        let working_directory = opts
            .working_directory
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        let reference = RepositoryReference::parse(&resolved.location)?;
        let plan = plan_checkout(
            &working_directory,
            &template.name,
            &reference,
            template.path.as_deref(),
        )?;

        debug!(
            "Fetching {} into {}",
            reference,
            plan.temp_root.display()
        );

        let credentials = CredentialMode::select(
            self.username.as_deref(),
            self.token.as_deref(),
            self.app_password.as_deref(),
        )
        .into_credentials();

        self.git
            .clone_repository(
                &reference.to_transport_url(),
                &plan.temp_root,
                credentials.as_ref(),
            )
            .map_err(PrepareError::Fetch)?;

        info!(
            "Prepared template {} at {}",
            template.name,
            plan.checkout_path.display()
        );

        Ok(plan.checkout_path)
    }
}

/// Allocates the unique temporary root and resolves the checkout path inside
/// it. Uniqueness under concurrent calls comes entirely from the templated
/// tempdir allocation; directory names are never reused or guessed.
fn plan_checkout(
    working_directory: &Path,
    template_name: &str,
    reference: &RepositoryReference,
    template_path: Option<&str>,
) -> Result<CheckoutPlan, PrepareError> {
    let temp_root = tempfile::Builder::new()
        .prefix(template_name)
        .tempdir_in(working_directory)
        .map_err(|source| PrepareError::Allocation {
            directory: working_directory.to_path_buf(),
            source,
        })?
        .into_path();

    let subdirectory = Path::new(&reference.filepath)
        .parent()
        .unwrap_or(Path::new(""))
        .join(template_path.unwrap_or("."));

    let checkout_path = resolve_within(&temp_root, &subdirectory)?;

    Ok(CheckoutPlan {
        temp_root,
        checkout_path,
    })
}

/// Lexically resolves `subdirectory` against `root`, rejecting any traversal
/// that would land outside `root`.
fn resolve_within(root: &Path, subdirectory: &Path) -> Result<PathBuf, PrepareError> {
    let escape = || PrepareError::PathEscape {
        path: subdirectory.display().to_string(),
        root: root.display().to_string(),
    };

    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in subdirectory.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return Err(escape());
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return Err(escape()),
        }
    }
    Ok(resolved)
}

#[derive(Default)]
pub struct PreparerBuilder {
    username: Option<String>,
    token: Option<String>,
    app_password: Option<String>,
    git: Option<Box<dyn CloneRepository>>,
}

impl PreparerBuilder {
    /// Username paired with an app password.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Access token, used when no username/app password pair is configured.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn app_password(mut self, app_password: impl Into<String>) -> Self {
        self.app_password = Some(app_password.into());
        self
    }

    /// Substitute the clone transport.
    ///
    /// Defaults to [`GitClone`].
    pub fn clone_primitive(mut self, git: impl CloneRepository + 'static) -> Self {
        self.git = Some(Box::new(git));
        self
    }

    pub fn try_build(self) -> Result<Preparer, Box<dyn Error>> {
        let Self {
            username,
            token,
            app_password,
            git,
        } = self;

        let git = match git {
            Some(git) => git,
            None => Box::new(GitClone::new()?),
        };

        Ok(Preparer {
            username,
            token,
            app_password,
            git,
        })
    }
}
