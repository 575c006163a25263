mod clone;

use std::path::Path;

use crate::auth::Credentials;

pub use clone::GitClone;

/// The clone transport. The preparer only ever asks for a full snapshot of a
/// repository into a directory; substituting this seam is how tests avoid the
/// network.
pub trait CloneRepository {
    fn clone_repository(
        &self,
        url: &str,
        directory: &Path,
        credentials: Option<&Credentials>,
    ) -> anyhow::Result<()>;
}
