use std::fmt::Display;

use regex_lite::Regex;

use crate::model::ParseError;

/// A parsed remote repository reference: the repository coordinates plus the
/// path component pointing inside the repository tree (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub host: String,
    pub owner: String,
    pub repository: String,
    pub filepath: String,
}

impl RepositoryReference {
    pub fn parse(location: &str) -> Result<RepositoryReference, ParseError> {
        let re: Regex = Regex::new(
            r"^(?:(?P<scheme>[a-zA-Z][a-zA-Z0-9+.-]*)://)?(?:(?P<user>[^@/]+)@)?(?P<host>[^/:]+)(?::(?P<port>\d+))?[/:](?P<owner>[^/]+)/(?P<repository>[^/]+?)(?:\.git)?(?:/(?P<filepath>.*))?$",
        )
        .unwrap();
        let captures = re.captures(location);
        let captures = captures.as_ref();

        Ok(RepositoryReference {
            host: captures
                .and_then(|c| c.name("host"))
                .map(|s| s.as_str().to_string())
                .ok_or_else(|| {
                    ParseError::MissingUrlComponent("host".to_string(), location.to_string())
                })?,
            owner: captures
                .and_then(|c| c.name("owner"))
                .map(|s| s.as_str().to_string())
                .ok_or_else(|| {
                    ParseError::MissingUrlComponent("owner".to_string(), location.to_string())
                })?,
            repository: captures
                .and_then(|c| c.name("repository"))
                .map(|s| s.as_str().to_string())
                .ok_or_else(|| {
                    ParseError::MissingUrlComponent("repository".to_string(), location.to_string())
                })?,
            filepath: captures
                .and_then(|c| c.name("filepath"))
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Canonical HTTPS form of the reference used for the fetch itself, with
    /// the in-repository path component stripped.
    pub fn to_transport_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repository)
    }
}

impl Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repository)
    }
}
