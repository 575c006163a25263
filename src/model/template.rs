use std::path::Path;

use serde::Deserialize;

use crate::model::ParseError;

/// A template descriptor as registered in the catalog: a name, the location
/// annotation attached by the catalog, and an optional path to the template
/// root inside the fetched tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateDescriptor {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl TemplateDescriptor {
    pub fn from_file(path: &Path) -> Result<TemplateDescriptor, ParseError> {
        let contents = std::fs::read_to_string(path)?;
        TemplateDescriptor::from_toml_str(&contents)
    }

    pub fn from_toml_str(data: &str) -> Result<TemplateDescriptor, ParseError> {
        let descriptor = toml::from_str(data)?;
        Ok(descriptor)
    }
}

/// A location annotation split into its protocol tag and target reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub protocol: String,
    pub location: String,
}

pub fn parse_location_annotation(
    template: &TemplateDescriptor,
) -> Result<ResolvedLocation, ParseError> {
    match template.location.split_once(':') {
        Some((protocol, location)) if !protocol.is_empty() && !location.is_empty() => {
            Ok(ResolvedLocation {
                protocol: protocol.to_string(),
                location: location.to_string(),
            })
        }
        _ => Err(ParseError::InvalidLocationAnnotation(
            template.location.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_valid_file() {
        let str = r#"
            name = "my-template"
            location = "url:https://bitbucket.org/org/repo"
            path = "./skeleton"
        "#;
        let expected = TemplateDescriptor {
            name: "my-template".to_string(),
            location: "url:https://bitbucket.org/org/repo".to_string(),
            path: Some("./skeleton".to_string()),
        };
        assert_eq!(TemplateDescriptor::from_toml_str(str).unwrap(), expected);
    }

    #[test]
    fn load_valid_file_no_path() {
        let str = r#"
            name = "my-template"
            location = "bitbucket:https://bitbucket.org/org/repo"
        "#;
        let expected = TemplateDescriptor {
            name: "my-template".to_string(),
            location: "bitbucket:https://bitbucket.org/org/repo".to_string(),
            path: None,
        };
        assert_eq!(TemplateDescriptor::from_toml_str(str).unwrap(), expected);
    }

    #[test]
    fn parse_annotation_splits_on_first_colon() {
        let template = TemplateDescriptor {
            name: "my-template".to_string(),
            location: "url:https://bitbucket.org/org/repo".to_string(),
            path: None,
        };
        let resolved = parse_location_annotation(&template).unwrap();
        assert_eq!(resolved, ResolvedLocation {
            protocol: "url".to_string(),
            location: "https://bitbucket.org/org/repo".to_string(),
        });
    }

    #[test]
    fn parse_annotation_rejects_missing_protocol() {
        let template = TemplateDescriptor {
            name: "my-template".to_string(),
            location: "https//bitbucket.org/org/repo".to_string(),
            path: None,
        };
        assert!(matches!(
            parse_location_annotation(&template),
            Err(ParseError::InvalidLocationAnnotation(_))
        ));
    }
}
