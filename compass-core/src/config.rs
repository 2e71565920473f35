use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

/// Declarative site configuration as it appears on the wire.
///
/// Field names match the keys the external site generator recognizes
/// (`site`, `base`, `title`, ...). The struct is deliberately lenient:
/// required-ness and shape are enforced by [`crate::nav::NavBuilder`],
/// which can point at the offending section instead of failing
/// mid-deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute URL the site is deployed at, if known.
    pub site: Option<String>,
    /// Path prefix applied to all generated routes.
    pub base: Option<String>,
    pub title: Option<String>,
    pub favicon: Option<String>,
    pub social: Vec<SocialLink>,
    pub sidebar: Vec<SidebarSection>,
}

impl SiteConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

/// One sidebar entry. Exactly one of `items` and `autogenerate` must be
/// set; the builder rejects sections declaring both or neither.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SidebarSection {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autogenerate: Option<AutogenerateRef>,
}

impl SidebarSection {
    /// A section with an explicit, ordered list of links.
    pub fn literal<S: Into<String>>(label: S, items: Vec<NavLink>) -> Self {
        Self {
            label: label.into(),
            items: Some(items),
            autogenerate: None,
        }
    }

    /// A section populated from a content directory at render time.
    pub fn autogenerated<S: Into<String>, D: Into<String>>(label: S, directory: D) -> Self {
        Self {
            label: label.into(),
            items: None,
            autogenerate: Some(AutogenerateRef {
                directory: directory.into(),
            }),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AutogenerateRef {
    pub directory: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub link: String,
}

impl NavLink {
    pub fn new<L: Into<String>, P: Into<String>>(label: L, link: P) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config_from_toml() {
        let data = r#"
            site = "https://example.github.io"
            base = "vue-docs/"
            title = "Vue.js"
            favicon = "/vue.jpg"

            [[social]]
            icon = "github"
            label = "GitHub"
            href = "https://github.com/example"

            [[sidebar]]
            label = "Getting Started"
            items = [
                { label = "Introduction", link = "/getting-started/introduction/" },
                { label = "Quick Start", link = "/getting-started/quick-start/" },
            ]

            [[sidebar]]
            label = "Essentials"
            autogenerate = { directory = "essentials" }
        "#;

        let config: SiteConfig = toml::from_str(data).unwrap();
        assert_eq!(config.title.as_deref(), Some("Vue.js"));
        assert_eq!(config.social.len(), 1);
        assert_eq!(config.social[0].icon, "github");
        assert_eq!(config.sidebar.len(), 2);
        assert!(config.sidebar[0].items.is_some());
        assert!(config.sidebar[0].autogenerate.is_none());
        assert_eq!(
            config.sidebar[1].autogenerate.as_ref().unwrap().directory,
            "essentials"
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let config: SiteConfig = toml::from_str("title = \"Docs\"").unwrap();
        assert!(config.site.is_none());
        assert!(config.base.is_none());
        assert!(config.social.is_empty());
        assert!(config.sidebar.is_empty());
    }

    #[test]
    fn same_model_parses_from_json() {
        let data = r#"{
            "title": "Vue.js",
            "base": "/vue-docs/",
            "sidebar": [
                { "label": "Essentials", "autogenerate": { "directory": "essentials" } }
            ]
        }"#;

        let config: SiteConfig = serde_json::from_str(data).unwrap();
        assert_eq!(config.base.as_deref(), Some("/vue-docs/"));
        assert_eq!(config.sidebar.len(), 1);
    }
}
