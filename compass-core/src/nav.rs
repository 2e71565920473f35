use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::config::{NavLink, SiteConfig, SocialLink};

#[derive(Debug)]
pub enum BuildError {
    MissingField {
        field: String,
        /// Sidebar section index, when the field lives inside one.
        section: Option<usize>,
    },
    InvalidPath {
        field: String,
        value: String,
    },
    InvalidDirectoryRef {
        section: usize,
        label: String,
        directory: String,
    },
    DuplicateSectionLabel {
        label: String,
        first: usize,
        second: usize,
    },
    AmbiguousSection {
        section: usize,
        label: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { field, section } => match section {
                Some(i) => write!(
                    f,
                    "sidebar section {}: missing or empty required field: {}",
                    i, field
                ),
                None => write!(f, "missing or empty required field: {}", field),
            },
            BuildError::InvalidPath { field, value } => {
                write!(f, "invalid path in {}: {:?}", field, value)
            }
            BuildError::InvalidDirectoryRef {
                section,
                label,
                directory,
            } => {
                if directory.is_empty() {
                    write!(
                        f,
                        "sidebar section {} ({:?}): empty content directory reference",
                        section, label
                    )
                } else if directory.chars().any(char::is_whitespace) {
                    write!(
                        f,
                        "sidebar section {} ({:?}): malformed content directory reference {:?}",
                        section, label, directory
                    )
                } else {
                    write!(
                        f,
                        "sidebar section {} ({:?}): {:?} is not a known content directory",
                        section, label, directory
                    )
                }
            }
            BuildError::DuplicateSectionLabel {
                label,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate sidebar section label {:?} (sections {} and {})",
                    label, first, second
                )
            }
            BuildError::AmbiguousSection { section, label } => {
                write!(
                    f,
                    "sidebar section {} ({:?}): declares both items and autogenerate",
                    section, label
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Normalize a base path to its canonical form: leading and trailing
/// slash, with the empty/absent base collapsing to `/`.
///
/// Hand-edited configurations disagree on slash conventions
/// (`vue-docs/` vs `/vue-docs/`); both map to the same canonical value.
pub fn normalize_base(raw: &str) -> Result<String, BuildError> {
    if raw.chars().any(char::is_whitespace) {
        return Err(BuildError::InvalidPath {
            field: "base".to_string(),
            value: raw.to_string(),
        });
    }
    if raw.contains("//") {
        return Err(BuildError::InvalidPath {
            field: "base".to_string(),
            value: raw.to_string(),
        });
    }

    let inner = raw.trim_matches('/');
    if inner.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{}/", inner))
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Diagnostics that do not abort the build by default.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    DuplicateSectionLabel {
        label: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateSectionLabel {
                label,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate sidebar section label {:?} (sections {} and {})",
                    label, first, second
                )
            }
        }
    }
}

/// A sidebar section with its variant resolved. Autogenerated sections
/// keep the directory reference unresolved; expanding it into pages is
/// owned by the external site generator at render time.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedSection {
    Literal { label: String, items: Vec<NavLink> },
    Autogenerated { label: String, directory: String },
}

impl ResolvedSection {
    pub fn label(&self) -> &str {
        match self {
            ResolvedSection::Literal { label, .. } => label,
            ResolvedSection::Autogenerated { label, .. } => label,
        }
    }
}

/// Validated, normalized site configuration, ready to hand to the
/// external site generator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedSite {
    /// Deployment origin, trailing slash stripped; a `site` value that
    /// already carried the base path is reduced to the bare origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Canonical base path (see [`normalize_base`]).
    pub base: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub social: Vec<SocialLink>,
    pub sections: Vec<ResolvedSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl ResolvedSite {
    /// Full site URL: deployment origin joined with the base path.
    pub fn site_url(&self) -> Option<String> {
        self.site
            .as_ref()
            .map(|site| format!("{}{}", site, self.base))
    }
}

/// Validates and normalizes a [`SiteConfig`] in a single pass.
///
/// The builder performs no I/O: content discovery belongs to the
/// external collaborator, so directory references are only checked for
/// existence when the caller supplies the known directories (usually
/// from [`crate::content::ContentScanner`]).
pub struct NavBuilder {
    config: SiteConfig,
    known_directories: Option<Vec<String>>,
    strict_labels: bool,
}

impl NavBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            known_directories: None,
            strict_labels: false,
        }
    }

    /// Restrict autogeneration directives to this set of directories.
    pub fn known_directories<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_directories = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Treat duplicate top-level section labels as an error instead of
    /// a warning.
    pub fn strict_labels(mut self, strict: bool) -> Self {
        self.strict_labels = strict;
        self
    }

    pub fn build(self) -> Result<ResolvedSite, BuildError> {
        let config = self.config;

        let title = match config.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(BuildError::MissingField {
                    field: "title".to_string(),
                    section: None,
                });
            }
        };

        let base = normalize_base(config.base.as_deref().unwrap_or(""))?;

        // Hand-edited configurations often set `site` to the full deploy
        // URL, base path included; reduce it to the bare origin so
        // `site_url()` does not repeat the base.
        let site = match config.site {
            Some(url) => {
                if !is_absolute_url(&url) {
                    return Err(BuildError::InvalidPath {
                        field: "site".to_string(),
                        value: url,
                    });
                }
                let mut origin = url.trim_end_matches('/').to_string();
                let base_suffix = base.trim_end_matches('/');
                if !base_suffix.is_empty() && origin.ends_with(base_suffix) {
                    origin.truncate(origin.len() - base_suffix.len());
                    origin = origin.trim_end_matches('/').to_string();
                }
                Some(origin)
            }
            None => None,
        };

        for (i, link) in config.social.iter().enumerate() {
            for (name, value) in [
                ("icon", &link.icon),
                ("label", &link.label),
                ("href", &link.href),
            ] {
                if value.trim().is_empty() {
                    return Err(BuildError::MissingField {
                        field: format!("social[{}].{}", i, name),
                        section: None,
                    });
                }
            }
            if !is_absolute_url(&link.href) {
                return Err(BuildError::InvalidPath {
                    field: format!("social[{}].href", i),
                    value: link.href.clone(),
                });
            }
        }

        let mut sections = Vec::with_capacity(config.sidebar.len());
        for (i, section) in config.sidebar.into_iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(BuildError::MissingField {
                    field: "label".to_string(),
                    section: Some(i),
                });
            }

            match (section.items, section.autogenerate) {
                (Some(_), Some(_)) => {
                    return Err(BuildError::AmbiguousSection {
                        section: i,
                        label: section.label,
                    });
                }
                (None, None) => {
                    return Err(BuildError::MissingField {
                        field: "one of `items` or `autogenerate`".to_string(),
                        section: Some(i),
                    });
                }
                (Some(items), None) => {
                    let mut resolved_items = Vec::with_capacity(items.len());
                    for (j, item) in items.into_iter().enumerate() {
                        if item.label.trim().is_empty() {
                            return Err(BuildError::MissingField {
                                field: format!("items[{}].label", j),
                                section: Some(i),
                            });
                        }
                        if item.link.is_empty() {
                            return Err(BuildError::MissingField {
                                field: format!("items[{}].link", j),
                                section: Some(i),
                            });
                        }
                        if item.link.chars().any(char::is_whitespace)
                            || item.link.contains("//")
                        {
                            return Err(BuildError::InvalidPath {
                                field: format!("sidebar[{}].items[{}].link", i, j),
                                value: item.link,
                            });
                        }
                        let link = if item.link.starts_with('/') {
                            item.link
                        } else {
                            format!("/{}", item.link)
                        };
                        resolved_items.push(NavLink {
                            label: item.label,
                            link,
                        });
                    }
                    sections.push(ResolvedSection::Literal {
                        label: section.label,
                        items: resolved_items,
                    });
                }
                (None, Some(auto)) => {
                    let directory = auto.directory;
                    if directory.is_empty() || directory.chars().any(char::is_whitespace) {
                        return Err(BuildError::InvalidDirectoryRef {
                            section: i,
                            label: section.label,
                            directory,
                        });
                    }
                    if let Some(known) = &self.known_directories {
                        if !known.iter().any(|d| d == &directory) {
                            return Err(BuildError::InvalidDirectoryRef {
                                section: i,
                                label: section.label,
                                directory,
                            });
                        }
                    }
                    sections.push(ResolvedSection::Autogenerated {
                        label: section.label,
                        directory,
                    });
                }
            }
        }

        // Repeated labels usually mean leftover or conflicting edits of
        // the same configuration, not an intentional repeated grouping.
        let mut warnings = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (i, section) in sections.iter().enumerate() {
            match seen.get(section.label()) {
                Some(&first) => {
                    if self.strict_labels {
                        return Err(BuildError::DuplicateSectionLabel {
                            label: section.label().to_string(),
                            first,
                            second: i,
                        });
                    }
                    warnings.push(Warning::DuplicateSectionLabel {
                        label: section.label().to_string(),
                        first,
                        second: i,
                    });
                }
                None => {
                    seen.insert(section.label(), i);
                }
            }
        }

        Ok(ResolvedSite {
            site,
            base,
            title,
            favicon: config.favicon,
            social: config.social,
            sections,
            warnings,
        })
    }
}
