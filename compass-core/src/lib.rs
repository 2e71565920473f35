pub mod config;
pub mod content;
pub mod nav;

// Re-export main types
pub use config::{AutogenerateRef, NavLink, SidebarSection, SiteConfig, SocialLink};
pub use content::{ContentScanner, ScanError};
pub use nav::{BuildError, NavBuilder, ResolvedSection, ResolvedSite, Warning, normalize_base};
