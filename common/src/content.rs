use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::faq::{FaqEntry, FaqId};
use crate::menu::MenuEntry;

/// Logo shown at the left of the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub logo: String,
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    "/".into()
}

/// Button in the header action area, e.g. "Join Waitlist".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub new_tab: bool,
}

/// Static content of the site, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: Brand,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
    /// Source repository link rendered next to the call to action.
    #[serde(default)]
    pub repository: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate FAQ id {0}")]
    DuplicateFaqId(FaqId),
    #[error("menu entry {parent:?} has submenu entry {child:?} with its own submenu")]
    NestedSubmenu { parent: String, child: String },
    #[error("menu entry {0:?} has both a path and a submenu")]
    AmbiguousMenuEntry(String),
    #[error("menu entry {0:?} has neither a path nor a submenu")]
    MissingPath(String),
}

impl SiteContent {
    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the contracts the disclosure components rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for entry in &self.faq {
            if !seen.insert(entry.id) {
                return Err(ContentError::DuplicateFaqId(entry.id));
            }
        }

        for entry in &self.menu {
            if entry.has_submenu() {
                if entry.path.is_some() {
                    return Err(ContentError::AmbiguousMenuEntry(entry.title.clone()));
                }
                if let Some(child) = entry.children().iter().find(|c| c.submenu.is_some()) {
                    return Err(ContentError::NestedSubmenu {
                        parent: entry.title.clone(),
                        child: child.title.clone(),
                    });
                }
            } else if entry.path.is_none() {
                // Submenu children may omit a path and fall back to `#`; top-level
                // leaves may not.
                return Err(ContentError::MissingPath(entry.title.clone()));
            }
        }
        Ok(())
    }
}
