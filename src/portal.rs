//! Static portal data: the signed-in user descriptor and the sidebar navigation.
//!
//! Both are loaded once from configuration and never mutated afterwards. The
//! defaults reproduce the portal's stock menu, so an empty config file still
//! yields a usable sidebar.
//!
//! # Example
//!
//! ```rust
//! use unw_toefl_portal::portal::{IconName, Navigation, NavigationItem};
//!
//! let nav = Navigation::new(vec![
//!     NavigationItem::new("Dashboard", "/dashboard", IconName::LayoutDashboard),
//! ])
//! .unwrap();
//! assert_eq!(nav.len(), 1);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder link target used by the stock menu.
pub const PLACEHOLDER_TARGET: &str = "#";

/// Glyphs available to navigation rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    LayoutDashboard,
    Pencil,
    Wallet,
    History,
    FileText,
}

/// Descriptor of the student shown in the sidebar footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDescriptor {
    /// Student number (NIM).
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl Default for UserDescriptor {
    fn default() -> Self {
        Self {
            id: "NIM.123456".to_string(),
            display_name: "Jane Doe".to_string(),
            email: "janedoe@example.com".to_string(),
        }
    }
}

/// One row of the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Row label. Also the row's identity, so it must be unique.
    pub title: String,
    /// Link reference.
    #[serde(default = "default_target")]
    pub target: String,
    pub icon: IconName,
}

fn default_target() -> String {
    PLACEHOLDER_TARGET.to_string()
}

impl NavigationItem {
    pub fn new(title: impl Into<String>, target: impl Into<String>, icon: IconName) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
            icon,
        }
    }
}

/// Reasons a navigation list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation must contain at least one item")]
    Empty,
    #[error("duplicate navigation title: {0}")]
    DuplicateTitle(String),
}

/// Ordered, non-empty list of navigation items with unique titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavigationItem>", into = "Vec<NavigationItem>")]
pub struct Navigation(Vec<NavigationItem>);

impl Navigation {
    pub fn new(items: Vec<NavigationItem>) -> Result<Self, NavigationError> {
        if items.is_empty() {
            return Err(NavigationError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.title.as_str()) {
                return Err(NavigationError::DuplicateTitle(item.title.clone()));
            }
        }

        Ok(Self(items))
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|item| item.title.as_str())
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self(vec![
            NavigationItem::new("Dashboard", PLACEHOLDER_TARGET, IconName::LayoutDashboard),
            NavigationItem::new("Pendaftaran", PLACEHOLDER_TARGET, IconName::Pencil),
            NavigationItem::new("Keuangan", PLACEHOLDER_TARGET, IconName::Wallet),
            NavigationItem::new("Riwayat", PLACEHOLDER_TARGET, IconName::History),
            NavigationItem::new("Dokumen", PLACEHOLDER_TARGET, IconName::FileText),
        ])
    }
}

impl TryFrom<Vec<NavigationItem>> for Navigation {
    type Error = NavigationError;

    fn try_from(items: Vec<NavigationItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Navigation> for Vec<NavigationItem> {
    fn from(nav: Navigation) -> Self {
        nav.0
    }
}

impl IntoIterator for Navigation {
    type Item = NavigationItem;
    type IntoIter = std::vec::IntoIter<NavigationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_navigation_is_the_stock_menu() {
        let nav = Navigation::default();
        let titles: Vec<&str> = nav.titles().collect();
        assert_eq!(
            titles,
            ["Dashboard", "Pendaftaran", "Keuangan", "Riwayat", "Dokumen"]
        );
        assert!(nav.items().iter().all(|i| i.target == PLACEHOLDER_TARGET));
    }

    #[test]
    fn empty_navigation_is_rejected() {
        assert_eq!(Navigation::new(vec![]), Err(NavigationError::Empty));
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let err = Navigation::new(vec![
            NavigationItem::new("Dokumen", "#", IconName::FileText),
            NavigationItem::new("Dokumen", "/docs", IconName::FileText),
        ])
        .unwrap_err();
        assert_eq!(err, NavigationError::DuplicateTitle("Dokumen".into()));
    }

    #[test]
    fn deserializing_enforces_invariant() {
        let ok: Navigation = serde_json::from_str(
            r#"[{"title":"Riwayat","icon":"history"},{"title":"Keuangan","target":"/pay","icon":"wallet"}]"#,
        )
        .unwrap();
        assert_eq!(ok.items()[0].target, "#");
        assert_eq!(ok.items()[1].icon, IconName::Wallet);

        let dup = serde_json::from_str::<Navigation>(
            r#"[{"title":"A","icon":"pencil"},{"title":"A","icon":"pencil"}]"#,
        );
        assert!(dup.is_err());
    }
}
