use serde::{Deserialize, Serialize};

/// An item in the site navigation. Submenu entries are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub title: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
    #[serde(default)]
    pub submenu: Option<Vec<MenuEntry>>,
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    NewTab,
    SameTab,
}

impl LinkTarget {
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            Self::NewTab
        } else {
            Self::SameTab
        }
    }

    /// Value for the anchor's `target` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
            Self::SameTab => "_self",
        }
    }
}

impl MenuEntry {
    pub fn leaf(title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            path: Some(path.to_string()),
            new_tab: false,
            submenu: None,
        }
    }

    pub fn with_submenu(title: &str, children: Vec<MenuEntry>) -> Self {
        Self {
            title: title.to_string(),
            path: None,
            new_tab: false,
            submenu: Some(children),
        }
    }

    /// Children of a dropdown entry. Empty for leaves and for an empty submenu.
    pub fn children(&self) -> &[MenuEntry] {
        self.submenu.as_deref().unwrap_or_default()
    }

    pub fn has_submenu(&self) -> bool {
        !self.children().is_empty()
    }

    /// Exact path equality against the current route. No prefix matching.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path.as_deref() == Some(current_path)
    }

    pub fn link_target(&self) -> LinkTarget {
        LinkTarget::from_new_tab(self.new_tab)
    }

    /// Link destination, `#` for entries without a path.
    pub fn href(&self) -> &str {
        self.path.as_deref().unwrap_or("#")
    }
}

/// Header disclosure flags. The two flags are independent: no transition
/// touches both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_panel_open: bool,
    pub dropdown_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger click.
    pub fn toggle_mobile_panel(&mut self) -> bool {
        self.mobile_panel_open = !self.mobile_panel_open;
        self.mobile_panel_open
    }

    /// Click on the label of an entry that has a submenu.
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    /// Click on a leaf link: the mobile panel closes, the dropdown keeps its
    /// state.
    pub fn follow_leaf_link(&mut self) {
        self.mobile_panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Click {
        Hamburger,
        DropdownLabel,
    }

    fn click_strategy() -> impl Strategy<Value = Click> {
        prop_oneof![Just(Click::Hamburger), Just(Click::DropdownLabel)]
    }

    #[test]
    fn test_initial_state_closed() {
        let nav = NavState::new();
        assert!(!nav.mobile_panel_open);
        assert!(!nav.dropdown_open);
    }

    #[test]
    fn test_toggles_do_not_interfere() {
        let mut nav = NavState::new();
        assert!(nav.toggle_mobile_panel());
        assert!(!nav.dropdown_open);
        assert!(nav.toggle_dropdown());
        assert!(nav.mobile_panel_open);
        assert!(!nav.toggle_mobile_panel());
        assert!(nav.dropdown_open);
    }

    #[test]
    fn test_leaf_link_closes_panel_either_dropdown_state() {
        for dropdown_open in [false, true] {
            let mut nav = NavState {
                mobile_panel_open: true,
                dropdown_open,
            };
            nav.follow_leaf_link();
            assert!(!nav.mobile_panel_open);
            assert_eq!(nav.dropdown_open, dropdown_open);
        }
    }

    #[test]
    fn test_leaf_link_on_closed_panel_stays_closed() {
        let mut nav = NavState::new();
        nav.follow_leaf_link();
        assert_eq!(nav, NavState::new());
    }

    #[test]
    fn test_active_link_exact_match() {
        let menu = [
            MenuEntry::leaf("Home", "/"),
            MenuEntry::leaf("Pricing", "/pricing"),
            MenuEntry::leaf("Old pricing", "/pricing/old"),
        ];
        let active: Vec<&str> = menu
            .iter()
            .filter(|e| e.is_active("/pricing"))
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(active, vec!["Pricing"]);
    }

    #[test]
    fn test_entry_without_path_never_active() {
        let entry = MenuEntry::with_submenu("Pages", vec![MenuEntry::leaf("Docs", "/docs")]);
        assert!(!entry.is_active("/"));
        assert!(!entry.is_active(""));
    }

    #[test]
    fn test_submenu_detection() {
        let empty = MenuEntry::with_submenu("Nothing", vec![]);
        assert!(!empty.has_submenu());
        assert!(empty.children().is_empty());

        let pages = MenuEntry::with_submenu("Pages", vec![MenuEntry::leaf("Blog", "/blog")]);
        assert!(pages.has_submenu());
        assert!(!MenuEntry::leaf("Home", "/").has_submenu());
    }

    #[test]
    fn test_link_target_and_href() {
        let mut entry = MenuEntry::leaf("Docs", "https://docs.example.com");
        assert_eq!(entry.link_target().as_attr(), "_self");
        entry.new_tab = true;
        assert_eq!(entry.link_target(), LinkTarget::NewTab);
        assert_eq!(entry.link_target().as_attr(), "_blank");

        entry.path = None;
        assert_eq!(entry.href(), "#");
    }

    #[test]
    fn test_deserialize_camel_case_defaults() {
        let json = r#"[
            {"title": "Home", "path": "/"},
            {"title": "Support", "path": "/support", "newTab": true},
            {"title": "Pages", "submenu": [{"title": "Sign in"}]}
        ]"#;
        let menu: Vec<MenuEntry> = serde_json::from_str(json).unwrap();
        assert!(!menu[0].new_tab);
        assert!(menu[1].new_tab);
        assert_eq!(menu[2].children()[0].href(), "#");
    }

    proptest! {
        #[test]
        fn flags_track_own_toggle_parity(
            clicks in prop::collection::vec(click_strategy(), 0..64),
        ) {
            let mut nav = NavState::new();
            let mut hamburger = 0usize;
            let mut label = 0usize;
            for click in clicks {
                match click {
                    Click::Hamburger => {
                        hamburger += 1;
                        nav.toggle_mobile_panel();
                    }
                    Click::DropdownLabel => {
                        label += 1;
                        nav.toggle_dropdown();
                    }
                }
            }
            prop_assert_eq!(nav.mobile_panel_open, hamburger % 2 == 1);
            prop_assert_eq!(nav.dropdown_open, label % 2 == 1);
        }
    }
}
