#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub name: &'static str,
}

/// Page sections in document order, as listed in the header.
pub const SECTIONS: [Section; 5] = [
    Section { id: "home", name: "Home" },
    Section { id: "services", name: "Services" },
    Section { id: "about", name: "About Us" },
    Section { id: "standout", name: "Why Choose Us" },
    Section { id: "contact", name: "Get Quote" },
];

pub const CONTACT_SECTION: &str = "contact";
pub const HOME_SECTION: &str = "home";

/// Header navigation state: whether the mobile menu overlay is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    pub menu_open: bool,
}

impl Navigation {
    pub fn with_menu_open(menu_open: bool) -> Self {
        Self { menu_open }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// The section to scroll to, if `id` names one. Unknown ids resolve to
    /// nothing and the caller does nothing.
    pub fn scroll_target(id: &str) -> Option<&'static Section> {
        SECTIONS.iter().find(|s| s.id == id)
    }

    /// A mobile menu entry was picked: the menu closes, then the page
    /// scrolls to the target if it exists.
    pub fn select(&mut self, id: &str) -> Option<&'static Section> {
        self.menu_open = false;
        Self::scroll_target(id)
    }

    /// Where the menu button points when scripting is unavailable.
    pub fn toggle_href(&self) -> &'static str {
        if self.menu_open {
            "/"
        } else {
            "/?menu=open"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_known_section() {
        let target = Navigation::scroll_target("services").unwrap();
        assert_eq!(target.name, "Services");
    }

    #[test]
    fn test_scroll_target_unknown_is_none() {
        assert!(Navigation::scroll_target("pricing").is_none());
        assert!(Navigation::scroll_target("").is_none());
    }

    #[test]
    fn test_select_closes_menu_and_scrolls() {
        let mut nav = Navigation::with_menu_open(true);
        let target = nav.select("contact");
        assert!(!nav.menu_open);
        assert_eq!(target.map(|s| s.id), Some(CONTACT_SECTION));
    }

    #[test]
    fn test_select_unknown_still_closes_menu() {
        let mut nav = Navigation::with_menu_open(true);
        assert!(nav.select("nowhere").is_none());
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = Navigation::default();
        assert_eq!(nav.toggle_href(), "/?menu=open");
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.toggle_href(), "/");
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_sections_in_page_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["home", "services", "about", "standout", "contact"]);
    }
}
