//! Navigation bar state and in-page section navigation

/// Vertical offset in pixels past which the navigation bar turns opaque
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// A page section that can be scrolled to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Gallery,
    Testimonials,
    About,
    Contact,
}

impl Section {
    /// Sections linked from the navigation bar, in display order
    pub const NAV_LINKS: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Gallery,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Testimonials => "testimonials",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Services => "SERVICES",
            Section::Gallery => "GALLERY",
            Section::Testimonials => "TESTIMONIALS",
            Section::About => "ABOUT",
            Section::Contact => "CONTACT",
        }
    }

    /// Fragment link used as the anchor's `href`
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Scrolls the page to an element by id
pub trait Viewport {
    /// Returns `false` when no element has that id
    fn scroll_to(&self, element_id: &str) -> bool;
}

/// Navigation bar flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recomputes `scrolled` from the current vertical offset
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = is_past_threshold(offset_y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes the mobile menu and scrolls to `section`; missing sections are a no-op
    pub fn navigate<V: Viewport>(&mut self, viewport: &V, section: Section) -> bool {
        self.close_menu();
        viewport.scroll_to(section.id())
    }
}

/// Strictly greater than [`SCROLL_THRESHOLD`]
pub fn is_past_threshold(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeViewport {
        present: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl Viewport for FakeViewport {
        fn scroll_to(&self, element_id: &str) -> bool {
            if self.present.contains(&element_id) {
                self.scrolled_to.borrow_mut().push(element_id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut nav = NavState::new();

        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(50.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0);
        assert!(nav.is_scrolled());
        nav.on_scroll(12.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_fractional_offsets() {
        assert!(is_past_threshold(50.5));
        assert!(!is_past_threshold(49.9));
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_navigate_scrolls_and_closes_menu() {
        let viewport = FakeViewport {
            present: vec!["services", "contact"],
            scrolled_to: RefCell::new(Vec::new()),
        };
        let mut nav = NavState::new();
        nav.toggle_menu();

        assert!(nav.navigate(&viewport, Section::Services));
        assert!(!nav.is_menu_open());
        assert_eq!(*viewport.scrolled_to.borrow(), vec!["services".to_string()]);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let viewport = FakeViewport {
            present: vec![],
            scrolled_to: RefCell::new(Vec::new()),
        };
        let mut nav = NavState::new();
        nav.toggle_menu();

        assert!(!nav.navigate(&viewport, Section::Gallery));
        assert!(!nav.is_menu_open());
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_section_ids_and_links() {
        assert_eq!(Section::Testimonials.id(), "testimonials");
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::NAV_LINKS.len(), 5);
        assert!(!Section::NAV_LINKS.contains(&Section::About));
    }
}
