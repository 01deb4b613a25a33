//! Sidebar navigation state
//!
//! Pure UI state: which section is active and whether the sidebar overlay
//! is shown. Viewports narrower than [`NARROW_BREAKPOINT`] treat the sidebar
//! as an overlay that closes after a selection or an outside click.

/// Width below which the sidebar behaves as an overlay
pub const NARROW_BREAKPOINT: u32 = 992;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Stocks,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Dashboard, Section::Stocks];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Stocks => "stocks",
        }
    }

    /// Parse a link target such as `#stocks`
    pub fn from_anchor(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Section::ALL.into_iter().find(|s| s.anchor() == id)
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    active: Section,
    sidebar_open: bool,
    viewport_width: u32,
}

impl Navigation {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            active: Section::default(),
            sidebar_open: false,
            viewport_width,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width < NARROW_BREAKPOINT
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Activate a section; narrow viewports also close the sidebar
    pub fn select(&mut self, section: Section) {
        self.active = section;
        if self.is_narrow() {
            self.sidebar_open = false;
        }
    }

    /// Follow a link; unknown anchors leave the active section unchanged
    pub fn select_anchor(&mut self, href: &str) -> bool {
        match Section::from_anchor(href) {
            Some(section) => {
                self.select(section);
                true
            }
            None => false,
        }
    }

    pub fn click_outside(&mut self) {
        if self.is_narrow() {
            self.sidebar_open = false;
        }
    }

    pub fn resize(&mut self, width: u32) {
        self.viewport_width = width;
        if !self.is_narrow() {
            self.sidebar_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_on_narrow_viewport_closes_sidebar() {
        let mut nav = Navigation::new(600);
        nav.toggle_sidebar();
        assert!(nav.is_sidebar_open());

        nav.select(Section::Stocks);
        assert_eq!(nav.active(), Section::Stocks);
        assert!(!nav.is_sidebar_open());
    }

    #[test]
    fn select_on_wide_viewport_keeps_sidebar() {
        let mut nav = Navigation::new(1280);
        nav.toggle_sidebar();
        nav.select(Section::Stocks);
        assert!(nav.is_sidebar_open());
    }

    #[test]
    fn outside_click_only_matters_when_narrow() {
        let mut wide = Navigation::new(1280);
        wide.toggle_sidebar();
        wide.click_outside();
        assert!(wide.is_sidebar_open());

        let mut narrow = Navigation::new(800);
        narrow.toggle_sidebar();
        narrow.click_outside();
        assert!(!narrow.is_sidebar_open());
    }

    #[test]
    fn growing_past_breakpoint_hides_overlay() {
        let mut nav = Navigation::new(800);
        nav.toggle_sidebar();
        nav.resize(991);
        assert!(nav.is_sidebar_open());
        nav.resize(992);
        assert!(!nav.is_sidebar_open());
    }

    #[test]
    fn anchors() {
        assert_eq!(Section::from_anchor("#stocks"), Some(Section::Stocks));
        assert_eq!(Section::from_anchor("dashboard"), Some(Section::Dashboard));
        assert_eq!(Section::from_anchor("#nowhere"), None);

        let mut nav = Navigation::new(1280);
        assert!(!nav.select_anchor("#nowhere"));
        assert_eq!(nav.active(), Section::Dashboard);
        assert!(nav.select_anchor("#stocks"));
        assert_eq!(nav.active(), Section::Stocks);
    }
}
