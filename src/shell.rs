//! Navigation Shell
//!
//! Routes and the chrome around every page. Path and scroll offset are
//! handed in by the host (router location, scroll listener); nothing here
//! reads the window.

/// Top bar condenses past this offset (px)
pub const CONDENSE_THRESHOLD: f64 = 20.0;
/// Scroll-to-top button appears past this offset (px)
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    FakeNews,
    RealNews,
    Chatbot,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Dashboard,
            "/fake-news" => Route::FakeNews,
            "/real-news" => Route::RealNews,
            "/chatbot" => Route::Chatbot,
            _ => Route::NotFound,
        }
    }

    /// `None` for the catch-all
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some("/"),
            Route::FakeNews => Some("/fake-news"),
            Route::RealNews => Some("/real-news"),
            Route::Chatbot => Some("/chatbot"),
            Route::NotFound => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::FakeNews => "Fake News",
            Route::RealNews => "Real News",
            Route::Chatbot => "Chatbot",
            Route::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub icon: &'static str,
    pub badge: Option<u32>,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        self.route.title()
    }

    pub fn path(&self) -> &'static str {
        self.route.path().unwrap_or("/")
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        route: Route::Dashboard,
        icon: "📊",
        badge: None,
    },
    NavLink {
        route: Route::FakeNews,
        icon: "⚠️",
        badge: Some(12),
    },
    NavLink {
        route: Route::RealNews,
        icon: "✅",
        badge: None,
    },
    NavLink {
        route: Route::Chatbot,
        icon: "💬",
        badge: None,
    },
];

/// Visual variant of a nav link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Idle,
    Hovered,
    Active,
}

impl LinkStyle {
    pub fn class(&self) -> &'static str {
        match self {
            LinkStyle::Idle => "nav-link",
            LinkStyle::Hovered => "nav-link nav-link-hover",
            LinkStyle::Active => "nav-link nav-link-active",
        }
    }

    /// Side bar entries only distinguish the current page; hover is CSS
    pub fn sidebar_class(&self) -> &'static str {
        match self {
            LinkStyle::Active => "sidebar-link sidebar-link-active",
            LinkStyle::Idle | LinkStyle::Hovered => "sidebar-link",
        }
    }
}

/// Open/closed and scroll state of the shell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    path: String,
    scroll_offset: f64,
    menu_open: bool,
    dropdown: Option<String>,
    hovered: Option<Route>,
}

impl ShellState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// Location changed; the mobile menu and dropdowns close behind it
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.menu_open = false;
        self.dropdown = None;
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn is_condensed(&self) -> bool {
        self.scroll_offset > CONDENSE_THRESHOLD
    }

    pub fn shows_scroll_top(&self) -> bool {
        self.scroll_offset > SCROLL_TOP_THRESHOLD
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// At most one dropdown is open; toggling the open one closes it
    pub fn toggle_dropdown(&mut self, name: &str) {
        if self.dropdown.as_deref() == Some(name) {
            self.dropdown = None;
        } else {
            self.dropdown = Some(name.to_string());
        }
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.dropdown.as_deref()
    }

    pub fn close_dropdowns(&mut self) {
        self.dropdown = None;
    }

    pub fn set_hovered(&mut self, route: Option<Route>) {
        self.hovered = route;
    }

    /// Exact path match, so `/` is not active on `/fake-news`
    pub fn is_active(&self, link: &NavLink) -> bool {
        link.route.path() == Some(self.path.as_str())
    }

    pub fn link_style(&self, link: &NavLink) -> LinkStyle {
        if self.is_active(link) {
            LinkStyle::Active
        } else if self.hovered == Some(link.route) {
            LinkStyle::Hovered
        } else {
            LinkStyle::Idle
        }
    }
}
