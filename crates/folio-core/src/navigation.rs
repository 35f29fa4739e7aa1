//! Page and section navigation.
//!
//! [`NavigationController`] is the single writer of [`ViewState`]. Address
//! bar and scroll position live outside the core and are driven through the
//! [`Effects`] trait, so the controller runs the same under the terminal UI
//! and under a recording double in tests.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::locale::Locale;
use crate::schedule::{TimerToken, Timers};

/// Delay before the deep-link scroll fires, so layout has settled.
pub const INITIAL_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Smooth scroll used when jumping to an in-page section. The offset makes
/// room for the fixed top navigation bar.
pub const SECTION_SCROLL: ScrollOptions = ScrollOptions {
    duration: Duration::from_millis(800),
    offset: -64,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Research,
    Blog,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Research => "research",
            Page::Blog => "blog",
        }
    }

    /// Only the standalone pages have an id of their own in the address bar.
    pub fn from_target(id: &str) -> Option<Self> {
        match id {
            "research" => Some(Page::Research),
            "blog" => Some(Page::Blog),
            _ => None,
        }
    }
}

/// Sections stacked on the home page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Education,
    Courses,
    Experience,
    Certificates,
    Skills,
    Family,
    Contact,
    Footer,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Education => "education",
            Section::Courses => "courses",
            Section::Experience => "experience",
            Section::Certificates => "certificates",
            Section::Skills => "skills",
            Section::Family => "family",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Profile,
            Section::Education,
            Section::Courses,
            Section::Experience,
            Section::Certificates,
            Section::Skills,
            Section::Family,
            Section::Contact,
            Section::Footer,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// What the user currently sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub page: Page,
    /// Only meaningful on [`Page::Home`], but kept while other pages are
    /// shown so going home restores it. Unknown ids are stored as given.
    pub active_section: String,
    pub locale: Locale,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            active_section: Section::Profile.as_str().to_string(),
            locale: Locale::En,
        }
    }
}

impl ViewState {
    pub fn path(&self) -> String {
        match self.page {
            Page::Home => format!("/{}", self.active_section),
            page => format!("/{}", page.as_str()),
        }
    }
}

/// A request to change the view, usually from a nav bar click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_id: String,
}

impl NavigationIntent {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

impl From<Section> for NavigationIntent {
    fn from(section: Section) -> Self {
        Self::new(section.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub duration: Duration,
    /// Signed distance applied to the element position, in CSS pixels.
    pub offset: i32,
}

/// Browser-side effects the controller drives after every state change.
pub trait Effects {
    /// Show `path` in the address bar and push a history entry. Must not
    /// reload anything.
    fn set_path(&mut self, path: &str);
    fn scroll_to_top(&mut self);
    fn scroll_to_element(&mut self, id: &str, options: ScrollOptions);
}

/// Entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    /// Where the item actually navigates, when different from `id`.
    pub target: Option<&'static str>,
}

impl NavItem {
    pub fn target_id(&self) -> &'static str {
        self.target.unwrap_or(self.id)
    }

    pub fn intent(&self) -> NavigationIntent {
        NavigationIntent::new(self.target_id())
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "profile", target: None },
    NavItem { id: "education", target: None },
    NavItem { id: "courses", target: None },
    NavItem { id: "experience", target: None },
    NavItem { id: "certificates", target: None },
    NavItem { id: "skills", target: None },
    NavItem { id: "family", target: None },
    NavItem { id: "contact", target: None },
    NavItem { id: "research", target: None },
    NavItem { id: "blog", target: None },
    NavItem { id: "social-links", target: Some("footer") },
];

/// Where a location path points, before any effect is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Page(Page),
    Section(Section),
    /// Anything else; carries the first path segment as typed.
    Unknown(String),
}

fn parse_location(path: &str) -> Location {
    let segment = path
        .trim_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();

    if let Some(page) = Page::from_target(segment) {
        Location::Page(page)
    } else if let Ok(section) = segment.parse::<Section>() {
        Location::Section(section)
    } else {
        Location::Unknown(segment.to_string())
    }
}

pub struct NavigationController<E: Effects> {
    state: ViewState,
    effects: E,
    timers: Timers<String>,
    initial_scroll: Option<TimerToken>,
}

impl<E: Effects> NavigationController<E> {
    pub fn new(effects: E, locale: Locale) -> Self {
        Self {
            state: ViewState {
                locale,
                ..ViewState::default()
            },
            effects,
            timers: Timers::new(),
            initial_scroll: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// Build the view for the path the app was opened at. Unknown paths
    /// fall back to the default view and the address bar is left alone.
    pub fn initialize_from_location(&mut self, path: &str) -> &ViewState {
        self.cancel_initial_scroll();

        match parse_location(path) {
            Location::Page(page) => self.state.page = page,
            Location::Section(section) => {
                self.state.page = Page::Home;
                self.state.active_section = section.as_str().to_string();
                let token = self
                    .timers
                    .schedule(INITIAL_SCROLL_DELAY, section.as_str().to_string());
                self.initial_scroll = Some(token);
            }
            Location::Unknown(_) => {
                self.state.page = Page::Home;
                self.state.active_section = Section::Profile.as_str().to_string();
            }
        }

        debug!(path, page = self.state.page.as_str(), section = %self.state.active_section, "initialized view");
        &self.state
    }

    pub fn navigate(&mut self, intent: NavigationIntent) -> &ViewState {
        self.cancel_initial_scroll();
        let target = intent.target_id;

        if let Some(page) = Page::from_target(&target) {
            self.state.page = page;
            self.effects.set_path(&format!("/{}", page.as_str()));
            self.effects.scroll_to_top();
        } else {
            self.state.page = Page::Home;
            self.effects.set_path(&format!("/{}", target));
            self.effects.scroll_to_element(&target, SECTION_SCROLL);
            self.state.active_section = target;
        }

        debug!(page = self.state.page.as_str(), section = %self.state.active_section, "navigated");
        &self.state
    }

    /// Leave Research/Blog for the top of the home page.
    pub fn go_home(&mut self) -> &ViewState {
        self.cancel_initial_scroll();
        let profile = Section::Profile.as_str();

        self.state.page = Page::Home;
        self.state.active_section = profile.to_string();
        self.effects.set_path(&format!("/{}", profile));
        self.effects.scroll_to_top();

        debug!("returned home");
        &self.state
    }

    pub fn toggle_locale(&mut self) -> &ViewState {
        self.state.locale = self.state.locale.toggle();
        debug!(locale = self.state.locale.as_str(), "toggled locale");
        &self.state
    }

    /// Apply a path reached through back/forward. Reacts immediately and
    /// never pushes history. Unknown segments were pushed by `navigate`, so
    /// they come back literally; only the bare root falls back to profile.
    pub fn restore_from_location(&mut self, path: &str) -> &ViewState {
        self.cancel_initial_scroll();

        match parse_location(path) {
            Location::Page(page) => {
                self.state.page = page;
                self.effects.scroll_to_top();
            }
            Location::Section(section) => {
                self.state.page = Page::Home;
                self.state.active_section = section.as_str().to_string();
                self.effects.scroll_to_element(section.as_str(), SECTION_SCROLL);
            }
            Location::Unknown(segment) if !segment.is_empty() => {
                self.state.page = Page::Home;
                self.effects.scroll_to_element(&segment, SECTION_SCROLL);
                self.state.active_section = segment;
            }
            Location::Unknown(_) => {
                self.state.page = Page::Home;
                self.state.active_section = Section::Profile.as_str().to_string();
                self.effects.scroll_to_top();
            }
        }

        debug!(path, "restored view from history");
        &self.state
    }

    /// Advance deferred actions by `elapsed`, applying any that came due.
    pub fn tick(&mut self, elapsed: Duration) {
        let due = self.timers.advance(elapsed);
        self.apply_deferred(due);
    }

    pub fn flush_deferred(&mut self) {
        let due = self.timers.flush();
        self.apply_deferred(due);
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.initial_scroll
            .is_some_and(|token| self.timers.is_pending(token))
    }

    fn apply_deferred(&mut self, due: Vec<String>) {
        if due.is_empty() {
            return;
        }
        self.initial_scroll = None;
        for id in due {
            debug!(section = %id, "deferred scroll fired");
            self.effects.scroll_to_element(&id, SECTION_SCROLL);
        }
    }

    fn cancel_initial_scroll(&mut self) {
        if let Some(token) = self.initial_scroll.take() {
            self.timers.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetPath(String),
        ScrollTop,
        ScrollTo(String, ScrollOptions),
    }

    #[derive(Default)]
    struct RecordingEffects {
        address: String,
        history: Vec<String>,
        calls: Vec<Call>,
    }

    impl Effects for RecordingEffects {
        fn set_path(&mut self, path: &str) {
            self.address = path.to_string();
            self.history.push(path.to_string());
            self.calls.push(Call::SetPath(path.to_string()));
        }

        fn scroll_to_top(&mut self) {
            self.calls.push(Call::ScrollTop);
        }

        fn scroll_to_element(&mut self, id: &str, options: ScrollOptions) {
            self.calls.push(Call::ScrollTo(id.to_string(), options));
        }
    }

    fn controller() -> NavigationController<RecordingEffects> {
        NavigationController::new(RecordingEffects::default(), Locale::En)
    }

    #[test]
    fn test_known_sections_navigate_home_with_matching_path() {
        for section in Section::all() {
            let mut nav = controller();
            nav.navigate(section.into());

            assert_eq!(nav.state().page, Page::Home);
            assert_eq!(nav.state().active_section, section.as_str());
            assert_eq!(nav.effects().address, format!("/{}", section.as_str()));
            assert_eq!(
                nav.effects().calls.last(),
                Some(&Call::ScrollTo(section.as_str().to_string(), SECTION_SCROLL))
            );
        }
    }

    #[test]
    fn test_section_scroll_uses_fixed_duration_and_offset() {
        assert_eq!(SECTION_SCROLL.duration, Duration::from_millis(800));
        assert_eq!(SECTION_SCROLL.offset, -64);
    }

    #[test]
    fn test_page_navigation_keeps_active_section() {
        for (target, page) in [("research", Page::Research), ("blog", Page::Blog)] {
            let mut nav = controller();
            nav.navigate(NavigationIntent::new("skills"));
            nav.navigate(NavigationIntent::new(target));

            assert_eq!(nav.state().page, page);
            assert_eq!(nav.state().active_section, "skills");
            assert_eq!(nav.effects().address, format!("/{}", target));
            assert_eq!(nav.effects().calls.last(), Some(&Call::ScrollTop));
        }
    }

    #[test]
    fn test_go_home_always_lands_on_profile_top() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("family"));
        nav.navigate(NavigationIntent::new("research"));

        let state = nav.go_home().clone();

        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section, "profile");
        assert_eq!(nav.effects().address, "/profile");
        assert_eq!(nav.effects().calls.last(), Some(&Call::ScrollTop));
    }

    #[test]
    fn test_toggle_locale_twice_is_identity_and_pushes_no_history() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("blog"));
        let before = nav.state().clone();
        let history_len = nav.effects().history.len();

        assert_eq!(nav.toggle_locale().locale, Locale::Bn);
        let after = nav.toggle_locale().clone();

        assert_eq!(after, before);
        assert_eq!(nav.effects().history.len(), history_len);
    }

    #[test]
    fn test_every_navigation_pushes_history() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("education"));
        nav.navigate(NavigationIntent::new("research"));
        nav.go_home();

        assert_eq!(nav.effects().history, vec!["/education", "/research", "/profile"]);
    }

    #[test]
    fn test_unknown_target_is_kept_literally() {
        let mut nav = controller();
        let state = nav.navigate(NavigationIntent::new("hobbies")).clone();

        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section, "hobbies");
        assert_eq!(nav.effects().address, "/hobbies");
    }

    #[test]
    fn test_initialize_from_section_path_schedules_one_scroll() {
        let mut nav = controller();
        let state = nav.initialize_from_location("/certificates").clone();

        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section, "certificates");
        assert!(nav.effects().calls.is_empty());
        assert!(nav.has_pending_scroll());

        nav.tick(Duration::from_millis(50));
        assert!(nav.effects().calls.is_empty());

        nav.tick(Duration::from_millis(50));
        assert_eq!(
            nav.effects().calls,
            vec![Call::ScrollTo("certificates".to_string(), SECTION_SCROLL)]
        );

        nav.flush_deferred();
        assert_eq!(nav.effects().calls.len(), 1);
    }

    #[test]
    fn test_initialize_from_unknown_path_falls_back_silently() {
        let mut nav = controller();
        let state = nav.initialize_from_location("/unknown-garbage").clone();

        assert_eq!(state, ViewState::default());
        assert!(nav.effects().history.is_empty());
        assert!(!nav.has_pending_scroll());
    }

    #[test]
    fn test_initialize_from_page_paths() {
        let mut nav = controller();
        assert_eq!(nav.initialize_from_location("/research").page, Page::Research);
        assert_eq!(nav.initialize_from_location("blog/").page, Page::Blog);
        assert_eq!(nav.initialize_from_location("").page, Page::Home);
    }

    #[test]
    fn test_navigating_before_deep_link_scroll_cancels_it() {
        let mut nav = controller();
        nav.initialize_from_location("/skills");
        nav.navigate(NavigationIntent::new("blog"));

        assert!(!nav.has_pending_scroll());
        nav.flush_deferred();
        assert_eq!(nav.effects().calls, vec![Call::SetPath("/blog".to_string()), Call::ScrollTop]);
    }

    #[test]
    fn test_restore_from_history_does_not_push() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("contact"));
        nav.navigate(NavigationIntent::new("research"));

        let state = nav.restore_from_location("/contact").clone();

        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section, "contact");
        assert_eq!(nav.effects().history, vec!["/contact", "/research"]);
    }

    #[test]
    fn test_restore_keeps_unknown_segment_that_navigate_pushed() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("hobbies"));
        nav.navigate(NavigationIntent::new("blog"));

        let state = nav.restore_from_location("/hobbies").clone();

        assert_eq!(state.page, Page::Home);
        assert_eq!(state.active_section, "hobbies");
        assert_eq!(
            nav.effects().calls.last(),
            Some(&Call::ScrollTo("hobbies".to_string(), SECTION_SCROLL))
        );
        assert_eq!(nav.effects().history, vec!["/hobbies", "/blog"]);
    }

    #[test]
    fn test_restore_of_root_path_shows_profile_top() {
        let mut nav = controller();
        nav.navigate(NavigationIntent::new("skills"));

        let state = nav.restore_from_location("/").clone();

        assert_eq!(state.active_section, "profile");
        assert_eq!(nav.effects().calls.last(), Some(&Call::ScrollTop));
    }

    #[test]
    fn test_section_parses_from_its_id() {
        assert_eq!("family".parse::<Section>(), Ok(Section::Family));
        assert_eq!(
            "hobbies".parse::<Section>(),
            Err(UnknownSection("hobbies".to_string()))
        );
    }

    #[test]
    fn test_social_links_item_targets_footer() {
        let social = NAV_ITEMS.iter().find(|item| item.id == "social-links").unwrap();
        let mut nav = controller();
        nav.navigate(social.intent());

        assert_eq!(nav.state().active_section, "footer");
        assert_eq!(nav.state().path(), "/footer");
    }
}
