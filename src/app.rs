use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::text::Line;
use folio_core::chat::{ChatPhase, ChatSession};
use folio_core::navigation::{Effects, NavigationController, NavigationIntent, Page, ScrollOptions, Section};
use folio_core::responder::{age_on, failure_reply, BIRTH_DATE};
use folio_core::{Config, Locale, PortfolioContent, Responder, TextGenClient, NAV_ITEMS};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ui;

/// Height of one terminal row in CSS pixels, used to turn scroll offsets
/// into rows.
pub const ROW_PX: i32 = 16;

/// Characters of an assistant reply revealed per tick.
pub const REVEAL_CHARS_PER_TICK: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Smooth scroll between two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: u16,
    to: u16,
    elapsed: Duration,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn position(&self) -> u16 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        // ease in-out
        let eased = if t < 0.5 { 2.0 * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(2) / 2.0 };
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as u16
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The terminal's stand-in for the browser: address bar, session history
/// and the document scroll position.
#[derive(Debug)]
pub struct TerminalEffects {
    pub address: String,
    history: Vec<String>,
    cursor: usize,
    pub scroll: u16,
    animation: Option<ScrollAnimation>,
    /// First row of each home section in the laid out document.
    anchors: HashMap<String, u16>,
}

impl TerminalEffects {
    pub fn new(initial_path: &str) -> Self {
        Self {
            address: initial_path.to_string(),
            history: vec![initial_path.to_string()],
            cursor: 0,
            scroll: 0,
            animation: None,
            anchors: HashMap::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Step back in history. Returns the path now shown.
    pub fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.address = self.history[self.cursor].clone();
        Some(self.address.clone())
    }

    pub fn forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.address = self.history[self.cursor].clone();
        Some(self.address.clone())
    }

    pub fn set_anchors(&mut self, anchors: HashMap<String, u16>) {
        self.anchors = anchors;
    }

    pub fn anchor(&self, id: &str) -> Option<u16> {
        self.anchors.get(id).copied()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Manual scrolling stops any running animation.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.animation = None;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max as i32) as u16;
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(animation) = self.animation.as_mut() {
            animation.elapsed += elapsed;
            self.scroll = animation.position();
            if animation.is_done() {
                self.animation = None;
            }
        }
    }
}

impl Effects for TerminalEffects {
    fn set_path(&mut self, path: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor = self.history.len() - 1;
        self.address = path.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.animation = None;
        self.scroll = 0;
    }

    fn scroll_to_element(&mut self, id: &str, options: ScrollOptions) {
        let Some(row) = self.anchors.get(id).copied() else {
            debug!(id, "no element to scroll to");
            return;
        };
        let target = (row as i32 + options.offset / ROW_PX).max(0) as u16;
        self.animation = Some(ScrollAnimation {
            from: self.scroll,
            to: target,
            elapsed: Duration::ZERO,
            duration: options.duration,
        });
    }
}

/// One rendered row of the home document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLine {
    pub section: Section,
    pub text: String,
    pub heading: bool,
}

impl HomeLine {
    /// The styled row exactly as the document shows it.
    pub fn to_line(&self) -> Line<'static> {
        if self.heading {
            ui::heading(&self.text.to_uppercase())
        } else {
            ui::parse_markdown_line(&self.text)
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,

    pub nav: NavigationController<TerminalEffects>,
    pub content: PortfolioContent,
    /// Highlighted entry of the navigation bar.
    pub nav_cursor: usize,

    // Document layout, refreshed on render
    pub body_height: u16,
    pub body_width: u16,
    pub total_body_lines: u16,
    /// Width and locale the section anchors were measured for.
    layout_key: Option<(u16, Locale)>,

    // Assistant chat
    pub chat_open: bool,
    pub chat: ChatSession,
    pub chat_input: String,
    pub chat_cursor: usize,
    pub chat_scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,
    /// Panel area for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,
    pub reply_task: Option<(u64, JoinHandle<String>)>,
    pub responder: Responder,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation
}

impl App {
    pub fn new(config: &Config, content: PortfolioContent, initial_path: &str) -> anyhow::Result<Self> {
        let client = TextGenClient::with_timeout(
            &config.endpoint_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,

            nav: NavigationController::new(TerminalEffects::new(initial_path), config.default_locale),
            content,
            nav_cursor: 0,

            body_height: 0,
            body_width: 80,
            total_body_lines: 0,
            layout_key: None,

            chat_open: false,
            chat: ChatSession::new(),
            chat_input: String::new(),
            chat_cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            chat_area: None,
            reply_task: None,
            responder: Responder::new(client),

            animation_frame: 0,
        };

        // Anchors have to exist before the deferred deep-link scroll fires.
        app.refresh_anchors();
        app.nav.initialize_from_location(initial_path);
        app.sync_nav_cursor();

        Ok(app)
    }

    pub fn locale(&self) -> Locale {
        self.nav.state().locale
    }

    pub fn page(&self) -> Page {
        self.nav.state().page
    }

    pub fn age(&self) -> u32 {
        age_on(BIRTH_DATE, Local::now().date_naive())
    }

    // Navigation actions
    pub fn navigate(&mut self, target_id: &str) {
        self.nav.navigate(NavigationIntent::new(target_id));
        self.sync_nav_cursor();
    }

    pub fn activate_nav_item(&mut self, index: usize) {
        if let Some(item) = NAV_ITEMS.get(index) {
            self.nav_cursor = index;
            self.nav.navigate(item.intent());
        }
    }

    pub fn go_home(&mut self) {
        self.nav.go_home();
        self.sync_nav_cursor();
    }

    /// Every home line changes with the locale, so the anchors do too.
    pub fn toggle_locale(&mut self) {
        self.nav.toggle_locale();
        self.refresh_anchors();
    }

    pub fn history_back(&mut self) {
        if let Some(path) = self.nav.effects_mut().back() {
            self.nav.restore_from_location(&path);
            self.sync_nav_cursor();
        }
    }

    pub fn history_forward(&mut self) {
        if let Some(path) = self.nav.effects_mut().forward() {
            self.nav.restore_from_location(&path);
            self.sync_nav_cursor();
        }
    }

    pub fn nav_cursor_next(&mut self) {
        self.nav_cursor = (self.nav_cursor + 1) % NAV_ITEMS.len();
    }

    pub fn nav_cursor_prev(&mut self) {
        self.nav_cursor = (self.nav_cursor + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
    }

    /// Point the nav bar cursor at whatever the view currently shows.
    fn sync_nav_cursor(&mut self) {
        let state = self.nav.state();
        let current = match state.page {
            Page::Home => state.active_section.as_str(),
            page => page.as_str(),
        };
        if let Some(index) = NAV_ITEMS.iter().position(|item| item.target_id() == current) {
            self.nav_cursor = index;
        }
    }

    // Scrolling
    pub fn max_scroll(&self) -> u16 {
        self.total_body_lines.saturating_sub(self.body_height)
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.nav.effects_mut().scroll_by(1, max);
    }

    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.nav.effects_mut().scroll_by(-1, max);
    }

    pub fn scroll_half_page_down(&mut self) {
        let max = self.max_scroll();
        let half = (self.body_height / 2).max(1) as i32;
        self.nav.effects_mut().scroll_by(half, max);
    }

    pub fn scroll_half_page_up(&mut self) {
        let max = self.max_scroll();
        let half = (self.body_height / 2).max(1) as i32;
        self.nav.effects_mut().scroll_by(-half, max);
    }

    pub fn scroll_position(&self) -> u16 {
        self.nav.effects().scroll
    }

    /// The home page as a flat list of rows, section after section.
    pub fn home_lines(&self) -> Vec<HomeLine> {
        let locale = self.locale();
        let age = self.age();
        let mut lines = Vec::new();

        for section in &self.content.sections {
            lines.push(HomeLine {
                section: section.id,
                text: section.title.get(locale).clone(),
                heading: true,
            });
            for text in self.content.section_lines(section, locale, age) {
                lines.push(HomeLine {
                    section: section.id,
                    text,
                    heading: false,
                });
            }
            lines.push(HomeLine {
                section: section.id,
                text: String::new(),
                heading: false,
            });
        }
        lines
    }

    /// First rendered row of every section at `width` columns.
    pub fn home_anchors(&self, width: u16) -> HashMap<String, u16> {
        let mut anchors = HashMap::new();
        let mut row: u16 = 0;

        for line in self.home_lines() {
            anchors.entry(line.section.as_str().to_string()).or_insert(row);
            row = row.saturating_add(ui::rendered_height(line.to_line(), width));
        }
        anchors
    }

    fn refresh_anchors(&mut self) {
        let key = (self.body_width, self.locale());
        let anchors = self.home_anchors(key.0);
        self.nav.effects_mut().set_anchors(anchors);
        self.layout_key = Some(key);
    }

    /// Record the body size and re-measure the anchors if the width or the
    /// locale changed since they were last measured.
    pub fn update_layout(&mut self, width: u16, height: u16) {
        self.body_width = width;
        self.body_height = height;
        if self.layout_key != Some((width, self.locale())) {
            self.refresh_anchors();
        }
    }

    // Chat actions
    pub fn open_chat(&mut self) {
        if self.chat.is_closed() {
            self.chat = ChatSession::new();
            self.chat_scroll = 0;
        }
        self.chat_open = true;
        self.input_mode = InputMode::Editing;
    }

    /// Closing ends the session. A reply still on its way is discarded.
    pub fn close_chat(&mut self) {
        self.chat.close();
        if let Some((ticket, task)) = self.reply_task.take() {
            debug!(ticket, "discarding in-flight reply");
            task.abort();
        }
        self.chat_open = false;
        self.chat_area = None;
        self.chat_input.clear();
        self.chat_cursor = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_chat(&mut self) {
        let pending = match self.chat.submit(&self.chat_input) {
            Ok(pending) => pending,
            Err(e) => {
                debug!(error = %e, "chat input ignored");
                return;
            }
        };

        self.chat_input.clear();
        self.chat_cursor = 0;
        self.scroll_chat_to_bottom();

        let responder = self.responder.clone();
        let locale = self.locale();
        let task = tokio::spawn(async move { responder.respond(&pending.prompt, locale).await });
        self.reply_task = Some((pending.ticket, task));
    }

    /// Hand a finished reply to the chat session.
    pub async fn poll_reply(&mut self) {
        let finished = self
            .reply_task
            .as_ref()
            .is_some_and(|(_, task)| task.is_finished());
        if !finished {
            return;
        }
        let Some((ticket, task)) = self.reply_task.take() else {
            return;
        };

        let reply = match task.await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "reply task failed");
                failure_reply(self.locale()).to_string()
            }
        };
        self.chat.receive(ticket, reply);
        self.scroll_chat_to_bottom();
    }

    pub fn is_thinking(&self) -> bool {
        self.chat.phase() == ChatPhase::Sending
    }

    pub async fn tick(&mut self, elapsed: Duration) {
        self.nav.tick(elapsed);
        self.nav.effects_mut().tick(elapsed);

        self.poll_reply().await;
        if self.chat.phase() == ChatPhase::Streaming {
            self.chat.advance_reveal(REVEAL_CHARS_PER_TICK);
            self.scroll_chat_to_bottom();
        }

        if self.is_thinking() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    pub fn scroll_chat_to_bottom(&mut self) {
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            40
        };

        let mut total_lines: u16 = 0;
        for index in 0..self.chat.messages().len() {
            total_lines += 1; // role line
            for line in self.chat.visible_content(index).lines() {
                total_lines = total_lines.saturating_add(wrapped_height(line, wrap_width));
            }
            total_lines += 1;
        }
        if self.is_thinking() {
            total_lines += 2;
        }

        let visible_height = if self.chat_height > 0 { self.chat_height } else { 12 };
        self.chat_scroll = total_lines.saturating_sub(visible_height);
    }
}

/// Rows a line takes once wrapped at `width` columns.
pub fn wrapped_height(line: &str, width: usize) -> u16 {
    // Use character count, not byte length, for proper UTF-8 handling
    let char_count = line.chars().count();
    if char_count == 0 || width == 0 {
        1
    } else {
        char_count.div_ceil(width) as u16
    }
}
