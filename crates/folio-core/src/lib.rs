pub mod ai;
pub mod chat;
pub mod config;
pub mod content;
pub mod locale;
pub mod navigation;
pub mod responder;
pub mod schedule;
pub mod state;

// Re-export main types for convenience
pub use ai::{TextGenClient, TextGenError};
pub use chat::{ChatError, ChatPhase, ChatSession, PendingReply};
pub use config::Config;
pub use content::{BlogPost, PortfolioContent, ResearchPaper, SectionContent};
pub use locale::{Locale, Localized};
pub use navigation::{
    Effects, NavItem, NavigationController, NavigationIntent, Page, ScrollOptions, Section,
    ViewState, NAV_ITEMS,
};
pub use responder::{failure_reply, Responder};
pub use schedule::{TimerToken, Timers};
pub use state::{Message, Role};
