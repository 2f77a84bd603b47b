//! Page view-model: scroll-driven navigation state and page components.

use std::sync::Arc;
use tokio::sync::watch;

use crate::client::form::FormController;
use crate::client::notification::NotificationCenter;
use crate::client::transport::ContactTransport;

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// A section becomes active this many pixels before its top reaches the viewport top.
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;

/// Scroll offset past which the scroll-to-top control appears.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 500.0;

/// Height of the fixed navbar subtracted from navigation targets.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;

/// A page section as laid out by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Distance from the top of the document, in pixels.
    pub offset_top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// Decisions derived from one scroll position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    /// Id of the section whose nav link is highlighted.
    pub active_section: Option<String>,
    pub scroll_to_top_visible: bool,
}

/// Returns the id of the active section at `scroll_y`.
///
/// `sections` are in document order; the last one whose activation point
/// has been scrolled past wins.
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.offset_top - SECTION_ACTIVATION_OFFSET)
        .map(|s| s.id.as_str())
}

/// Scroll position for a nav link targeting a section at `offset_top`.
pub fn nav_scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_SCROLL_OFFSET).max(0.0)
}

/// Scroll-to-top button view-model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Updates visibility; returns `true` if it changed.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > SCROLL_TO_TOP_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Scroll position the button leads to.
    pub fn target(&self) -> f64 {
        0.0
    }
}

/// Owns the page's interactive components.
///
/// The renderer forwards scroll events to [`on_scroll`](Self::on_scroll)
/// and form events to [`form_mut`](Self::form_mut); it observes results
/// through [`subscribe_scroll`](Self::subscribe_scroll) and the
/// notification center.
pub struct PageController {
    form: FormController,
    notifications: NotificationCenter,
    scroll_to_top: ScrollToTop,
    scroll: watch::Sender<ScrollState>,
}

impl PageController {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        let notifications = NotificationCenter::new();
        let form = FormController::new(transport, notifications.clone());
        let (scroll, _) = watch::channel(ScrollState::default());

        Self {
            form,
            notifications,
            scroll_to_top: ScrollToTop::default(),
            scroll,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn scroll_to_top(&self) -> &ScrollToTop {
        &self.scroll_to_top
    }

    pub fn subscribe_scroll(&self) -> watch::Receiver<ScrollState> {
        self.scroll.subscribe()
    }

    /// Recomputes scroll-driven state and notifies observers on change.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[Section]) -> ScrollState {
        self.scroll_to_top.update(scroll_y);

        let state = ScrollState {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_THRESHOLD,
            active_section: active_section(scroll_y, sections).map(str::to_string),
            scroll_to_top_visible: self.scroll_to_top.is_visible(),
        };

        self.scroll.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });

        state
    }

    /// Scroll target for the nav link pointing at section `id`.
    pub fn nav_target(&self, id: &str, sections: &[Section]) -> Option<f64> {
        sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| nav_scroll_target(s.offset_top))
    }
}
