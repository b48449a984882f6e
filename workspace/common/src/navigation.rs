//! Landing-page section tracking and the navigation shell state.
//!
//! The browser side only measures `section[id]` elements and forwards scroll
//! events; which section counts as current, where a section link scrolls to and
//! how the shell state evolves are decided here.

/// Section ids of the landing page, in document order.
pub const SECTION_IDS: [&str; 4] = ["home", "aim", "decision-support", "team"];
pub const DEFAULT_SECTION: &str = "home";

/// Added to the scroll offset before hit-testing sections.
pub const DETECTION_OFFSET: f64 = 120.0;
/// Height of the fixed navbar; section links scroll to just below it.
pub const NAVBAR_HEIGHT: f64 = 80.0;
/// Viewports narrower than this treat the sidebar as an overlay.
pub const OVERLAY_BREAKPOINT: f64 = 1024.0;
/// Delay before an overlay sidebar closes after a section link was followed.
pub const OVERLAY_CLOSE_DELAY_MS: u32 = 500;

/// Measured vertical extent of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The last section, in document order, whose span contains
/// `scroll_offset + header_offset`; the first section when none does.
/// `None` only for an empty page.
pub fn active_section(sections: &[SectionBounds], scroll_offset: f64, header_offset: f64) -> Option<&str> {
    let position = scroll_offset + header_offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .or_else(|| sections.first())
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPlan {
    pub section_id: String,
    pub target: f64,
}

/// Where a link to `section_id` should scroll. `None` for an unknown id, in
/// which case the caller must neither scroll nor touch navigation state.
pub fn plan_scroll(sections: &[SectionBounds], section_id: &str, navbar_height: f64) -> Option<ScrollPlan> {
    let section = sections.iter().find(|section| section.id == section_id)?;
    Some(ScrollPlan {
        section_id: section.id.clone(),
        target: (section.top - navbar_height).max(0.0),
    })
}

/// Following a section link: where to scroll and the action that marks the
/// section active before the smooth scroll lands. `None` for an unknown id.
pub fn select_section(sections: &[SectionBounds], section_id: &str) -> Option<(ScrollPlan, NavigationAction)> {
    let plan = plan_scroll(sections, section_id, NAVBAR_HEIGHT)?;
    let action = NavigationAction::SectionSelected(plan.section_id.clone());
    Some((plan, action))
}

/// Leading-edge coalescing of scroll events to one recomputation per frame.
///
/// `request` answers whether a frame callback must be scheduled; `frame_fired`
/// is called from that callback before recomputing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    scheduled: bool,
}

impl FrameThrottle {
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn frame_fired(&mut self) {
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: String,
    pub sidebar_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: DEFAULT_SECTION.to_string(),
            sidebar_open: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Recomputed from the scroll position.
    ScrollObserved(String),
    /// A section link was followed; set before the smooth scroll lands.
    SectionSelected(String),
    ToggleSidebar,
    CloseSidebar,
    RouteChanged,
}

impl NavigationState {
    pub fn apply(&self, action: NavigationAction) -> Self {
        match action {
            NavigationAction::ScrollObserved(id) | NavigationAction::SectionSelected(id) => Self {
                active_section: id,
                ..self.clone()
            },
            NavigationAction::ToggleSidebar => Self {
                sidebar_open: !self.sidebar_open,
                ..self.clone()
            },
            NavigationAction::CloseSidebar => Self {
                sidebar_open: false,
                ..self.clone()
            },
            NavigationAction::RouteChanged => Self::default(),
        }
    }
}
