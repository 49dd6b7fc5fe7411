use crate::domain::navigation::{HeaderTreatment, NavigationState, ScrollBehavior, SectionId};
use crate::ports::navigation::ViewportPort;
use crate::telemetry::SiteMetrics;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Drives in-page navigation: section scrolling, the mobile menu and the
/// header elevation.
pub struct NavigationService<V: ViewportPort> {
    viewport: Arc<V>,
    state: Mutex<NavigationState>,
    behavior: ScrollBehavior,
    metrics: Option<Arc<SiteMetrics>>,
}

impl<V: ViewportPort> NavigationService<V> {
    pub fn new(viewport: Arc<V>, metrics: Option<Arc<SiteMetrics>>) -> Self {
        Self {
            viewport,
            state: Mutex::new(NavigationState::new()),
            behavior: ScrollBehavior::Smooth,
            metrics,
        }
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn viewport(&self) -> &Arc<V> {
        &self.viewport
    }

    pub fn state(&self) -> NavigationState {
        *self.lock_state()
    }

    /// Scrolls the section into view. Unknown sections are ignored; returns
    /// whether a scroll happened.
    pub fn scroll_to(&self, section: &SectionId) -> bool {
        let performed = self.viewport.has_section(section);
        if performed {
            debug!(section = %section, behavior = ?self.behavior, "scrolling to section");
            self.viewport.scroll_into_view(section, self.behavior);
        } else {
            debug!(section = %section, "section not on page, ignoring scroll");
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_section_scroll(section.as_str(), performed);
        }
        performed
    }

    /// A link in the nav bar: scroll, then fold the mobile menu away.
    pub fn nav_click(&self, section: &SectionId) -> bool {
        let performed = self.scroll_to(section);
        self.close_mobile_menu();
        performed
    }

    pub fn hire_me(&self) -> bool {
        self.scroll_to(&SectionId::contact())
    }

    pub fn view_projects(&self) -> bool {
        self.scroll_to(&SectionId::projects())
    }

    pub fn toggle_mobile_menu(&self) -> bool {
        let open = self.lock_state().toggle_mobile_menu();
        self.viewport.set_mobile_menu(open);
        debug!(open, "mobile menu toggled");
        open
    }

    pub fn close_mobile_menu(&self) {
        if self.lock_state().close_mobile_menu() {
            self.viewport.set_mobile_menu(false);
        }
    }

    /// Feed a scroll position; the header is only touched when its treatment changes.
    pub fn on_scroll(&self, scroll_offset: f64) -> HeaderTreatment {
        let mut state = self.lock_state();
        if let Some(treatment) = state.observe_scroll(scroll_offset) {
            info!(offset = scroll_offset, header = %treatment.as_str(), "header treatment changed");
            self.viewport.apply_header(treatment);
        }
        state.header()
    }

    fn lock_state(&self) -> MutexGuard<'_, NavigationState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
