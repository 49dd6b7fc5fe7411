use super::value_object::HeaderTreatment;

/// Everything the navigation bar remembers between events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    mobile_menu_open: bool,
    header: HeaderTreatment,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new open state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Returns true when the menu was open.
    pub fn close_mobile_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }

    /// Returns the new treatment only when it differs from the current one.
    pub fn observe_scroll(&mut self, scroll_offset: f64) -> Option<HeaderTreatment> {
        let treatment = HeaderTreatment::for_offset(scroll_offset);
        if treatment == self.header {
            return None;
        }
        self.header = treatment;
        Some(treatment)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn header(&self) -> HeaderTreatment {
        self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_flag() {
        let mut state = NavigationState::new();
        assert!(state.toggle_mobile_menu());
        assert!(!state.toggle_mobile_menu());
    }

    #[test]
    fn close_reports_previous_state() {
        let mut state = NavigationState::new();
        assert!(!state.close_mobile_menu());
        state.toggle_mobile_menu();
        assert!(state.close_mobile_menu());
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn scroll_only_reports_changes() {
        let mut state = NavigationState::new();
        assert_eq!(state.observe_scroll(4.0), None);
        assert_eq!(state.observe_scroll(40.0), Some(HeaderTreatment::Elevated));
        assert_eq!(state.observe_scroll(80.0), None);
        assert_eq!(state.observe_scroll(12.0), Some(HeaderTreatment::Flat));
        assert_eq!(state.header(), HeaderTreatment::Flat);
    }
}
