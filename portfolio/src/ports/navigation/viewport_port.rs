use crate::domain::navigation::{HeaderTreatment, ScrollBehavior, SectionId};

/// The page surface the navigation controller drives.
pub trait ViewportPort: Send + Sync {
    fn has_section(&self, id: &SectionId) -> bool;
    fn scroll_into_view(&self, id: &SectionId, behavior: ScrollBehavior);
    fn apply_header(&self, treatment: HeaderTreatment);
    fn set_mobile_menu(&self, open: bool);
}
