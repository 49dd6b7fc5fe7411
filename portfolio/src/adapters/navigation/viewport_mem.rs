use crate::domain::navigation::{HeaderTreatment, ScrollBehavior, SectionId};
use crate::ports::navigation::ViewportPort;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRecord {
    pub section: SectionId,
    pub behavior: ScrollBehavior,
}

#[derive(Default)]
struct ViewportLog {
    scrolls: Vec<ScrollRecord>,
    header: HeaderTreatment,
    header_updates: usize,
    mobile_menu_open: bool,
}

/// Viewport that only remembers what it was asked to do.
#[derive(Default)]
pub struct InMemoryViewport {
    sections: HashSet<SectionId>,
    log: RwLock<ViewportLog>,
}

impl InMemoryViewport {
    pub fn with_sections(sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            log: RwLock::default(),
        }
    }

    /// Viewport holding the four anchors of the portfolio page.
    pub fn page() -> Self {
        Self::with_sections(SectionId::page_sections())
    }

    pub fn scrolls(&self) -> Vec<ScrollRecord> {
        self.log.read().unwrap().scrolls.clone()
    }

    pub fn header(&self) -> HeaderTreatment {
        self.log.read().unwrap().header
    }

    pub fn header_updates(&self) -> usize {
        self.log.read().unwrap().header_updates
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.log.read().unwrap().mobile_menu_open
    }
}

impl ViewportPort for InMemoryViewport {
    fn has_section(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    fn scroll_into_view(&self, id: &SectionId, behavior: ScrollBehavior) {
        self.log.write().unwrap().scrolls.push(ScrollRecord {
            section: id.clone(),
            behavior,
        });
    }

    fn apply_header(&self, treatment: HeaderTreatment) {
        let mut log = self.log.write().unwrap();
        log.header = treatment;
        log.header_updates += 1;
    }

    fn set_mobile_menu(&self, open: bool) {
        self.log.write().unwrap().mobile_menu_open = open;
    }
}
