use serde::Serialize;

/// One step taken by the typewriter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypewriterEvent {
    Typed { text: String },
    StartedDeleting,
    Deleted { text: String },
    AdvancedRole { index: usize },
}

impl TypewriterEvent {
    /// Whether a renderer showing the headline and the role subtitle has to redraw.
    pub fn changes_frame(&self) -> bool {
        !matches!(self, TypewriterEvent::StartedDeleting)
    }
}
