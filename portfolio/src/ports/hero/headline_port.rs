use crate::domain::hero::{Typewriter, TypewriterPhase};

/// What the hero section shows at one instant: the partially typed headline
/// and the full role used as the avatar subtitle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineFrame {
    pub text: String,
    pub role: String,
    pub role_index: usize,
    pub phase: TypewriterPhase,
}

impl HeadlineFrame {
    pub fn capture(typewriter: &Typewriter) -> Self {
        Self {
            text: typewriter.displayed().to_string(),
            role: typewriter.current_role().to_string(),
            role_index: typewriter.current_index(),
            phase: typewriter.phase(),
        }
    }
}

pub trait HeadlinePort: Send + Sync {
    fn publish(&self, frame: &HeadlineFrame);
}
