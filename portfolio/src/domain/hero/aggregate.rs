use super::events::TypewriterEvent;
use super::value_object::{Role, RoleList, TypewriterTimings};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypewriterPhase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

impl TypewriterPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypewriterPhase::Typing => "typing",
            TypewriterPhase::PausedFull => "paused_full",
            TypewriterPhase::Deleting => "deleting",
            TypewriterPhase::PausedEmpty => "paused_empty",
        }
    }
}

impl fmt::Display for TypewriterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypewriterSnapshot {
    pub role_index: usize,
    pub role: String,
    pub displayed: String,
    pub is_deleting: bool,
    pub phase: TypewriterPhase,
    pub roles_completed: u64,
}

/// Role headline state machine.
///
/// The machine is driven from outside: ask for [`Typewriter::next_delay`],
/// wait that long, then call [`Typewriter::advance`]. The displayed text is
/// always a prefix of the current role.
#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: RoleList,
    timings: TypewriterTimings,
    current_index: usize,
    displayed_len: usize,
    is_deleting: bool,
    roles_completed: u64,
}

impl Typewriter {
    pub fn new(roles: RoleList, timings: TypewriterTimings) -> Self {
        Self::starting_at(roles, timings, 0)
    }

    pub fn starting_at(roles: RoleList, timings: TypewriterTimings, index: usize) -> Self {
        let current_index = index % roles.len();
        Self {
            roles,
            timings,
            current_index,
            displayed_len: 0,
            is_deleting: false,
            roles_completed: 0,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        let full = self.current_role().len();
        match (self.is_deleting, self.displayed_len) {
            (false, len) if len < full => TypewriterPhase::Typing,
            (false, _) => TypewriterPhase::PausedFull,
            (true, 0) => TypewriterPhase::PausedEmpty,
            (true, _) => TypewriterPhase::Deleting,
        }
    }

    pub fn next_delay(&self) -> Duration {
        match self.phase() {
            TypewriterPhase::Typing => self.timings.typing_speed,
            TypewriterPhase::PausedFull => self.timings.pause_at_end,
            TypewriterPhase::Deleting => self.timings.deleting_speed,
            TypewriterPhase::PausedEmpty => self.timings.pause_at_start,
        }
    }

    pub fn advance(&mut self) -> TypewriterEvent {
        match self.phase() {
            TypewriterPhase::Typing => {
                self.displayed_len += 1;
                TypewriterEvent::Typed {
                    text: self.displayed().to_string(),
                }
            }
            TypewriterPhase::PausedFull => {
                self.is_deleting = true;
                TypewriterEvent::StartedDeleting
            }
            TypewriterPhase::Deleting => {
                self.displayed_len -= 1;
                TypewriterEvent::Deleted {
                    text: self.displayed().to_string(),
                }
            }
            TypewriterPhase::PausedEmpty => {
                self.is_deleting = false;
                self.current_index = self.roles.next_index(self.current_index);
                self.roles_completed += 1;
                TypewriterEvent::AdvancedRole {
                    index: self.current_index,
                }
            }
        }
    }

    pub fn displayed(&self) -> &str {
        self.current_role().prefix(self.displayed_len)
    }

    pub fn current_role(&self) -> &Role {
        self.roles.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn roles(&self) -> &RoleList {
        &self.roles
    }

    pub fn timings(&self) -> &TypewriterTimings {
        &self.timings
    }

    /// Number of roles typed out and deleted again since creation.
    pub fn roles_completed(&self) -> u64 {
        self.roles_completed
    }

    /// Number of complete passes over the whole role list.
    pub fn cycles_completed(&self) -> u64 {
        self.roles_completed / self.roles.len() as u64
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            role_index: self.current_index,
            role: self.current_role().to_string(),
            displayed: self.displayed().to_string(),
            is_deleting: self.is_deleting,
            phase: self.phase(),
            roles_completed: self.roles_completed,
        }
    }
}
