pub mod aggregate;
pub mod value_object;

pub use aggregate::{Profile, Project, Showcase, Skill};
pub use value_object::{ProjectLink, SkillLevel};
