use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Vertical scroll offset, in pixels, past which the header is elevated.
pub const HEADER_ELEVATION_THRESHOLD_PX: f64 = 12.0;

pub const ABOUT: &str = "about";
pub const SKILLS: &str = "skills";
pub const PROJECTS: &str = "projects";
pub const CONTACT: &str = "contact";

/// Anchors rendered by the page, in navigation order.
pub const PAGE_SECTIONS: [&str; 4] = [ABOUT, SKILLS, PROJECTS, CONTACT];

/// Element id of a navigation target.
///
/// Any well-formed id is accepted here; whether the page actually has such a
/// section is decided by the viewport.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let value = value.trim().trim_start_matches('#').to_string();
        if value.is_empty() {
            return Err("section id cannot be empty".into());
        }
        if value.chars().any(char::is_whitespace) {
            return Err(format!("section id '{value}' cannot contain whitespace"));
        }
        Ok(Self(value))
    }

    pub fn about() -> Self {
        Self(ABOUT.into())
    }

    pub fn skills() -> Self {
        Self(SKILLS.into())
    }

    pub fn projects() -> Self {
        Self(PROJECTS.into())
    }

    pub fn contact() -> Self {
        Self(CONTACT.into())
    }

    pub fn page_sections() -> Vec<Self> {
        PAGE_SECTIONS.iter().map(|id| Self((*id).into())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SectionId::new(value)
    }
}

impl Serialize for SectionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        SectionId::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderTreatment {
    #[default]
    Flat,
    Elevated,
}

impl HeaderTreatment {
    pub fn for_offset(scroll_offset: f64) -> Self {
        if scroll_offset > HEADER_ELEVATION_THRESHOLD_PX {
            HeaderTreatment::Elevated
        } else {
            HeaderTreatment::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderTreatment::Flat => "flat",
            HeaderTreatment::Elevated => "elevated",
        }
    }
}

impl fmt::Display for HeaderTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert_eq!(HeaderTreatment::for_offset(0.0), HeaderTreatment::Flat);
        assert_eq!(HeaderTreatment::for_offset(12.0), HeaderTreatment::Flat);
        assert_eq!(HeaderTreatment::for_offset(12.5), HeaderTreatment::Elevated);
        assert_eq!(HeaderTreatment::for_offset(900.0), HeaderTreatment::Elevated);
    }

    #[test]
    fn section_id_accepts_anchor_form() {
        let id: SectionId = "#projects".parse().unwrap();
        assert_eq!(id, SectionId::projects());
        assert_eq!(id.anchor(), "#projects");
        assert!(SectionId::new("  ").is_err());
        assert!(SectionId::new("two words").is_err());
    }

    #[test]
    fn page_sections_in_nav_order() {
        let ids: Vec<String> = SectionId::page_sections()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, ["about", "skills", "projects", "contact"]);
    }
}
