use serde::Serialize;
use std::fmt;
use url::Url;

/// Self-assessed proficiency, 0-100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn new(value: u8) -> Result<Self, String> {
        if value > 100 {
            return Err(format!("skill level {value} is above 100"));
        }
        Ok(Self(value))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Outbound project link. `#` and blank values mean the page has nothing to
/// link yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectLink {
    Published(Url),
    Unpublished,
}

impl ProjectLink {
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.is_empty() || value == "#" {
            return Ok(ProjectLink::Unpublished);
        }
        Url::parse(value)
            .map(ProjectLink::Published)
            .map_err(|err| format!("invalid project link '{value}': {err}"))
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            ProjectLink::Published(url) => Some(url),
            ProjectLink::Unpublished => None,
        }
    }
}

impl fmt::Display for ProjectLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectLink::Published(url) => write!(f, "{url}"),
            ProjectLink::Unpublished => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_bounds() {
        assert!(SkillLevel::new(100).is_ok());
        assert!(SkillLevel::new(101).is_err());
        assert_eq!(SkillLevel::new(84).unwrap().to_string(), "84%");
    }

    #[test]
    fn hash_link_is_unpublished() {
        assert_eq!(ProjectLink::parse("#").unwrap(), ProjectLink::Unpublished);
        assert_eq!(ProjectLink::parse("").unwrap(), ProjectLink::Unpublished);
        let link = ProjectLink::parse("https://github.com/SohamDey80/Porfolio").unwrap();
        assert_eq!(link.url().map(Url::host_str), Some(Some("github.com")));
        assert!(ProjectLink::parse("not a url").is_err());
    }
}
