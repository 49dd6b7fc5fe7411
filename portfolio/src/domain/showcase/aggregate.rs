use super::value_object::{ProjectLink, SkillLevel};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub availability: String,
    pub resume_path: String,
    pub contact_email: String,
    pub about: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub role: String,
    pub description: String,
    pub tech: String,
    pub details: ProjectLink,
    pub demo: ProjectLink,
}

/// Static page content: profile, skills grid and project cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Showcase {
    profile: Profile,
    skills: Vec<Skill>,
    projects: Vec<Project>,
}

impl Showcase {
    pub fn new(profile: Profile, skills: Vec<Skill>, projects: Vec<Project>) -> Result<Self, String> {
        if profile.name.trim().is_empty() {
            return Err("profile name cannot be empty".into());
        }
        if !profile.resume_path.starts_with('/') {
            return Err(format!(
                "resume path '{}' must be absolute",
                profile.resume_path
            ));
        }
        ensure_unique(skills.iter().map(|skill| skill.name.as_str()), "skill")?;
        ensure_unique(
            projects.iter().map(|project| project.title.as_str()),
            "project",
        )?;
        Ok(Self {
            profile,
            skills,
            projects,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn published_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|project| project.details.url().is_some() || project.demo.url().is_some())
    }
}

fn ensure_unique<'a>(names: impl Iterator<Item = &'a str>, kind: &str) -> Result<(), String> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(format!("{kind} name cannot be empty"));
        }
        if !seen.insert(name) {
            return Err(format!("duplicate {kind} '{name}'"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Soham Kumar Dey".into(),
            availability: "Available for full-time & freelance".into(),
            resume_path: "/resume.pdf".into(),
            contact_email: "deysoham000@gmail.com".into(),
            about: vec!["Designer and frontend engineer.".into()],
            highlights: vec!["Remote & async friendly".into()],
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            level: SkillLevel::new(80).unwrap(),
            tag: "tag".into(),
        }
    }

    fn project(title: &str, details: &str) -> Project {
        Project {
            title: title.into(),
            role: "UI/UX".into(),
            description: "desc".into(),
            tech: "React".into(),
            details: ProjectLink::parse(details).unwrap(),
            demo: ProjectLink::Unpublished,
        }
    }

    #[test]
    fn rejects_duplicate_skills() {
        let err = Showcase::new(profile(), vec![skill("UX"), skill("UX")], vec![]).unwrap_err();
        assert!(err.contains("duplicate skill"));
    }

    #[test]
    fn rejects_relative_resume_path() {
        let mut profile = profile();
        profile.resume_path = "resume.pdf".into();
        assert!(Showcase::new(profile, vec![], vec![]).is_err());
    }

    #[test]
    fn published_projects_have_a_link() {
        let showcase = Showcase::new(
            profile(),
            vec![skill("UX")],
            vec![
                project("Dashboard", "#"),
                project("Portfolio", "https://github.com/SohamDey80/Porfolio"),
            ],
        )
        .unwrap();
        let titles: Vec<_> = showcase
            .published_projects()
            .map(|project| project.title.as_str())
            .collect();
        assert_eq!(titles, ["Portfolio"]);
    }
}
