use crate::adapters::contact::{
    HostedRelayDispatcher, MailtoDispatcher, RelayCredentials, DEFAULT_RELAY_ENDPOINT,
};
use crate::app::hero::TypewriterConfig;
use crate::domain::hero::TypewriterTimings;
use crate::domain::showcase::{Profile, Project, ProjectLink, Showcase, Skill, SkillLevel};
use crate::ports::contact::{ContactDispatchPort, DispatchStrategy, UrlOpenerPort};
use anyhow::{anyhow, Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub const SITE_FILE_NAME: &str = "site.toml";

const DEFAULT_OWNER: &str = "Soham Kumar Dey";
const DEFAULT_RECIPIENT: &str = "deysoham000@gmail.com";
const DEFAULT_ROLES: [&str; 3] = ["UI/UX Designer", "MERN Stack Developer", "Programmer"];

/// Everything the page shows, as read from `site.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub profile: ProfileConfig,
    pub hero: HeroConfig,
    pub skills: Vec<SkillConfig>,
    pub projects: Vec<ProjectConfig>,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            hero: HeroConfig::default(),
            skills: default_skills(),
            projects: default_projects(),
            contact: ContactConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub name: String,
    pub availability: String,
    pub resume_path: String,
    /// Paragraphs of the About Me card.
    pub about: Vec<String>,
    /// Short badges listed under the about text.
    pub highlights: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_OWNER.into(),
            availability: "Available for full-time & freelance".into(),
            resume_path: "/resume.pdf".into(),
            about: vec![
                "I'm a UI/UX designer and frontend engineer who loves turning requirements \
                 into flows, wireframes, and production-ready interfaces. I care a lot about \
                 consistency, motion, and accessibility, making sure the experience feels \
                 fast and intuitive."
                    .into(),
                "I'm comfortable collaborating with founders, PMs, and engineers, from idea \
                 to handoff. I enjoy working on complex dashboards, SaaS tools, and modern \
                 web products."
                    .into(),
            ],
            highlights: vec![
                "1–2+ years design & frontend".into(),
                "Remote & async friendly".into(),
                "Open to full-time / freelance".into(),
                "Comfortable with design critiques".into(),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Word printed before the typed role ("A Programmer").
    pub lead: String,
    pub roles: Vec<String>,
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_at_end_ms: u64,
    pub pause_at_start_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            lead: "A".into(),
            roles: DEFAULT_ROLES.iter().map(|role| role.to_string()).collect(),
            typing_ms: 110,
            deleting_ms: 60,
            pause_at_end_ms: 1100,
            pause_at_start_ms: 400,
        }
    }
}

impl HeroConfig {
    pub fn timings(&self) -> TypewriterTimings {
        TypewriterTimings::from_millis(
            self.typing_ms,
            self.deleting_ms,
            self.pause_at_end_ms,
            self.pause_at_start_ms,
        )
    }

    pub fn typewriter_config(&self) -> TypewriterConfig {
        TypewriterConfig::new(self.roles.clone(), self.timings())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillConfig {
    pub name: String,
    pub level: u8,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub title: String,
    pub role: String,
    pub description: String,
    pub tech: String,
    #[serde(default = "unpublished")]
    pub details: String,
    #[serde(default = "unpublished")]
    pub demo: String,
}

/// Exactly one delivery strategy is active per site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case", deny_unknown_fields)]
pub enum ContactConfig {
    MailHandoff {
        #[serde(default = "default_recipient")]
        recipient: String,
    },
    HostedRelay {
        #[serde(default = "default_relay_endpoint")]
        endpoint: String,
        #[serde(default = "default_recipient")]
        recipient: String,
        service_id: String,
        template_id: String,
        public_key: String,
    },
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig::MailHandoff {
            recipient: default_recipient(),
        }
    }
}

impl ContactConfig {
    pub fn strategy(&self) -> DispatchStrategy {
        match self {
            ContactConfig::MailHandoff { .. } => DispatchStrategy::MailHandoff,
            ContactConfig::HostedRelay { .. } => DispatchStrategy::HostedRelay,
        }
    }

    /// Address shown on the page; the relay forwards to it as well.
    pub fn recipient(&self) -> &str {
        match self {
            ContactConfig::MailHandoff { recipient } | ContactConfig::HostedRelay { recipient, .. } => {
                recipient
            }
        }
    }

    pub fn dispatcher(
        &self,
        opener: Arc<dyn UrlOpenerPort>,
    ) -> Result<Arc<dyn ContactDispatchPort>, String> {
        match self {
            ContactConfig::MailHandoff { recipient } => {
                if recipient.trim().is_empty() {
                    return Err("mail handoff recipient cannot be empty".into());
                }
                Ok(Arc::new(MailtoDispatcher::new(recipient.clone(), opener)))
            }
            ContactConfig::HostedRelay {
                endpoint,
                service_id,
                template_id,
                public_key,
                ..
            } => {
                let credentials = RelayCredentials {
                    service_id: service_id.clone(),
                    template_id: template_id.clone(),
                    public_key: public_key.clone(),
                };
                Ok(Arc::new(HostedRelayDispatcher::new(
                    endpoint.clone(),
                    credentials,
                )?))
            }
        }
    }
}

impl SiteConfig {
    pub fn showcase(&self) -> Result<Showcase, String> {
        let profile = Profile {
            name: self.profile.name.clone(),
            availability: self.profile.availability.clone(),
            resume_path: self.profile.resume_path.clone(),
            contact_email: self.contact.recipient().to_string(),
            about: self.profile.about.clone(),
            highlights: self.profile.highlights.clone(),
        };
        let skills = self
            .skills
            .iter()
            .map(|skill| {
                Ok(Skill {
                    name: skill.name.clone(),
                    level: SkillLevel::new(skill.level)
                        .map_err(|err| format!("skill '{}': {err}", skill.name))?,
                    tag: skill.tag.clone(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        let projects = self
            .projects
            .iter()
            .map(|project| {
                Ok(Project {
                    title: project.title.clone(),
                    role: project.role.clone(),
                    description: project.description.clone(),
                    tech: project.tech.clone(),
                    details: ProjectLink::parse(&project.details)?,
                    demo: ProjectLink::parse(&project.demo)?,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        Showcase::new(profile, skills, projects)
    }

    /// Checks every section the way the page would build it.
    pub fn validate(&self) -> AnyResult<()> {
        self.hero
            .typewriter_config()
            .build()
            .context("invalid [hero] section")?;
        self.showcase()
            .map_err(|err| anyhow!(err))
            .context("invalid profile, skills or projects")?;
        if let ContactConfig::HostedRelay {
            service_id,
            template_id,
            public_key,
            ..
        } = &self.contact
        {
            RelayCredentials {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            }
            .validate()
            .map_err(|err| anyhow!(err))
            .context("invalid [contact] section")?;
        }
        Ok(())
    }

    pub fn to_toml(&self) -> AnyResult<String> {
        toml::to_string_pretty(self).context("serializing site config")
    }
}

pub fn default_site_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join(SITE_FILE_NAME))
}

/// Reads the site file. An explicit path must exist; without one the user
/// config dir is tried and the built-in content is used when nothing is there.
pub async fn load_site_config(path: Option<&Path>) -> AnyResult<SiteConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_site_path() {
            Some(path) if tokio::fs::try_exists(&path).await.unwrap_or(false) => path,
            _ => {
                debug!("no site file found, using built-in content");
                return Ok(SiteConfig::default());
            }
        },
    };

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading site config {}", path.display()))?;
    let config: SiteConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing site config {}", path.display()))?;
    config.validate()?;
    info!(
        path = %path.display(),
        strategy = %config.contact.strategy(),
        roles = config.hero.roles.len(),
        "site config loaded"
    );
    Ok(config)
}

fn unpublished() -> String {
    "#".into()
}

fn default_recipient() -> String {
    DEFAULT_RECIPIENT.into()
}

fn default_relay_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.into()
}

fn default_skills() -> Vec<SkillConfig> {
    [
        ("UI Design (Figma)", 90, "Design Systems"),
        ("UX Research", 82, "User Flows"),
        ("Interaction / Motion", 86, "Micro-animations"),
        ("React / Frontend", 84, "SPA, Hooks"),
        ("HTML / CSS / JS", 92, "Clean Semantics"),
        ("Design Handoff", 80, "Dev-ready"),
    ]
    .into_iter()
    .map(|(name, level, tag)| SkillConfig {
        name: name.into(),
        level,
        tag: tag.into(),
    })
    .collect()
}

fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig {
            title: "SaaS Analytics Dashboard".into(),
            role: "UI/UX · Frontend".into(),
            description: "Interactive dashboard for product metrics with responsive layouts, dark theme, and reusable components.".into(),
            tech: "React · Figma · Charting".into(),
            details: unpublished(),
            demo: unpublished(),
        },
        ProjectConfig {
            title: "Fintech Mobile Web App".into(),
            role: "UI/UX · Prototype".into(),
            description: "Onboarding and money-transfer flows with a mobile-first design system and clear visual hierarchy.".into(),
            tech: "Figma · Design System".into(),
            details: unpublished(),
            demo: unpublished(),
        },
        ProjectConfig {
            title: "Personal Portfolio".into(),
            role: "UI/UX · Dev".into(),
            description: "A modern dark-mode portfolio built with React, featuring a typewriter hero, animated UI/UX orbit, project showcase, skills, and a contact section. Designed for recruiters and hiring managers.".into(),
            tech: "React · CSS".into(),
            details: "https://github.com/SohamDey80/Porfolio".into(),
            demo: unpublished(),
        },
    ]
}
