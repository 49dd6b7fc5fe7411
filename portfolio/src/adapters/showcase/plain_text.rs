use crate::domain::showcase::{Showcase, Skill};
use crate::ports::showcase::{ShowcaseBlock, ShowcaseFrame, ShowcaseRendererPort};

const BAR_WIDTH: usize = 20;

/// Lays the page content out as plain terminal text.
pub struct PlainTextRenderer {
    bar_width: usize,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self {
            bar_width: BAR_WIDTH,
        }
    }

    pub fn render(&self, showcase: &Showcase) -> String {
        let frame = self.compose(showcase);
        let mut out = vec![frame.headline, String::new()];
        for block in frame.blocks {
            out.push(block.title);
            if let Some(subtitle) = block.subtitle {
                out.push(format!("  {subtitle}"));
            }
            out.extend(block.body_lines.into_iter().map(|line| format!("  {line}")));
            out.push(String::new());
        }
        out.push(frame.footer);
        out.join("\n")
    }

    fn skill_line(&self, skill: &Skill) -> String {
        let filled = usize::from(skill.level.percent()) * self.bar_width / 100;
        format!(
            "{:<24} [{}{}] {:>4}  {}",
            skill.name,
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled),
            skill.level.to_string(),
            skill.tag
        )
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseRendererPort for PlainTextRenderer {
    fn compose(&self, showcase: &Showcase) -> ShowcaseFrame {
        let profile = showcase.profile();
        let about = ShowcaseBlock {
            title: "About Me".into(),
            subtitle: Some("who i am".into()),
            body_lines: profile
                .about
                .iter()
                .cloned()
                .chain(profile.highlights.iter().map(|badge| format!("• {badge}")))
                .collect(),
        };
        let skills = ShowcaseBlock {
            title: "Core Skills".into(),
            subtitle: Some("what i do best".into()),
            body_lines: showcase
                .skills()
                .iter()
                .map(|skill| self.skill_line(skill))
                .collect(),
        };
        let projects = showcase.projects().iter().map(|project| ShowcaseBlock {
            title: format!("{} ({})", project.title, project.role),
            subtitle: Some(project.tech.clone()),
            body_lines: vec![
                project.description.clone(),
                format!("details: {}", project.details),
                format!("demo:    {}", project.demo),
            ],
        });

        ShowcaseFrame {
            headline: format!("{} · {}", profile.name, profile.availability),
            blocks: [about, skills].into_iter().chain(projects).collect(),
            footer: format!(
                "CV: {}  ·  mail: {}",
                profile.resume_path, profile.contact_email
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::showcase::{Profile, Project, ProjectLink, SkillLevel};

    fn showcase() -> Showcase {
        Showcase::new(
            Profile {
                name: "Soham Kumar Dey".into(),
                availability: "Open to work".into(),
                resume_path: "/resume.pdf".into(),
                contact_email: "deysoham000@gmail.com".into(),
                about: vec!["Designer who ships frontends.".into()],
                highlights: vec!["Remote & async friendly".into()],
            },
            vec![Skill {
                name: "UX Research".into(),
                level: SkillLevel::new(50).unwrap(),
                tag: "User Flows".into(),
            }],
            vec![Project {
                title: "Personal Portfolio".into(),
                role: "UI/UX · Dev".into(),
                description: "A modern dark-mode portfolio.".into(),
                tech: "React · CSS".into(),
                details: ProjectLink::parse("https://github.com/SohamDey80/Porfolio").unwrap(),
                demo: ProjectLink::Unpublished,
            }],
        )
        .unwrap()
    }

    #[test]
    fn skill_bar_scales_with_level() {
        let frame = PlainTextRenderer::new().compose(&showcase());
        let line = &frame.blocks[1].body_lines[0];
        assert!(line.contains("[##########----------]"), "line was {line}");
        assert!(line.ends_with("User Flows"));
    }

    #[test]
    fn render_lists_projects_and_footer() {
        let text = PlainTextRenderer::new().render(&showcase());
        assert!(text.starts_with("Soham Kumar Dey · Open to work"));
        assert!(text.contains("Personal Portfolio (UI/UX · Dev)"));
        assert!(text.contains("demo:    #"));
        assert!(text.ends_with("CV: /resume.pdf  ·  mail: deysoham000@gmail.com"));
    }

    #[test]
    fn about_block_precedes_skills() {
        let frame = PlainTextRenderer::new().compose(&showcase());
        assert_eq!(frame.blocks[0].title, "About Me");
        assert_eq!(frame.blocks[0].subtitle.as_deref(), Some("who i am"));
        assert_eq!(
            frame.blocks[0].body_lines,
            ["Designer who ships frontends.", "• Remote & async friendly"]
        );
        assert_eq!(frame.blocks[1].title, "Core Skills");
    }
}
