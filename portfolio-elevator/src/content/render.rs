use bevy::prelude::*;

use crate::content::library::ContentLibrary;
use crate::error::ElevatorError;

/// Closed set of drawer sections. Floor keys from external configuration are
/// converted exactly once at ingestion; anything unrecognised becomes
/// `Unknown` and renders a fallback panel instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKind {
    About,
    Projects,
    Skills,
    Demos,
    Contact,
    Unknown(String),
}

impl ContentKind {
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "about" => Self::About,
            "projects" => Self::Projects,
            "skills" => Self::Skills,
            "demos" => Self::Demos,
            "contact" => Self::Contact,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Demos => "Demos",
            Self::Contact => "Contact",
            Self::Unknown(_) => "Section",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::About => "Personal information",
            Self::Projects => "Featured projects",
            Self::Skills => "Tech stack",
            Self::Demos => "Proof of work",
            Self::Contact => "Reach me",
            Self::Unknown(_) => "Not wired yet",
        }
    }
}

/// One visual block inside the drawer body. The drawer maps these onto
/// bevy_ui text nodes; renderers stay free of UI types so they can be tested
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading(String),
    Paragraph(String),
    Bullet(String),
    Meta(String),
}

/// Build the drawer blocks for a section. Exhaustive over the closed kind
/// set; `Unknown` renders the defensive fallback naming the key.
pub fn render_blocks(kind: &ContentKind, library: &ContentLibrary) -> Vec<ContentBlock> {
    match kind {
        ContentKind::About => about_blocks(library),
        ContentKind::Projects => project_blocks(library),
        ContentKind::Skills => skill_blocks(library),
        ContentKind::Demos => demo_blocks(library),
        ContentKind::Contact => contact_blocks(library),
        ContentKind::Unknown(key) => unknown_blocks(key),
    }
}

fn about_blocks(library: &ContentLibrary) -> Vec<ContentBlock> {
    let profile = &library.profile;
    let mut blocks = vec![
        ContentBlock::Heading(profile.name.clone()),
        ContentBlock::Meta(profile.education.clone()),
        ContentBlock::Meta(profile.location.clone()),
        ContentBlock::Paragraph(profile.short_intro.clone()),
        ContentBlock::Heading("Focus".to_string()),
        ContentBlock::Bullet(profile.title_primary.clone()),
        ContentBlock::Bullet(profile.title_secondary.clone()),
        ContentBlock::Heading("Contact".to_string()),
    ];
    blocks.push(ContentBlock::Bullet(format!(
        "Email: {}",
        profile.contact.email
    )));
    blocks.push(ContentBlock::Bullet(format!(
        "LinkedIn: {}",
        profile.contact.linkedin
    )));
    blocks
}

fn project_blocks(library: &ContentLibrary) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::Paragraph("Featured projects.".to_string())];
    for project in &library.projects {
        blocks.push(ContentBlock::Heading(project.name.clone()));
        blocks.push(ContentBlock::Meta(format!(
            "{} · {}",
            project.period, project.one_liner
        )));
        for responsibility in &project.responsibilities {
            blocks.push(ContentBlock::Bullet(responsibility.clone()));
        }
        blocks.push(ContentBlock::Meta(format!(
            "Tech: {}",
            project.tech.join(", ")
        )));
        if !project.outcomes.is_empty() {
            blocks.push(ContentBlock::Meta(format!(
                "Outcomes: {}",
                project.outcomes.join(" · ")
            )));
        }
        blocks.push(ContentBlock::Meta(format!(
            "{} · {}",
            project.links.repo, project.links.demo
        )));
    }
    blocks
}

fn skill_blocks(library: &ContentLibrary) -> Vec<ContentBlock> {
    let skills = &library.skills;
    vec![
        ContentBlock::Paragraph(format!("Languages: {}", skills.languages.join(", "))),
        ContentBlock::Paragraph(format!("Web: {}", skills.web.join(", "))),
        ContentBlock::Paragraph(format!("Systems/Tools: {}", skills.systems.join(", "))),
        ContentBlock::Paragraph(format!("3D/Simulation: {}", skills.simulation.join(", "))),
    ]
}

fn demo_blocks(library: &ContentLibrary) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::Paragraph(
        "Some artifacts are placeholders until published.".to_string(),
    )];
    for project in &library.projects {
        blocks.push(ContentBlock::Bullet(format!(
            "{}: {} · {}",
            project.name, project.links.demo, project.links.case_study
        )));
    }
    blocks
}

fn contact_blocks(library: &ContentLibrary) -> Vec<ContentBlock> {
    let profile = &library.profile;
    vec![
        ContentBlock::Bullet(format!("Email: {}", profile.contact.email)),
        ContentBlock::Bullet(format!("LinkedIn: {}", profile.contact.linkedin)),
        ContentBlock::Bullet(format!("GitHub: {}", profile.contact.github)),
        ContentBlock::Bullet(format!("Location: {}", profile.location)),
    ]
}

fn unknown_blocks(key: &str) -> Vec<ContentBlock> {
    let err = ElevatorError::UnrecognizedSelection {
        key: key.to_string(),
    };
    warn!("{err}");
    vec![
        ContentBlock::Paragraph("This section is not wired up yet.".to_string()),
        ContentBlock::Meta(format!("Unknown key: {key}")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::library::ContentLibrary;

    #[test]
    fn key_conversion_covers_known_sections() {
        assert_eq!(ContentKind::from_key("about"), ContentKind::About);
        assert_eq!(ContentKind::from_key("Projects"), ContentKind::Projects);
        assert_eq!(ContentKind::from_key("skills"), ContentKind::Skills);
        assert_eq!(ContentKind::from_key("demos"), ContentKind::Demos);
        assert_eq!(ContentKind::from_key("contact"), ContentKind::Contact);
    }

    #[test]
    fn unknown_key_is_preserved_not_dropped() {
        let kind = ContentKind::from_key("research");
        assert_eq!(kind, ContentKind::Unknown("research".to_string()));
        assert_eq!(kind.description(), "Not wired yet");
    }

    #[test]
    fn every_known_kind_renders_blocks() {
        let library = ContentLibrary::builtin();
        for kind in [
            ContentKind::About,
            ContentKind::Projects,
            ContentKind::Skills,
            ContentKind::Demos,
            ContentKind::Contact,
        ] {
            assert!(!render_blocks(&kind, &library).is_empty());
        }
    }

    #[test]
    fn unknown_renderer_names_the_key() {
        let library = ContentLibrary::builtin();
        let blocks = render_blocks(&ContentKind::Unknown("lobby".to_string()), &library);
        assert!(blocks.iter().any(|b| match b {
            ContentBlock::Meta(text) => text.contains("lobby"),
            _ => false,
        }));
    }

    #[test]
    fn project_blocks_include_every_project_name() {
        let library = ContentLibrary::builtin();
        let blocks = render_blocks(&ContentKind::Projects, &library);
        for project in &library.projects {
            assert!(blocks.iter().any(|b| match b {
                ContentBlock::Heading(text) => text == &project.name,
                _ => false,
            }));
        }
    }
}
