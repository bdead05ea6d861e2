use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTENT_FILE: &str = "content.json";

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load_embedded().expect("content/content.json should hold a valid profile document")
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The whole site, as authored in `content/content.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub socials: Vec<Social>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub group: String,
}

impl Skill {
    /// `None` when the authored group is not one of the known categories.
    pub fn group(&self) -> Option<SkillGroup> {
        self.group.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillGroup {
    Frontend,
    Backend,
    Tools,
    Automation,
    Ai,
    Crm,
}

impl SkillGroup {
    pub const ALL: [SkillGroup; 6] = [
        Self::Frontend,
        Self::Backend,
        Self::Tools,
        Self::Automation,
        Self::Ai,
        Self::Crm,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Automation => "automation",
            Self::Ai => "ai",
            Self::Crm => "crm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Automation => "Automation",
            Self::Ai => "AI",
            Self::Crm => "CRM",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown skill group: {0}")]
pub struct UnknownGroup(pub String);

impl FromStr for SkillGroup {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| UnknownGroup(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub links: BTreeMap<String, Option<String>>,
    pub tech: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    pub const GITHUB: &'static str = "github";

    pub fn github(&self) -> Option<&str> {
        self.links.get(Self::GITHUB).and_then(|u| u.as_deref())
    }

    /// Every link except `github`, skipping kinds authored without a URL.
    pub fn other_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .filter(|(kind, _)| kind.as_str() != Self::GITHUB)
            .filter_map(|(kind, url)| url.as_deref().map(|u| (kind.as_str(), u)))
    }

    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

impl Profile {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }
}

pub fn load_embedded() -> Result<Profile, ContentError> {
    let file = ContentAssets::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
    Profile::from_json(&file.data)
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Jane Doe",
        "role": "Engineer",
        "tagline": "Builds things",
        "location": "Remote",
        "email": "jane@example.com",
        "socials": [],
        "skills": [
            { "name": "Rust", "icon": "rust", "group": "backend" },
            { "name": "Figma", "icon": "figma", "group": "design" }
        ],
        "experience": [],
        "education": [],
        "projects": [
            {
                "title": "Bare",
                "summary": "No optional fields at all",
                "tech": [],
                "tags": []
            }
        ],
        "certifications": [ { "title": "Cert", "issuer": "Org" } ],
        "languages": []
    }"#;

    #[test]
    fn test_embedded_content_parses() {
        let profile = load_embedded().expect("embedded content should parse");
        assert!(!profile.name.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        // every authored group in the shipped content is a known one
        assert!(profile.skills.iter().all(|s| s.group().is_some()));
    }

    #[test]
    fn test_project_titles_are_unique() {
        let profile = profile();
        for p in &profile.projects {
            let count = profile.projects.iter().filter(|o| o.title == p.title).count();
            assert_eq!(count, 1, "duplicate project title {}", p.title);
        }
    }

    #[test]
    fn test_optional_fields_tolerated() {
        let profile = Profile::from_json(MINIMAL.as_bytes()).expect("minimal profile should parse");
        let project = profile.project("Bare").expect("project should exist");
        assert_eq!(project.description, None);
        assert!(project.features().is_empty());
        assert_eq!(project.challenges, None);
        assert_eq!(project.solution, None);
        assert_eq!(project.image, None);
        assert!(project.links.is_empty());
        assert_eq!(profile.certifications[0].url, None);
        assert_eq!(profile.certifications[0].description, None);
        assert_eq!(profile.whatsapp, None);
        assert!(profile.about.is_empty());
    }

    #[test]
    fn test_authored_order_preserved() {
        let profile = Profile::from_json(MINIMAL.as_bytes()).unwrap();
        let names = profile.skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Rust", "Figma"]);
    }

    #[test]
    fn test_unknown_group_kept_but_unparsed() {
        let profile = Profile::from_json(MINIMAL.as_bytes()).unwrap();
        assert_eq!(profile.skills[0].group(), Some(SkillGroup::Backend));
        assert_eq!(profile.skills[1].group(), None);
        assert_eq!(
            "design".parse::<SkillGroup>(),
            Err(UnknownGroup("design".to_string()))
        );
    }

    #[test]
    fn test_project_links() {
        let json = r#"{
            "title": "Linked",
            "summary": "s",
            "links": { "github": "https://github.com/x", "demo": "https://x.dev", "docs": null },
            "tech": [],
            "tags": []
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.github(), Some("https://github.com/x"));
        let others = project.other_links().collect::<Vec<_>>();
        assert_eq!(others, vec![("demo", "https://x.dev")]);
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let err = Profile::from_json(b"{ \"name\": 1 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
