//! Lookups from authored content to display classes and strings.

use chrono::NaiveDate;

use crate::content::{Language, Skill, SkillGroup, Social};

pub const PRESENT: &str = "Present";

/// Chip colours for project cards and the project modal.
pub const TECH_PALETTE: [&str; 6] = [
    "bg-blue-500/20 text-blue-300",
    "bg-green-500/20 text-green-300",
    "bg-purple-500/20 text-purple-300",
    "bg-yellow-500/20 text-yellow-300",
    "bg-red-500/20 text-red-300",
    "bg-orange-500/20 text-orange-300",
];

/// Chip colours for the experience timeline.
pub const TIMELINE_PALETTE: [&str; 8] = [
    "bg-blue-500/20 text-blue-300",
    "bg-green-500/20 text-green-300",
    "bg-purple-500/20 text-purple-300",
    "bg-yellow-500/20 text-yellow-300",
    "bg-red-500/20 text-red-300",
    "bg-orange-500/20 text-orange-300",
    "bg-pink-500/20 text-pink-300",
    "bg-indigo-500/20 text-indigo-300",
];

pub const PROJECT_GRADIENTS: [&str; 4] = [
    "from-blue-900/30 to-purple-900/30",
    "from-green-900/30 to-blue-900/30",
    "from-yellow-900/30 to-orange-900/30",
    "from-purple-900/30 to-pink-900/30",
];

pub fn palette_class<'a>(palette: &[&'a str], index: usize) -> &'a str {
    palette[index % palette.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    LinkedIn,
    GitHub,
    Email,
    Unknown,
}

impl SocialKind {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "linkedin" => Self::LinkedIn,
            "github" => Self::GitHub,
            "email" => Self::Email,
            _ => Self::Unknown,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::GitHub => "devicon-github-plain",
            Self::Email => "extra-email",
            Self::Unknown => "extra-link",
        }
    }
}

impl Social {
    pub fn kind(&self) -> SocialKind {
        SocialKind::from_label(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    React,
    Redux,
    JavaScript,
    Python,
    CPlusPlus,
    Docker,
    Git,
    Android,
    NodeJs,
    Api,
    Database,
    Workflow,
    Ai,
    Unknown,
}

impl SkillIcon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "react" => Self::React,
            "redux" => Self::Redux,
            "javascript" => Self::JavaScript,
            "python" => Self::Python,
            "cplusplus" => Self::CPlusPlus,
            "docker" => Self::Docker,
            "git" => Self::Git,
            "android" => Self::Android,
            "nodejs" => Self::NodeJs,
            "api" => Self::Api,
            "database" => Self::Database,
            "workflow" => Self::Workflow,
            "ai" => Self::Ai,
            _ => Self::Unknown,
        }
    }

    /// Icon and colour classes. Generic keys are refined by the skill name.
    pub fn classes(self, skill_name: &str) -> &'static str {
        match self {
            Self::React => "devicon-react-original text-blue-400",
            Self::Redux => "devicon-redux-original text-purple-400",
            Self::JavaScript => "devicon-javascript-original text-yellow-400",
            Self::Python => "devicon-python-original text-blue-500",
            Self::CPlusPlus => "devicon-cplusplus-original text-blue-600",
            Self::Docker => "devicon-docker-original text-blue-500",
            Self::Git => "devicon-git-original text-red-500",
            Self::Android => "devicon-android-original text-green-500",
            Self::NodeJs => "devicon-nodejs-original text-green-500",
            Self::Api => "extra-server text-green-400",
            Self::Database => "extra-database text-orange-400",
            Self::Workflow if skill_name.contains("Make") => "extra-zap text-yellow-400",
            Self::Workflow if skill_name.contains("Go High Level") => "extra-users text-orange-400",
            Self::Workflow => "extra-workflow text-purple-400",
            Self::Ai if skill_name.contains("VAPI") => "extra-mic text-blue-400",
            Self::Ai => "extra-brain text-green-400",
            Self::Unknown if skill_name.contains("Dolibarr") => "extra-building text-red-400",
            Self::Unknown => "extra-database text-gray-400",
        }
    }
}

impl Skill {
    pub fn icon(&self) -> SkillIcon {
        SkillIcon::from_key(&self.icon)
    }

    pub fn icon_classes(&self) -> &'static str {
        self.icon().classes(&self.name)
    }

    pub fn accent(&self) -> &'static str {
        self.group().map_or("hover:border-electric", SkillGroup::accent)
    }
}

impl SkillGroup {
    pub fn accent(self) -> &'static str {
        match self {
            Self::Frontend => "hover:border-blue-400",
            Self::Backend => "hover:border-green-400",
            Self::Tools => "hover:border-orange-400",
            Self::Automation => "hover:border-purple-400",
            Self::Ai => "hover:border-emerald-400",
            Self::Crm => "hover:border-red-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageLevel {
    Native,
    Fluent,
    Intermediate,
    Beginner,
    Unknown,
}

impl LanguageLevel {
    pub fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "native" => Self::Native,
            "fluent" => Self::Fluent,
            "intermediate" => Self::Intermediate,
            "beginner" => Self::Beginner,
            _ => Self::Unknown,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Native => "bg-blue-500/20 text-blue-300",
            Self::Fluent => "bg-green-500/20 text-green-300",
            Self::Intermediate => "bg-yellow-500/20 text-yellow-300",
            Self::Beginner => "bg-red-500/20 text-red-300",
            Self::Unknown => "bg-gray-500/20 text-gray-300",
        }
    }
}

impl Language {
    pub fn badge_class(&self) -> &'static str {
        LanguageLevel::parse(&self.level).badge_class()
    }
}

/// `"2024-03"` becomes `"Mar 2024"`. `"Present"` and anything that isn't a
/// year-month pass through untouched.
pub fn format_month(value: &str) -> String {
    if value == PRESENT {
        return value.to_string();
    }
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn format_period(start: &str, end: &str) -> String {
    format!("{} - {}", format_month(start), format_month(end))
}

pub fn period_status(end: &str) -> &'static str {
    if end == PRESENT {
        "Current"
    } else {
        "Completed"
    }
}

/// Lower-cased with whitespace runs collapsed to `-`, for anchors and test ids.
pub fn slug(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// First letter of each word of `name`, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Greeting prefilled in WhatsApp chats, already percent-encoded.
const WHATSAPP_GREETING: &str = "Hi%2C%20I%20saw%20your%20portfolio%20and%20would%20like%20to%20connect.";

/// `wa.me` chat link for a number written with or without `+`, spaces or dashes.
pub fn whatsapp_link(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={WHATSAPP_GREETING}")
}
