use crate::content::{Skill, SkillGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Group(SkillGroup),
}

impl SkillFilter {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = SkillFilter> {
        std::iter::once(Self::All).chain(SkillGroup::ALL.into_iter().map(Self::Group))
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Group(g) => g.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Group(g) => g.label(),
        }
    }

    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Group(g) => skill.group() == Some(g),
        }
    }
}

/// Ordered subsequence of `skills` selected by `filter`.
pub fn filter_skills(skills: &[Skill], filter: SkillFilter) -> Vec<Skill> {
    match filter {
        SkillFilter::All => skills.to_vec(),
        _ => skills.iter().filter(|s| filter.matches(s)).cloned().collect(),
    }
}
