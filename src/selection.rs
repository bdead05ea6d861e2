use crate::content::Project;

/// Which project, if any, is open in the detail overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectSelection {
    #[default]
    Closed,
    Open(Project),
}

impl ProjectSelection {
    /// Opens `project`, replacing any project already open.
    pub fn select(&mut self, project: Project) {
        *self = Self::Open(project);
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            Self::Open(p) => Some(p),
            Self::Closed => None,
        }
    }
}
