use std::fmt;

/// A credential record as the UI sees it. `content` stays `None` until the
/// entry has been selected and decrypted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassEntry {
    pub name: String,
    pub content: Option<String>,
    pub selected: bool,
}

impl PassEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            selected: false,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }
}

impl fmt::Display for PassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Location and version of the backend binary, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutableInfo {
    pub path: String,
    pub version: String,
}

impl ExecutableInfo {
    pub fn is_known(&self) -> bool {
        !self.path.is_empty() || !self.version.is_empty()
    }
}
