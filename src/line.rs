use std::borrow::Cow;
use std::fmt;

/// One physical line of a document.
///
/// A line is either free text, stored verbatim, or a [`Setting`] whose text is derived from its
/// name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Setting(Setting),
}

impl Line {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The text this line serializes to.
    #[must_use]
    pub fn content(&self) -> Cow<'_, str> {
        match *self {
            Self::Text(ref text) => Cow::Borrowed(text),
            Self::Setting(ref setting) => Cow::Owned(setting.content()),
        }
    }

    #[must_use]
    pub fn as_setting(&self) -> Option<&Setting> {
        match *self {
            Self::Setting(ref setting) => Some(setting),
            Self::Text(..) => None,
        }
    }

    #[must_use]
    pub fn as_setting_mut(&mut self) -> Option<&mut Setting> {
        match *self {
            Self::Setting(ref mut setting) => Some(setting),
            Self::Text(..) => None,
        }
    }

    /// Returns `true` if the line has no content at all. A setting is never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<Setting> for Line {
    fn from(value: Setting) -> Self {
        Line::Setting(value)
    }
}

impl From<String> for Line {
    fn from(value: String) -> Self {
        Line::Text(value)
    }
}

impl From<&str> for Line {
    fn from(value: &str) -> Self {
        Line::Text(value.to_owned())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Text(ref text) => text.fmt(f),
            Self::Setting(ref setting) => setting.fmt(f),
        }
    }
}

/// A `name = value` pair. Both halves are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    name: String,
    value: String,
}

impl Setting {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            value: value.trim().to_owned(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        value.trim().clone_into(&mut self.value);
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
