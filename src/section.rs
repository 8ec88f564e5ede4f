use crate::line::{Line, Setting};

/// A named, ordered run of lines. The empty name denotes the anonymous section at the top of a
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<Line>,
}

impl Section {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates over the lines that are settings, in order.
    pub fn settings(&self) -> impl Iterator<Item = &Setting> {
        self.lines.iter().filter_map(Line::as_setting)
    }

    /// Returns the first setting called `name`.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings().find(|setting| setting.name() == name)
    }

    pub fn setting_mut(&mut self, name: &str) -> Option<&mut Setting> {
        self.lines
            .iter_mut()
            .filter_map(Line::as_setting_mut)
            .find(|setting| setting.name() == name)
    }

    /// Adds a line to the section.
    ///
    /// If the last line is blank, the new line goes in front of it so the blank line stays at the
    /// bottom. Only the last line is checked.
    pub fn add_line(&mut self, line: impl Into<Line>) {
        let line = line.into();

        match self.lines.last() {
            Some(last) if last.is_blank() => {
                let i = self.lines.len() - 1;
                self.lines.insert(i, line);
            }
            _ => self.lines.push(line),
        }
    }

    /// Removes the first line equal to `line`, if any.
    pub fn remove_line(&mut self, line: &Line) {
        if let Some(i) = self.lines.iter().position(|l| l == line) {
            _ = self.lines.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(section: &Section) -> Vec<String> {
        section
            .lines()
            .iter()
            .map(|line| line.content().into_owned())
            .collect()
    }

    #[test]
    fn add_line_appends() {
        let mut section = Section::new("Section");
        section.add_line("a");
        section.add_line(Setting::new("key", "value"));

        assert_eq!(contents(&section), ["a", "key = value"]);
    }

    #[test]
    fn add_line_lands_before_trailing_blank() {
        let mut section = Section::new("Section");
        section.add_line("A");
        section.add_line("");
        section.add_line("B");

        assert_eq!(contents(&section), ["A", "B", ""]);
    }

    #[test]
    fn add_line_only_looks_at_last_line() {
        let mut section = Section::new("Section");
        section.add_line("");
        section.add_line("");
        section.add_line("A");

        assert_eq!(contents(&section), ["", "A", ""]);
    }

    #[test]
    fn add_line_into_section_with_only_blank() {
        let mut section = Section::default();
        section.add_line("");
        section.add_line(Setting::new("key", "value"));

        assert_eq!(contents(&section), ["key = value", ""]);
    }

    #[test]
    fn remove_line_removes_first_match() {
        let mut section = Section::new("Section");
        section.add_line("x");
        section.add_line(Setting::new("key", "value"));
        section.add_line("x");

        section.remove_line(&Line::new("x"));
        assert_eq!(contents(&section), ["key = value", "x"]);

        section.remove_line(&Line::from(Setting::new("key", "value")));
        assert_eq!(contents(&section), ["x"]);

        section.remove_line(&Line::new("missing"));
        assert_eq!(contents(&section), ["x"]);
    }

    #[test]
    fn settings_skip_plain_lines() {
        let mut section = Section::new("Section");
        section.add_line("plain");
        section.add_line(Setting::new("a", "1"));
        section.add_line("");
        section.add_line(Setting::new("b", "2"));

        let names = section.settings().map(Setting::name).collect::<Vec<_>>();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn setting_lookup_is_first_match() {
        let mut section = Section::new("Section");
        section.add_line(Setting::new("key", "first"));
        section.add_line(Setting::new("key", "second"));

        assert_eq!(section.setting("key").map(Setting::value), Some("first"));

        section
            .setting_mut("key")
            .expect("expected setting to exist")
            .set_value("changed");
        assert_eq!(contents(&section), ["key = changed", "key = second"]);
        assert!(section.setting("missing").is_none());
    }
}
