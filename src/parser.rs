use log::trace;

use crate::line::{Line, Setting};
use crate::section::Section;

/// Represents an on-going parse over the lines of a document.
#[derive(Debug, Clone)]
pub struct Parser<I> {
    lines: I,
}

impl<I, S> Parser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    #[must_use]
    pub fn new(lines: I) -> Self {
        Self { lines }
    }

    /// Consumes every line, returning the sections in input order.
    ///
    /// The first section is always the anonymous one holding whatever precedes the first header,
    /// so the result is never empty.
    pub fn into_sections(self) -> Vec<Section> {
        let mut sections = Vec::<Section>::with_capacity(16);
        let mut current = Section::default();

        for line in self.lines {
            let line = line.as_ref();
            let trimmed = line.trim();

            if let Some(name) = parse_header(trimmed) {
                trace!("found section header: {name:?}");
                sections.push(current);
                current = Section::new(name);
                continue;
            }

            current.add_line(parse_line(line, trimmed));
        }

        sections.push(current);
        sections
    }
}

/// Returns the text between the brackets of a `[name]` header. The name itself is not trimmed.
fn parse_header(trimmed: &str) -> Option<&str> {
    trimmed.strip_prefix('[')?.strip_suffix(']')
}

fn parse_line(line: &str, trimmed: &str) -> Line {
    match trimmed.split_once('=') {
        Some((name, value)) => Setting::new(name, value).into(),
        None => Line::new(line),
    }
}
