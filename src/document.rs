use std::borrow::Cow;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{ConvertError, Error};
use crate::line::Setting;
use crate::parser::Parser;
use crate::section::Section;
use crate::util;

/// An ordered collection of sections, parsed from and dumped back to lines of text.
///
/// Section names need not be unique. Every lookup resolves to the first section with a matching
/// name, and the empty name refers to the anonymous section at the top of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from lines of text, see [`Document::load`].
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut document = Self::new();
        document.load(lines);
        document
    }

    /// Creates a document from text, splitting it on `\n` or `\r\n`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Reads a whole UTF-8 stream into a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the stream fails or is not valid UTF-8.
    pub fn from_reader<R>(reader: &mut R) -> Result<Self, Error>
    where
        R: Read + ?Sized,
    {
        let mut text = String::new();
        _ = reader
            .read_to_string(&mut text)
            .map_err(|source| Error::Read { source })?;

        Ok(Self::parse(&text))
    }

    /// Reads the file at `path` into a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be opened or read.
    pub fn open<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("reading document from {}", path.display());

        let mut file = File::open(path).map_err(|source| Error::Read { source })?;
        Self::from_reader(&mut file)
    }

    /// Writes every dumped line, each followed by `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the writer fails.
    pub fn write_to<W>(&self, writer: &mut W) -> Result<(), Error>
    where
        W: Write + ?Sized,
    {
        let write = |writer: &mut W| -> io::Result<()> {
            for line in self.dump() {
                writeln!(writer, "{line}")?;
            }
            writer.flush()
        };

        write(writer).map_err(|source| Error::Write { source })
    }

    /// Writes the document to `path`, replacing whatever is there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be created or written.
    pub fn save<P>(&self, path: P) -> Result<(), Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("writing document to {}", path.display());

        let file = File::create(path).map_err(|source| Error::Write { source })?;
        self.write_to(&mut BufWriter::new(file))
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Replaces the contents of the document with the parsed `lines`.
    ///
    /// Afterwards the document holds the anonymous section followed by one section per header,
    /// in input order.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clean();
        self.sections = Parser::new(lines.into_iter()).into_sections();
        debug!("loaded {} sections", self.sections.len());
    }

    /// Renders the document back into lines of text.
    ///
    /// Named sections get a `[name]` header, preceded by one blank line unless the line before it
    /// is already blank. The anonymous section has no header.
    #[must_use]
    pub fn dump(&self) -> Vec<String> {
        let mut lines = Vec::<String>::with_capacity(self.sections.len() * 8);
        // Whether the last emitted line was blank. Headers count as not blank.
        let mut previous_blank = true;

        for section in &self.sections {
            if !section.name().is_empty() {
                if !previous_blank {
                    lines.push(String::new());
                }

                lines.push(format!("[{}]", section.name()));
                previous_blank = false;
            }

            for line in section.lines() {
                let content = line.content().into_owned();
                previous_blank = content.is_empty();
                lines.push(content);
            }
        }

        debug!("dumped {} sections into {} lines", self.sections.len(), lines.len());
        lines
    }

    /// Removes every section, including the anonymous one.
    pub fn clean(&mut self) {
        self.sections.clear();
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.iter().any(|section| section.name() == name)
    }

    /// Appends an empty section, even if one with the same name exists.
    pub fn add_section(&mut self, name: &str) {
        self.sections.push(Section::new(name));
    }

    /// Removes the first section called `name`, if any.
    pub fn remove_section(&mut self, name: &str) {
        if let Some(i) = self.position(name) {
            _ = self.sections.remove(i);
        }
    }

    /// Returns the first section called `name`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.name() == name)
    }

    /// Returns the first section called `name`, or a new empty section that is not part of the
    /// document.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Cow<'_, Section> {
        self.section(name)
            .map_or_else(|| Cow::Owned(Section::default()), Cow::Borrowed)
    }

    /// Returns the anonymous section, or an empty placeholder.
    #[must_use]
    pub fn global_section(&self) -> Cow<'_, Section> {
        self.get_section("")
    }

    /// Returns the value of `setting` in the anonymous section, see [`Document::get_value`].
    #[must_use]
    pub fn get_global_value(&self, setting: &str) -> &str {
        self.get_value("", setting)
    }

    /// Returns the value of the first `setting` in the first section called `section`.
    ///
    /// A missing section or setting yields `""`.
    #[must_use]
    pub fn get_value(&self, section: &str, setting: &str) -> &str {
        self.section(section)
            .and_then(|section| section.setting(setting))
            .map_or("", Setting::value)
    }

    /// Sets `setting` in the anonymous section, see [`Document::set_value`].
    pub fn set_global_value(&mut self, setting: &str, value: &str) {
        self.set_value("", setting, value);
    }

    /// Updates the first `setting` in the first section called `section`.
    ///
    /// A missing section is appended to the end of the document and a missing setting is added
    /// to the section.
    pub fn set_value(&mut self, section: &str, setting: &str, value: &str) {
        let i = self.position(section).unwrap_or_else(|| {
            trace!("creating section {section:?} to hold {setting:?}");
            self.sections.push(Section::new(section));
            self.sections.len() - 1
        });
        let section = &mut self.sections[i];

        match section.setting_mut(setting) {
            Some(existing) => existing.set_value(value),
            None => section.add_line(Setting::new(setting, value)),
        }
    }

    /// Parses the value of `setting` as a `{ a, b, c }` array.
    ///
    /// A missing value yields an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidItem`] if an item cannot be parsed as `T`.
    pub fn get_array<T>(&self, section: &str, setting: &str) -> Result<Vec<T>, ConvertError>
    where
        T: FromStr,
    {
        util::parse_array(self.get_value(section, setting))
    }

    /// Stores `items` as a `{ a, b, c }` value, see [`Document::set_value`].
    pub fn set_array<T>(&mut self, section: &str, setting: &str, items: &[T])
    where
        T: Display,
    {
        self.set_value(section, setting, &util::format_array(items));
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.name() == name)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.dump().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }

        Ok(())
    }
}

impl FromStr for Document {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
