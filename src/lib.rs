#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Editable INI-style settings documents.
//!
//! A [`Document`] is an ordered list of [`Section`]s, each an ordered list of [`Line`]s that are
//! either free text or `name = value` [`Setting`]s. Text is parsed with [`Document::load`] and
//! written back with [`Document::dump`], keeping section spacing and trailing blank lines intact
//! across edits.
//!
//! ```
//! use confdoc::Document;
//!
//! let mut document = Document::parse("[server]\nhost = localhost\n\n[client]\nretries = 3");
//! document.set_value("server", "port", "8080");
//!
//! assert_eq!(document.get_value("server", "port"), "8080");
//! assert_eq!(
//!     document.dump(),
//!     ["[server]", "host = localhost", "port = 8080", "", "[client]", "retries = 3"]
//! );
//! ```

mod document;
mod error;
mod line;
mod parser;
mod section;
pub mod util;

pub use document::Document;
pub use error::{ConvertError, Error};
pub use line::{Line, Setting};
pub use section::Section;
