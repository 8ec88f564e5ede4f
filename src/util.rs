use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConvertError;

/// Formats items as a setting value, e.g. `{ 1, 2, 3 }`.
pub fn format_array<T>(items: &[T]) -> String
where
    T: Display,
{
    let mut value = String::from("{ ");

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            value.push_str(", ");
        }
        value.push_str(&item.to_string());
    }

    if !items.is_empty() {
        value.push(' ');
    }
    value.push('}');
    value
}

/// Parses a value written by [`format_array`] back into items.
///
/// The surrounding braces are optional. Items are trimmed before conversion, and a value with
/// nothing between the braces yields no items.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidItem`] for the first item `T` cannot be parsed from.
pub fn parse_array<T>(value: &str) -> Result<Vec<T>, ConvertError>
where
    T: FromStr,
{
    let value = value.trim();
    let value = value.strip_prefix('{').unwrap_or(value);
    let value = value.strip_suffix('}').unwrap_or(value).trim();

    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, item)| {
            item.parse::<T>().map_err(|_| ConvertError::InvalidItem {
                index,
                item: item.to_owned(),
            })
        })
        .collect()
}
