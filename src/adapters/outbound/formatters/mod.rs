/// Formatter adapters for the SPDX output forms
mod json_formatter;
mod tag_value_formatter;

pub use json_formatter::JsonFormatter;
pub use tag_value_formatter::TagValueFormatter;
