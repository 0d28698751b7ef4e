use super::value::Value;
use std::fmt;

/// Renders a value as an indented, human-readable tree.
///
/// Integers print as decimals, byte strings as double-quoted text with
/// non-printable bytes escaped, lists inline as `[a, b]`, and dictionaries
/// as brace blocks with one `"key" = value` entry per line. The exact
/// layout is a diagnostic aid, not a stable interface.
///
/// # Examples
///
/// ```
/// use tordec::bencode::{decode, dump};
///
/// let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
/// assert_eq!(dump(&value), "{\n    \"cow\" = \"moo\",\n    \"spam\" = \"eggs\"\n}");
/// ```
pub fn dump(value: &Value) -> String {
    Dump(value).to_string()
}

/// Borrowing [`fmt::Display`] adapter behind [`dump`], for printing a tree
/// without building an intermediate `String`.
///
/// # Examples
///
/// ```
/// use tordec::bencode::{decode, Dump};
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// println!("{}", Dump(&value));
/// ```
pub struct Dump<'a>(pub &'a Value);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, 4)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, indent: usize) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(f, "{}", i),
        Value::Bytes(b) => write!(f, "\"{}\"", b.escape_ascii()),
        Value::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item, indent + 4)?;
            }
            f.write_str("]")
        }
        Value::Dict(entries) => {
            if entries.is_empty() {
                return f.write_str("{}");
            }

            f.write_str("{\n")?;
            for (i, (key, value)) in entries.iter().enumerate() {
                write!(f, "{:indent$}\"{}\" = ", "", key.escape_ascii(), indent = indent)?;
                write_value(f, value, indent + 4)?;
                if i + 1 < entries.len() {
                    f.write_str(",")?;
                }
                f.write_str("\n")?;
            }
            write!(f, "{:indent$}}}", "", indent = indent - 4)
        }
    }
}
