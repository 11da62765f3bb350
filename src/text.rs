//! Text rendering of tag trees, for debugging and logs.
//!
//! The format is stable: named tags render as `name: value`, scalars carry
//! the usual `b`/`s`/`l`/`f` suffixes, arrays use the `[B;…]`/`[I;…]`/`[L;…]`
//! forms and strings are quoted with their control characters escaped. It is
//! not a wire format and nothing parses it back.

use std::fmt;

use crate::{Tag, Value};

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_name() {
            write!(f, "{}: ", self.name())?;
        }
        match self.value() {
            Value::End => f.write_str("%TAG_END%"),
            Value::Byte(v) => write!(f, "{v}b"),
            Value::Short(v) => write!(f, "{v}s"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}l"),
            Value::Float(v) => write!(f, "{v}f"),
            Value::Double(v) => write!(f, "{v}"),
            Value::ByteArray(data) => {
                f.write_str("[B;")?;
                for (i, v) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}b")?;
                }
                f.write_str("]")
            }
            Value::String(text) => write_escaped(f, text),
            Value::List(items) => write_children(f, items, "[", "]"),
            Value::Compound(items) => write_children(f, items, "{", "}"),
            Value::IntArray(data) => {
                f.write_str("[I;")?;
                for (i, v) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::LongArray(data) => {
                f.write_str("[L;")?;
                for (i, v) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}l")?;
                }
                f.write_str("]")
            }
        }
    }
}

fn write_children(
    f: &mut fmt::Formatter<'_>,
    items: &[Tag],
    open: &str,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{7}' => f.write_str("\\a")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{b}' => f.write_str("\\v")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}
