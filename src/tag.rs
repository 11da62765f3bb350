//! The in-memory tag tree: [`Tag`] nodes and their [`Value`] payloads.

use serde::{Deserialize, Serialize};

use crate::de::{self, DecodeOpts};
use crate::ser;
use crate::{Flags, Kind};

/// One node of an NBT tree: a payload, an optional name, and a validity
/// marker filled in by decoding.
///
/// Build nodes with the per-kind constructors and attach names with
/// [`named`][Tag::named]:
///
/// ```
/// use nbtag::{Kind, Tag};
///
/// let pos = Tag::list(vec![Tag::double(1.5), Tag::double(70.0)]).named("pos");
/// assert_eq!(pos.kind(), Kind::List);
/// assert_eq!(pos.name(), "pos");
/// ```
///
/// A tag made by [`Tag::from_bytes`] always exists, even for garbage input;
/// [`is_valid`][Tag::is_valid] tells whether decoding hit a fault anywhere
/// in the subtree. Constructed tags are always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    value: Value,
    name: Option<String>,
    #[serde(skip, default = "valid_by_default")]
    valid: bool,
}

// A tree rebuilt through serde was never binary-decoded, so it is valid.
fn valid_by_default() -> bool {
    true
}

/// The payload of a [`Tag`], one variant per tag kind.
///
/// `List` and `Compound` hold their children in order. The model does not
/// enforce list element homogeneity; the decoder does, for data read from
/// bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Tag>),
    Compound(Vec<Tag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The kind of tag this payload belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Value::End => Kind::End,
            Value::Byte(_) => Kind::Byte,
            Value::Short(_) => Kind::Short,
            Value::Int(_) => Kind::Int,
            Value::Long(_) => Kind::Long,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::ByteArray(_) => Kind::ByteArray,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Compound(_) => Kind::Compound,
            Value::IntArray(_) => Kind::IntArray,
            Value::LongArray(_) => Kind::LongArray,
        }
    }
}

impl Tag {
    /// An End tag. On the wire End only ever appears as the Compound
    /// terminator; building one directly is rarely useful outside tests.
    pub fn end() -> Self {
        Self::with_value(Value::End)
    }

    pub fn byte(value: i8) -> Self {
        Self::with_value(Value::Byte(value))
    }

    pub fn short(value: i16) -> Self {
        Self::with_value(Value::Short(value))
    }

    pub fn int(value: i32) -> Self {
        Self::with_value(Value::Int(value))
    }

    pub fn long(value: i64) -> Self {
        Self::with_value(Value::Long(value))
    }

    pub fn float(value: f32) -> Self {
        Self::with_value(Value::Float(value))
    }

    pub fn double(value: f64) -> Self {
        Self::with_value(Value::Double(value))
    }

    pub fn byte_array(value: Vec<i8>) -> Self {
        Self::with_value(Value::ByteArray(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::with_value(Value::String(value.into()))
    }

    /// A list of `items`. Homogeneity is not checked here; a mixed list
    /// encodes fine and comes back flagged invalid when decoded.
    pub fn list(items: Vec<Tag>) -> Self {
        Self::with_value(Value::List(items))
    }

    /// A compound holding `items` in the given order. Members conventionally
    /// carry names; an unnamed member is written with an empty name.
    pub fn compound(items: Vec<Tag>) -> Self {
        Self::with_value(Value::Compound(items))
    }

    pub fn int_array(value: Vec<i32>) -> Self {
        Self::with_value(Value::IntArray(value))
    }

    pub fn long_array(value: Vec<i64>) -> Self {
        Self::with_value(Value::LongArray(value))
    }

    fn with_value(value: Value) -> Self {
        Self {
            value,
            name: None,
            valid: true,
        }
    }

    pub(crate) fn from_parts(value: Value, name: Option<String>, valid: bool) -> Self {
        Self { value, name, valid }
    }

    /// An invalid End tag, for a decode that could not even start.
    pub(crate) fn faulted() -> Self {
        Self {
            value: Value::End,
            name: None,
            valid: false,
        }
    }

    /// Attach a name, consuming and returning the tag so constructors
    /// chain: `Tag::int(4).named("int")`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The tag's kind, always in agreement with its payload.
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// False once any fault was hit while this tag or a descendant was
    /// decoded; sticky, never reset.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Borrow the payload, for matching beyond the `as_*` accessors.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the payload out of the tag.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The tag's name, or `""` when it has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether a name is present at all; an empty name still counts.
    ///
    /// ```
    /// use nbtag::Tag;
    ///
    /// assert!(!Tag::int(1).has_name());
    /// assert!(Tag::int(1).named("").has_name());
    /// ```
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Remove the name entirely, so [`has_name`][Tag::has_name] becomes
    /// false again.
    pub fn clear_name(&mut self) {
        self.name = None;
    }

    /// The payload if this is a Byte tag.
    pub fn as_byte(&self) -> Option<i8> {
        match self.value {
            Value::Byte(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a Short tag.
    pub fn as_short(&self) -> Option<i16> {
        match self.value {
            Value::Short(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is an Int tag.
    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a Long tag.
    pub fn as_long(&self) -> Option<i64> {
        match self.value {
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a Float tag.
    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a Double tag.
    pub fn as_double(&self) -> Option<f64> {
        match self.value {
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a ByteArray tag.
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match &self.value {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a String tag.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// The children if this is a List tag.
    pub fn as_list(&self) -> Option<&[Tag]> {
        match &self.value {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// The members if this is a Compound tag, in document order.
    pub fn as_compound(&self) -> Option<&[Tag]> {
        match &self.value {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is an IntArray tag.
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match &self.value {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a LongArray tag.
    pub fn as_long_array(&self) -> Option<&[i64]> {
        match &self.value {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    /// Any integral payload widened to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Any floating payload widened to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Encode this tree to wire bytes.
    ///
    /// Total: every tree encodes, even one holding a heterogeneous list
    /// (which decodes back as invalid). `Flags::empty()` selects the
    /// big-endian Java layout with a named root.
    ///
    /// ```
    /// use nbtag::{Flags, Tag};
    ///
    /// let bytes = Tag::int(4).named("int").to_bytes(Flags::empty());
    /// assert_eq!(bytes, [0x03, 0x00, 0x03, b'i', b'n', b't', 0, 0, 0, 4]);
    /// ```
    pub fn to_bytes(&self, flags: Flags) -> Vec<u8> {
        ser::encode_root(self, flags)
    }

    /// Decode one tag from the front of `data`; trailing bytes are ignored.
    ///
    /// Never panics, whatever the input. A fault anywhere leaves its mark
    /// through [`is_valid`][Tag::is_valid] while the structure decoded
    /// before the fault is kept. Nesting past the default depth bound (see
    /// [`DecodeOpts`]) counts as a fault too.
    ///
    /// ```
    /// use nbtag::{Flags, Tag};
    ///
    /// let data = [0x03, 0x00, 0x03, b'i', b'n', b't', 0, 0, 0, 4];
    /// let tag = Tag::from_bytes(&data, Flags::empty());
    /// assert!(tag.is_valid());
    /// assert_eq!(tag.name(), "int");
    /// assert_eq!(tag.as_int(), Some(4));
    /// ```
    pub fn from_bytes(data: &[u8], flags: Flags) -> Tag {
        de::decode_root(data, flags, &DecodeOpts::new())
    }

    /// [`from_bytes`][Tag::from_bytes] with explicit decode options.
    pub fn from_bytes_with_opts(data: &[u8], flags: Flags, opts: DecodeOpts) -> Tag {
        de::decode_root(data, flags, &opts)
    }
}

macro_rules! from {
    ($($type:ty => $ctor:ident),* $(,)?) => {
        $(
            impl From<$type> for Tag {
                fn from(value: $type) -> Self {
                    Self::$ctor(value)
                }
            }
        )*
    };
}

from! {
    i8 => byte,
    i16 => short,
    i32 => int,
    i64 => long,
    f32 => float,
    f64 => double,
    String => string,
    &str => string,
    Vec<i8> => byte_array,
    Vec<i32> => int_array,
    Vec<i64> => long_array,
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Self::byte(value.into())
    }
}
