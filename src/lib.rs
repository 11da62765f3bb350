//! `nbtag` is a small, tolerant codec for the NBT format used by Minecraft
//! to persist and exchange structured game state. A document is a plain
//! [`Tag`] tree; the wire side covers the big-endian Java layout, the
//! little-endian Bedrock layout and the unnamed-root network framing, all
//! selected through [`Flags`].
//!
//! ```
//! use nbtag::{Flags, Tag};
//!
//! let pos = Tag::compound(vec![
//!     Tag::double(100.5).named("x"),
//!     Tag::double(64.0).named("y"),
//! ])
//! .named("pos");
//!
//! let bytes = pos.to_bytes(Flags::empty());
//! let back = Tag::from_bytes(&bytes, Flags::empty());
//! assert_eq!(back, pos);
//! assert_eq!(back.to_string(), "pos: {x: 100.5, y: 64}");
//! ```
//!
//! Decoding never fails and never reads out of bounds. Whatever the input,
//! you get a [`Tag`] back; [`Tag::is_valid`] reports whether a fault was hit
//! anywhere along the way, and the structure that did decode before the
//! fault is kept.
//!
//! ```
//! use nbtag::{Flags, Tag};
//!
//! let broken = Tag::from_bytes(&[0x0a, 0x00], Flags::empty());
//! assert!(!broken.is_valid());
//! ```

use serde::{Deserialize, Serialize};

mod de;
mod error;
mod ser;
mod tag;
mod text;

pub use de::DecodeOpts;
pub use error::UnknownKind;
pub use tag::{Tag, Value};

/// The type of an NBT tag, with the discriminant matching the wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kind {
    /// Marks the end of a Compound on the wire; carries no data.
    End = 0,
    /// A single signed byte.
    Byte = 1,
    /// A signed 16-bit integer.
    Short = 2,
    /// A signed 32-bit integer.
    Int = 3,
    /// A signed 64-bit integer.
    Long = 4,
    /// A 32-bit float.
    Float = 5,
    /// A 64-bit float.
    Double = 6,
    /// A sequence of signed bytes.
    ByteArray = 7,
    /// UTF-8 text.
    String = 8,
    /// A sequence of tags sharing one element kind, unnamed on the wire.
    List = 9,
    /// A sequence of named tags, End-terminated on the wire.
    Compound = 10,
    /// A sequence of signed 32-bit integers.
    IntArray = 11,
    /// A sequence of signed 64-bit integers.
    LongArray = 12,
}

impl TryFrom<u8> for Kind {
    type Error = UnknownKind;

    /// Convert a wire id into a [`Kind`]; ids above 12 name no tag type.
    fn try_from(value: u8) -> Result<Self, UnknownKind> {
        use Kind::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(UnknownKind(value)),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

bitflags::bitflags! {
    /// Wire-format options for [`Tag::to_bytes`] and [`Tag::from_bytes`].
    ///
    /// `Flags::empty()` selects the defaults: big-endian numerics and a
    /// named root. Bits combine with the usual set operators, e.g.
    /// `Flags::LITTLE_ENDIAN | Flags::UNNAMED_ROOT`. Encode and decode must
    /// agree on the flags or the bytes will be misread.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// Little-endian numerics, the Bedrock edition layout.
        const LITTLE_ENDIAN = 0x1;
        /// Omit the root compound's name, as Java edition network framing
        /// does. Only affects a root whose kind is Compound.
        const UNNAMED_ROOT = 0x2;

        /// Alias for [`Flags::LITTLE_ENDIAN`].
        const BEDROCK = Self::LITTLE_ENDIAN.bits();
        /// Alias for [`Flags::UNNAMED_ROOT`].
        const JAVA_NETWORK = Self::UNNAMED_ROOT.bits();
    }
}

#[cfg(test)]
mod test;
