use thiserror::Error;

/// Returned when a byte names no NBT tag type.
///
/// ```
/// use nbtag::{Kind, UnknownKind};
///
/// assert_eq!(Kind::try_from(13), Err(UnknownKind(13)));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no nbt tag type with id {0}")]
pub struct UnknownKind(pub u8);
