//! Decoding of wire bytes into [`Tag`] trees.
//!
//! The decoder is built to survive anything: every read is bounds-checked
//! against the remaining input, a failed read refuses to advance the
//! cursor, and a fault marks the tag under construction invalid instead of
//! aborting. Faults propagate bottom-up, so the root's validity answers for
//! the whole tree, while the structure decoded before the fault stays
//! available.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{Flags, Kind, Tag, Value};

/// Options for decoding, currently the protective limits.
///
/// ```
/// use nbtag::{DecodeOpts, Flags, Tag};
///
/// let data = [0x0a, 0x00, 0x00, 0x00]; // {} named ""
/// let opts = DecodeOpts::new().max_depth(4);
/// assert!(Tag::from_bytes_with_opts(&data, Flags::empty(), opts).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct DecodeOpts {
    max_depth: usize,
}

impl DecodeOpts {
    /// Defaults: `max_depth` of 512.
    pub fn new() -> Self {
        Self { max_depth: 512 }
    }

    /// Greatest container nesting accepted before decoding gives up and
    /// marks the tag invalid. Bounds the recursion on adversarial input.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn decode_root(data: &[u8], flags: Flags, opts: &DecodeOpts) -> Tag {
    let mut input = Input(data);
    if flags.contains(Flags::LITTLE_ENDIAN) {
        decode::<LittleEndian>(&mut input, flags, opts, false, true, 0)
    } else {
        decode::<BigEndian>(&mut input, flags, opts, false, true, 0)
    }
}

/// Forward-only cursor over the input. A read that would pass the end
/// returns `None` and leaves the cursor where it was.
struct Input<'a>(&'a [u8]);

impl<'a> Input<'a> {
    fn remaining(&self) -> usize {
        self.0.len()
    }

    fn consume_bytes(&mut self, n: usize) -> Option<&'a [u8]> {
        if n <= self.0.len() {
            let (head, rest) = self.0.split_at(n);
            self.0 = rest;
            Some(head)
        } else {
            None
        }
    }

    fn consume_u8(&mut self) -> Option<u8> {
        self.consume_bytes(1).map(|b| b[0])
    }

    fn consume_i8(&mut self) -> Option<i8> {
        self.consume_u8().map(|b| b as i8)
    }

    fn consume_u16<B: ByteOrder>(&mut self) -> Option<u16> {
        self.consume_bytes(2).map(B::read_u16)
    }

    fn consume_i16<B: ByteOrder>(&mut self) -> Option<i16> {
        self.consume_bytes(2).map(B::read_i16)
    }

    fn consume_i32<B: ByteOrder>(&mut self) -> Option<i32> {
        self.consume_bytes(4).map(B::read_i32)
    }

    fn consume_i64<B: ByteOrder>(&mut self) -> Option<i64> {
        self.consume_bytes(8).map(B::read_i64)
    }

    fn consume_f32<B: ByteOrder>(&mut self) -> Option<f32> {
        self.consume_bytes(4).map(B::read_f32)
    }

    fn consume_f64<B: ByteOrder>(&mut self) -> Option<f64> {
        self.consume_bytes(8).map(B::read_f64)
    }

    /// An element count prefix. Negative counts clamp to zero without a
    /// fault; a count that cannot be read at all is one.
    fn consume_count<B: ByteOrder>(&mut self, valid: &mut bool) -> usize {
        match self.consume_i32::<B>() {
            Some(n) => n.max(0) as usize,
            None => {
                *valid = false;
                0
            }
        }
    }
}

/// A scalar read that came up short yields the type's zero value and trips
/// the validity flag.
fn zero_on_fault<T: Default>(read: Option<T>, valid: &mut bool) -> T {
    match read {
        Some(v) => v,
        None => {
            *valid = false;
            T::default()
        }
    }
}

fn decode<B: ByteOrder>(
    input: &mut Input<'_>,
    flags: Flags,
    opts: &DecodeOpts,
    hide_name: bool,
    is_root: bool,
    depth: usize,
) -> Tag {
    if depth > opts.max_depth {
        return Tag::faulted();
    }

    let Some(id) = input.consume_u8() else {
        return Tag::faulted();
    };
    let Ok(kind) = Kind::try_from(id) else {
        return Tag::faulted();
    };

    let hide_name = hide_name
        || kind == Kind::End
        || (is_root && kind == Kind::Compound && flags.contains(Flags::UNNAMED_ROOT));

    let mut valid = true;
    let mut name = None;

    if !hide_name {
        let text = input
            .consume_u16::<B>()
            .and_then(|len| input.consume_bytes(len as usize))
            .map(|raw| String::from_utf8_lossy(raw).into_owned());
        match text {
            Some(text) => name = Some(text),
            None => {
                // the name is present but unreadable; skip the payload too
                valid = false;
                name = Some(String::new());
            }
        }
    }

    let value = if !valid {
        Value::End
    } else {
        match kind {
            Kind::End => Value::End,
            Kind::Byte => Value::Byte(zero_on_fault(input.consume_i8(), &mut valid)),
            Kind::Short => Value::Short(zero_on_fault(input.consume_i16::<B>(), &mut valid)),
            Kind::Int => Value::Int(zero_on_fault(input.consume_i32::<B>(), &mut valid)),
            Kind::Long => Value::Long(zero_on_fault(input.consume_i64::<B>(), &mut valid)),
            Kind::Float => Value::Float(zero_on_fault(input.consume_f32::<B>(), &mut valid)),
            Kind::Double => Value::Double(zero_on_fault(input.consume_f64::<B>(), &mut valid)),
            Kind::ByteArray => {
                let want = input.consume_count::<B>(&mut valid);
                let got = want.min(input.remaining());
                if got < want {
                    valid = false;
                }
                let raw = input.consume_bytes(got).unwrap_or_default();
                Value::ByteArray(raw.iter().map(|&b| b as i8).collect())
            }
            Kind::String => {
                let text = input
                    .consume_u16::<B>()
                    .and_then(|len| input.consume_bytes(len as usize));
                match text {
                    Some(raw) => Value::String(String::from_utf8_lossy(raw).into_owned()),
                    None => {
                        valid = false;
                        Value::String(String::new())
                    }
                }
            }
            Kind::List => {
                let declared = input.consume_u8().and_then(|id| Kind::try_from(id).ok());
                let count = input.consume_count::<B>(&mut valid);
                let mut items = Vec::new();
                match declared {
                    Some(declared) if valid => {
                        items.reserve(count.min(input.remaining()));
                        for _ in 0..count {
                            let before = input.remaining();
                            let item = decode::<B>(input, flags, opts, true, false, depth + 1);
                            if !item.is_valid() || item.kind() != declared {
                                valid = false;
                            }
                            // a failed element that consumed nothing means
                            // the cursor is stuck; give up on the rest
                            let stalled = !item.is_valid() && input.remaining() == before;
                            items.push(item);
                            if stalled {
                                break;
                            }
                        }
                    }
                    _ => valid = false,
                }
                Value::List(items)
            }
            Kind::Compound => {
                let mut items = Vec::new();
                loop {
                    let item = decode::<B>(input, flags, opts, false, false, depth + 1);
                    let ok = item.is_valid();
                    if !ok {
                        valid = false;
                    }
                    if item.kind() == Kind::End {
                        // the terminator, or a member that failed before
                        // its payload; either way it is not kept
                        break;
                    }
                    items.push(item);
                    if !ok {
                        break;
                    }
                }
                Value::Compound(items)
            }
            Kind::IntArray => {
                let want = input.consume_count::<B>(&mut valid);
                let mut data = Vec::with_capacity(want.min(input.remaining() / 4));
                for _ in 0..want {
                    match input.consume_i32::<B>() {
                        Some(v) => data.push(v),
                        None => {
                            valid = false;
                            break;
                        }
                    }
                }
                Value::IntArray(data)
            }
            Kind::LongArray => {
                let want = input.consume_count::<B>(&mut valid);
                let mut data = Vec::with_capacity(want.min(input.remaining() / 8));
                for _ in 0..want {
                    match input.consume_i64::<B>() {
                        Some(v) => data.push(v),
                        None => {
                            valid = false;
                            break;
                        }
                    }
                }
                Value::LongArray(data)
            }
        }
    };

    Tag::from_parts(value, name, valid)
}
