//! Encoding of [`Tag`] trees into wire bytes.
//!
//! Encoding is total: any tree produces bytes, with no validation beyond
//! what the layout itself forces. The byte order is picked once per call
//! and fixed for the whole walk.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{Flags, Kind, Tag, Value};

pub(crate) fn encode_root(tag: &Tag, flags: Flags) -> Vec<u8> {
    let hide_root_name = tag.kind() == Kind::Compound && flags.contains(Flags::UNNAMED_ROOT);
    let mut out = Vec::new();
    if flags.contains(Flags::LITTLE_ENDIAN) {
        encode::<LittleEndian>(tag, &mut out, hide_root_name);
    } else {
        encode::<BigEndian>(tag, &mut out, hide_root_name);
    }
    out
}

/// An empty list is the End element kind plus a zero count, the same five
/// bytes in either byte order.
const EMPTY_LIST: [u8; 5] = [0; 5];

fn encode<B: ByteOrder>(tag: &Tag, out: &mut Vec<u8>, hide_name: bool) {
    out.push(u8::from(tag.kind()));

    if !hide_name {
        put_u16::<B>(out, tag.name().len() as u16);
        out.extend_from_slice(tag.name().as_bytes());
    }

    match tag.value() {
        Value::End => out.push(0),
        Value::Byte(v) => out.push(*v as u8),
        Value::Short(v) => put_i16::<B>(out, *v),
        Value::Int(v) => put_i32::<B>(out, *v),
        Value::Long(v) => put_i64::<B>(out, *v),
        Value::Float(v) => put_f32::<B>(out, *v),
        Value::Double(v) => put_f64::<B>(out, *v),
        Value::ByteArray(data) => {
            put_i32::<B>(out, data.len() as i32);
            out.extend_from_slice(as_unsigned(data));
        }
        Value::String(text) => {
            put_u16::<B>(out, text.len() as u16);
            out.extend_from_slice(text.as_bytes());
        }
        Value::List(items) => match items.first() {
            None => out.extend_from_slice(&EMPTY_LIST),
            Some(first) => {
                out.push(u8::from(first.kind()));
                put_i32::<B>(out, items.len() as i32);
                for item in items {
                    encode::<B>(item, out, true);
                }
            }
        },
        Value::Compound(items) => {
            for item in items {
                encode::<B>(item, out, false);
            }
            out.push(u8::from(Kind::End));
        }
        Value::IntArray(data) => {
            put_i32::<B>(out, data.len() as i32);
            for v in data {
                put_i32::<B>(out, *v);
            }
        }
        Value::LongArray(data) => {
            put_i32::<B>(out, data.len() as i32);
            for v in data {
                put_i64::<B>(out, *v);
            }
        }
    }
}

fn as_unsigned(data: &[i8]) -> &[u8] {
    // Safe to treat [i8] as [u8].
    unsafe { &*(data as *const [i8] as *const [u8]) }
}

fn put_u16<B: ByteOrder>(out: &mut Vec<u8>, v: u16) {
    let mut buf = [0; 2];
    B::write_u16(&mut buf, v);
    out.extend_from_slice(&buf);
}

fn put_i16<B: ByteOrder>(out: &mut Vec<u8>, v: i16) {
    let mut buf = [0; 2];
    B::write_i16(&mut buf, v);
    out.extend_from_slice(&buf);
}

fn put_i32<B: ByteOrder>(out: &mut Vec<u8>, v: i32) {
    let mut buf = [0; 4];
    B::write_i32(&mut buf, v);
    out.extend_from_slice(&buf);
}

fn put_i64<B: ByteOrder>(out: &mut Vec<u8>, v: i64) {
    let mut buf = [0; 8];
    B::write_i64(&mut buf, v);
    out.extend_from_slice(&buf);
}

fn put_f32<B: ByteOrder>(out: &mut Vec<u8>, v: f32) {
    let mut buf = [0; 4];
    B::write_f32(&mut buf, v);
    out.extend_from_slice(&buf);
}

fn put_f64<B: ByteOrder>(out: &mut Vec<u8>, v: f64) {
    let mut buf = [0; 8];
    B::write_f64(&mut buf, v);
    out.extend_from_slice(&buf);
}
