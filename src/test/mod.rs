

#[allow(clippy::float_cmp)]
mod roundtrip;




use crate::{Kind, UnknownKind};

macro_rules! check_kinds {
    ($($id:literal => $exp:expr),* $(,)?) => {
        $(
            assert_eq!(Kind::try_from($id), Ok($exp));
            assert_eq!(u8::from($exp), $id);
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    use Kind::*;
    check_kinds!(
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
    );
    for id in 13..=u8::MAX {
        assert_eq!(Kind::try_from(id), Err(UnknownKind(id)));
    }
}

#[test]
fn unknown_kind_reports_the_id() {
    assert_eq!(UnknownKind(200).to_string(), "no nbt tag type with id 200");
}
