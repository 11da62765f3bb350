use crate::{Flags, Tag};

/// A tree touching every kind, shaped like a small level save.
fn world_tree() -> Tag {
    Tag::compound(vec![
        Tag::byte(-5).named("difficulty"),
        Tag::short(320).named("height"),
        Tag::int(-1_234_567).named("spawn_x"),
        Tag::long(8_000_000_000).named("seed"),
        Tag::float(0.5).named("rain"),
        Tag::double(-123.456).named("border"),
        Tag::byte_array(vec![-128, -1, 0, 1, 127]).named("mask"),
        Tag::string("overworld").named("dimension"),
        Tag::list(vec![
            Tag::compound(vec![
                Tag::string("zombie").named("id"),
                Tag::int(10).named("hp"),
            ]),
            Tag::compound(vec![
                Tag::string("skeleton").named("id"),
                Tag::int(8).named("hp"),
            ]),
        ])
        .named("entities"),
        Tag::compound(vec![Tag::byte(1).named("raining")]).named("weather"),
        Tag::int_array(vec![i32::MIN, -1, 0, i32::MAX]).named("chunks"),
        Tag::long_array(vec![i64::MIN, i64::MAX]).named("stamps"),
        Tag::list(vec![]).named("empty"),
    ])
    .named("level")
}

#[test]
fn round_trips_under_every_flag_combination() {
    let tree = world_tree();

    for flags in [
        Flags::empty(),
        Flags::BEDROCK,
        Flags::JAVA_NETWORK,
        Flags::BEDROCK | Flags::JAVA_NETWORK,
    ] {
        let bytes = tree.to_bytes(flags);
        let back = Tag::from_bytes(&bytes, flags);

        assert!(back.is_valid(), "flags {flags:?}");
        if flags.contains(Flags::UNNAMED_ROOT) {
            // the root name is not on the wire, everything else is
            assert!(!back.has_name());
            assert_eq!(back.value(), tree.value());
        } else {
            assert_eq!(back, tree);
        }
    }
}

#[test]
fn wrong_byte_order_does_not_reproduce_the_tree() {
    let tree = world_tree();
    let bytes = tree.to_bytes(Flags::BEDROCK);
    let back = Tag::from_bytes(&bytes, Flags::empty());

    assert_ne!(back, tree);
}

#[test]
fn floats_round_trip_bit_exact() {
    let tree = Tag::compound(vec![
        Tag::float(f32::MIN_POSITIVE).named("tiny"),
        Tag::float(-0.0).named("negzero"),
        Tag::float(f32::NAN).named("nan"),
        Tag::double(std::f64::consts::PI).named("pi"),
        Tag::double(f64::MAX).named("max"),
    ])
    .named("f");
    let back = Tag::from_bytes(&tree.to_bytes(Flags::empty()), Flags::empty());

    assert!(back.is_valid());
    let members = back.as_compound().unwrap();
    assert_eq!(
        members[0].as_float().map(f32::to_bits),
        Some(f32::MIN_POSITIVE.to_bits())
    );
    assert_eq!(
        members[1].as_float().map(f32::to_bits),
        Some((-0.0f32).to_bits())
    );
    assert_eq!(
        members[2].as_float().map(f32::to_bits),
        Some(f32::NAN.to_bits())
    );
    assert_eq!(
        members[3].as_double().map(f64::to_bits),
        Some(std::f64::consts::PI.to_bits())
    );
    assert_eq!(
        members[4].as_double().map(f64::to_bits),
        Some(f64::MAX.to_bits())
    );
}

#[test]
fn nesting_below_the_depth_bound_round_trips() {
    let mut tag = Tag::int(7).named("core");
    for i in 0..100 {
        tag = Tag::compound(vec![tag]).named(format!("shell{i}"));
    }
    let back = Tag::from_bytes(&tag.to_bytes(Flags::empty()), Flags::empty());

    assert_eq!(back, tag);
}

#[test]
fn nesting_beyond_the_depth_bound_is_rejected() {
    let mut tag = Tag::int(7).named("core");
    for _ in 0..600 {
        tag = Tag::compound(vec![tag]).named("shell");
    }
    let back = Tag::from_bytes(&tag.to_bytes(Flags::empty()), Flags::empty());

    assert!(!back.is_valid());
}

#[test]
fn encoder_does_not_validate_list_homogeneity() {
    let tree = Tag::list(vec![Tag::int(1), Tag::string("two")]).named("mixed");
    let back = Tag::from_bytes(&tree.to_bytes(Flags::empty()), Flags::empty());

    assert!(!back.is_valid());
    let items = back.as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_int(), Some(1));
    assert_eq!(items[1].as_str(), Some("two"));
}
