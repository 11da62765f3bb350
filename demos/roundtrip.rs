//! Build a small level tree, push it through both wire layouts, and show
//! what a byte-order mismatch looks like.

use nbtag::{Flags, Tag};

fn main() {
    let level = Tag::compound(vec![
        Tag::string("hilltop").named("spawn"),
        Tag::byte(1).named("hardcore"),
        Tag::list(vec![
            Tag::compound(vec![
                Tag::string("husk").named("id"),
                Tag::double(12.5).named("x"),
            ]),
            Tag::compound(vec![
                Tag::string("stray").named("id"),
                Tag::double(-40.0).named("x"),
            ]),
        ])
        .named("entities"),
        Tag::int_array(vec![640, 480]).named("viewport"),
        Tag::byte_array(vec![1, 2, 3, 4, 5]).named("chunk_mask"),
        Tag::double(std::f64::consts::PI).named("angle"),
    ])
    .named("level");

    println!("built: {level}");

    let java = level.to_bytes(Flags::empty());
    let bedrock = level.to_bytes(Flags::BEDROCK);
    println!("java wire: {} bytes", java.len());
    println!("bedrock wire: {} bytes", bedrock.len());

    let back = Tag::from_bytes(&java, Flags::empty());
    println!("decoded: {back}");

    // reading bedrock bytes with java flags garbles the tree
    let mangled = Tag::from_bytes(&bedrock, Flags::empty());
    println!(
        "bedrock bytes under java flags: valid={} {mangled}",
        mangled.is_valid()
    );
}
