use super::*;

#[test]
fn tag_values_in_expected_ranges() {
    assert!((Tag::Int as u8) < 16);
    assert!((Tag::SelfType as u8) < 16);
    assert!((48..80).contains(&(Tag::Function as u8)));
    assert!((48..80).contains(&(Tag::Tuple as u8)));
    assert!((80..96).contains(&(Tag::Named as u8)));
}

#[test]
fn uses_extra_is_correct() {
    assert!(!Tag::Int.uses_extra());
    assert!(!Tag::Named.uses_extra());
    assert!(Tag::Function.uses_extra());
    assert!(Tag::Tuple.uses_extra());
}

#[test]
fn debug_and_display_use_names() {
    assert_eq!(format!("{:?}", Tag::Tuple), "Tag::tuple");
    assert_eq!(Tag::Unit.to_string(), "()");
}
