#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::indices::ParameterIndices;

fn arena_with_indices(text: &str) -> (AutodiffArena, IndicesId) {
    let mut arena = AutodiffArena::new();
    let id = ParameterIndices::create_from_str(&mut arena, text).unwrap();
    (arena, id)
}

#[test]
fn get_records_fields() {
    let (mut arena, indices) = arena_with_indices("MSUS");
    let id = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Vjp, 2, indices, &mut arena);
    let identifier = arena.identifier(id);

    assert_eq!(identifier.kind(), AssociatedFunctionKind::Vjp);
    assert_eq!(identifier.order(), 2);
    assert_eq!(identifier.parameter_indices(), indices);
    assert_eq!(arena.indices(identifier.parameter_indices()).to_string(), "MSUS");
}

#[test]
fn get_always_allocates() {
    let (mut arena, indices) = arena_with_indices("FSS");
    let first = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Jvp, 1, indices, &mut arena);
    let second = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Jvp, 1, indices, &mut arena);

    assert_ne!(first, second);
    assert_eq!(arena.num_identifiers(), 2);
    assert_eq!(arena.identifier(first), arena.identifier(second));
}

#[test]
fn offset_addresses_slot_table() {
    let (mut arena, indices) = arena_with_indices("FSU");
    let cases = [
        (AssociatedFunctionKind::Jvp, 1, 0),
        (AssociatedFunctionKind::Vjp, 1, 1),
        (AssociatedFunctionKind::Jvp, 2, 4),
        (AssociatedFunctionKind::Vjp, 2, 5),
    ];
    for (kind, order, expected) in cases {
        let id = AssociatedFunctionIdentifier::get(kind, order, indices, &mut arena);
        assert_eq!(arena.identifier(id).offset(), expected, "{kind} order {order}");
    }
}

#[test]
fn identifiers_with_different_kinds_differ() {
    let (mut arena, indices) = arena_with_indices("FS");
    let jvp = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Jvp, 1, indices, &mut arena);
    let vjp = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Vjp, 1, indices, &mut arena);

    assert_ne!(arena.identifier(jvp), arena.identifier(vjp));
}

#[test]
#[should_panic(expected = "differentiation order must be at least 1")]
fn order_zero_panics() {
    let (mut arena, indices) = arena_with_indices("FS");
    let _ = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Jvp, 0, indices, &mut arena);
}

#[test]
#[should_panic(expected = "differentiation order 70000 overflows the associated function table")]
fn unaddressable_order_rejected_on_allocation() {
    let (mut arena, indices) = arena_with_indices("FS");
    let _ = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Jvp, 70_000, indices, &mut arena);
}
