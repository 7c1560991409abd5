use super::*;

#[test]
fn raw_values_are_slot_positions() {
    assert_eq!(AssociatedFunctionKind::Jvp.raw_value(), 0);
    assert_eq!(AssociatedFunctionKind::Vjp.raw_value(), 1);
    assert_eq!(AssociatedFunctionKind::COUNT, 2);
}

#[test]
fn two_slots_per_order() {
    assert_eq!(num_associated_functions(1), 2);
    assert_eq!(num_associated_functions(2), 4);
    assert_eq!(num_associated_functions(3), 6);
}

#[test]
fn offsets_for_first_orders() {
    use AssociatedFunctionKind::{Jvp, Vjp};

    assert_eq!(associated_function_offset(1, Jvp), 0);
    assert_eq!(associated_function_offset(1, Vjp), 1);
    assert_eq!(associated_function_offset(2, Jvp), 4);
    assert_eq!(associated_function_offset(2, Vjp), 5);
    assert_eq!(associated_function_offset(3, Jvp), 12);
}

#[test]
#[should_panic(expected = "differentiation order must be at least 1")]
fn order_zero_panics() {
    let _ = associated_function_offset(0, AssociatedFunctionKind::Jvp);
}

#[test]
fn parse_kind_names() {
    assert_eq!("jvp".parse::<AssociatedFunctionKind>(), Ok(AssociatedFunctionKind::Jvp));
    assert_eq!("vjp".parse::<AssociatedFunctionKind>(), Ok(AssociatedFunctionKind::Vjp));
    assert_eq!(
        "JVP".parse::<AssociatedFunctionKind>(),
        Err(ParseKindError("JVP".to_owned()))
    );
}

#[test]
fn display_matches_name() {
    for kind in AssociatedFunctionKind::ALL {
        assert_eq!(kind.to_string(), kind.name());
        assert_eq!(kind.name().parse::<AssociatedFunctionKind>(), Ok(kind));
    }
}

#[test]
fn largest_addressable_order() {
    use AssociatedFunctionKind::{Jvp, Vjp};

    assert_eq!(associated_function_offset(46_341, Jvp), 4_294_883_880);
    assert_eq!(associated_function_offset(46_341, Vjp), 4_294_883_881);
    assert_eq!(checked_offset(46_342, Jvp), None);
    assert_eq!(checked_offset(0, Vjp), None);
}

#[test]
#[should_panic(expected = "differentiation order 70000 overflows the associated function table")]
fn offset_overflow_panics() {
    let _ = associated_function_offset(70_000, AssociatedFunctionKind::Vjp);
}

#[test]
#[should_panic(expected = "overflows the associated function table")]
fn slot_count_overflow_panics() {
    let _ = num_associated_functions(1 << 31);
}
