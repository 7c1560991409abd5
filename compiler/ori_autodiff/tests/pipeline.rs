//! End-to-end flow: function shape, parameter indices, lowered bits, and
//! associated function identifiers, through the public API only.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ori_autodiff::{
    AssociatedFunctionIdentifier, AssociatedFunctionKind, AutodiffArena, AutodiffMode,
    Differentiability, FunctionShapes, IndicesPair, ParameterIndices,
};
use ori_types::{Idx, Pool};
use pretty_assertions::assert_eq;

#[test]
fn method_from_attribute_to_identifier() {
    ori_autodiff::init_tracing();

    let mut pool = Pool::new();
    let vector = pool.named("Vector");
    let pair = pool.tuple(&[Idx::FLOAT, Idx::FLOAT]);
    let method = pool.method(vector, &[Idx::FLOAT, pair], Idx::FLOAT);

    let mut arena = AutodiffArena::new();
    let indices = ParameterIndices::create(&mut arena, &pool, method, true, false);
    arena.indices_mut(indices).set_non_self_parameter(1);
    arena.indices_mut(indices).set_self_parameter();
    assert_eq!(arena.indices(indices).to_string(), "MUSS");

    let lowered = arena.indices(indices).lowered(&pool, method, false);
    assert_eq!(lowered.to_string(), "0111");

    let lowered = IndicesPair::from_bits(0, lowered);
    assert!(!lowered.is_wrt_parameter(0));
    assert!(lowered.is_wrt_parameter(3));

    let vjp = AssociatedFunctionIdentifier::get(AssociatedFunctionKind::Vjp, 1, indices, &mut arena);
    let identifier = arena.identifier(vjp);
    assert_eq!(identifier.offset(), 1);
    assert_eq!(
        arena.indices(identifier.parameter_indices()).subset_parameter_types(&pool, method, false),
        vec![vector, pair]
    );
}

#[test]
fn attribute_text_drives_lowering() {
    let mut pool = Pool::new();
    let f = pool.function(&[Idx::INT, Idx::UNIT, Idx::FLOAT], Idx::FLOAT);

    let mut arena = AutodiffArena::new();
    let id = ParameterIndices::create_from_str(&mut arena, "FSSS").unwrap();
    // `()` has no flattened components.
    assert_eq!(arena.indices(id).lowered(&pool, f, false).to_string(), "11");
    assert!("FSS?".parse::<ParameterIndices>().is_err());
}

#[test]
fn differentiability_of_curried_method() {
    let mut pool = Pool::new();
    let receiver = pool.named("Model");
    let method = pool.method(receiver, &[Idx::FLOAT, Idx::FLOAT], Idx::FLOAT);
    let free = pool.function(&[Idx::FLOAT], Idx::FLOAT);

    let on_method = Differentiability::for_function(AutodiffMode::Reverse, &pool, method);
    assert!(on_method.wrt_self());
    assert_eq!(on_method.parameter_indices().to_string(), "11");
    assert_eq!(on_method.result_indices().to_string(), "1");

    let on_free = Differentiability::for_function(AutodiffMode::Forward, &pool, free);
    assert!(!on_free.wrt_self());
    assert_eq!(on_free.mode(), AutodiffMode::Forward);
}

// -- A host with its own type representation --

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Shape {
    Leaf,
    Pair,
    /// `(Leaf, Pair, Leaf) -> Leaf`
    Func,
}

struct Toy;

impl FunctionShapes for Toy {
    type Ty = Shape;

    fn num_params(&self, func: Shape) -> usize {
        match func {
            Shape::Func => 3,
            _ => 0,
        }
    }

    fn param_type(&self, _func: Shape, index: usize) -> Shape {
        if index == 1 {
            Shape::Pair
        } else {
            Shape::Leaf
        }
    }

    fn curried_result(&self, _func: Shape) -> Option<Shape> {
        None
    }

    fn has_self_param(&self, _func: Shape) -> bool {
        false
    }

    fn tuple_elements(&self, ty: Shape) -> Option<Vec<Shape>> {
        (ty == Shape::Pair).then(|| vec![Shape::Leaf, Shape::Leaf])
    }
}

#[test]
fn custom_shapes_host() {
    let indices = ParameterIndices::for_function(&Toy, Shape::Func, false, true);
    assert_eq!(indices.to_string(), "FSSS");
    assert_eq!(indices.lowered(&Toy, Shape::Func, false).len(), 4);
    assert_eq!(
        indices.subset_parameter_types(&Toy, Shape::Func, false),
        vec![Shape::Leaf, Shape::Pair, Shape::Leaf]
    );
}
