//! Function shape adapter.
//!
//! The differentiation machinery never inspects types directly; it goes
//! through [`FunctionShapes`], which exposes exactly the structure it needs:
//! parameter lists, the curried-method wrapper, and tuple elements.
//!
//! A curried method `(Self) -> (A, B) -> R` is a function with a single
//! receiver parameter whose result is the inner function `(A, B) -> R`.
//! [`unwrap_self_parameter`] strips that wrapper.

use std::fmt;

use ori_types::{Idx, Pool, Tag};

/// Read-only view of function and tuple structure.
///
/// Implemented by the type pool; tests and other hosts can implement it
/// over their own type representation.
pub trait FunctionShapes {
    /// Type handle. Cheap to copy; `Debug` is used for log output.
    type Ty: Copy + fmt::Debug;

    /// Number of parameters in the first parameter list of `func`.
    fn num_params(&self, func: Self::Ty) -> usize;

    /// Declared type of parameter `index` of `func`.
    fn param_type(&self, func: Self::Ty, index: usize) -> Self::Ty;

    /// The result of `func` if it is itself a function type.
    fn curried_result(&self, func: Self::Ty) -> Option<Self::Ty>;

    /// Whether `func` is flagged as a curried method over a receiver.
    fn has_self_param(&self, func: Self::Ty) -> bool;

    /// Element types if `ty` is a tuple type, `None` for any other type.
    fn tuple_elements(&self, ty: Self::Ty) -> Option<Vec<Self::Ty>>;
}

/// If `is_method`, returns the non-self part of `func`
/// (`(Self) -> (A, B) -> R` becomes `(A, B) -> R`); otherwise `func`.
///
/// # Panics
///
/// When `is_method` is asserted but `func` is not a single-parameter
/// function returning a function. This is a compiler-internal contract.
pub fn unwrap_self_parameter<S: FunctionShapes>(shapes: &S, func: S::Ty, is_method: bool) -> S::Ty {
    if !is_method {
        return func;
    }
    let num_params = shapes.num_params(func);
    assert!(
        num_params == 1,
        "unexpected number of parameters for method {func:?}: expected 1 (the receiver), found {num_params}"
    );
    shapes
        .curried_result(func)
        .unwrap_or_else(|| panic!("method {func:?} does not return its inner function type"))
}

/// Type of the receiver of a curried method (its single outer parameter).
pub fn receiver_type<S: FunctionShapes>(shapes: &S, func: S::Ty) -> S::Ty {
    shapes.param_type(func, 0)
}

/// All parameter types of the first parameter list of `func`.
pub fn param_types<S: FunctionShapes>(shapes: &S, func: S::Ty) -> Vec<S::Ty> {
    (0..shapes.num_params(func))
        .map(|i| shapes.param_type(func, i))
        .collect()
}

impl FunctionShapes for Pool {
    type Ty = Idx;

    fn num_params(&self, func: Idx) -> usize {
        self.function_param_count(func)
    }

    fn param_type(&self, func: Idx, index: usize) -> Idx {
        self.function_param(func, index)
    }

    fn curried_result(&self, func: Idx) -> Option<Idx> {
        let ret = self.function_return(func);
        self.is_function(ret).then_some(ret)
    }

    fn has_self_param(&self, func: Idx) -> bool {
        self.function_flags(func).has_self_param()
    }

    fn tuple_elements(&self, ty: Idx) -> Option<Vec<Idx>> {
        match self.tag(ty) {
            Tag::Tuple => Some(self.tuple_elems(ty)),
            // `()` is the empty tuple: it flattens to nothing.
            Tag::Unit => Some(Vec::new()),
            _ => None,
        }
    }
}
