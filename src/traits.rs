use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as numeric arguments.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point arguments.
///
/// Required by everything in this crate that needs `sqrt`, `exp`, `ln`,
/// trigonometric functions and IEEE constants. Covers `f32` and `f64`;
/// with the `libm` feature the methods resolve in no-std builds too.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
