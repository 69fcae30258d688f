// ============================================================================
// Decimal Vector
// Three-component vector of Decimal values and its algebra
// ============================================================================

use crate::config::Tolerances;
use crate::math;
use crate::numeric::{Decimal, IntoDecimal};
use std::ops::{
    Add, AddAssign, BitOr, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

/// Component selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Storage index of the component.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A 3D vector whose components are [`Decimal`]s.
///
/// Components live in one ordered array and are reached either by name
/// (`x()`, `set_y()`) or by index (`v[2]`). The vector is a plain `Copy`
/// value; compound-assignment operators mutate the receiver and the pure
/// operators return new vectors.
///
/// # Example
/// ```
/// use decimal_number::vector::DecimalVector;
///
/// let a = DecimalVector::new(1, 2, 3);
/// let b = DecimalVector::new(4, 5, 6);
/// assert_eq!((a | b).to_fixed(0), "32");
/// assert_eq!(a ^ b, DecimalVector::new(-3, 6, -3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecimalVector {
    xyz: [Decimal; 3],
}

// ============================================================================
// Named Constants
// ============================================================================

const Z0: Decimal = Decimal::ZERO;
const P1: Decimal = Decimal::ONE;
const N1: Decimal = Decimal::NEGATIVE_ONE;

impl DecimalVector {
    pub const ZERO: Self = Self::from_array([Z0, Z0, Z0]);
    pub const ONE: Self = Self::from_array([P1, P1, P1]);
    pub const UP: Self = Self::from_array([Z0, Z0, P1]);
    pub const DOWN: Self = Self::from_array([Z0, Z0, N1]);
    pub const FORWARD: Self = Self::from_array([P1, Z0, Z0]);
    pub const BACKWARD: Self = Self::from_array([N1, Z0, Z0]);
    pub const RIGHT: Self = Self::from_array([Z0, P1, Z0]);
    pub const LEFT: Self = Self::from_array([Z0, N1, Z0]);
    pub const X_AXIS: Self = Self::from_array([P1, Z0, Z0]);
    pub const Y_AXIS: Self = Self::from_array([Z0, P1, Z0]);
    pub const Z_AXIS: Self = Self::from_array([Z0, Z0, P1]);
}

// ============================================================================
// Construction and Access
// ============================================================================

impl DecimalVector {
    /// Build from any three scalar sources, each promoted with the
    /// [`Decimal`] constructor rules.
    #[inline]
    pub fn new(x: impl IntoDecimal, y: impl IntoDecimal, z: impl IntoDecimal) -> Self {
        Self::from_array([x.into_decimal(), y.into_decimal(), z.into_decimal()])
    }

    #[inline]
    pub const fn from_array(xyz: [Decimal; 3]) -> Self {
        Self { xyz }
    }

    /// All three components set to `value`.
    #[inline]
    pub fn splat(value: impl IntoDecimal) -> Self {
        let value = value.into_decimal();
        Self::from_array([value; 3])
    }

    #[inline]
    pub const fn to_array(self) -> [Decimal; 3] {
        self.xyz
    }

    #[inline]
    pub const fn x(&self) -> Decimal {
        self.xyz[0]
    }

    #[inline]
    pub const fn y(&self) -> Decimal {
        self.xyz[1]
    }

    #[inline]
    pub const fn z(&self) -> Decimal {
        self.xyz[2]
    }

    #[inline]
    pub fn set_x(&mut self, value: impl IntoDecimal) {
        self.xyz[0] = value.into_decimal();
    }

    #[inline]
    pub fn set_y(&mut self, value: impl IntoDecimal) {
        self.xyz[1] = value.into_decimal();
    }

    #[inline]
    pub fn set_z(&mut self, value: impl IntoDecimal) {
        self.xyz[2] = value.into_decimal();
    }

    /// Overwrite all three components.
    pub fn set(&mut self, x: impl IntoDecimal, y: impl IntoDecimal, z: impl IntoDecimal) {
        *self = Self::new(x, y, z);
    }

    /// Component at `index`, or `None` past the third.
    #[inline]
    pub fn component(&self, index: usize) -> Option<Decimal> {
        self.xyz.get(index).copied()
    }

    #[inline]
    pub fn component_mut(&mut self, index: usize) -> Option<&mut Decimal> {
        self.xyz.get_mut(index)
    }

    #[inline]
    pub fn component_for_axis(&self, axis: Axis) -> Decimal {
        self.xyz[axis.index()]
    }

    #[inline]
    pub fn set_component_for_axis(&mut self, axis: Axis, value: impl IntoDecimal) {
        self.xyz[axis.index()] = value.into_decimal();
    }

    /// Apply `f` to every component.
    #[inline]
    pub(crate) fn map(self, f: impl Fn(Decimal) -> Decimal) -> Self {
        let [x, y, z] = self.xyz;
        Self::from_array([f(x), f(y), f(z)])
    }

    /// Combine matching components of two vectors.
    #[inline]
    pub(crate) fn zip_with(self, other: Self, f: impl Fn(Decimal, Decimal) -> Decimal) -> Self {
        let [ax, ay, az] = self.xyz;
        let [bx, by, bz] = other.xyz;
        Self::from_array([f(ax, bx), f(ay, by), f(az, bz)])
    }
}

impl Index<usize> for DecimalVector {
    type Output = Decimal;

    /// # Panics
    /// Panics when `index >= 3`, like slice indexing.
    #[inline]
    fn index(&self, index: usize) -> &Decimal {
        &self.xyz[index]
    }
}

impl IndexMut<usize> for DecimalVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Decimal {
        &mut self.xyz[index]
    }
}

impl From<[Decimal; 3]> for DecimalVector {
    #[inline]
    fn from(xyz: [Decimal; 3]) -> Self {
        Self::from_array(xyz)
    }
}

// ============================================================================
// Products and Distances
// ============================================================================

impl DecimalVector {
    #[inline]
    pub fn dot(&self, other: &Self) -> Decimal {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_array([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }

    /// Scalar triple product `a · (b × c)`.
    pub fn triple(a: &Self, b: &Self, c: &Self) -> Decimal {
        a.x() * (b.y() * c.z() - b.z() * c.y())
            + a.y() * (b.z() * c.x() - b.x() * c.z())
            + a.z() * (b.x() * c.y() - b.y() * c.x())
    }

    pub fn dist_squared(a: &Self, b: &Self) -> Decimal {
        math::square(b.x() - a.x()) + math::square(b.y() - a.y()) + math::square(b.z() - a.z())
    }

    pub fn dist(a: &Self, b: &Self) -> Decimal {
        math::sqrt(Self::dist_squared(a, b))
    }

    /// Squared distance in the XY plane.
    pub fn dist_squared_2d(a: &Self, b: &Self) -> Decimal {
        math::square(b.x() - a.x()) + math::square(b.y() - a.y())
    }

    pub fn dist_2d(a: &Self, b: &Self) -> Decimal {
        math::sqrt(Self::dist_squared_2d(a, b))
    }
}

// ============================================================================
// Magnitude
// ============================================================================

impl DecimalVector {
    #[inline]
    pub fn size_squared(&self) -> Decimal {
        self.dot(self)
    }

    #[inline]
    pub fn size(&self) -> Decimal {
        math::sqrt(self.size_squared())
    }

    #[inline]
    pub fn size_squared_2d(&self) -> Decimal {
        self.x() * self.x() + self.y() * self.y()
    }

    #[inline]
    pub fn size_2d(&self) -> Decimal {
        math::sqrt(self.size_squared_2d())
    }

    #[inline]
    pub fn length(&self) -> Decimal {
        self.size()
    }

    #[inline]
    pub fn squared_length(&self) -> Decimal {
        self.size_squared()
    }
}

// ============================================================================
// Component Queries
// ============================================================================

impl DecimalVector {
    pub fn get_max(&self) -> Decimal {
        math::max3(self.x(), self.y(), self.z())
    }

    pub fn get_min(&self) -> Decimal {
        math::min3(self.x(), self.y(), self.z())
    }

    pub fn get_abs_max(&self) -> Decimal {
        self.get_abs().get_max()
    }

    pub fn get_abs_min(&self) -> Decimal {
        self.get_abs().get_min()
    }

    pub fn get_abs(&self) -> Self {
        self.map(math::abs)
    }

    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_with(*other, math::min)
    }

    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_with(*other, math::max)
    }

    /// Component-wise minimum of two vectors.
    pub fn min(a: &Self, b: &Self) -> Self {
        a.component_min(b)
    }

    /// Component-wise maximum of two vectors.
    pub fn max(a: &Self, b: &Self) -> Self {
        a.component_max(b)
    }

    pub fn min3(a: &Self, b: &Self, c: &Self) -> Self {
        a.component_min(b).component_min(c)
    }

    pub fn max3(a: &Self, b: &Self, c: &Self) -> Self {
        a.component_max(b).component_max(c)
    }

    /// `1` for components `>= 0`, `-1` otherwise.
    pub fn get_sign_vector(&self) -> Self {
        self.map(|c| if c >= Decimal::ZERO { Decimal::ONE } else { Decimal::NEGATIVE_ONE })
    }

    /// Component-wise `1 / c`; zero components map to [`Decimal::MAX`].
    pub fn reciprocal(&self) -> Self {
        self.map(|c| if c.is_zero() { Decimal::MAX } else { Decimal::ONE / c })
    }

    /// Snap each component to the nearest multiple of `grid`.
    pub fn grid_snap(&self, grid: Decimal) -> Self {
        self.map(|c| math::grid_snap(c, grid))
    }

    /// True if any component is an infinity or NaN sentinel.
    pub fn contains_nan(&self) -> bool {
        self.xyz.iter().any(|c| !c.is_finite())
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl DecimalVector {
    /// Every component within `tolerance` of the matching one in `other`.
    pub fn equals(&self, other: &Self, tolerance: Decimal) -> bool {
        self.xyz
            .iter()
            .zip(other.xyz.iter())
            .all(|(a, b)| math::abs(*a - *b) <= tolerance)
    }

    pub fn all_components_equal(&self, tolerance: Decimal) -> bool {
        math::abs(self.x() - self.y()) <= tolerance
            && math::abs(self.x() - self.z()) <= tolerance
            && math::abs(self.y() - self.z()) <= tolerance
    }

    #[inline]
    pub fn is_uniform(&self, tolerance: Decimal) -> bool {
        self.all_components_equal(tolerance)
    }

    pub fn is_nearly_zero(&self, tolerance: Decimal) -> bool {
        self.xyz.iter().all(|c| math::is_nearly_zero(*c, tolerance))
    }

    pub fn is_zero(&self) -> bool {
        self.xyz.iter().all(|c| c.is_zero())
    }

    /// Squared length within `tolerance` of one.
    pub fn is_unit(&self, tolerance: Decimal) -> bool {
        math::abs(Decimal::ONE - self.size_squared()) < tolerance
    }

    pub fn is_normalized(&self) -> bool {
        self.is_normalized_with(&Tolerances::DEFAULT)
    }

    /// [`DecimalVector::is_unit`] at `tolerances.thresh_vector_normalized`.
    pub fn is_normalized_with(&self, tolerances: &Tolerances) -> bool {
        self.is_unit(tolerances.thresh_vector_normalized)
    }
}

// ============================================================================
// Angles
// ============================================================================

impl DecimalVector {
    pub fn radians_to_degrees(radians: &Self) -> Self {
        radians.map(math::radians_to_degrees)
    }

    pub fn degrees_to_radians(degrees: &Self) -> Self {
        degrees.map(math::degrees_to_radians)
    }

    /// Fold each component, read as an angle in degrees, into `(-180, 180]`.
    pub fn unwind_euler(&mut self) {
        *self = self.map(math::unwind_degrees);
    }
}

// ============================================================================
// Operators
// ============================================================================

impl AddAssign for DecimalVector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.zip_with(rhs, |a, b| a + b);
    }
}

impl SubAssign for DecimalVector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.zip_with(rhs, |a, b| a - b);
    }
}

impl MulAssign for DecimalVector {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.zip_with(rhs, |a, b| a * b);
    }
}

impl DivAssign for DecimalVector {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.zip_with(rhs, |a, b| a / b);
    }
}

impl<T: IntoDecimal> MulAssign<T> for DecimalVector {
    #[inline]
    fn mul_assign(&mut self, scale: T) {
        let scale = scale.into_decimal();
        *self = self.map(|c| c * scale);
    }
}

impl<T: IntoDecimal> DivAssign<T> for DecimalVector {
    #[inline]
    fn div_assign(&mut self, scale: T) {
        let scale = scale.into_decimal();
        *self = self.map(|c| c / scale);
    }
}

macro_rules! impl_vector_op {
    ($($trait:ident, $method:ident, $assign:ident);*) => {
        $(
            impl $trait for DecimalVector {
                type Output = DecimalVector;

                #[inline]
                fn $method(self, rhs: DecimalVector) -> DecimalVector {
                    let mut result = self;
                    result.$assign(rhs);
                    result
                }
            }
        )*
    };
}

impl_vector_op!(
    Add, add, add_assign;
    Sub, sub, sub_assign;
    Mul, mul, mul_assign;
    Div, div, div_assign
);

impl<T: IntoDecimal> Mul<T> for DecimalVector {
    type Output = DecimalVector;

    #[inline]
    fn mul(self, scale: T) -> DecimalVector {
        let mut result = self;
        result *= scale.into_decimal();
        result
    }
}

impl<T: IntoDecimal> Div<T> for DecimalVector {
    type Output = DecimalVector;

    #[inline]
    fn div(self, scale: T) -> DecimalVector {
        let mut result = self;
        result /= scale.into_decimal();
        result
    }
}

impl Mul<DecimalVector> for Decimal {
    type Output = DecimalVector;

    #[inline]
    fn mul(self, rhs: DecimalVector) -> DecimalVector {
        rhs * self
    }
}

// Native scalars on the left-hand side.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<DecimalVector> for $t {
                type Output = DecimalVector;

                #[inline]
                fn mul(self, rhs: DecimalVector) -> DecimalVector {
                    rhs * self.into_decimal()
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, u32, i64, u64, usize, f32, f64);

impl Neg for DecimalVector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

/// Dot product.
impl BitOr for DecimalVector {
    type Output = Decimal;

    #[inline]
    fn bitor(self, rhs: Self) -> Decimal {
        self.dot(&rhs)
    }
}

/// Cross product.
impl BitXor for DecimalVector {
    type Output = DecimalVector;

    #[inline]
    fn bitxor(self, rhs: Self) -> DecimalVector {
        self.cross(&rhs)
    }
}

impl std::iter::Sum for DecimalVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}
