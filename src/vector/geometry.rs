// ============================================================================
// Vector Geometry
// Normalization, clamping, projection and basis construction
// ============================================================================
//
// Every normalizing operation scales by `inv_sqrt(size)`, i.e. divides by
// the square-rooted magnitude, so results have unit length to internal
// precision. Operations that guard against a degenerate direction return
// a fallback instead of producing sentinels; the `get_unsafe_*` forms do
// not guard.

use super::DecimalVector;
use crate::config::Tolerances;
use crate::math;
use crate::numeric::Decimal;

// ============================================================================
// Normalization
// ============================================================================

impl DecimalVector {
    /// Scale to unit length in place if `size_squared() > tolerance`.
    ///
    /// Returns `false` and leaves the vector untouched otherwise.
    pub fn normalize(&mut self, tolerance: Decimal) -> bool {
        let square_sum = self.size_squared();
        if square_sum > tolerance {
            *self *= math::inv_sqrt(math::sqrt(square_sum));
            true
        } else {
            false
        }
    }

    /// Unit vector in the same direction, without a zero guard.
    ///
    /// A zero vector yields NaN components.
    pub fn get_unsafe_normal(&self) -> Self {
        *self * math::inv_sqrt(self.size())
    }

    /// Unit vector in the XY plane; Z is zero. No zero guard.
    pub fn get_unsafe_normal_2d(&self) -> Self {
        let scale = math::inv_sqrt(self.size_2d());
        Self::from_array([self.x() * scale, self.y() * scale, Decimal::ZERO])
    }

    /// Unit vector in the same direction.
    ///
    /// - squared length exactly one: returned unchanged
    /// - squared length below `tolerance`: `result_if_zero`
    /// - otherwise: the normalized vector
    pub fn get_safe_normal(&self, tolerance: Decimal, result_if_zero: Self) -> Self {
        let square_sum = self.size_squared();
        if square_sum == Decimal::ONE {
            *self
        } else if square_sum < tolerance {
            result_if_zero
        } else {
            *self * math::inv_sqrt(math::sqrt(square_sum))
        }
    }

    /// [`DecimalVector::get_safe_normal`] restricted to X and Y.
    ///
    /// Z of the result is always zero, including when the XY part already
    /// has unit length.
    pub fn get_safe_normal_2d(&self, tolerance: Decimal, result_if_zero: Self) -> Self {
        let square_sum = self.size_squared_2d();
        if square_sum == Decimal::ONE {
            Self::from_array([self.x(), self.y(), Decimal::ZERO])
        } else if square_sum < tolerance {
            result_if_zero
        } else {
            let scale = math::inv_sqrt(math::sqrt(square_sum));
            Self::from_array([self.x() * scale, self.y() * scale, Decimal::ZERO])
        }
    }

    /// Split into a unit direction and the length.
    ///
    /// The direction is zero when the length is not above `small_number`.
    pub fn to_direction_and_length(&self) -> (Self, Decimal) {
        self.to_direction_and_length_with(&Tolerances::DEFAULT)
    }

    /// [`DecimalVector::to_direction_and_length`] against `tolerances`.
    pub fn to_direction_and_length_with(&self, tolerances: &Tolerances) -> (Self, Decimal) {
        let length = self.size();
        if length > tolerances.small_number {
            (*self * math::inv_sqrt(length), length)
        } else {
            (Self::ZERO, length)
        }
    }

    /// Divide X and Y by Z, setting Z to one.
    pub fn projection(&self) -> Self {
        let rz = Decimal::ONE / self.z();
        Self::from_array([self.x() * rz, self.y() * rz, Decimal::ONE])
    }
}

// ============================================================================
// Bounding and Clamping
// ============================================================================

impl DecimalVector {
    /// Clamp each component into `[-radius, radius]`.
    pub fn bound_to_cube(&self, radius: Decimal) -> Self {
        self.map(|c| math::clamp(c, -radius, radius))
    }

    /// Clamp each component between the matching components of `min` and `max`.
    pub fn bound_to_box(&self, min: &Self, max: &Self) -> Self {
        Self::from_array([
            math::clamp(self.x(), min.x(), max.x()),
            math::clamp(self.y(), min.y(), max.y()),
            math::clamp(self.z(), min.z(), max.z()),
        ])
    }

    /// Rescale so the length lies in `[min, max]`, keeping the direction.
    pub fn get_clamped_to_size(&self, min: Decimal, max: Decimal) -> Self {
        self.get_clamped_to_size_with(min, max, &Tolerances::DEFAULT)
    }

    /// [`DecimalVector::get_clamped_to_size`] with the zero-direction floor
    /// taken from `tolerances.small_number`.
    pub fn get_clamped_to_size_with(
        &self,
        min: Decimal,
        max: Decimal,
        tolerances: &Tolerances,
    ) -> Self {
        let size = self.size();
        let direction = if size > tolerances.small_number {
            *self / size
        } else {
            Self::ZERO
        };
        direction * math::clamp(size, min, max)
    }

    /// XY-only form of [`DecimalVector::get_clamped_to_size`]; Z is kept.
    pub fn get_clamped_to_size_2d(&self, min: Decimal, max: Decimal) -> Self {
        self.get_clamped_to_size_2d_with(min, max, &Tolerances::DEFAULT)
    }

    pub fn get_clamped_to_size_2d_with(
        &self,
        min: Decimal,
        max: Decimal,
        tolerances: &Tolerances,
    ) -> Self {
        let size = self.size_2d();
        let direction = if size > tolerances.small_number {
            *self / size
        } else {
            Self::ZERO
        };
        let size = math::clamp(size, min, max);
        Self::from_array([direction.x() * size, direction.y() * size, self.z()])
    }

    /// Shorten to at most `max_size`; zero when `max_size` is below
    /// `kinda_small_number`.
    pub fn get_clamped_to_max_size(&self, max_size: Decimal) -> Self {
        self.get_clamped_to_max_size_with(max_size, &Tolerances::DEFAULT)
    }

    /// [`DecimalVector::get_clamped_to_max_size`] with the cutoff taken from
    /// `tolerances.kinda_small_number`.
    pub fn get_clamped_to_max_size_with(&self, max_size: Decimal, tolerances: &Tolerances) -> Self {
        if max_size < tolerances.kinda_small_number {
            return Self::ZERO;
        }

        let square_sum = self.size_squared();
        if square_sum > math::square(max_size) {
            *self * (max_size * math::inv_sqrt(math::sqrt(square_sum)))
        } else {
            *self
        }
    }

    /// XY-only form of [`DecimalVector::get_clamped_to_max_size`]; Z is kept.
    pub fn get_clamped_to_max_size_2d(&self, max_size: Decimal) -> Self {
        self.get_clamped_to_max_size_2d_with(max_size, &Tolerances::DEFAULT)
    }

    pub fn get_clamped_to_max_size_2d_with(
        &self,
        max_size: Decimal,
        tolerances: &Tolerances,
    ) -> Self {
        if max_size < tolerances.kinda_small_number {
            return Self::from_array([Decimal::ZERO, Decimal::ZERO, self.z()]);
        }

        let square_sum = self.size_squared_2d();
        if square_sum > math::square(max_size) {
            let scale = max_size * math::inv_sqrt(math::sqrt(square_sum));
            Self::from_array([self.x() * scale, self.y() * scale, self.z()])
        } else {
            *self
        }
    }

    /// Add `v`, then bound the sum to the cube of half-width `radius`.
    pub fn add_bounded(&mut self, v: &Self, radius: Decimal) {
        *self = (*self + *v).bound_to_cube(radius);
    }
}

// ============================================================================
// Projection and Reflection
// ============================================================================

impl DecimalVector {
    /// Reflect across the plane with unit normal `mirror_normal`.
    pub fn mirror_by_vector(&self, mirror_normal: &Self) -> Self {
        *self - *mirror_normal * (Decimal::TWO * self.dot(mirror_normal))
    }

    /// Projection onto `target`, of any length.
    pub fn project_on_to(&self, target: &Self) -> Self {
        *target * (self.dot(target) / target.dot(target))
    }

    /// Projection onto a unit-length `normal`.
    pub fn project_on_to_normal(&self, normal: &Self) -> Self {
        *normal * self.dot(normal)
    }

    /// Cosine of the angle between the XY projections of two vectors.
    pub fn cosine_angle_2d(&self, other: &Self) -> Decimal {
        self.cosine_angle_2d_with(other, &Tolerances::DEFAULT)
    }

    pub fn cosine_angle_2d_with(&self, other: &Self, tolerances: &Tolerances) -> Decimal {
        let small = tolerances.small_number;
        let mut a = Self::from_array([self.x(), self.y(), Decimal::ZERO]);
        let mut b = Self::from_array([other.x(), other.y(), Decimal::ZERO]);
        a.normalize(small);
        b.normalize(small);
        a.dot(&b)
    }

    /// Signed angle in radians of the XY projection from the X axis.
    pub fn heading_angle(&self) -> Decimal {
        self.heading_angle_with(&Tolerances::DEFAULT)
    }

    pub fn heading_angle_with(&self, tolerances: &Tolerances) -> Decimal {
        let planar = Self::from_array([self.x(), self.y(), Decimal::ZERO])
            .get_safe_normal(tolerances.small_number, Self::ZERO);
        let angle = math::acos(planar.x());
        if planar.y() < Decimal::ZERO {
            -angle
        } else {
            angle
        }
    }

    /// Two unit vectors orthogonal to this one (and to each other when this
    /// one has unit length).
    ///
    /// The seed axis is X when Z is the strictly dominant component and Z
    /// otherwise, so the seed is never close to parallel.
    pub fn find_best_axis_vectors(&self) -> (Self, Self) {
        self.find_best_axis_vectors_with(&Tolerances::DEFAULT)
    }

    pub fn find_best_axis_vectors_with(&self, tolerances: &Tolerances) -> (Self, Self) {
        let [nx, ny, nz] = self.get_abs().to_array();
        let seed = if nz > nx && nz > ny {
            Self::X_AXIS
        } else {
            Self::Z_AXIS
        };

        let axis1 =
            (seed - *self * seed.dot(self)).get_safe_normal(tolerances.small_number, Self::ZERO);
        let axis2 = axis1 ^ *self;
        (axis1, axis2)
    }

    /// Orthogonalize an X/Y/Z frame against the fixed Z axis, then normalize.
    ///
    /// X and Y lose their components along Z. An axis whose squared length
    /// falls below `delta²` is rebuilt from the cross product of the other
    /// two.
    pub fn create_orthonormal_basis(x_axis: &mut Self, y_axis: &mut Self, z_axis: &mut Self) {
        Self::create_orthonormal_basis_with(x_axis, y_axis, z_axis, &Tolerances::DEFAULT);
    }

    /// [`DecimalVector::create_orthonormal_basis`] with the degenerate-axis
    /// length and normalization floor taken from `tolerances`.
    pub fn create_orthonormal_basis_with(
        x_axis: &mut Self,
        y_axis: &mut Self,
        z_axis: &mut Self,
        tolerances: &Tolerances,
    ) {
        let z_square = z_axis.dot(z_axis);

        *x_axis -= x_axis.dot(z_axis) / z_square * *z_axis;
        *y_axis -= y_axis.dot(z_axis) / z_square * *z_axis;

        let degenerate = math::square(tolerances.delta);
        if x_axis.size_squared() < degenerate {
            *x_axis = *y_axis ^ *z_axis;
        }
        if y_axis.size_squared() < degenerate {
            *y_axis = *x_axis ^ *z_axis;
        }

        x_axis.normalize(tolerances.small_number);
        y_axis.normalize(tolerances.small_number);
        z_axis.normalize(tolerances.small_number);
    }
}

// ============================================================================
// Points and Planes
// ============================================================================

impl DecimalVector {
    /// Every component differs by less than `thresh_points_are_same`.
    pub fn points_are_same(p: &Self, q: &Self) -> bool {
        Self::points_are_same_with(p, q, &Tolerances::DEFAULT)
    }

    pub fn points_are_same_with(p: &Self, q: &Self, tolerances: &Tolerances) -> bool {
        let threshold = tolerances.thresh_points_are_same;
        (*p - *q)
            .to_array()
            .iter()
            .all(|delta| *delta > -threshold && *delta < threshold)
    }

    /// Every component differs by less than `dist`.
    pub fn points_are_near(p: &Self, q: &Self, dist: Decimal) -> bool {
        (*p - *q).to_array().iter().all(|delta| math::abs(*delta) < dist)
    }

    /// Signed distance from `point` to the plane through `plane_base`.
    pub fn point_plane_dist(point: &Self, plane_base: &Self, plane_normal: &Self) -> Decimal {
        (*point - *plane_base).dot(plane_normal)
    }

    /// Closest point on the plane through `plane_base` with `plane_normal`.
    pub fn point_plane_project(point: &Self, plane_base: &Self, plane_normal: &Self) -> Self {
        *point - Self::point_plane_dist(point, plane_base, plane_normal) * *plane_normal
    }

    /// Closest point on the plane through `a`, `b` and `c`.
    ///
    /// The plane normal is `(b - a) × (c - a)`, safely normalized; collinear
    /// points give a zero normal and `point` comes back unchanged.
    pub fn point_plane_project_from_points(point: &Self, a: &Self, b: &Self, c: &Self) -> Self {
        Self::point_plane_project_from_points_with(point, a, b, c, &Tolerances::DEFAULT)
    }

    pub fn point_plane_project_from_points_with(
        point: &Self,
        a: &Self,
        b: &Self,
        c: &Self,
        tolerances: &Tolerances,
    ) -> Self {
        let normal = ((*b - *a) ^ (*c - *a)).get_safe_normal(tolerances.small_number, Self::ZERO);
        Self::point_plane_project(point, a, &normal)
    }

    /// `v` with its component along `plane_normal` removed.
    pub fn vector_plane_project(v: &Self, plane_normal: &Self) -> Self {
        *v - v.project_on_to_normal(plane_normal)
    }

    /// Push-out distance of a box with half-extent `size` along `normal`.
    pub fn box_push_out(normal: &Self, size: &Self) -> Decimal {
        (*normal * *size).to_array().into_iter().map(math::abs).sum()
    }
}

// ============================================================================
// Normal Classification
// ============================================================================

impl DecimalVector {
    /// `|n1 · n2| >= threshold`
    pub fn parallel(normal1: &Self, normal2: &Self, threshold: Decimal) -> bool {
        math::abs(normal1.dot(normal2)) >= threshold
    }

    /// Parallel and pointing the same way: `n1 · n2 >= threshold`.
    pub fn coincident(normal1: &Self, normal2: &Self, threshold: Decimal) -> bool {
        normal1.dot(normal2) >= threshold
    }

    /// `|n1 · n2| <= threshold`
    pub fn orthogonal(normal1: &Self, normal2: &Self, threshold: Decimal) -> bool {
        math::abs(normal1.dot(normal2)) <= threshold
    }

    /// Two planes are parallel and `base2` lies within
    /// `thresh_point_on_plane` of the first.
    pub fn coplanar(
        base1: &Self,
        normal1: &Self,
        base2: &Self,
        normal2: &Self,
        threshold: Decimal,
    ) -> bool {
        let tolerances = Tolerances {
            thresh_normals_are_parallel: threshold,
            ..Tolerances::DEFAULT
        };
        Self::coplanar_with(base1, normal1, base2, normal2, &tolerances)
    }

    /// [`DecimalVector::coplanar`] with both the parallel cosine and the
    /// on-plane distance taken from `tolerances`.
    pub fn coplanar_with(
        base1: &Self,
        normal1: &Self,
        base2: &Self,
        normal2: &Self,
        tolerances: &Tolerances,
    ) -> bool {
        Self::parallel(normal1, normal2, tolerances.thresh_normals_are_parallel)
            && math::abs(Self::point_plane_dist(base2, base1, normal1))
                <= tolerances.thresh_point_on_plane
    }
}
