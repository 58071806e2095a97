use std::fmt;
use std::ops::{ Index, IndexMut, Mul, MulAssign };

use crate::feq;
use crate::vector::Vector4D;

/// A row-major matrix of `R` rows and `C` columns.
///
/// The 4x4 instantiation, `Matrix4D`, is the one used by the rest of the
/// tracer: it encodes affine transformations of points and vectors
/// (`w` components of `1.0` and `0.0`, respectively). Smaller square
/// matrices show up as submatrices during cofactor expansion.
///
/// Determinants, minors and cofactors live on the `Determinant` trait, which
/// is implemented for square matrices up to 4x4. Inversion is built on top of
/// it; see `inverse` for how singular matrices are handled.
///
/// # Examples
///
/// ```
/// # use visibility_tracer::matrix::{ Matrix4D, Determinant };
/// let mat = Matrix4D::identity();
/// assert_eq!(mat.determinant(), 1.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[f64; C]; R],
}

/// The 4x4 matrix used for every scene transform.
pub type Matrix4D = Matrix<4, 4>;

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Matrices are compared element-wise within `FEQ_EPSILON`.
impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.data.iter().flatten()
            .zip(other.data.iter().flatten())
            .all(|(x, y)| feq(*x, *y))
    }
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Creates a matrix with every element set to `0.0`.
    pub fn zero() -> Self {
        Matrix { data: [[0.0; C]; R] }
    }

    pub fn from_rows(data: [[f64; C]; R]) -> Self {
        Matrix { data }
    }

    pub fn rows(&self) -> usize {
        R
    }

    pub fn cols(&self) -> usize {
        C
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Produces the transpose of a matrix, returning a new matrix.
    ///
    /// ```latex
    /// A^T_{ij} = A_{ji}
    /// ```
    pub fn transposition(&self) -> Matrix<C, R> {
        let mut out = Matrix::<C, R>::zero();
        for r in 0..R {
            for c in 0..C {
                out[(c, r)] = self[(r, c)];
            }
        }

        out
    }

    /// Returns the submatrix with `row` and `col` removed.
    ///
    /// The output dimensions must be exactly one less than the input's in
    /// each direction. Given this 3x3 matrix:
    ///
    /// ```text
    /// [
    ///     1.0, 0.0, 2.0,
    ///     3.0, 1.0, 0.0,
    ///     1.0, 1.0, 1.0
    /// ]
    /// ```
    ///
    /// the submatrix for `row == 1`, `col == 2` is:
    ///
    /// ```text
    /// [
    ///     1.0, 0.0,
    ///     1.0, 1.0
    /// ]
    /// ```
    pub fn submatrix<const SR: usize, const SC: usize>(&self, row: usize, col: usize)
        -> Matrix<SR, SC> {
        assert!(SR + 1 == R && SC + 1 == C,
            "submatrix must drop exactly one row and one column");

        let mut out = Matrix::<SR, SC>::zero();
        for (r, src) in (0..R).filter(|&r| r != row).enumerate() {
            for (c, src_c) in (0..C).filter(|&c| c != col).enumerate() {
                out[(r, c)] = self[(src, src_c)];
            }
        }

        out
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Instantiates an NxN identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..N {
            out[(i, i)] = 1.0;
        }

        out
    }

    /// Transposes a square matrix in-place.
    ///
    /// See `transposition` for the copying version.
    pub fn transpose(&mut self) {
        for r in 0..N {
            for c in (r + 1)..N {
                let tmp = self[(r, c)];
                self[(r, c)] = self[(c, r)];
                self[(c, r)] = tmp;
            }
        }
    }
}

/// Determinant-related operations on square matrices.
///
/// Determinants recurse by cofactor expansion along row 0, bottoming out in
/// closed forms for 1x1 and 2x2 matrices.
pub trait Determinant {
    fn determinant(&self) -> f64;

    /// The determinant of the submatrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> f64;

    /// The minor, negated when `row + col` is odd.
    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let m = self.minor(row, col);
        m * if (row + col) % 2 == 0 { 1.0 } else { -1.0 }
    }

    /// Exact comparison against zero: near-singular matrices count as
    /// invertible.
    fn invertible(&self) -> bool {
        self.determinant() != 0.0
    }
}

impl Determinant for Matrix<1, 1> {
    fn determinant(&self) -> f64 {
        self[(0, 0)]
    }

    // Removing the only row and column leaves the empty matrix.
    fn minor(&self, _row: usize, _col: usize) -> f64 {
        1.0
    }
}

impl Determinant for Matrix<2, 2> {
    fn determinant(&self) -> f64 {
        self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)]
    }

    fn minor(&self, row: usize, col: usize) -> f64 {
        self[(1 - row, 1 - col)]
    }
}

macro_rules! impl_cofactor_expansion {
    ($n:literal, $sub:literal) => {
        impl Determinant for Matrix<$n, $n> {
            fn determinant(&self) -> f64 {
                (0..$n).map(|c| self[(0, c)] * self.cofactor(0, c)).sum()
            }

            fn minor(&self, row: usize, col: usize) -> f64 {
                self.submatrix::<$sub, $sub>(row, col).determinant()
            }
        }
    };
}

impl_cofactor_expansion!(3, 2);
impl_cofactor_expansion!(4, 3);

impl<const N: usize> Matrix<N, N> where Self: Determinant {
    /// Calculates the inverse of a matrix, if it exists.
    ///
    /// Returns `None` when the determinant is exactly zero. Otherwise each
    /// element is `inverse(c, r) = cofactor(r, c) / determinant`, which folds
    /// the adjugate's transpose into the indexing.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let mut inv = Self::zero();
        for r in 0..N {
            for c in 0..N {
                inv[(c, r)] = self.cofactor(r, c) / det;
            }
        }

        Some(inv)
    }

    /// Calculates the inverse of a matrix, substituting the identity for a
    /// singular matrix.
    ///
    /// The substitution is silent. Callers that must detect singularity
    /// should check `invertible` or use `try_inverse` instead.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(Self::identity)
    }
}

impl Matrix4D {
    /// Instantiates a translation matrix, offsetting points by `x`, `y` and
    /// `z`. Vectors are unaffected.
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix4D {
        let mut trans = Self::identity();
        trans[(0, 3)] = x;
        trans[(1, 3)] = y;
        trans[(2, 3)] = z;

        trans
    }

    /// A translation by the `x`, `y` and `z` of `v`; `w` is ignored.
    pub fn translation_of(v: Vector4D) -> Matrix4D {
        Self::translation(v.x, v.y, v.z)
    }

    pub fn translation_splat(a: f64) -> Matrix4D {
        Self::translation(a, a, a)
    }

    /// Instantiates a scaling matrix along the X, Y and Z axes.
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4D {
        let mut scale = Self::identity();
        scale[(0, 0)] = x;
        scale[(1, 1)] = y;
        scale[(2, 2)] = z;

        scale
    }

    /// A scaling by the `x`, `y` and `z` of `v`; `w` is ignored.
    pub fn scaling_of(v: Vector4D) -> Matrix4D {
        Self::scaling(v.x, v.y, v.z)
    }

    pub fn scaling_splat(a: f64) -> Matrix4D {
        Self::scaling(a, a, a)
    }

    /// Rotation about the X axis by `r` radians.
    ///
    /// ```
    /// # use visibility_tracer::vector::Vector4D;
    /// # use visibility_tracer::matrix::Matrix4D;
    /// let point = Vector4D::point(0.0, 1.0, 0.0);
    /// let m = Matrix4D::rotation_x(std::f64::consts::PI / 2.0);
    /// assert_eq!(m * point, Vector4D::point(0.0, 0.0, 1.0));
    /// ```
    pub fn rotation_x(r: f64) -> Matrix4D {
        let mut rotate = Self::identity();
        rotate[(1, 1)] =  r.cos();
        rotate[(1, 2)] = -r.sin();
        rotate[(2, 1)] =  r.sin();
        rotate[(2, 2)] =  r.cos();

        rotate
    }

    /// Rotation about the Y axis by `r` radians.
    pub fn rotation_y(r: f64) -> Matrix4D {
        let mut rotate = Self::identity();
        rotate[(0, 0)] =  r.cos();
        rotate[(0, 2)] =  r.sin();
        rotate[(2, 0)] = -r.sin();
        rotate[(2, 2)] =  r.cos();

        rotate
    }

    /// Rotation about the Z axis by `r` radians.
    pub fn rotation_z(r: f64) -> Matrix4D {
        let mut rotate = Self::identity();
        rotate[(0, 0)] =  r.cos();
        rotate[(0, 1)] = -r.sin();
        rotate[(1, 0)] =  r.sin();
        rotate[(1, 1)] =  r.cos();

        rotate
    }

    /// Instantiates a shearing matrix.
    ///
    /// Each parameter moves one axis in proportion to another; `xy` moves `x`
    /// in proportion to `y`, and so on.
    ///
    /// ```
    /// # use visibility_tracer::vector::Vector4D;
    /// # use visibility_tracer::matrix::Matrix4D;
    /// let point = Vector4D::point(2.0, 3.0, 4.0);
    /// let m = Matrix4D::shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// assert_eq!(m * point, Vector4D::point(5.0, 3.0, 4.0));
    /// ```
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64)
        -> Matrix4D {
        let mut shear = Self::identity();
        shear[(0, 1)] = xy;
        shear[(0, 2)] = xz;
        shear[(1, 0)] = yx;
        shear[(1, 2)] = yz;
        shear[(2, 0)] = zx;
        shear[(2, 1)] = zy;

        shear
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix<R, C> {
    fn from(data: [[f64; C]; R]) -> Self {
        Matrix { data }
    }
}

impl From<[f64; 16]> for Matrix4D {
    fn from(flat: [f64; 16]) -> Matrix4D {
        let mut out = Matrix4D::zero();
        for (i, v) in flat.iter().enumerate() {
            out[(i / 4, i % 4)] = *v;
        }

        out
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index.0][index.1]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index.0][index.1]
    }
}

/// Multiplication between two matrices.
///
/// Not commutative: `A * B` is not necessarily `B * A`.
///
/// ```
/// # use visibility_tracer::matrix::Matrix4D;
/// let m1 = Matrix4D::scaling(2.0, 3.0, 4.0);
/// let m2 = Matrix4D::scaling(4.0, 3.0, 2.0);
/// assert_eq!(m1 * m2, Matrix4D::scaling(8.0, 9.0, 8.0));
/// ```
impl<const R: usize, const K: usize, const C: usize> Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, other: Matrix<K, C>) -> Matrix<R, C> {
        let mut res = Matrix::<R, C>::zero();

        for r in 0..R {
            for c in 0..C {
                res[(r, c)] = (0..K).map(|k| self[(r, k)] * other[(k, c)]).sum();
            }
        }

        res
    }
}

impl<const N: usize> MulAssign<Matrix<N, N>> for Matrix<N, N> {
    fn mul_assign(&mut self, other: Matrix<N, N>) {
        *self = *self * other;
    }
}

/// Multiplication between a 4x4 matrix and a `Vector4D`, with the vector on
/// the right as a 4x1 column.
///
/// ```
/// # use visibility_tracer::vector::Vector4D;
/// # use visibility_tracer::matrix::Matrix4D;
/// let v = Vector4D::vector(1.0, 4.0, 5.0);
/// let m = Matrix4D::scaling(2.0, 2.0, 2.0);
/// assert_eq!(m * v, Vector4D::vector(2.0, 8.0, 10.0));
/// ```
impl Mul<Vector4D> for Matrix4D {
    type Output = Vector4D;

    fn mul(self, other: Vector4D) -> Vector4D {
        let mut buf = [0.0; 4];

        for (r, out) in buf.iter_mut().enumerate() {
            *out = self[(r, 0)] * other.x
                + self[(r, 1)] * other.y
                + self[(r, 2)] * other.z
                + self[(r, 3)] * other.w;
        }

        Vector4D::tuple(buf[0], buf[1], buf[2], buf[3])
    }
}

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            write!(f, "|")?;
            for c in 0..C {
                write!(f, " {} |", self[(r, c)])?;
            }

            // No newline after the final row
            if r + 1 != R {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[test]
fn identity() {
    let i = Matrix4D::identity();
    let a: Matrix4D = [ 0.0, 1.0,  2.0,  4.0,
                        1.0, 2.0,  4.0,  8.0,
                        2.0, 4.0,  8.0, 16.0,
                        4.0, 8.0, 16.0, 32.0, ].into();

    assert_eq!(i * a, a);
    assert_eq!(a * i, a);
    assert_eq!(Matrix::<2, 2>::identity(), Matrix::from([[1.0, 0.0], [0.0, 1.0]]));
}

#[test]
fn get_and_set() {
    let mut m: Matrix<2, 2> = [[1.0, 2.0], [3.0, 4.0]].into();

    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(1, 0), 3.0);

    m.set(0, 0, 5.0);
    assert_eq!(m.get(0, 0), 5.0);
    assert_eq!(m.get(1, 1), 4.0);

    m[(0, 0)] = -2.0;
    assert_eq!(m[(0, 0)], -2.0);
    assert_eq!((m.rows(), m.cols()), (2, 2));
}

#[test]
fn approximate_equality() {
    let m1: Matrix<2, 2> = [[0.0, 0.0], [1.0, 1.0]].into();
    let m2: Matrix<2, 2> = [[0.0, 0.000001], [1.0, 1.0]].into();
    let m3: Matrix<2, 2> = [[1.0, 1.0], [2.0, 3.0]].into();

    assert_eq!(m1, m2);
    assert_ne!(m1, m3);
}

#[test]
fn transpose() {
     let a: Matrix4D = [ 0.0, 9.0, 3.0, 0.0,
                         9.0, 8.0, 0.0, 8.0,
                         1.0, 8.0, 5.0, 3.0,
                         0.0, 0.0, 5.0, 8.0, ].into();

     let t: Matrix4D = [ 0.0, 9.0, 1.0, 0.0,
                         9.0, 8.0, 8.0, 0.0,
                         3.0, 0.0, 5.0, 5.0,
                         0.0, 8.0, 3.0, 8.0, ].into();

     assert_eq!(t, a.transposition());

     let mut b = a;
     b.transpose();
     assert_eq!(b, t);
}

#[test]
fn transpose_rectangular() {
    let a: Matrix<2, 3> = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into();
    let t: Matrix<3, 2> = [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]].into();

    assert_eq!(a.transposition(), t);
}

#[test]
fn rectangular_submatrix() {
    let a: Matrix<2, 3> = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into();
    let s: Matrix<1, 2> = [[1.0, 3.0]].into();

    assert_eq!(a.submatrix::<1, 2>(1, 1), s);
}

#[test]
fn mat3_submatrix() {
    let a: Matrix<3, 3> = [[  1.0, 5.0,  0.0 ],
                           [ -3.0, 2.0,  7.0 ],
                           [  0.0, 6.0, -3.0 ]].into();

    let s: Matrix<2, 2> = [[ -3.0, 2.0 ],
                           [  0.0, 6.0 ]].into();

    assert_eq!(a.submatrix::<2, 2>(0, 2), s);
}

#[test]
fn mat4_submatrix() {
     let a: Matrix4D = [ -6.0, 1.0,  1.0, 6.0,
                         -8.0, 5.0,  8.0, 6.0,
                         -1.0, 0.0,  8.0, 2.0,
                         -7.0, 1.0, -1.0, 1.0, ].into();

     let s: Matrix<3, 3> = [[ -6.0,  1.0, 6.0 ],
                            [ -8.0,  8.0, 6.0 ],
                            [ -7.0, -1.0, 1.0 ]].into();

     assert_eq!(a.submatrix::<3, 3>(2, 1), s);
}

#[test]
fn small_determinants() {
    let one: Matrix<1, 1> = [[7.0]].into();
    let two: Matrix<2, 2> = [[1.0, 5.0], [-3.0, 2.0]].into();

    assert_eq!(one.determinant(), 7.0);
    assert_eq!(two.determinant(), 17.0);
    assert_eq!(two.minor(0, 0), 2.0);
    assert_eq!(two.cofactor(0, 1), 3.0);
}

#[test]
fn mat3_minor_and_cofactor() {
    let a: Matrix<3, 3> = [[ 3.0,  5.0,  0.0 ],
                           [ 2.0, -1.0, -7.0 ],
                           [ 6.0, -1.0,  5.0 ]].into();

    assert_eq!(a.minor(0, 0), -12.0);
    assert_eq!(a.cofactor(0, 0), -12.0);
    assert_eq!(a.minor(1, 0), 25.0);
    assert_eq!(a.cofactor(1, 0), -25.0);
}

#[test]
fn mat3_determinant() {
     let a: Matrix<3, 3> = [[  1.0, 2.0,  6.0 ],
                            [ -5.0, 8.0, -4.0 ],
                            [  2.0, 6.0,  4.0 ]].into();

     assert_eq!(a.cofactor(0, 0), 56.0);
     assert_eq!(a.cofactor(0, 1), 12.0);
     assert_eq!(a.cofactor(0, 2), -46.0);
     assert_eq!(a.determinant(), -196.0);
}

#[test]
fn mat4_determinant() {
     let a: Matrix4D = [ -2.0, -8.0,  3.0,  5.0,
                         -3.0,  1.0,  7.0,  3.0,
                          1.0,  2.0, -9.0,  6.0,
                         -6.0,  7.0,  7.0, -9.0, ].into();

     assert_eq!(a.cofactor(0, 0), 690.0);
     assert_eq!(a.cofactor(0, 1), 447.0);
     assert_eq!(a.cofactor(0, 2), 210.0);
     assert_eq!(a.cofactor(0, 3), 51.0);
     assert_eq!(a.determinant(), -4071.0);
}

#[test]
fn invertibility() {
    let a: Matrix4D = [ 6.0,  4.0, 4.0,  4.0,
                        5.0,  5.0, 7.0,  6.0,
                        4.0, -9.0, 3.0, -7.0,
                        9.0,  1.0, 7.0, -6.0, ].into();

    let b: Matrix4D = [ -4.0,  2.0, -2.0, -3.0,
                         9.0,  6.0,  2.0,  6.0,
                         0.0, -5.0,  1.0, -5.0,
                         0.0,  0.0,  0.0,  0.0, ].into();

    assert!(a.invertible());
    assert!(!b.invertible());
    assert!(b.try_inverse().is_none());
}

#[test]
fn singular_inverse_falls_back_to_identity() {
    let singular: Matrix4D = [ -4.0,  2.0, -2.0, -3.0,
                                9.0,  6.0,  2.0,  6.0,
                                0.0, -5.0,  1.0, -5.0,
                                0.0,  0.0,  0.0,  0.0, ].into();

    assert_eq!(singular.inverse(), Matrix4D::identity());
    assert_eq!(Matrix::<2, 2>::zero().inverse(), Matrix::<2, 2>::identity());
}

#[test]
fn mat4_inverse() {
     let a: Matrix4D = [  8.0, -5.0,  9.0,  2.0,
                          7.0,  5.0,  6.0,  1.0,
                         -6.0,  0.0,  9.0,  6.0,
                         -3.0,  0.0, -9.0, -4.0, ].into();

     let i: Matrix4D = [ -0.15385, -0.15385, -0.28205, -0.53846,
                         -0.07692,  0.12308,  0.02564,  0.03077,
                          0.35897,  0.35897,  0.43590,  0.92308,
                         -0.69231, -0.69231, -0.76923, -1.92308, ].into();

     // Expected values are rounded to five places, so compare loosely
     let inv = a.inverse();
     for r in 0..4 {
         for c in 0..4 {
             assert!((inv[(r, c)] - i[(r, c)]).abs() < 1e-4);
         }
     }
}

#[test]
fn mat2_inverse() {
    let a: Matrix<2, 2> = [[4.0, 7.0], [2.0, 6.0]].into();
    let i: Matrix<2, 2> = [[0.6, -0.7], [-0.2, 0.4]].into();

    assert_eq!(a.inverse(), i);
    assert_eq!(Matrix::<1, 1>::from([[4.0]]).inverse(), Matrix::from([[0.25]]));
}

#[test]
fn mat4_inverse_mult() {
     let a: Matrix4D = [  3.0, -9.0,  7.0,  3.0,
                          3.0, -8.0,  2.0, -9.0,
                         -4.0,  4.0,  4.0,  1.0,
                         -6.0,  5.0, -1.0,  1.0, ].into();

     let b: Matrix4D = [ 8.0,  2.0, 2.0, 2.0,
                         3.0, -1.0, 7.0, 0.0,
                         7.0,  0.0, 5.0, 4.0,
                         6.0, -2.0, 0.0, 5.0  ].into();

     let c = a * b;

     assert!(b.invertible());
     assert_eq!(a, c * b.inverse());
}

#[test]
fn mat2_multiplication() {
    let a: Matrix<2, 2> = [[1.0, 2.0], [3.0, 4.0]].into();
    let b: Matrix<2, 2> = [[5.0, 6.0], [7.0, 8.0]].into();
    assert_eq!(a * b, Matrix::from([[19.0, 22.0], [43.0, 50.0]]));

    let mut c: Matrix<2, 2> = [[10.0, 11.0], [12.0, -3.0]].into();
    c *= Matrix::from([[6.0, 1.0], [7.0, 8.0]]);
    assert_eq!(c, Matrix::from([[137.0, 98.0], [51.0, -12.0]]));
}

#[test]
fn mat4_vector_multiplication() {
    let m: Matrix4D = [ 1.0, 2.0, 3.0, 4.0,
                        2.0, 4.0, 4.0, 2.0,
                        8.0, 6.0, 4.0, 1.0,
                        0.0, 0.0, 0.0, 1.0, ].into();

    assert_eq!(m * Vector4D::point(1.0, 2.0, 3.0), Vector4D::point(18.0, 24.0, 33.0));
}

#[test]
fn mat4_translation() {
    let transform = Matrix4D::translation(5.0, -3.0, 2.0);
    let point = Vector4D::point(-3.0, 4.0, 5.0);
    let vector = Vector4D::vector(-3.0, 4.0, 5.0);

    assert_eq!(transform * point, Vector4D::point(2.0, 1.0, 7.0));
    assert_eq!(transform.inverse() * point, Vector4D::point(-8.0, 7.0, 3.0));
    assert_eq!(transform * vector, vector);
    assert_eq!(Matrix4D::translation_splat(2.0), Matrix4D::translation(2.0, 2.0, 2.0));
    assert_eq!(Matrix4D::translation_of(Vector4D::point(5.0, -3.0, 2.0)), transform);
}

#[test]
fn mat4_scaling() {
    let transform = Matrix4D::scaling(2.0, 3.0, 4.0);
    let vector = Vector4D::vector(-4.0, 6.0, 8.0);

    assert_eq!(transform * vector, Vector4D::vector(-8.0, 18.0, 32.0));
    assert_eq!(transform.inverse() * vector, Vector4D::vector(-2.0, 2.0, 2.0));
    assert_eq!(Matrix4D::scaling_of(Vector4D::vector(2.0, 3.0, 4.0)), transform);
    assert_eq!(Matrix4D::scaling_splat(3.0), Matrix4D::scaling(3.0, 3.0, 3.0));
}

#[test]
fn mat4_rotations() {
    let half = std::f64::consts::FRAC_PI_4;
    let full = std::f64::consts::FRAC_PI_2;
    let r2 = 2.0f64.sqrt() / 2.0;

    let p = Vector4D::point(0.0, 1.0, 0.0);
    assert_eq!(Matrix4D::rotation_x(half) * p, Vector4D::point(0.0, r2, r2));
    assert_eq!(Matrix4D::rotation_x(full) * p, Vector4D::point(0.0, 0.0, 1.0));

    let p = Vector4D::point(0.0, 0.0, 1.0);
    assert_eq!(Matrix4D::rotation_y(half) * p, Vector4D::point(r2, 0.0, r2));
    assert_eq!(Matrix4D::rotation_y(full) * p, Vector4D::point(1.0, 0.0, 0.0));

    let p = Vector4D::point(0.0, 1.0, 0.0);
    assert_eq!(Matrix4D::rotation_z(half) * p, Vector4D::point(-r2, r2, 0.0));
    assert_eq!(Matrix4D::rotation_z(full) * p, Vector4D::point(-1.0, 0.0, 0.0));
}

#[test]
fn mat4_shearing() {
    let point = Vector4D::point(2.0, 3.0, 4.0);

    assert_eq!(Matrix4D::shearing(0.0, 1.0, 0.0, 0.0, 0.0, 0.0) * point,
        Vector4D::point(6.0, 3.0, 4.0));
    assert_eq!(Matrix4D::shearing(0.0, 0.0, 1.0, 0.0, 0.0, 0.0) * point,
        Vector4D::point(2.0, 5.0, 4.0));
    assert_eq!(Matrix4D::shearing(0.0, 0.0, 0.0, 1.0, 0.0, 0.0) * point,
        Vector4D::point(2.0, 7.0, 4.0));
    assert_eq!(Matrix4D::shearing(0.0, 0.0, 0.0, 0.0, 1.0, 0.0) * point,
        Vector4D::point(2.0, 3.0, 6.0));
    assert_eq!(Matrix4D::shearing(0.0, 0.0, 0.0, 0.0, 0.0, 1.0) * point,
        Vector4D::point(2.0, 3.0, 7.0));
}

#[test]
fn chained_transforms() {
    let a = Matrix4D::rotation_x(std::f64::consts::PI / 2.0);
    let b = Matrix4D::scaling(5.0, 5.0, 5.0);
    let c = Matrix4D::translation(10.0, 5.0, 7.0);

    let t = c * b * a;
    let p = Vector4D::point(1.0, 0.0, 1.0);

    assert_eq!(t * p, Vector4D::point(15.0, 0.0, 7.0));
}

#[test]
fn display_rows() {
    let m: Matrix<2, 2> = [[1.0, 2.0], [3.0, 4.0]].into();

    assert_eq!(m.to_string(), "| 1 | 2 |\n| 3 | 4 |");
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn matrix4() -> impl Strategy<Value = Matrix4D> {
        proptest::array::uniform16(-10.0f64..10.0).prop_map(Matrix4D::from)
    }

    fn vector4() -> impl Strategy<Value = Vector4D> {
        (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0, prop_oneof![Just(0.0), Just(1.0)])
            .prop_map(|(x, y, z, w)| Vector4D::tuple(x, y, z, w))
    }

    proptest! {
        #[test]
        fn inverse_undoes_transform(m in matrix4(), v in vector4()) {
            prop_assume!(m.determinant().abs() > 1.0);
            prop_assert_eq!(m.inverse() * (m * v), v);
        }

        #[test]
        fn product_with_inverse_is_identity(m in matrix4()) {
            prop_assume!(m.determinant().abs() > 1.0);
            prop_assert_eq!(m * m.inverse(), Matrix4D::identity());
        }
    }
}
