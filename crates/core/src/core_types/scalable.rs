//! Numeric containers that can be scaled by a conversion factor
//!
//! Conversion is one generic operation over [`Scalable`]; the output container
//! mirrors the input:
//! - scalars (`f64`, `f32`, [`Constant`]) give a scalar,
//! - sequences (`Vec<f64>`, slices, fixed arrays, homogeneous tuples) give the same
//!   kind of sequence with the same length,
//! - `nalgebra` matrices and vectors give a newly allocated matrix of the same shape.
//!
//! Borrowed inputs are only read; a fresh container is always returned.

use super::Constant;
use nalgebra::base::allocator::Allocator;
use nalgebra::base::storage::RawStorage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};

/// Elementwise multiplication by a scalar factor
pub trait Scalable {
    /// Container produced by scaling
    type Output;

    /// Multiply every element by `factor`
    fn scale(self, factor: f64) -> Self::Output;
}

impl Scalable for f64 {
    type Output = f64;
    #[inline]
    fn scale(self, factor: f64) -> f64 {
        self * factor
    }
}

impl Scalable for f32 {
    type Output = f32;
    #[inline]
    fn scale(self, factor: f64) -> f32 {
        (f64::from(self) * factor) as f32
    }
}

impl Scalable for Constant {
    type Output = Constant;
    #[inline]
    fn scale(self, factor: f64) -> Constant {
        self * factor
    }
}

impl Scalable for Vec<f64> {
    type Output = Vec<f64>;
    fn scale(self, factor: f64) -> Vec<f64> {
        self.into_iter().map(|v| v * factor).collect()
    }
}

impl Scalable for &Vec<f64> {
    type Output = Vec<f64>;
    fn scale(self, factor: f64) -> Vec<f64> {
        self.as_slice().scale(factor)
    }
}

impl Scalable for &[f64] {
    type Output = Vec<f64>;
    fn scale(self, factor: f64) -> Vec<f64> {
        self.iter().map(|v| v * factor).collect()
    }
}

impl<const N: usize> Scalable for [f64; N] {
    type Output = [f64; N];
    fn scale(self, factor: f64) -> [f64; N] {
        self.map(|v| v * factor)
    }
}

macro_rules! impl_scalable_tuple {
    (@f64 $name:ident) => { f64 };
    ($($name:ident),+) => {
        impl Scalable for ($(impl_scalable_tuple!(@f64 $name),)+) {
            type Output = Self;
            fn scale(self, factor: f64) -> Self {
                let ($($name,)+) = self;
                ($($name * factor,)+)
            }
        }
    };
}

impl_scalable_tuple!(a);
impl_scalable_tuple!(a, b);
impl_scalable_tuple!(a, b, c);
impl_scalable_tuple!(a, b, c, d);
impl_scalable_tuple!(a, b, c, d, e);
impl_scalable_tuple!(a, b, c, d, e, f);

impl<R, C, S> Scalable for Matrix<f64, R, C, S>
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    type Output = OMatrix<f64, R, C>;
    fn scale(self, factor: f64) -> Self::Output {
        self.map(|v| v * factor)
    }
}

impl<R, C, S> Scalable for &Matrix<f64, R, C, S>
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    type Output = OMatrix<f64, R, C>;
    fn scale(self, factor: f64) -> Self::Output {
        self.map(|v| v * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, Vector3};

    #[test]
    fn test_scalars() {
        assert_eq!(2.0_f64.scale(0.5), 1.0);
        assert_eq!(2.0_f32.scale(0.5), 1.0_f32);
        let c = Constant::new(3.0, "g").scale(2.0);
        assert_eq!(c, Constant::new(6.0, "g"));
    }

    #[test]
    fn test_sequences_keep_length() {
        let v: Vec<f64> = vec![1.0, 2.0, 3.0];
        let scaled = Scalable::scale(&v, 10.0);
        assert_eq!(scaled, vec![10.0, 20.0, 30.0]);
        // Input untouched
        assert_eq!(v, vec![1.0, 2.0, 3.0]);

        assert_eq!(v.as_slice().scale(2.0), vec![2.0, 4.0, 6.0]);
        let arr: [f64; 2] = [1.0, 2.0];
        assert_eq!(arr.scale(3.0), [3.0, 6.0]);
        assert_eq!(v.scale(0.0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<f64> = Vec::new();
        assert!(empty.scale(5.0).is_empty());
    }

    #[test]
    fn test_tuples() {
        let one: (f64,) = (1.0,);
        assert_eq!(one.scale(2.0), (2.0,));

        let pair: (f64, f64) = (1e5, 2.2e3);
        assert_eq!(pair.scale(1e-5), (1e5 * 1e-5, 2.2e3 * 1e-5));

        let six: (f64, f64, f64, f64, f64, f64) = (1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(six.scale(2.0), (2.0, 4.0, 6.0, 8.0, 10.0, 12.0));
    }

    #[test]
    fn test_matrices_keep_shape() {
        let m: DMatrix<f64> = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let scaled = Scalable::scale(&m, 2.0);
        assert_eq!(scaled.shape(), (2, 3));
        assert_eq!(scaled[(1, 2)], 12.0);
        assert_eq!(m[(1, 2)], 6.0);

        // By value; nalgebra's inherent `scale` would shadow the trait method
        let v = Scalable::scale(Vector3::<f64>::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(v, Vector3::new(0.5, 1.0, 1.5));

        let owned = Scalable::scale(m, 0.5);
        assert_eq!(owned.shape(), (2, 3));
        assert_eq!(owned[(0, 1)], 1.0);
    }
}
