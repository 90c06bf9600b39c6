use crate::error::MatGradError;
use rand_distr::{Distribution, StandardNormal};

/// Dense real-valued 2-D matrix with row-major storage.
///
/// This is the arithmetic backend the autograd layer is built on. It
/// deliberately exposes only the operations the differentiable
/// primitives need: elementwise arithmetic, matrix product, transpose,
/// scalar broadcast, axis reductions and the elementary maps
/// (exp/ln/abs/signum).
///
/// Shape agreement for the elementwise methods is the caller's
/// responsibility (the `ops` layer validates before computing); the
/// methods only `debug_assert` it.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a `rows` x `cols` matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix::filled(rows, cols, 1.0)
    }

    /// Creates a `rows` x `cols` matrix filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Creates a `rows` x `cols` matrix with elements sampled from the
    /// standard normal distribution.
    pub fn randn(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols)
            .map(|_| StandardNormal.sample(&mut rng))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Creates a matrix from a flat row-major vector.
    ///
    /// # Errors
    /// Returns [`MatGradError::TensorCreationError`] if `data.len()`
    /// does not equal `rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, MatGradError> {
        if data.len() != rows * cols {
            return Err(MatGradError::TensorCreationError {
                data_len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// A 1x1 matrix acts as a broadcastable scalar in elementwise ops.
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Returns the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({}, {}) out of bounds for shape ({}, {})",
            i,
            j,
            self.rows,
            self.cols
        );
        self.data[i * self.cols + j]
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({}, {}) out of bounds for shape ({}, {})",
            i,
            j,
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }

    /// Immutable view of the flat row-major storage.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        debug_assert_eq!(
            self.shape(),
            other.shape(),
            "Elementwise op on mismatched shapes"
        );
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Applies `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    // --- Elementwise arithmetic (same shape) ---

    pub fn add(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn mul(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn div(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |a, b| a / b)
    }

    /// Accumulates `other` into `self` elementwise.
    pub fn add_assign(&mut self, other: &Matrix) {
        debug_assert_eq!(
            self.shape(),
            other.shape(),
            "Accumulation on mismatched shapes"
        );
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a += b);
    }

    // --- Scalar broadcast ---

    /// `A * s`
    pub fn scale(&self, s: f64) -> Matrix {
        self.map(|x| x * s)
    }

    /// `A / s`
    pub fn scale_div(&self, s: f64) -> Matrix {
        self.map(|x| x / s)
    }

    /// `s / A` elementwise.
    pub fn recip_scale(&self, s: f64) -> Matrix {
        self.map(|x| s / x)
    }

    // --- Linear algebra ---

    /// Matrix product `self * other`. Inner dimensions must agree.
    pub fn matmul(&self, other: &Matrix) -> Matrix {
        debug_assert_eq!(
            self.cols, other.rows,
            "Matmul inner dimension mismatch: ({}, {}) x ({}, {})",
            self.rows, self.cols, other.rows, other.cols
        );
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == 0.0 {
                    continue;
                }
                let row_out = &mut out.data[i * other.cols..(i + 1) * other.cols];
                let row_b = &other.data[k * other.cols..(k + 1) * other.cols];
                for (o, &b) in row_out.iter_mut().zip(row_b.iter()) {
                    *o += a * b;
                }
            }
        }
        out
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    // --- Reductions ---

    /// Sums each column, collapsing the row axis: result is 1 x C.
    pub fn col_sums(&self) -> Matrix {
        let mut out = Matrix::zeros(1, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j] += self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Sums each row, collapsing the column axis: result is R x 1.
    pub fn row_sums(&self) -> Matrix {
        let mut out = Matrix::zeros(self.rows, 1);
        for i in 0..self.rows {
            out.data[i] = self.data[i * self.cols..(i + 1) * self.cols].iter().sum();
        }
        out
    }

    /// Mean of each column: result is 1 x C.
    pub fn col_means(&self) -> Matrix {
        self.col_sums().scale_div(self.rows as f64)
    }

    /// Mean of each row: result is R x 1.
    pub fn row_means(&self) -> Matrix {
        self.row_sums().scale_div(self.cols as f64)
    }

    /// Sum over all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    // --- Elementwise maps ---

    pub fn exp(&self) -> Matrix {
        self.map(f64::exp)
    }

    pub fn ln(&self) -> Matrix {
        self.map(f64::ln)
    }

    pub fn abs(&self) -> Matrix {
        self.map(f64::abs)
    }

    /// Elementwise sign with `signum(0) == 0` (unlike `f64::signum`,
    /// which maps 0.0 to 1.0).
    pub fn signum(&self) -> Matrix {
        self.map(|x| if x == 0.0 { 0.0 } else { x.signum() })
    }

    // --- Domain predicates used by forward validation ---

    pub fn has_zero(&self) -> bool {
        self.data.iter().any(|&x| x == 0.0)
    }

    pub fn has_non_positive(&self) -> bool {
        self.data.iter().any(|&x| x <= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_ones_filled() {
        let z = Matrix::zeros(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.data().iter().all(|&x| x == 0.0));

        let o = Matrix::ones(3, 1);
        assert_eq!(o.data(), &[1.0, 1.0, 1.0]);

        let f = Matrix::filled(1, 2, 4.5);
        assert_eq!(f.data(), &[4.5, 4.5]);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
        assert_eq!(
            result.err().unwrap(),
            MatGradError::TensorCreationError {
                data_len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn test_randn_shape() {
        let m = Matrix::randn(4, 5);
        assert_eq!(m.shape(), (4, 5));
        assert_eq!(m.numel(), 20);
        assert!(m.data().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_matmul_known_values() {
        // [1 2; 3 4] * [5 6; 7 8] = [19 22; 43 50]
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2).unwrap();
        let c = a.matmul(&b);
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let b = Matrix::ones(3, 1);
        let c = a.matmul(&b);
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.data(), &[6.0, 15.0]);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_reductions() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(a.col_sums().data(), &[5.0, 7.0, 9.0]);
        assert_eq!(a.row_sums().data(), &[6.0, 15.0]);
        assert_eq!(a.col_means().data(), &[2.5, 3.5, 4.5]);
        assert_eq!(a.row_means().data(), &[2.0, 5.0]);
        assert_eq!(a.sum(), 21.0);
    }

    #[test]
    fn test_signum_maps_zero_to_zero() {
        let a = Matrix::from_vec(vec![-2.0, 0.0, 3.5, -0.0], 2, 2).unwrap();
        assert_eq!(a.signum().data(), &[-1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_domain_predicates() {
        let a = Matrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        assert!(!a.has_zero());
        assert!(!a.has_non_positive());

        let b = Matrix::from_vec(vec![1.0, 0.0], 1, 2).unwrap();
        assert!(b.has_zero());
        assert!(b.has_non_positive());

        let c = Matrix::from_vec(vec![-1.0, 2.0], 1, 2).unwrap();
        assert!(!c.has_zero());
        assert!(c.has_non_positive());
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut acc = Matrix::zeros(2, 2);
        let g = Matrix::ones(2, 2);
        acc.add_assign(&g);
        acc.add_assign(&g);
        assert_eq!(acc.data(), &[2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_scalar_broadcast_helpers() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 4.0, 8.0], 2, 2).unwrap();
        assert_eq!(a.scale(2.0).data(), &[2.0, 4.0, 8.0, 16.0]);
        assert_eq!(a.scale_div(2.0).data(), &[0.5, 1.0, 2.0, 4.0]);
        assert_eq!(a.recip_scale(8.0).data(), &[8.0, 4.0, 2.0, 1.0]);
    }
}
