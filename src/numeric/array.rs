//! Numeric array type shared by all of the orbit machinery
//!
//! `NumArray` is a fixed-shape collection of f64 values with
//! broadcasting arithmetic (`add`/`mult` take a scalar or an
//! equal-length array), elementwise math, and reductions.
//! Factory functions (`zeros`, `ones`, `empty`, `linspace`,
//! `geomspace`) build new arrays; arithmetic always returns a
//! new array and never mutates in place.

/// Shape of a [`NumArray`]: one extent per axis
///
/// Built from a plain length (`10`) or an extent list (`[6, 301]`),
/// so factory calls read like `zeros(10)` or `zeros([6, 301])`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(pub Vec<usize>);

impl From<usize> for Shape {
    fn from(len: usize) -> Self {
        Shape(vec![len])
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(extents: [usize; N]) -> Self {
        Shape(extents.to_vec())
    }
}

impl From<Vec<usize>> for Shape {
    fn from(extents: Vec<usize>) -> Self {
        Shape(extents)
    }
}

/// Right-hand side of a broadcasting binary operation
///
/// A plain `f64` broadcasts to every element; a `&NumArray` must have
/// the same length as the left-hand side. Any other length is a
/// programming error and panics.
pub trait Operand {
    fn value_at(&self, idx: usize) -> f64;
    fn check_len(&self, len: usize);
}

impl Operand for f64 {
    fn value_at(&self, _idx: usize) -> f64 {
        *self
    }

    fn check_len(&self, _len: usize) {}
}

impl Operand for &NumArray {
    fn value_at(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    fn check_len(&self, len: usize) {
        assert_eq!(
            self.size(),
            len,
            "NumArray length mismatch in elementwise operation: {} vs {}",
            self.size(),
            len
        );
    }
}

/// Fixed-shape array of f64 values with broadcasting arithmetic
///
/// Storage is row-major and flat; the shape is recorded once at
/// construction and immutable afterwards. Every arithmetic operation
/// yields a new array.
#[derive(Debug, Clone, PartialEq)]
pub struct NumArray {
    data: Vec<f64>, // flat row-major storage
    shape: Vec<usize>, // per-axis extent
}

impl NumArray {
    /// Wrap a flat vector as a 1-D array
    pub fn from_vec(data: Vec<f64>) -> Self {
        let shape = vec![data.len()];
        Self { data, shape }
    }

    /// Per-axis extents
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements across all axes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Extent of the first axis
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Whether the first axis is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat view of the data
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of the data as a plain vector
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    // Row-major flat offset for a multi-axis index
    fn offset(&self, idx: &[usize]) -> usize {
        assert_eq!(
            idx.len(),
            self.shape.len(),
            "index has {} axes, array has {}",
            idx.len(),
            self.shape.len()
        );
        let mut off = 0;
        for (i, &ii) in idx.iter().enumerate() {
            assert!(ii < self.shape[i], "index {} out of bounds on axis {}", ii, i);
            off = off * self.shape[i] + ii;
        }
        off
    }

    /// Element at a multi-axis index
    pub fn get(&self, idx: &[usize]) -> f64 {
        self.data[self.offset(idx)]
    }

    /// Overwrite one element; construction-time filling only, the
    /// arithmetic surface never mutates
    pub fn set(&mut self, idx: &[usize], value: f64) {
        let off = self.offset(idx);
        self.data[off] = value;
    }

    /// Copy of row `i` of a 2-D array as a 1-D array
    pub fn row(&self, i: usize) -> NumArray {
        assert_eq!(self.ndim(), 2, "row() requires a 2-D array");
        let cols = self.shape[1];
        NumArray::from_vec(self.data[i * cols..(i + 1) * cols].to_vec())
    }

    /// Copy of the 1-D sub-range `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> NumArray {
        assert_eq!(self.ndim(), 1, "slice() requires a 1-D array");
        NumArray::from_vec(self.data[start..end].to_vec())
    }

    /// New 1-D array holding `self` followed by `other`
    pub fn concat(&self, other: &NumArray) -> NumArray {
        assert_eq!(self.ndim(), 1, "concat() requires 1-D arrays");
        assert_eq!(other.ndim(), 1, "concat() requires 1-D arrays");
        let mut data = self.data.clone();
        data.extend_from_slice(&other.data);
        NumArray::from_vec(data)
    }

    /*
     * Basic arithmetic
     */

    /// Elementwise sum; `rhs` is a scalar (broadcast) or an
    /// equal-length array
    pub fn add<R: Operand>(&self, rhs: R) -> NumArray {
        rhs.check_len(self.size());
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, x)| x + rhs.value_at(idx))
            .collect();
        NumArray {
            data,
            shape: self.shape.clone(),
        }
    }

    /// Elementwise product; `rhs` is a scalar (broadcast) or an
    /// equal-length array
    pub fn mult<R: Operand>(&self, rhs: R) -> NumArray {
        rhs.check_len(self.size());
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, x)| x * rhs.value_at(idx))
            .collect();
        NumArray {
            data,
            shape: self.shape.clone(),
        }
    }

    /*
     * Math functions operating on the array
     */

    /// New array with `f` applied to every element
    pub fn map(&self, f: impl Fn(f64) -> f64) -> NumArray {
        NumArray {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Elementwise cosine
    pub fn cos(&self) -> NumArray {
        self.map(f64::cos)
    }

    /// Elementwise sine
    pub fn sin(&self) -> NumArray {
        self.map(f64::sin)
    }

    /// Elementwise reciprocal
    pub fn inv(&self) -> NumArray {
        self.map(|x| 1.0 / x)
    }

    /*
     * Reductions
     */

    /// Maximum over all elements
    pub fn amax(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Minimum over all elements
    pub fn amin(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Mean over all elements
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.size() as f64
    }

    /// Population standard deviation (divide by N, not N-1)
    pub fn std(&self) -> f64 {
        let mean = self.mean();
        (self
            .data
            .iter()
            .map(|&x| (x - mean) * (x - mean))
            .sum::<f64>()
            / self.size() as f64)
            .sqrt()
    }
}

impl std::ops::Index<usize> for NumArray {
    type Output = f64;

    // Flat index into the underlying storage
    fn index(&self, idx: usize) -> &f64 {
        &self.data[idx]
    }
}

/*
 * Array initialization functions
 */

// Factory shared by zeros/ones/empty: constant fill over a shape
fn init_val(val: f64, shape: Shape) -> NumArray {
    let Shape(shape) = shape;
    let size = shape.iter().product();
    NumArray {
        data: vec![val; size],
        shape,
    }
}

/// Array of zeros with the given shape
pub fn zeros(shape: impl Into<Shape>) -> NumArray {
    init_val(0.0, shape.into())
}

/// Array of ones with the given shape
pub fn ones(shape: impl Into<Shape>) -> NumArray {
    init_val(1.0, shape.into())
}

/// Array of the given shape filled with NaN as an explicit
/// no-value marker (not uninitialized memory)
pub fn empty(shape: impl Into<Shape>) -> NumArray {
    init_val(f64::NAN, shape.into())
}

/// `num` linearly-spaced values from `start` to `stop` inclusive
///
/// Spacing is `(stop - start) / (num - 1)`; `num < 2` would divide by
/// zero and is rejected
pub fn linspace(start: f64, stop: f64, num: usize) -> NumArray {
    assert!(num >= 2, "linspace requires at least two samples");
    let step = (stop - start) / (num - 1) as f64;
    NumArray::from_vec((0..num).map(|i| start + i as f64 * step).collect())
}

/// `num` geometrically-spaced values from `start` to `stop` inclusive
///
/// linspace in log10 space, exponentiated back
pub fn geomspace(start: f64, stop: f64, num: usize) -> NumArray {
    linspace(start.log10(), stop.log10(), num).map(|x| 10.0f64.powf(x))
}
