//! Sampled curve coordinates.

/// Two equal-length coordinate sequences produced by sampling a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurvePoints {
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        assert_eq!(x.len(), y.len(), "coordinate sequences must be equal in length");
        Self { x, y }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.x.first().copied().zip(self.y.first().copied())
    }

    /// Iterates over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The largest absolute coordinate value, or `0.0` if empty.
    pub fn max_abs(&self) -> f64 {
        self.x
            .iter()
            .chain(self.y.iter())
            .fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }
}

impl FromIterator<(f64, f64)> for CurvePoints {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut points = Self::with_capacity(iter.size_hint().0);

        for (x, y) in iter {
            points.push(x, y);
        }

        points
    }
}
