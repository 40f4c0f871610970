use anyhow::{ensure, Result};
use polars::prelude::*;

/// An ordered set of labeled numeric ranges used to turn a continuous value
/// into a discrete display category.
///
/// Classification is half-open `(lo, hi]`: the left edge is exclusive, the
/// right edge inclusive. Values outside every bin, and missing values, map
/// to no label.
#[derive(Debug, Clone)]
pub struct BucketScale {
    edges: Vec<f64>,
    labels: Vec<&'static str>,
}

impl BucketScale {
    /// Bin edges and labels are configuration, not computed; `edges` must be
    /// strictly increasing with exactly one more entry than `labels`.
    pub fn new(edges: Vec<f64>, labels: Vec<&'static str>) -> Result<Self> {
        ensure!(
            edges.len() == labels.len() + 1,
            "bucket scale needs {} edges for {} labels, got {}",
            labels.len() + 1,
            labels.len(),
            edges.len()
        );
        ensure!(
            edges.windows(2).all(|w| w[0] < w[1]),
            "bucket scale edges must be strictly increasing"
        );
        Ok(Self { edges, labels })
    }

    /// Twelve 5-point-wide support buckets covering (0, 60] percent.
    pub fn support() -> Self {
        Self::new(
            (0..=12).map(|i| (i * 5) as f64).collect(),
            vec![
                "0 do 5", "5 do 10", "10 do 15", "15 do 20", "20 do 25", "25 do 30",
                "30 do 35", "35 do 40", "40 do 45", "45 do 50", "50 do 55", "55 do 60",
            ],
        )
        .expect("static scale is valid")
    }

    /// Twenty non-uniform natural-increase buckets over (-inf, +inf), finer
    /// near zero to resolve the bulk of the distribution.
    pub fn natural_increase() -> Self {
        Self::new(
            vec![
                f64::NEG_INFINITY, -20.0, -15.0, -13.0, -10.0, -8.0, -5.0, -3.0, -1.0,
                0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 8.0, 9.0, 11.0, 12.0, f64::INFINITY,
            ],
            vec![
                "<-20", "-20 do -15", "-15 do -13", "-13 do -10", "-10 do -8",
                "-8 do -5", "-5 do -3", "-3 do -1", "-1 do 0", "0 do 1", "1 do 2",
                "2 do 3", "3 do 4", "4 do 5", "5 do 7", "7 do 8", "8 do 9", "9 do 11",
                "11 do 12", ">12",
            ],
        )
        .expect("static scale is valid")
    }

    #[inline] pub fn labels(&self) -> &[&'static str] { &self.labels }

    /// Map a value to its bucket label, or `None` for missing values and
    /// values outside every bin.
    pub fn classify(&self, value: Option<f64>) -> Option<&'static str> {
        let value = value?;
        if value.is_nan() {
            return None;
        }
        self.edges
            .windows(2)
            .position(|w| value > w[0] && value <= w[1])
            .map(|i| self.labels[i])
    }

    /// Classify a numeric column into a new String column named `name`.
    pub(crate) fn classify_column(&self, column: &Column, name: &str) -> Result<Column> {
        let column = if column.dtype() != &DataType::Float64 {
            column.cast(&DataType::Float64)?
        } else {
            column.clone()
        };
        let labels = column
            .f64()?
            .into_iter()
            .map(|value| self.classify(value))
            .collect::<StringChunked>();
        Ok(Column::from(labels.into_series().with_name(name.into())))
    }
}
