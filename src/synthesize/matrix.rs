use arrow_array::{Array, FixedSizeListArray, Float64Array};
use arrow_buffer::ScalarBuffer;

use crate::error::{Result, WktKitError};

/// A dense, row-major matrix of coordinates: one row per point, one column per ordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordMatrix {
    coords: ScalarBuffer<f64>,
    ncols: usize,
}

impl CoordMatrix {
    /// Construct a new matrix from interleaved values.
    ///
    /// # Errors
    ///
    /// - if the values do not divide into rows of `ncols`
    pub fn try_new(coords: ScalarBuffer<f64>, ncols: usize) -> Result<Self> {
        let fits = match ncols {
            0 => coords.is_empty(),
            n => coords.len() % n == 0,
        };
        if !fits {
            return Err(WktKitError::InvalidShape(
                format!(
                    "{} values do not divide into rows of {ncols} columns",
                    coords.len()
                )
                .into(),
            ));
        }
        Ok(Self { coords, ncols })
    }

    /// Build a matrix from rows that must all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != ncols) {
            return Err(WktKitError::InvalidShape(
                "all rows of a coordinate matrix must have the same length".into(),
            ));
        }
        let coords: Vec<f64> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::try_new(coords.into(), ncols)
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nrows(&self) -> usize {
        match self.ncols {
            0 => 0,
            n => self.coords.len() / n,
        }
    }

    pub fn row(&self, idx: usize) -> Option<&[f64]> {
        if idx >= self.nrows() {
            return None;
        }
        let start = idx * self.ncols;
        self.coords.get(start..start + self.ncols)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.coords.chunks(self.ncols.max(1))
    }
}

impl TryFrom<&FixedSizeListArray> for CoordMatrix {
    type Error = WktKitError;

    fn try_from(value: &FixedSizeListArray) -> std::result::Result<Self, Self::Error> {
        if value.null_count() > 0 {
            return Err(WktKitError::InvalidShape(
                "coordinate rows must not be null".into(),
            ));
        }
        let values = value
            .values()
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| {
                WktKitError::InvalidShape("coordinate values must be Float64".into())
            })?;
        if values.null_count() > 0 {
            return Err(WktKitError::InvalidShape(
                "coordinate values must not be null".into(),
            ));
        }
        let ncols = usize::try_from(value.value_length())
            .map_err(|_| WktKitError::InvalidShape("negative list size".into()))?;
        Self::try_new(values.values().clone(), ncols)
    }
}
