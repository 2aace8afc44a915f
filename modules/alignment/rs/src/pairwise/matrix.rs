use eyre::{eyre, Result};

/// Flat row-major matrix for dynamic programming tables.
///
/// Allocation is fallible: quadratic tables for long sequences can easily
/// exhaust memory, and that must surface as an error rather than an abort.
pub(crate) struct Mat<T> {
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Mat<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .ok_or_else(|| eyre!("Matrix size overflow: {} x {}", rows, cols))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| eyre!("Not enough memory for a {} x {} matrix", rows, cols))?;
        data.resize(size, value);

        Ok(Self { cols, data })
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }
}
