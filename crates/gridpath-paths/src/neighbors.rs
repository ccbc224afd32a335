use gridpath_core::Dims;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-connected neighbors of a cell index using linear-index
/// arithmetic only: a step right or left never leaves the cell's row, and a
/// step up or down never leaves the grid.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds neighbors of `index` in the order right, left,
    /// up, down, keeping only those for which `keep` returns `true`.
    pub fn cardinal(
        &mut self,
        dims: Dims,
        index: usize,
        keep: impl Fn(usize) -> bool,
    ) -> &[usize] {
        self.buf.clear();
        let columns = dims.columns();
        let row_start = dims.row(index) * columns;

        let right = index + 1;
        if right < row_start + columns && keep(right) {
            self.buf.push(right);
        }
        if index > row_start && keep(index - 1) {
            self.buf.push(index - 1);
        }
        if index >= columns && keep(index - columns) {
            self.buf.push(index - columns);
        }
        let down = index + columns;
        if down < dims.len() && keep(down) {
            self.buf.push(down);
        }
        &self.buf
    }
}
