//! Grid placement for the multi-sphere scenes.

/// A `columns` x `rows` grid of equal cells covering a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cell_width: i32,
    cell_height: i32,
    columns: i32,
    rows: i32,
}

impl Grid {
    /// Divides a `width` x `height` screen into cells.
    ///
    /// Zero columns or rows are treated as one.
    #[must_use]
    pub fn new(width: i32, height: i32, columns: i32, rows: i32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            cell_width: width / columns,
            cell_height: height / rows,
            columns,
            rows,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Center of cell `(column, row)`.
    #[must_use]
    pub const fn cell_center(&self, column: i32, row: i32) -> (i32, i32) {
        (
            (2 * column + 1) * self.cell_width / 2,
            (2 * row + 1) * self.cell_height / 2,
        )
    }

    /// Largest radius that fits a cell with a two pixel margin.
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.cell_width.min(self.cell_height) / 2 - 2
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| (column, row)))
    }
}
