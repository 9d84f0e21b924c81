//! Grid partitioning: mapping a flat icon sequence onto rows and columns.
//!
//! This module owns the layout arithmetic for the icon grid. Given the number
//! of visible icons and a column count derived from the pane width, it answers
//! three questions: how many rows exist, how many cells a given row holds, and
//! which flat index (if any) a `(row, column)` cell addresses.
//!
//! The layout is a pure function of two integers. It is recomputed every frame
//! and on every click, which keeps resizes reflected with zero staleness and
//! makes stale-click rejection a bounds check rather than a cache-invalidation
//! problem.

use std::ops::Range;

/// A row/column partition of `total` items into rows of `columns` cells.
///
/// All rows except possibly the last hold exactly `columns` items. The last
/// row holds the remainder, or a full `columns` when `total` divides evenly.
/// Construction clamps a zero column count to one, so a collapsed pane can
/// never divide by zero or produce a layout that loses items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    total: usize,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    /// Partitions `total` items into rows of `columns` cells.
    ///
    /// `columns` is clamped to at least 1. A `total` of zero produces a layout
    /// with zero rows.
    ///
    /// # Example
    ///
    /// ```
    /// use glyphgrid::app::grid::GridLayout;
    ///
    /// let layout = GridLayout::partition(5, 2);
    /// assert_eq!(layout.rows(), 3);
    /// assert_eq!(layout.items_in_row(2), 1);
    /// ```
    #[must_use]
    pub fn partition(total: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            total,
            columns,
            rows: total.div_ceil(columns),
        }
    }

    /// Total number of items covered by the layout.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of columns per full row (always at least 1).
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows, including a partially filled final row.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of items in row `row`.
    ///
    /// Full rows report `columns`; the final row reports the remainder, which
    /// is again `columns` when `total` divides evenly. Rows past the end
    /// report 0.
    #[must_use]
    pub const fn items_in_row(&self, row: usize) -> usize {
        if self.rows == 0 || row >= self.rows {
            0
        } else if row + 1 < self.rows {
            self.columns
        } else {
            // Final row: everything not covered by the full rows above it.
            self.total - (self.rows - 1) * self.columns
        }
    }

    /// Range of flat indices covered by row `row` (empty when out of bounds).
    #[must_use]
    pub const fn row_range(&self, row: usize) -> Range<usize> {
        let start = row * self.columns;
        start..start + self.items_in_row(row)
    }

    /// Maps a `(row, col)` cell to a flat item index.
    ///
    /// Returns `None` for a padding cell in a short final row and for any cell
    /// outside the layout, so callers can never index past the item sequence.
    /// This is the single source of truth for click hit-testing.
    #[must_use]
    pub const fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        if col < self.items_in_row(row) {
            Some(row * self.columns + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_total_exactly() {
        for total in 0..40 {
            for columns in 1..8 {
                let layout = GridLayout::partition(total, columns);
                let covered: usize = (0..layout.rows()).map(|r| layout.items_in_row(r)).sum();
                assert_eq!(covered, total, "total={total} columns={columns}");
            }
        }
    }

    #[test]
    fn every_flat_index_maps_to_exactly_one_cell() {
        let layout = GridLayout::partition(11, 4);
        let mut seen = vec![0usize; 11];
        for row in 0..layout.rows() {
            for col in 0..layout.columns() {
                if let Some(flat) = layout.flat_index(row, col) {
                    seen[flat] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn exact_multiple_has_full_final_row() {
        let layout = GridLayout::partition(12, 4);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.items_in_row(2), 4);
    }

    #[test]
    fn empty_total_yields_zero_rows() {
        for columns in 1..6 {
            let layout = GridLayout::partition(0, columns);
            assert_eq!(layout.rows(), 0);
            assert_eq!(layout.items_in_row(0), 0);
            assert_eq!(layout.flat_index(0, 0), None);
        }
    }

    #[test]
    fn zero_columns_clamps_to_one() {
        let clamped = GridLayout::partition(7, 0);
        let single = GridLayout::partition(7, 1);
        assert_eq!(clamped, single);
        assert_eq!(clamped.rows(), 7);
        assert_eq!(clamped.flat_index(6, 0), Some(6));
    }

    #[test]
    fn padding_cell_in_short_final_row_is_rejected() {
        // 5 items in 2 columns: rows of 2, 2, 1.
        let layout = GridLayout::partition(5, 2);
        assert_eq!(layout.items_in_row(2), 1);
        assert_eq!(layout.flat_index(2, 0), Some(4));
        assert_eq!(layout.flat_index(2, 1), None);
        assert_eq!(layout.flat_index(3, 0), None);
    }

    #[test]
    fn row_range_matches_flat_indices() {
        let layout = GridLayout::partition(10, 3);
        assert_eq!(layout.row_range(0), 0..3);
        assert_eq!(layout.row_range(3), 9..10);
        assert_eq!(layout.row_range(4), 12..12);
    }
}
