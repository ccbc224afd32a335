use gridpath_core::Dims;

/// Manhattan distance between two cell indices of a `dims` grid:
/// `|Δrow| + |Δcolumn|`.
#[inline]
pub fn grid_manhattan(dims: Dims, a: usize, b: usize) -> u32 {
    let drow = dims.row(a).abs_diff(dims.row(b));
    let dcol = dims.column(a).abs_diff(dims.column(b));
    (drow + dcol) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_distance_matches_points() {
        let d = Dims::new(18, 10).unwrap();
        for (a, b) in [(0, 179), (17, 18), (40, 41), (5, 95)] {
            let (pa, pb) = (d.point(a), d.point(b));
            let expected = pa.x.abs_diff(pb.x) + pa.y.abs_diff(pb.y);
            assert_eq!(grid_manhattan(d, a, b), expected);
            assert_eq!(grid_manhattan(d, b, a), expected);
        }
        assert_eq!(grid_manhattan(d, 0, 179), 26);
        assert_eq!(grid_manhattan(d, 40, 40), 0);
    }

    #[test]
    fn row_end_to_next_row_start_is_not_one_step() {
        let d = Dims::new(3, 3).unwrap();
        // Index 2 is (2, 0), index 3 is (0, 1).
        assert_eq!(grid_manhattan(d, 2, 3), 3);
    }
}
