use gridconv::{apply_padding, Grid, GridSize, PadExtents, PaddingAdjustment, PaddingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
    let data = (0..rows * cols)
        .map(|_| rng.random_range(-50..=50))
        .collect();
    Grid::from_vec(data, rows, cols).unwrap()
}

#[test]
fn none_mode_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = random_grid(&mut rng, 4, 5);
    for adjustment in [PaddingAdjustment::FloorStart, PaddingAdjustment::CeilStart] {
        let padded =
            apply_padding(&grid, GridSize::new(3, 3), PaddingMode::None, adjustment).unwrap();
        assert_eq!(*padded, grid);
    }
}

#[test]
fn zero_padding_embeds_source_and_zeroes_border() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let rows = rng.random_range(1..=8);
        let cols = rng.random_range(1..=8);
        let filter = GridSize::new(rng.random_range(1..=6), rng.random_range(1..=6));
        let adjustment = if rng.random_bool(0.5) {
            PaddingAdjustment::FloorStart
        } else {
            PaddingAdjustment::CeilStart
        };
        let grid = random_grid(&mut rng, rows, cols);

        let padded = apply_padding(&grid, filter, PaddingMode::Zero, adjustment).unwrap();
        let ext = PadExtents::for_filter(filter, adjustment);
        assert_eq!(padded.rows(), rows + filter.rows - 1);
        assert_eq!(padded.cols(), cols + filter.cols - 1);
        assert_eq!(ext.rows_start + ext.rows_end, filter.rows - 1);
        assert_eq!(ext.cols_start + ext.cols_end, filter.cols - 1);

        for r in 0..padded.rows() {
            for c in 0..padded.cols() {
                let inside = r >= ext.rows_start
                    && r < ext.rows_start + rows
                    && c >= ext.cols_start
                    && c < ext.cols_start + cols;
                let expected = if inside {
                    grid[(r - ext.rows_start, c - ext.cols_start)]
                } else {
                    0
                };
                assert_eq!(padded[(r, c)], expected, "cell ({r}, {c})");
            }
        }
    }
}

#[test]
fn same_mode_matches_zero_mode() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = random_grid(&mut rng, 5, 3);
    let filter = GridSize::new(4, 2);
    for adjustment in [PaddingAdjustment::FloorStart, PaddingAdjustment::CeilStart] {
        let zero = apply_padding(&grid, filter, PaddingMode::Zero, adjustment).unwrap();
        let same = apply_padding(&grid, filter, PaddingMode::Same, adjustment).unwrap();
        assert_eq!(zero, same);
    }
}

#[test]
fn adjustments_differ_only_for_odd_pad_amounts() {
    for dim in 1..=9usize {
        let filter = GridSize::new(dim, dim);
        let floor = PadExtents::for_filter(filter, PaddingAdjustment::FloorStart);
        let ceil = PadExtents::for_filter(filter, PaddingAdjustment::CeilStart);
        if (dim - 1) % 2 == 0 {
            assert_eq!(floor, ceil, "filter {dim}");
        } else {
            assert_ne!(floor, ceil, "filter {dim}");
            assert_eq!(floor.rows_start + 1, ceil.rows_start);
            assert_eq!(floor.rows_end, ceil.rows_end + 1);
        }
    }
}

#[test]
fn unit_filter_axis_is_left_unpadded() {
    let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let padded = apply_padding(
        &grid,
        GridSize::new(1, 3),
        PaddingMode::Zero,
        PaddingAdjustment::FloorStart,
    )
    .unwrap();
    assert_eq!(padded.to_rows(), vec![vec![0, 1, 2, 0], vec![0, 3, 4, 0]]);
}

#[test]
fn source_is_not_mutated() {
    let grid = Grid::from_rows(&[[9, 8, 7]]).unwrap();
    let before = grid.clone();
    let _ = apply_padding(
        &grid,
        GridSize::new(3, 3),
        PaddingMode::Zero,
        PaddingAdjustment::CeilStart,
    )
    .unwrap();
    assert_eq!(grid, before);
}
