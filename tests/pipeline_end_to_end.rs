use gridconv::{
    correlate, grid_from_cells, ConvolveConfig, Convolver, Grid, GridConvError, GridSize,
    PaddingAdjustment, PaddingMode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
    let data = (0..rows * cols)
        .map(|_| rng.random_range(-100..=100))
        .collect();
    Grid::from_vec(data, rows, cols).unwrap()
}

fn brute_force(a: &Grid, b: &Grid) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    for r in 0..=a.rows() - b.rows() {
        let mut row = Vec::new();
        for c in 0..=a.cols() - b.cols() {
            let mut sum = 0i64;
            for i in 0..b.rows() {
                for j in 0..b.cols() {
                    sum += a.get(r + i, c + j).unwrap() * b.get(i, j).unwrap();
                }
            }
            row.push(sum);
        }
        out.push(row);
    }
    out
}

#[test]
fn diagonal_filter_without_padding() {
    let matrix = Grid::from_rows(&[[4, 1, 8], [2, 9, 0], [7, 2, 4]]).unwrap();
    let filter = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
    let result = Convolver::new().run(&matrix, &filter).unwrap();
    assert_eq!(result.size(), GridSize::new(2, 2));
    assert_eq!(result.to_rows(), vec![vec![13, 1], vec![4, 13]]);
}

#[test]
fn unit_filter_with_zero_padding_adds_nothing() {
    let matrix = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let filter = Grid::from_rows(&[[1]]).unwrap();
    let convolver = Convolver::new().with_config(ConvolveConfig {
        padding: PaddingMode::Zero,
        adjustment: PaddingAdjustment::FloorStart,
        parallel: false,
    });
    let result = convolver.run(&matrix, &filter).unwrap();
    assert_eq!(result, matrix);
}

#[test]
fn top_left_cell_is_window_dot_product() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..32 {
        let (a_rows, a_cols) = (rng.random_range(3..=10), rng.random_range(3..=10));
        let (b_rows, b_cols) = (rng.random_range(1..=3), rng.random_range(1..=3));
        let a = random_grid(&mut rng, a_rows, a_cols);
        let b = random_grid(&mut rng, b_rows, b_cols);
        let result = correlate(&a, &b).unwrap();

        let mut expected = 0i64;
        for i in 0..b.rows() {
            for j in 0..b.cols() {
                expected += a[(i, j)] * b[(i, j)];
            }
        }
        assert_eq!(result[(0, 0)], expected);
        assert_eq!(result.to_rows(), brute_force(&a, &b));
    }
}

#[test]
fn scalar_filter_scales_every_cell() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_grid(&mut rng, 6, 4);
    for k in [-3i64, 0, 1, 7] {
        let filter = Grid::from_rows(&[[k]]).unwrap();
        let result = correlate(&a, &filter).unwrap();
        let expected: Vec<i64> = a.as_slice().iter().map(|v| v * k).collect();
        assert_eq!(result.as_slice(), expected.as_slice());
    }
}

#[test]
fn oversized_filter_is_rejected_without_panic() {
    let matrix = Grid::zeros(2, 2).unwrap();
    let filter = Grid::zeros(3, 3).unwrap();

    for padding in [PaddingMode::None, PaddingMode::Zero, PaddingMode::Same] {
        let convolver = Convolver::new().with_config(ConvolveConfig {
            padding,
            ..ConvolveConfig::default()
        });
        let err = convolver.run(&matrix, &filter).unwrap_err();
        assert_eq!(
            err,
            GridConvError::FilterLargerThanMatrix {
                matrix: GridSize::new(2, 2),
                filter: GridSize::new(3, 3),
            }
        );
    }

    assert!(correlate(&matrix, &filter).is_err());
}

#[test]
fn padded_output_grows_by_filter_minus_one() {
    let mut rng = StdRng::seed_from_u64(99);
    let matrix = random_grid(&mut rng, 5, 6);
    let filter = random_grid(&mut rng, 3, 4);
    let convolver = Convolver::new().with_config(ConvolveConfig {
        padding: PaddingMode::Zero,
        adjustment: PaddingAdjustment::CeilStart,
        parallel: false,
    });
    let result = convolver.run(&matrix, &filter).unwrap();
    assert_eq!(result.size(), GridSize::new(5, 6));
}

#[test]
fn text_cells_flow_through_the_pipeline() {
    let matrix_cells = vec![
        vec!["4", "1.2", "8"],
        vec!["2", "9.99", "abc"],
        vec!["7", "2", "4"],
    ];
    let filter_cells = vec![vec!["1", "0"], vec!["0", "1"]];
    let matrix = grid_from_cells(3, 3, &matrix_cells).unwrap();
    let filter = grid_from_cells(2, 2, &filter_cells).unwrap();
    let result = Convolver::new().run(&matrix, &filter).unwrap();
    assert_eq!(result.to_rows(), vec![vec![13, 1], vec![4, 13]]);
}
