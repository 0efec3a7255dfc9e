use lifegrid_core::{next_state, step, Grid};

#[test]
fn test_birth_only_on_three() {
    for n in 0..=8u8 {
        assert_eq!(next_state(false, n), n == 3, "dead cell with {n} neighbors");
    }
}

#[test]
fn test_survival_on_two_or_three() {
    for n in 0..=8u8 {
        assert_eq!(
            next_state(true, n),
            n == 2 || n == 3,
            "live cell with {n} neighbors"
        );
    }
}

#[test]
fn test_lonely_cell_dies() {
    let grid = Grid::parse(
        "
        .....
        ..#..
        .....
        ",
    )
    .unwrap();
    let (next, changes) = step(&grid);
    assert_eq!(next.population(), 0);
    assert_eq!(changes.iter().collect::<Vec<_>>(), vec![(1, 2)]);
}

#[test]
fn test_overcrowded_center_dies() {
    let grid = Grid::parse(
        "
        .......
        ..###..
        ..###..
        ..###..
        .......
        .......
        ",
    )
    .unwrap();
    let (next, _) = step(&grid);
    assert!(!next.get(2, 3));
}

#[test]
fn test_step_leaves_input_untouched() {
    let grid = Grid::parse(
        "
        .....
        .###.
        .....
        ",
    )
    .unwrap();
    let before = grid.clone();
    let _ = step(&grid);
    assert_eq!(grid, before);
}
