use boardgen::{generate, Color, ColorMode, Error};

const LIGHT: Color = Color::rgb(210, 200, 180);
const DARK: Color = Color::rgb(50, 90, 130);

#[test]
fn row_count_and_length_match_inputs() {
    for &(dim, sq) in &[(1usize, 1usize), (1, 7), (2, 1), (3, 5), (8, 10)] {
        for (light, dark) in [(LIGHT, DARK), (Color::rgba(1, 2, 3, 4), Color::rgba(9, 8, 7, 6))] {
            let grid = generate(dim, sq, light, dark).expect("generate");
            assert_eq!(grid.height(), dim * sq);
            for row in grid.rows() {
                assert_eq!(row.len(), dim * sq * light.channels());
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate(5, 6, LIGHT, DARK).unwrap();
    let b = generate(5, 6, LIGHT, DARK).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_raw(), b.to_raw());
}

#[test]
fn every_cell_follows_parity() {
    let (dim, sq) = (4, 3);
    let grid = generate(dim, sq, LIGHT, DARK).unwrap();
    for y in 0..dim * sq {
        for x in 0..dim * sq {
            let expected = if (y / sq + x / sq) % 2 == 0 { LIGHT } else { DARK };
            assert_eq!(grid.pixel(x, y), Some(expected.as_bytes()), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn standard_board_first_band() {
    let grid = generate(8, 80, LIGHT, DARK).unwrap();
    assert_eq!(grid.height(), 640);
    assert_eq!(grid.width(), 640);
    for y in 0..80 {
        for x in 0..80 {
            assert_eq!(grid.pixel(x, y), Some(LIGHT.as_bytes()));
        }
        for x in 80..160 {
            assert_eq!(grid.pixel(x, y), Some(DARK.as_bytes()));
        }
    }
    // second band starts dark
    assert_eq!(grid.pixel(0, 80), Some(DARK.as_bytes()));
}

#[test]
fn single_cell_with_equal_colors_is_flat() {
    let hl = Color::rgba(50, 50, 200, 80);
    let grid = generate(1, 80, hl, hl).unwrap();
    assert_eq!(grid.mode(), ColorMode::Rgba);
    assert_eq!(grid.height(), 80);
    assert_eq!(grid.width(), 80);
    for px in grid.to_raw().chunks(4) {
        assert_eq!(px, &[50, 50, 200, 80]);
    }
}

#[test]
fn invalid_inputs_are_errors() {
    assert!(matches!(generate(0, 1, LIGHT, DARK), Err(Error::InvalidDimension(_))));
    assert!(matches!(
        generate(2, 2, Color::rgba(0, 0, 0, 0), DARK),
        Err(Error::ChannelMismatch { light: 4, dark: 3 })
    ));
}
