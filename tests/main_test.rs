use cell_matrix::{CellMatrix, Evolve, GridView, MatrixError, Params};
use rand::SeedableRng;
use std::str::FromStr;

const SEED: u64 = 42;
const FILL_RATE: u32 = 35;
const WIDTH: usize = 30;
const HEIGHT: usize = 27;

fn params() -> Params {
    Params::new(FILL_RATE, WIDTH, HEIGHT).unwrap()
}

fn naive_next(m: &CellMatrix) -> Vec<bool> {
    let (w, h) = m.size();
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..h as isize {
        for x in 0..w as isize {
            let mut neibs = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if (dx, dy) != (0, 0)
                        && (0..w as isize).contains(&nx)
                        && (0..h as isize).contains(&ny)
                        && m.get_cell(nx as usize, ny as usize)
                    {
                        neibs += 1;
                    }
                }
            }
            let alive = m.get_cell(x as usize, y as usize);
            cells.push(neibs == 3 || (alive && neibs == 2));
        }
    }
    cells
}

fn cells(m: &CellMatrix) -> Vec<bool> {
    let (w, h) = m.size();
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| m.get_cell(x, y))
        .collect()
}

#[test]
fn test_seed_is_reproducible() {
    let a = CellMatrix::random(params(), Some(SEED)).unwrap();
    let b = CellMatrix::random(params(), Some(SEED)).unwrap();
    let c = CellMatrix::random(params(), Some(SEED + 1)).unwrap();
    assert_eq!(a, b);
    assert_ne!(cells(&a), cells(&c));

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let d = CellMatrix::new(params(), &mut rng).unwrap();
    assert_eq!(a, d);
}

#[test]
fn test_fill_rate_is_plausible() {
    let m = CellMatrix::random(Params::new(FILL_RATE, 100, 100).unwrap(), Some(SEED)).unwrap();
    let rate = m.population() as f64 / 10_000.;
    assert!((0.30..0.40).contains(&rate), "rate={}", rate);
}

#[test]
fn test_probability_bounds() {
    let dead = CellMatrix::random(Params::new(0, WIDTH, HEIGHT).unwrap(), Some(SEED)).unwrap();
    let full = CellMatrix::random(Params::new(100, WIDTH, HEIGHT).unwrap(), Some(SEED)).unwrap();
    assert_eq!(dead.population(), 0);
    assert_eq!(full.population(), WIDTH * HEIGHT);
}

#[test]
fn test_rejects_invalid_params() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let bad = Params {
        alive_probability_percent: 150,
        width: 3,
        height: 3,
    };
    assert_eq!(
        CellMatrix::new(bad, &mut rng),
        Err(MatrixError::ProbabilityOutOfRange(150))
    );
    let bad = Params {
        alive_probability_percent: 10,
        width: 0,
        height: 3,
    };
    assert!(matches!(
        CellMatrix::new(bad, &mut rng),
        Err(MatrixError::ZeroDimension { .. })
    ));
    assert!(CellMatrix::blank(3, 0).is_err());
}

#[test]
fn test_consistency_with_naive() {
    let mut m = CellMatrix::random(params(), Some(SEED)).unwrap();
    for _ in 0..50 {
        let expected = naive_next(&m);
        m.advance_generation();
        assert_eq!(cells(&m), expected, "generation {}", m.generation());
    }
    assert_eq!(m.size(), (WIDTH, HEIGHT));
}

#[test]
fn test_neighbours_in_range() {
    let m = CellMatrix::random(params(), Some(SEED)).unwrap();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            assert!(m.count_neighbors(x, y) <= 8);
        }
    }
}

#[test]
fn test_glider_stops_at_edge() {
    // Without wrapping the glider turns into a block in the corner.
    let mut m = CellMatrix::from_str(
        "
        .O....
        ..O...
        OOO...
        ......
        ......
        ......",
    )
    .unwrap();
    m.advance(40);
    assert_eq!(
        m.to_string(),
        "......\n......\n......\n......\n....OO\n....OO"
    );
}

#[test]
fn test_blinker_equals_itself_after_period() {
    const BLINKER: &str = "
        .....
        ..O..
        ..O..
        ..O..
        .....";
    let fresh = CellMatrix::from_str(BLINKER).unwrap();
    let mut stepped = CellMatrix::from_str(BLINKER).unwrap();
    stepped.advance(2);
    assert_eq!(stepped.to_string(), fresh.to_string());
    assert_eq!(stepped, fresh);
}
