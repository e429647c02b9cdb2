use lifeboard_core::{Cell, Grid, LifeConfig, random_board};
use lifeboard_storage::{BoardOrigin, BoardStore, StorageError};
use std::fs;
use tempfile::tempdir;

fn seeded_rng(seed: u64) -> rand::rngs::SmallRng {
    LifeConfig {
        rng_seed: Some(seed),
        ..LifeConfig::default()
    }
    .seeded_rng()
}

#[test]
fn save_then_load_round_trips_every_cell() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    let mut rng = seeded_rng(7);
    let original = random_board(13, 9, &mut rng).expect("board");

    let path = store.save("roundtrip", &original).expect("save");
    assert!(path.exists());

    let loaded = store.load("roundtrip").expect("load");
    assert_eq!(loaded, original);
}

#[test]
fn load_accepts_an_already_suffixed_name() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    let grid = Grid::from_rows(vec![vec![Cell::Alive, Cell::Dead]]).expect("grid");
    store.save("edge", &grid).expect("save");

    let loaded = store.load("edge.json").expect("load with suffix");
    assert_eq!(loaded, grid);
}

#[test]
fn missing_board_maps_to_not_found() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    match store.load("absent") {
        Err(StorageError::NotFound(path)) => {
            assert!(path.ends_with("absent.json"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn load_or_generate_substitutes_a_seeded_random_board() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    let (grid_a, origin_a) = store
        .load_or_generate("absent", 20, 20, &mut seeded_rng(11))
        .expect("fallback a");
    let (grid_b, origin_b) = store
        .load_or_generate("absent", 20, 20, &mut seeded_rng(11))
        .expect("fallback b");

    assert_eq!(origin_a, BoardOrigin::Generated);
    assert_eq!(origin_b, BoardOrigin::Generated);
    assert_eq!((grid_a.width(), grid_a.height()), (20, 20));
    assert_eq!(grid_a, grid_b, "same seed must substitute the same board");
}

#[test]
fn load_or_generate_prefers_the_stored_board() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    let grid = Grid::from_rows(vec![vec![Cell::Alive; 4]; 2]).expect("grid");
    store.save("present", &grid).expect("save");

    let (loaded, origin) = store
        .load_or_generate("present", 20, 20, &mut seeded_rng(3))
        .expect("load");
    assert_eq!(origin, BoardOrigin::Loaded);
    assert_eq!(loaded, grid);
}

#[test]
fn corrupt_payloads_surface_as_format_errors() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    fs::write(store.resolve("broken"), "not json at all").expect("write corrupt file");
    assert!(matches!(
        store.load("broken"),
        Err(StorageError::Format(_))
    ));

    // Valid JSON, but not a 0/1 matrix.
    fs::write(store.resolve("bits"), "[[0,1],[0,9]]").expect("write bad bits");
    assert!(matches!(
        store.load("bits"),
        Err(StorageError::InvalidCell { value: 9 })
    ));

    // A corrupt file must not fall back to a random board.
    assert!(
        store
            .load_or_generate("broken", 20, 20, &mut seeded_rng(5))
            .is_err()
    );
}

#[test]
fn ragged_payloads_surface_as_dimension_errors() {
    let dir = tempdir().expect("tempdir");
    let store = BoardStore::new(dir.path());

    fs::write(store.resolve("ragged"), "[[0,1,0],[1]]").expect("write ragged file");
    assert!(matches!(
        store.load("ragged"),
        Err(StorageError::Dimension(_))
    ));
}
