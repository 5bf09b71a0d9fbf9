use std::collections::HashSet;
use std::io::Cursor;

use rand::{rngs::StdRng, Rng, SeedableRng};
use startup_core::{Codec, GameConfig, Outcome, Session, SessionState, TargetSpec};
use startup_host::game::{run, setup_game};

// Seeded full-game simulations driving the core through the host layer.

fn all_labels(width: usize) -> Vec<String> {
    let codec = Codec::new(width).unwrap();
    (0..codec.size()).map(|i| codec.encode(i).unwrap()).collect()
}

#[test]
fn test_seeded_setups_never_overlap() {
    for seed in 0_u64..25_u64 {
        let session = Session::setup(&GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap();

        let mut seen = HashSet::new();
        for (name, placement) in &session.placements {
            assert!(placement.valid, "{name} was not placed cleanly (seed {seed})");
            for label in &placement.labels {
                assert!(seen.insert(label.clone()), "{label} reused (seed {seed})");
            }
        }
        assert_eq!(session.grid.occupied_count(), 9);
    }
}

#[test]
fn test_scanning_every_cell_finishes_the_game() {
    for seed in 0_u64..10_u64 {
        let config = GameConfig::default();
        let mut session = Session::setup(&config, StdRng::seed_from_u64(seed)).unwrap();

        let mut hits = 0;
        for label in all_labels(config.width) {
            let report = session.resolver.submit_guess(&label).unwrap();
            if !report.outcome.is_miss() {
                hits += 1;
            }
            if report.state == SessionState::Finished {
                break;
            }
        }
        assert_eq!(session.resolver.state(), SessionState::Finished, "seed {seed}");
        assert_eq!(hits, 9, "seed {seed}");
    }
}

#[test]
fn test_random_guessing_with_repeats_takes_exactly_the_cell_count_in_hits() {
    let mut rng = StdRng::seed_from_u64(99);
    let config = GameConfig {
        width: 10,
        targets: vec![
            TargetSpec::new("Pets.com", 2),
            TargetSpec::new("Webvan", 4),
            TargetSpec::new("Theranos", 5),
            TargetSpec::new("Quibi", 3),
        ],
        ..GameConfig::default()
    };
    let mut session = Session::setup(&config, StdRng::seed_from_u64(rng.gen())).unwrap();
    assert!(session.placements.iter().all(|(_, p)| p.valid));

    let labels = all_labels(config.width);
    let mut hits = 0;
    let mut kills = 0;
    while session.resolver.state() == SessionState::Playing {
        let guess = &labels[rng.gen_range(0..labels.len())];
        match session.resolver.submit_guess(guess).unwrap().outcome {
            Outcome::Miss => {}
            Outcome::Hit => hits += 1,
            Outcome::Destroyed => {
                hits += 1;
                kills += 1;
            }
        }
    }
    assert_eq!(hits, 2 + 4 + 5 + 3);
    assert_eq!(kills, 4);
    assert!(session.resolver.guesses() >= hits);
}

#[test]
fn test_full_run_through_the_host() {
    let config = GameConfig::default();
    let script = all_labels(config.width).join("\n") + "\n";
    let mut out = Vec::new();

    let guesses = run(&config, StdRng::seed_from_u64(7), &mut Cursor::new(script), &mut out).unwrap();
    assert!((9..=49).contains(&guesses));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Your goal is to sink 3 Startups.\nAdi, Golu, Amore\n"));
    assert_eq!(text.matches("Ouch! You sunk").count(), 3);
    assert!(text.contains("All Startups are dead!! Your stock is now worthless."));
    assert!(text.contains(&format!("{guesses} guesses.")));
}

#[test]
fn test_same_seed_same_board() {
    let config = GameConfig::default();
    let first = setup_game(&config, StdRng::seed_from_u64(1234), &mut Vec::new()).unwrap();
    let second = setup_game(&config, StdRng::seed_from_u64(1234), &mut Vec::new()).unwrap();
    assert_eq!(first.placements, second.placements);
    assert_eq!(first.resolver, second.resolver);
}
