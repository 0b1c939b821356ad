use std::collections::BTreeSet;

use crate::{deck::DeckSpec, Error};

const PROGRESS_STEP: usize = 100;

// Shuffle count until the card starting at start comes back to its position.
pub fn cycle_len(deck: &DeckSpec, start: usize) -> usize {
    let mut pos = deck.next_position(start);
    let mut count = 1;
    while pos != start {
        pos = deck.next_position(pos);
        count += 1;
    }

    count
}

pub fn unique_frequencies<F: FnMut(usize, usize)>(
    deck: &DeckSpec,
    mut progress: F,
) -> BTreeSet<usize> {
    let total = deck.cut();
    let mut frequencies = BTreeSet::new();
    for (ind, start) in deck.tracked_positions().enumerate() {
        frequencies.insert(cycle_len(deck, start));
        let done = ind + 1;
        if done % PROGRESS_STEP == 0 && done != total {
            progress(done, total);
        }
    }
    progress(total, total);

    frequencies
}

pub fn period(frequencies: &BTreeSet<usize>) -> Result<usize, Error> {
    if frequencies.is_empty() {
        return Err(Error::EmptyFrequencySet);
    }

    frequencies.iter().try_fold(1, |lcm, f| {
        (lcm / gcd(lcm, *f))
            .checked_mul(*f)
            .ok_or(Error::PeriodOverflow)
    })
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }

    a
}

#[test]
fn test_cycle_len_known_deck() {
    let deck = DeckSpec::new(12, 5).unwrap();
    assert!(cycle_len(&deck, 7) == 4);
    assert!(cycle_len(&deck, 8) == 6);
    assert!(cycle_len(&deck, 9) == 2);
    assert!(cycle_len(&deck, 10) == 6);
    assert!(cycle_len(&deck, 11) == 6);
}

#[test]
fn test_cycle_closes_at_reported_length_and_no_earlier() {
    for (size, cut) in [(12, 5), (16, 7), (20, 3), (52, 26)] {
        let deck = DeckSpec::new(size, cut).unwrap();
        for start in deck.tracked_positions() {
            let len = cycle_len(&deck, start);
            let mut pos = start;
            for _ in 1..len {
                pos = deck.next_position(pos);
                assert!(pos != start);
            }
            assert!(deck.next_position(pos) == start);
        }
    }
}

#[test]
fn test_unique_frequencies_collapses_duplicates() {
    let deck = DeckSpec::new(12, 5).unwrap();
    let frequencies = unique_frequencies(&deck, |_, _| {});
    assert!(frequencies.into_iter().collect::<Vec<_>>() == vec![2, 4, 6]);
}

#[test]
fn test_unique_frequencies_reports_progress() {
    let deck = DeckSpec::new(500, 250).unwrap();
    let mut reports = Vec::new();
    unique_frequencies(&deck, |done, total| reports.push((done, total)));
    assert!(reports == vec![(100, 250), (200, 250), (250, 250)]);
}

#[test]
fn test_unique_frequencies_reports_completion_once() {
    let deck = DeckSpec::new(400, 200).unwrap();
    let mut reports = Vec::new();
    unique_frequencies(&deck, |done, total| reports.push((done, total)));
    assert!(reports == vec![(100, 200), (200, 200)]);
}

#[test]
fn test_period_folds_lcm() {
    assert!(period(&BTreeSet::from([2, 3, 4])).unwrap() == 12);
    assert!(period(&BTreeSet::from([6, 10, 15])).unwrap() == 30);
    assert!(period(&BTreeSet::from([7])).unwrap() == 7);
}

#[test]
fn test_period_known_deck() {
    let deck = DeckSpec::new(12, 5).unwrap();
    let frequencies = unique_frequencies(&deck, |_, _| {});
    assert!(period(&frequencies).unwrap() == 12);
}

#[test]
fn test_period_rejects_empty_set() {
    assert!(matches!(
        period(&BTreeSet::new()),
        Err(Error::EmptyFrequencySet)
    ));
}

#[test]
fn test_period_overflow_is_an_error() {
    let frequencies = BTreeSet::from([3, usize::MAX - 1]);
    assert!(matches!(period(&frequencies), Err(Error::PeriodOverflow)));
}

#[test]
fn test_period_matches_simulated_decks() {
    // One literal in-shuffle of a card list laid out top first: the bottom
    // cut cards and the cut cards weave into a block on top, the rest
    // follows below.
    fn shuffle_once(deck: &[usize], cut: usize) -> Vec<usize> {
        let lower = deck.len() - cut;
        deck[lower..]
            .iter()
            .zip(&deck[..cut])
            .flat_map(|(under, cut_card)| [*under, *cut_card])
            .chain(deck[cut..lower].iter().copied())
            .collect()
    }

    for size in 2..=16 {
        for cut in 1..=(size / 2) {
            let deck = DeckSpec::new(size, cut).unwrap();
            let expect = period(&unique_frequencies(&deck, |_, _| {})).unwrap();

            let original = (0..size).collect::<Vec<_>>();
            let mut cards = shuffle_once(&original, cut);
            let mut shuffles = 1;
            while cards != original {
                cards = shuffle_once(&cards, cut);
                shuffles += 1;
            }
            assert!(
                shuffles == expect,
                "period mismatch for size {} cut {}",
                size,
                cut
            );
        }
    }
}
