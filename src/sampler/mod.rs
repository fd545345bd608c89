use rand::seq::SliceRandom;
use rand::Rng;

use crate::dataset::Flower;


fn eligible(flowers: &[Flower]) -> Vec<&Flower> {
    flowers.iter().filter(|f| f.is_eligible()).collect()
}

pub fn pick_random(flowers: &[Flower]) -> Option<&Flower> {
    pick_random_with(flowers, &mut rand::thread_rng())
}

pub fn pick_random_with<'a, R: Rng + ?Sized>(
    flowers: &'a [Flower],
    rng: &mut R,
) -> Option<&'a Flower> {
    eligible(flowers).choose(rng).copied()
}

pub fn pick_random_subset(flowers: &[Flower], count: usize) -> Vec<&Flower> {
    pick_random_subset_with(flowers, count, &mut rand::thread_rng())
}

pub fn pick_random_subset_with<'a, R: Rng + ?Sized>(
    flowers: &'a [Flower],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Flower> {
    let mut candidates = eligible(flowers);
    if candidates.len() > count {
        candidates = candidates.choose_multiple(rng, count).copied().collect();
    }
    candidates.shuffle(rng);
    candidates
}

/// Case-insensitive substring search over names, family and category.
/// A blank term returns every flower.
pub fn search<'a>(flowers: &'a [Flower], term: &str) -> Vec<&'a Flower> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return flowers.iter().collect();
    }
    flowers.iter().filter(|f| f.matches(&term)).collect()
}
