use rand::Rng;

/// Shuffle `items` in place with an unbiased Fisher-Yates permutation.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick one element uniformly; `None` for an empty slice.
pub fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items: Vec<u32> = (0..10).collect();
            shuffle(&mut items, &mut rng);
            items
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7u8];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn every_position_is_reachable_for_every_element() {
        // 3 elements, 3 positions: each (element, position) pair must occur.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [[false; 3]; 3];
        for _ in 0..200 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut items, &mut rng);
            for (pos, &el) in items.iter().enumerate() {
                seen[el][pos] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
    }

    #[test]
    fn pick_returns_none_for_empty_slice() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: [u8; 0] = [];
        assert!(pick(&empty, &mut rng).is_none());
        assert_eq!(pick(&[5u8], &mut rng), Some(&5));
    }
}
