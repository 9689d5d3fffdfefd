use guess_numbers::{
    digit_length, digit_sum, digits, factors, is_factor, is_perfect_cube, is_perfect_square,
    is_prime, random_in_range,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn every_listed_factor_divides(n in -100_000i64..100_000) {
        let list = factors(n);
        prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
        for f in &list {
            prop_assert!(is_factor(n, *f as i64));
        }
        if n != 0 {
            prop_assert_eq!(list.first().copied(), Some(1));
            prop_assert_eq!(list.last().copied(), Some(n.unsigned_abs()));
        }
    }

    #[test]
    fn factor_list_is_complete(n in 1i64..5_000) {
        let list = factors(n);
        let brute: Vec<u64> = (1..=n as u64).filter(|d| n as u64 % d == 0).collect();
        prop_assert_eq!(list, brute);
    }

    #[test]
    fn digits_rebuild_magnitude(n in any::<i64>()) {
        let rebuilt = digits(n)
            .into_iter()
            .fold(0u64, |acc, d| acc * 10 + u64::from(d));
        prop_assert_eq!(rebuilt, n.unsigned_abs());
        prop_assert_eq!(digit_length(n), n.unsigned_abs().to_string().len());
        prop_assert!(digit_sum(n) <= 9 * digit_length(n) as u64);
    }

    #[test]
    fn squares_and_cubes_are_detected(k in -2_000i64..2_000) {
        prop_assert!(is_perfect_square(k * k));
        prop_assert!(is_perfect_cube(k * k * k));
        if k > 1 {
            prop_assert!(!is_perfect_square(k * k + 1));
            prop_assert!(!is_prime(k * k));
        }
    }

    #[test]
    fn sampling_respects_bounds(
        low in -1_000i64..1_000,
        width in 0i64..50,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = (width / 2) as usize;
        let values = random_in_range(&mut rng, low, low + width, count).unwrap();
        prop_assert_eq!(values.len(), count);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), count);
        prop_assert!(values.iter().all(|v| (low..low + width).contains(v)));
    }
}
