use guess_hints::{ConceptManager, Feedback, Generation, HintError};
use guess_numbers::{factors, is_prime, SeededRandom};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn factor_example_twelve() {
    assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);

    let manager = ConceptManager::new(12);
    let hints = manager
        .generate_hints(Generation::Sampled, &mut SeededRandom::new(1))
        .unwrap();
    for factor in [2, 3, 4, 6] {
        let expected = format!("{factor} is a factor of the number.");
        assert!(hints.contains(&expected), "missing {expected:?}");
    }

    let count_hint = "The number of factors it has is 6.";
    assert!(hints.iter().any(|h| h == count_hint));
    assert_eq!(manager.evaluate_guess(24, count_hint).unwrap(), Feedback::Bad);
    assert_eq!(manager.evaluate_guess(12, count_hint).unwrap(), Feedback::Good);
}

#[test]
fn prime_example_seven() {
    assert!(is_prime(7));
    let manager = ConceptManager::new(7);
    let hints = manager
        .generate_hints(Generation::Sampled, &mut SeededRandom::new(1))
        .unwrap();
    let main = "The number is a prime number.";
    assert_eq!(hints.iter().filter(|h| *h == main).count(), 1);
    assert_eq!(manager.evaluate_guess(7, main).unwrap(), Feedback::Good);
    assert_eq!(manager.evaluate_guess(8, main).unwrap(), Feedback::Bad);
}

#[test]
fn even_odd_example_four() {
    let manager = ConceptManager::new(4);
    let hints = manager
        .generate_hints(Generation::Sampled, &mut SeededRandom::new(1))
        .unwrap();
    let hint = "The number is an even number.";
    assert!(hints.iter().any(|h| h == hint));
    assert_eq!(manager.evaluate_guess(10, hint).unwrap(), Feedback::Good);
    assert_eq!(manager.evaluate_guess(7, hint).unwrap(), Feedback::Bad);
}

#[test]
fn unknown_text_is_surfaced() {
    let manager = ConceptManager::new(4);
    for bogus in ["", "hello", "The number is a prime.", "x is a factor of the number."] {
        assert!(matches!(
            manager.evaluate_guess(4, bogus),
            Err(HintError::UnrecognizedHint(_))
        ));
    }
}

proptest! {
    #[test]
    fn winning_number_passes_its_own_hints(n in -5_000i64..5_000, seed in any::<u64>()) {
        let manager = ConceptManager::new(n);
        for generation in [Generation::Sampled, Generation::Exhaustive] {
            let hints = manager
                .generate_hints(generation, &mut SeededRandom::new(seed))
                .unwrap();
            for hint in &hints {
                prop_assert_eq!(manager.evaluate_guess(n, hint).unwrap(), Feedback::Good);
            }
        }
    }

    #[test]
    fn evaluation_does_not_depend_on_the_evaluator(
        n in 1i64..2_000,
        guess in -2_000i64..2_000,
        other in -2_000i64..2_000,
    ) {
        let hints = ConceptManager::new(n)
            .generate_hints(Generation::Exhaustive, &mut SeededRandom::new(0))
            .unwrap();
        let original = ConceptManager::new(n);
        let stranger = ConceptManager::new(other);
        for hint in &hints {
            prop_assert_eq!(
                original.evaluate_guess(guess, hint).unwrap(),
                stranger.evaluate_guess(guess, hint).unwrap()
            );
        }
    }

    #[test]
    fn generation_is_reproducible(n in -5_000i64..5_000, seed in any::<u64>()) {
        let manager = ConceptManager::new(n);
        let a = manager.generate_hints(Generation::Sampled, &mut SeededRandom::new(seed)).unwrap();
        let b = manager.generate_hints(Generation::Sampled, &mut SeededRandom::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
