//! Algebraic laws of unit combination, checked over seeded random units

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arms_measure::{Exponent, Unit, UnitError};

const DIMENSIONS: [&str; 5] = ["length", "mass", "time", "current", "amount"];
const SAMPLES: usize = 500;

fn random_unit(rng: &mut StdRng, max_exponent: i32) -> Unit {
    let mut pairs = Vec::new();
    for dimension in DIMENSIONS {
        if rng.gen_bool(0.6) {
            pairs.push((dimension, rng.gen_range(-max_exponent..=max_exponent)));
        }
    }
    Unit::from_exponents(pairs).unwrap()
}

fn assert_normalized(unit: &Unit) {
    assert!(
        unit.dimensions().all(|(_, exponent)| !exponent.is_zero()),
        "zero exponent stored in {:?}",
        unit
    );
}

#[test]
fn test_identity_and_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    let empty = Unit::dimensionless();

    for _ in 0..SAMPLES {
        let u = random_unit(&mut rng, 5);

        assert_eq!(u.multiply(&empty).unwrap(), u);
        assert_eq!(u.divide(&u).unwrap(), empty);

        let cancelled = u.multiply(&empty.divide(&u).unwrap()).unwrap();
        assert!(cancelled.is_dimensionless());
        assert_eq!(cancelled.len(), 0);
    }
}

#[test]
fn test_multiply_commutes() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..SAMPLES {
        let a = random_unit(&mut rng, 5);
        let b = random_unit(&mut rng, 5);

        assert_eq!(a.multiply(&b), b.multiply(&a));
    }
}

#[test]
fn test_multiply_associates() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..SAMPLES {
        let a = random_unit(&mut rng, 2);
        let b = random_unit(&mut rng, 2);
        let c = random_unit(&mut rng, 2);

        let left = a.multiply(&b).unwrap().multiply(&c);
        let right = a.multiply(&b.multiply(&c).unwrap());
        assert_eq!(left, right);
    }
}

#[test]
fn test_results_stay_normalized_and_in_range() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..SAMPLES {
        let a = random_unit(&mut rng, 3);
        let b = random_unit(&mut rng, 3);

        for result in [a.multiply(&b), a.divide(&b)] {
            match result {
                Ok(unit) => {
                    assert_normalized(&unit);
                    assert!(unit
                        .dimensions()
                        .all(|(_, e)| Exponent::contains(e.value())));
                }
                Err(error) => assert!(matches!(error, UnitError::ExponentOutOfRange { .. })),
            }
        }
    }
}

#[test]
fn test_power_root_inverse() {
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..SAMPLES {
        let u = random_unit(&mut rng, 1);
        for n in 2..=5 {
            let raised = u.power(n).unwrap();
            assert_normalized(&raised);
            assert_eq!(raised.root(n).unwrap(), u);
            assert_eq!(raised.root(n).unwrap().power(n).unwrap(), raised);
        }
    }
}

#[test]
fn test_power_zero_and_one() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..SAMPLES {
        let u = random_unit(&mut rng, 5);

        assert_eq!(u.power(0).unwrap(), Unit::dimensionless());
        assert_eq!(u.power(1).unwrap(), u);
        assert_eq!(u.root(1).unwrap(), u);
    }
}

#[test]
fn test_allowed_powers_agree_with_power() {
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..SAMPLES {
        let u = random_unit(&mut rng, 5);
        let allowed = u.allowed_powers();

        assert!(allowed.contains(&-1) && allowed.contains(&0) && allowed.contains(&1));
        for n in -5..=5 {
            assert_eq!(allowed.contains(&n), u.power(n).is_ok());
        }
    }
}
