use crate::error::SemigradError;
use crate::nn::init::Init;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_is_uniform_minus_one_to_one() {
    assert_eq!(
        Init::default(),
        Init::Uniform {
            low: -1.0,
            high: 1.0
        }
    );

    let sampler = Init::default().sampler().expect("default init is valid");
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let v = sampler.sample(&mut rng);
        assert!((-1.0..1.0).contains(&v), "sample {} out of range", v);
    }
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let sampler = Init::Normal { std_dev: 0.5 }.sampler().unwrap();
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a: Vec<f64> = (0..16).map(|_| sampler.sample(&mut rng_a)).collect();
    let b: Vec<f64> = (0..16).map(|_| sampler.sample(&mut rng_b)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_zero_std_normal_is_constant() {
    let sampler = Init::Normal { std_dev: 0.0 }.sampler().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(sampler.sample(&mut rng), 0.0);
}

#[test]
fn test_invalid_init_is_rejected() {
    let empty_range = Init::Uniform {
        low: 1.0,
        high: 1.0,
    };
    assert!(matches!(
        empty_range.sampler(),
        Err(SemigradError::InvalidConfig(_))
    ));

    let unbounded = Init::Uniform {
        low: f64::NEG_INFINITY,
        high: 0.0,
    };
    assert!(matches!(
        unbounded.sampler(),
        Err(SemigradError::InvalidConfig(_))
    ));

    let negative_std = Init::Normal { std_dev: -1.0 };
    assert!(matches!(
        negative_std.sampler(),
        Err(SemigradError::InvalidConfig(_))
    ));
}
