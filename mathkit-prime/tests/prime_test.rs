use mathkit_prime::{factors, is_prime, primes};

#[test]
fn test_primes_returns_only_prime_numbers() {
    for n in 0..100 {
        let composites: Vec<u64> = primes(n).into_iter().filter(|&p| !is_prime(p)).collect();
        assert!(
            composites.is_empty(),
            "non prime numbers found in return from primes({}): {:?}",
            n,
            composites
        );
    }
}

#[test]
fn test_primes_misses_no_prime() {
    for n in 0..100 {
        let ps = primes(n);
        for k in 0..=n {
            assert_eq!(ps.contains(&k), is_prime(k), "primes({}) disagrees on {}", n, k);
        }
    }
}

#[test]
fn test_one_is_not_a_prime_number() {
    assert!(primes(1).is_empty(), "one is not a prime number");
}

#[test]
fn test_factors_are_ascending_primes() {
    for n in 2..2000 {
        let fs = factors(n);
        assert!(!fs.is_empty());
        assert!(fs.iter().all(|&(p, e)| is_prime(p) && e >= 1));
        assert!(fs.pairs().windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(fs.product(), n);
    }
}
