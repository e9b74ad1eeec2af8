//! `mathkit-prime`: prime discovery and integer factorization.
//!
//! Primes come from a sieve of Eratosthenes; factorization trial-divides by
//! sieved primes up to the square root of the number.

use std::collections::BTreeSet;
use std::fmt;

/// Largest bound the factorizer sieves up to; larger divisors are tried by
/// stepping through odd candidates instead.
const FACTOR_SIEVE_LIMIT: u64 = 1 << 20;

/// Marks composites in `0..=limit`; `sieve[i]` is true when `i` is prime.
fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }
    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            for j in (i * i..=limit).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }
    is_prime
}

/// Integer square root, rounded down.
fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// Largest `n` accepted by [`primes`]; the sieve holds one flag per integer.
pub const MAX_PRIMES_BOUND: u64 = 1 << 30;

/// All primes less than or equal to `n`.
///
/// # Panics
///
/// If `n` exceeds [`MAX_PRIMES_BOUND`].
pub fn primes(n: u64) -> BTreeSet<u64> {
    assert!(
        n <= MAX_PRIMES_BOUND,
        "primes bound {} exceeds {}",
        n,
        MAX_PRIMES_BOUND
    );
    if n < 2 {
        return BTreeSet::new();
    }
    let limit = n as usize;
    let found: BTreeSet<u64> = sieve(limit)
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| p.then_some(i as u64))
        .collect();
    log::debug!("Sieved {} primes up to {}", found.len(), n);
    found
}

/// Primality by trial division.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Prime factorization as ascending `(prime, exponent)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Factorization {
    factors: Vec<(u64, u32)>,
}

impl Factorization {
    pub fn pairs(&self) -> &[(u64, u32)] {
        &self.factors
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (u64, u32)> {
        self.factors.iter()
    }

    /// Multiplies the factors back together (1 for an empty factorization).
    pub fn product(&self) -> u64 {
        self.factors
            .iter()
            .map(|&(p, e)| p.pow(e))
            .product()
    }

    fn divide_out(&mut self, remainder: &mut u64, p: u64) {
        let mut exponent = 0;
        while *remainder % p == 0 {
            *remainder /= p;
            exponent += 1;
        }
        if exponent > 0 {
            log::trace!("Found factor {}^{}", p, exponent);
            self.factors.push((p, exponent));
        }
    }
}

impl IntoIterator for Factorization {
    type Item = (u64, u32);
    type IntoIter = std::vec::IntoIter<(u64, u32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

impl fmt::Display for Factorization {
    /// Renders as `2^2 * 3 * 7`; exponents of 1 are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(p, e)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            if e > 1 {
                write!(f, "{}^{}", p, e)?;
            } else {
                write!(f, "{}", p)?;
            }
        }
        Ok(())
    }
}

/// Factors `n` into primes. `factors(0)` and `factors(1)` are empty.
pub fn factors(n: u64) -> Factorization {
    let mut result = Factorization::default();
    if n < 2 {
        return result;
    }

    let mut remainder = n;
    let bound = isqrt(n).min(FACTOR_SIEVE_LIMIT);
    for p in primes(bound) {
        if p > remainder / p {
            break;
        }
        result.divide_out(&mut remainder, p);
    }

    // Divisors past the sieve: odd candidates only.
    let mut d = FACTOR_SIEVE_LIMIT + 1;
    while bound == FACTOR_SIEVE_LIMIT && d <= remainder / d {
        result.divide_out(&mut remainder, d);
        d += 2;
    }

    if remainder > 1 {
        let last = remainder;
        result.divide_out(&mut remainder, last);
    }
    result
}
