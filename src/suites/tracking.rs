use super::qualified;
use crate::schema::ResultValue;

pub const SUITE: &str = "TrackingSuite";

/// The 20th Fibonacci number.
pub fn fibonacci_result() -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..20 {
        (a, b) = (b, a + b);
    }
    a
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
}

/// Primes below 100.
pub fn prime_count() -> usize {
    (2..100).filter(|&n| is_prime(n)).count()
}

/// Even numbers below 50.
pub fn list_length() -> usize {
    (0..50).filter(|x| x % 2 == 0).collect::<Vec<u32>>().len()
}

pub fn record() -> Vec<(String, ResultValue)> {
    vec![
        (
            qualified(SUITE, "track_fibonacci_result"),
            ResultValue::Single(vec![fibonacci_result() as f64]),
        ),
        (
            qualified(SUITE, "track_prime_count"),
            ResultValue::Single(vec![prime_count() as f64]),
        ),
        (
            qualified(SUITE, "track_list_length"),
            ResultValue::Single(vec![list_length() as f64]),
        ),
    ]
}
