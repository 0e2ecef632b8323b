//! Prime-series and digit-power helpers.
//!
//! Trial division up to the integer square root, with the 6k±1 stride
//! after screening out multiples of 2 and 3. Signed inputs are accepted
//! so that negatives are simply "not prime" rather than a caller error.

/// Integer square root of a non-negative value.
fn integer_sqrt(value: i64) -> i64 {
    if value < 2 {
        return value.max(0);
    }
    let mut root = (value as f64).sqrt() as i64;
    // Float sqrt can land one off near perfect squares.
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    while root * root > value {
        root -= 1;
    }
    root
}

/// Whether `value` is a prime number. Negatives, zero, and one are not.
pub fn is_prime(value: i64) -> bool {
    if value <= 1 {
        return false;
    }
    if value <= 3 {
        return true;
    }
    if value % 2 == 0 || value % 3 == 0 {
        return false;
    }

    let limit = integer_sqrt(value);
    let mut candidate = 5;
    let mut step = 2;
    while candidate <= limit {
        if value % candidate == 0 {
            return false;
        }
        candidate += step;
        step = 6 - step; // alternate between 6k−1 and 6k+1 candidates
    }
    true
}

/// Primes less than or equal to `limit`, in ascending order.
pub fn prime_series(limit: i64) -> Vec<i64> {
    if limit < 2 {
        return Vec::new();
    }
    let mut primes = vec![2];
    let mut candidate = 3;
    while candidate <= limit {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate += 2;
    }
    primes
}

/// Twin prime pairs `(p, p + 2)` with `p + 2 <= limit`.
pub fn twin_prime_pairs(limit: i64) -> Vec<(i64, i64)> {
    let primes = prime_series(limit);
    primes
        .windows(2)
        .filter(|pair| pair[1] - pair[0] == 2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Whether `value` is an Armstrong (narcissistic) number: the sum of its
/// digits each raised to the digit count equals the value itself.
/// Negatives can never satisfy the property.
pub fn is_armstrong_number(value: i64) -> bool {
    if value < 0 {
        return false;
    }

    let mut digits = Vec::new();
    let mut remainder = value;
    loop {
        digits.push((remainder % 10) as u32);
        remainder /= 10;
        if remainder == 0 {
            break;
        }
    }

    let power = digits.len() as u32;
    // Accumulate in u128: a digit power can exceed i64 for wide inputs.
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == value as u128
}

/// Armstrong numbers from zero up to `limit`, ascending. A negative
/// limit yields an empty list.
pub fn armstrong_numbers(limit: i64) -> Vec<i64> {
    if limit < 0 {
        return Vec::new();
    }
    (0..=limit).filter(|&n| is_armstrong_number(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(is_prime(97));
        assert!(!is_prime(99));
    }

    #[test]
    fn test_is_prime_larger_values() {
        assert!(is_prime(7919)); // 1000th prime
        assert!(!is_prime(7917));
        assert!(is_prime(104_729)); // 10000th prime
        assert!(!is_prime(104_730));
    }

    #[test]
    fn test_prime_series() {
        assert_eq!(prime_series(1), Vec::<i64>::new());
        assert_eq!(prime_series(2), vec![2]);
        assert_eq!(prime_series(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(prime_series(100).len(), 25);
    }

    #[test]
    fn test_twin_prime_pairs() {
        assert_eq!(twin_prime_pairs(20), vec![(3, 5), (5, 7), (11, 13), (17, 19)]);
        // The bound applies to the second element: (29, 31) needs limit >= 31.
        assert!(!twin_prime_pairs(30).contains(&(29, 31)));
        assert!(twin_prime_pairs(31).contains(&(29, 31)));
    }

    #[test]
    fn test_is_armstrong_number() {
        assert!(is_armstrong_number(0));
        assert!(is_armstrong_number(5));
        assert!(is_armstrong_number(153));
        assert!(is_armstrong_number(9474));
        assert!(!is_armstrong_number(154));
        assert!(!is_armstrong_number(-153));
    }

    #[test]
    fn test_armstrong_numbers() {
        assert_eq!(armstrong_numbers(-1), Vec::<i64>::new());
        assert_eq!(
            armstrong_numbers(1000),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407]
        );
    }
}
