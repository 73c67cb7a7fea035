//! Naive recursive Fibonacci

/// Largest `n` whose Fibonacci number fits in a `u64`
pub const MAX_INPUT: u32 = 93;

/// Compute the n-th Fibonacci number by double recursion, no memoization.
///
/// Callers must keep `n <= MAX_INPUT`; the driver checks this before calling.
pub fn fibonacci(n: u32) -> u64 {
    // BREAKPOINT_MARKER: fibonacci_body
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn test_sample_inputs() {
        assert_eq!(fibonacci(5), 5);
        assert_eq!(fibonacci(8), 21);
        assert_eq!(fibonacci(10), 55);
    }

    #[test]
    fn test_recurrence_holds() {
        for n in 2..=25 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2), "n = {n}");
        }
    }

    #[test]
    fn test_first_terms() {
        let terms: Vec<u64> = (0..12).map(fibonacci).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }
}
