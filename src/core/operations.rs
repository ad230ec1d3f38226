//! Stateless arithmetic operations behind the calculator menu.

use crate::utils::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails with [`CalcError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(base: f64, exponent: f64) -> Result<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::domain(
            "Zero raised to a negative power is undefined",
        ));
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(CalcError::domain(
            "A negative number raised to a fractional power has no real value",
        ));
    }
    let result = base.powf(exponent);
    if base.is_finite() && exponent.is_finite() && !result.is_finite() {
        return Err(CalcError::Overflow {
            operation: format!("power({}, {})", base, exponent),
        });
    }
    Ok(result)
}

/// `n!`, with `0! = 1`.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(CalcError::domain(
            "Factorial of a negative number is undefined",
        ));
    }
    (1..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i).ok_or_else(|| CalcError::Overflow {
            operation: format!("factorial({})", n),
        })
    })
}

/// Trial division up to the integer square root. Anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// `F(n)` with `F(0) = 0` and `F(1) = 1`.
pub fn fibonacci(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(CalcError::domain(
            "Fibonacci number for a negative index is undefined",
        ));
    }
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev.checked_add(curr).ok_or_else(|| CalcError::Overflow {
            operation: format!("fibonacci({})", n),
        })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// `n / 100`, or `None` for negative input.
pub fn percent(n: f64) -> Option<f64> {
    if n < 0.0 {
        return None;
    }
    Some(n / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(0.0, 5.0), -5.0);
        assert_eq!(multiply(4.0, 3.0), 12.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_float_precision() {
        assert!((add(0.1, 0.2) - 0.3).abs() < 1e-10);
        assert!((multiply(0.1, 0.1) - 0.01).abs() < 1e-10);
        assert!((divide(1.0, 3.0).unwrap() - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(add(1e15, 1e15), 2e15);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(1.0, 4.0).unwrap(), 0.25);
        assert_eq!(divide(-6.0, 3.0).unwrap(), -2.0);
        assert!(matches!(divide(1.0, 0.0), Err(CalcError::DivisionByZero)));
        assert!(matches!(divide(1.0, -0.0), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
        assert_eq!(power(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(power(4.0, 0.5).unwrap(), 2.0);
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(power(0.0, 0.0).unwrap(), 1.0);
        assert!(matches!(power(0.0, -2.0), Err(CalcError::Domain { .. })));
        assert!(matches!(power(-8.0, 0.5), Err(CalcError::Domain { .. })));
        assert!(matches!(power(10.0, 400.0), Err(CalcError::Overflow { .. })));
        assert!(matches!(power(-10.0, 401.0), Err(CalcError::Overflow { .. })));
        assert_eq!(power(10.0, -400.0).unwrap(), 0.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(7).unwrap(), 5040);
        assert!(factorial(34).is_ok());
        assert!(matches!(factorial(35), Err(CalcError::Overflow { .. })));
        assert!(matches!(factorial(-1), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(17));
        assert!(is_prime(97));
        assert!(!is_prime(4));
        assert!(!is_prime(25));
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
        assert!(is_prime(2_147_483_647));
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(1).unwrap(), 1);
        assert_eq!(fibonacci(5).unwrap(), 5);
        assert_eq!(fibonacci(10).unwrap(), 55);
        assert!(fibonacci(186).is_ok());
        assert!(matches!(fibonacci(187), Err(CalcError::Overflow { .. })));
        assert!(matches!(fibonacci(-1), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(50.0), Some(0.5));
        assert_eq!(percent(0.0), Some(0.0));
        assert_eq!(percent(250.0), Some(2.5));
        assert_eq!(percent(-1.0), None);
    }
}
