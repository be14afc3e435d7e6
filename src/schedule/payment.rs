//! Annuity payment formula shared by the simulator and the sensitivity table

/// Fixed periodic payment amortizing `balance` over `months` at a constant
/// annual rate (percent).
///
/// Standard annuity formula: `PMT = P * r(1+r)^n / ((1+r)^n - 1)` with
/// `r` the monthly rate. A zero rate degenerates to straight-line `P / n`.
pub fn annuity_payment(balance: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return balance;
    }
    if annual_rate_pct.abs() < 1e-12 {
        return balance / months as f64;
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(months as i32);
    balance * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let pmt = annuity_payment(120_000.0, 0.0, 12);
        assert_relative_eq!(pmt, 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_textbook_payment() {
        // 1,200,000 at 12% annual over 12 months: r = 0.01,
        // PMT = 1.2M * 0.01 * 1.01^12 / (1.01^12 - 1) ≈ 106,618.55
        let pmt = annuity_payment(1_200_000.0, 12.0, 12);
        assert_relative_eq!(pmt, 106_618.55, epsilon = 0.01);
    }

    #[test]
    fn test_single_month_pays_balance_plus_interest() {
        // With one month remaining the payment is balance * (1 + r)
        let pmt = annuity_payment(10_000.0, 12.0, 1);
        assert_relative_eq!(pmt, 10_100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_months_returns_balance() {
        assert_eq!(annuity_payment(5_000.0, 8.0, 0), 5_000.0);
    }

    #[test]
    fn test_higher_rate_means_higher_payment() {
        let low = annuity_payment(100_000.0, 5.0, 120);
        let high = annuity_payment(100_000.0, 9.0, 120);
        assert!(high > low);
    }
}
