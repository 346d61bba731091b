use bigdecimal::{BigDecimal, RoundingMode};

pub const MONEY_SCALE: i64 = 2;

pub trait BigDecimalHelpers {
    /// Rounds half-up to two fractional digits, the scale of every money column.
    fn to_money(&self) -> BigDecimal;

    /// Renders with exactly two fractional digits, e.g. `"1500.00"` or `"0.00"`.
    fn to_money_string(&self) -> String;
}

impl BigDecimalHelpers for BigDecimal {
    fn to_money(&self) -> BigDecimal {
        self.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
    }

    // Built from the unscaled digits: Display drops the scale on zero.
    fn to_money_string(&self) -> String {
        let (digits, scale) = self.to_money().as_bigint_and_exponent();
        let raw = digits.to_string();
        let (sign, magnitude) = match raw.strip_prefix('-') {
            Some(magnitude) => ("-", magnitude),
            None => ("", raw.as_str()),
        };

        let mut cents = magnitude.to_string();
        if scale < MONEY_SCALE {
            cents.push_str(&"0".repeat((MONEY_SCALE - scale) as usize));
        }
        let cents = format!("{:0>3}", cents);
        let (whole, fraction) = cents.split_at(cents.len() - MONEY_SCALE as usize);

        format!("{}{}.{}", sign, whole, fraction)
    }
}
