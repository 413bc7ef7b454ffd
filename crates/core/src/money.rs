//! Price helpers.
//!
//! Prices are exact decimals; rendering always uses two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};

/// Sum a sequence of prices. An empty sequence sums to zero.
///
/// Fails with [`DomainError::TotalOverflow`] instead of panicking when the
/// sum leaves the decimal range.
pub fn sum_prices<I>(prices: I) -> DomainResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    prices.into_iter().try_fold(Decimal::ZERO, add_price)
}

/// Add one price to a running total.
pub fn add_price(total: Decimal, price: Decimal) -> DomainResult<Decimal> {
    total.checked_add(price).ok_or(DomainError::TotalOverflow)
}

/// Format a price for display (`1.5` -> `"1.50"`), without currency symbol.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum_prices(Vec::new()), Ok(Decimal::ZERO));
    }

    #[test]
    fn sum_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic.
        assert_eq!(sum_prices([dec!(0.1), dec!(0.2)]), Ok(dec!(0.3)));
    }

    #[test]
    fn sum_past_decimal_max_is_an_error() {
        assert_eq!(
            sum_prices([Decimal::MAX, Decimal::MAX]),
            Err(DomainError::TotalOverflow)
        );
        assert_eq!(add_price(Decimal::MAX, dec!(1)), Err(DomainError::TotalOverflow));
    }

    #[test]
    fn sum_up_to_decimal_max_is_fine() {
        assert_eq!(sum_prices([Decimal::MAX, Decimal::ZERO]), Ok(Decimal::MAX));
    }

    #[test]
    fn format_uses_two_places() {
        assert_eq!(format_price(dec!(1.5)), "1.50");
        assert_eq!(format_price(dec!(0)), "0.00");
        assert_eq!(format_price(dec!(12.345)), "12.35");
    }
}
