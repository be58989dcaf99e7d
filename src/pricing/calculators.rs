//! Core billing calculation functions.
//!
//! Pure functions for quote math - no network access. The orchestration in
//! `services` feeds them data fetched from the hotel backend.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DiscountKind, ExtraServiceLine};

/// Tax rate applied when a request does not name one, in percent.
pub const DEFAULT_TAX_RATE: Decimal = dec!(12);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Applied only when building responses; internal computation stays
/// unrounded.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Billable stay length in whole days.
///
/// Calendar difference floored at one: same-day and inverted ranges bill as
/// a single unit. The same rule applies to every resource kind - nightly,
/// per-use, and per-event rates all multiply by this value.
pub fn stay_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days();
    if days <= 0 {
        1
    } else {
        days
    }
}

/// Full pricing breakdown for one reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBreakdown {
    pub days: i64,
    pub base_subtotal: Decimal,
    pub service_subtotal: Decimal,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// Invoice issuance rejects any breakdown whose total is zero or
    /// negative.
    pub fn is_billable(&self) -> bool {
        self.total > Decimal::ZERO
    }
}

/// Derive the billable breakdown for a reservation.
///
/// The discount is applied as given. The UI keeps percentages within
/// [0, 100] and fixed discounts within [0, subtotal]; nothing here enforces
/// those bounds, so oversized discounts drive the total negative and fail
/// the issuance check.
pub fn build_quote(
    unit_price: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    lines: &[ExtraServiceLine],
    discount: Decimal,
    discount_kind: DiscountKind,
    tax_rate: Decimal,
) -> QuoteBreakdown {
    let days = stay_days(start, end);
    let base_subtotal = unit_price * Decimal::from(days);
    let service_subtotal: Decimal = lines.iter().map(|line| line.line_total).sum();
    let subtotal = base_subtotal + service_subtotal;

    let discount_amount = match discount_kind {
        DiscountKind::Percentage => subtotal * discount / dec!(100),
        DiscountKind::Fixed => discount,
    };

    let after_discount = subtotal - discount_amount;
    let tax_amount = after_discount * tax_rate / dec!(100);

    QuoteBreakdown {
        days,
        base_subtotal,
        service_subtotal,
        subtotal,
        discount_amount,
        tax_amount,
        total: after_discount + tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== stay_days tests ====================

    #[test]
    fn test_stay_days_forward_range() {
        assert_eq!(stay_days(date(2024, 3, 1), date(2024, 3, 4)), 3);
        assert_eq!(stay_days(date(2024, 1, 1), date(2024, 1, 2)), 1);
        assert_eq!(stay_days(date(2024, 2, 27), date(2024, 3, 2)), 4); // leap year
    }

    #[test]
    fn test_stay_days_same_day_bills_one() {
        assert_eq!(stay_days(date(2024, 3, 1), date(2024, 3, 1)), 1);
    }

    #[test]
    fn test_stay_days_inverted_range_bills_one() {
        assert_eq!(stay_days(date(2024, 3, 4), date(2024, 3, 1)), 1);
    }

    // ==================== build_quote tests ====================

    #[test]
    fn test_quote_room_with_service_and_fixed_discount() {
        // 100/night, 3 nights, one line of 50, fixed discount 10, tax 12%
        let lines = vec![ExtraServiceLine::priced(4, 1, dec!(50))];
        let quote = build_quote(
            dec!(100),
            date(2024, 3, 1),
            date(2024, 3, 4),
            &lines,
            dec!(10),
            DiscountKind::Fixed,
            dec!(12),
        );

        assert_eq!(quote.days, 3);
        assert_eq!(quote.base_subtotal, dec!(300));
        assert_eq!(quote.service_subtotal, dec!(50));
        assert_eq!(quote.subtotal, dec!(350));
        assert_eq!(quote.discount_amount, dec!(10));
        assert_eq!(quote.tax_amount, dec!(40.8));
        assert_eq!(quote.total, dec!(380.8));
        assert!(quote.is_billable());
    }

    #[test]
    fn test_quote_total_invariant() {
        let lines = vec![
            ExtraServiceLine::priced(1, 2, dec!(25)),
            ExtraServiceLine::priced(2, 1, dec!(80)),
        ];
        let quote = build_quote(
            dec!(75),
            date(2024, 6, 10),
            date(2024, 6, 15),
            &lines,
            dec!(20),
            DiscountKind::Percentage,
            dec!(12),
        );

        let after_discount = quote.subtotal - quote.discount_amount;
        assert_eq!(quote.total, after_discount + after_discount * dec!(12) / dec!(100));
    }

    #[test]
    fn test_quote_percentage_discount() {
        let quote = build_quote(
            dec!(200),
            date(2024, 5, 1),
            date(2024, 5, 3),
            &[],
            dec!(25),
            DiscountKind::Percentage,
            dec!(0),
        );
        assert_eq!(quote.subtotal, dec!(400));
        assert_eq!(quote.discount_amount, dec!(100));
        assert_eq!(quote.total, dec!(300));
    }

    #[test]
    fn test_quote_full_percentage_discount_is_not_billable() {
        // 100% discount at tax 0 lands exactly on zero, which must reject
        let quote = build_quote(
            dec!(150),
            date(2024, 5, 1),
            date(2024, 5, 2),
            &[],
            dec!(100),
            DiscountKind::Percentage,
            dec!(0),
        );
        assert_eq!(quote.total, Decimal::ZERO);
        assert!(!quote.is_billable());
    }

    #[test]
    fn test_quote_oversized_fixed_discount_goes_negative() {
        let quote = build_quote(
            dec!(50),
            date(2024, 5, 1),
            date(2024, 5, 2),
            &[],
            dec!(500),
            DiscountKind::Fixed,
            dec!(12),
        );
        assert!(quote.total < Decimal::ZERO);
        assert!(!quote.is_billable());
    }

    #[test]
    fn test_quote_zero_unit_price_from_malformed_upstream() {
        // Unparseable prices decode to zero upstream; the quote proceeds
        let lines = vec![ExtraServiceLine::priced(4, 1, dec!(50))];
        let quote = build_quote(
            Decimal::ZERO,
            date(2024, 3, 1),
            date(2024, 3, 4),
            &lines,
            Decimal::ZERO,
            DiscountKind::Fixed,
            dec!(12),
        );
        assert_eq!(quote.base_subtotal, Decimal::ZERO);
        assert_eq!(quote.subtotal, dec!(50));
        assert_eq!(quote.total, dec!(56));
    }

    #[test]
    fn test_quote_same_day_table_booking_bills_one_unit() {
        let quote = build_quote(
            dec!(35),
            date(2024, 7, 9),
            date(2024, 7, 9),
            &[],
            Decimal::ZERO,
            DiscountKind::Fixed,
            DEFAULT_TAX_RATE,
        );
        assert_eq!(quote.days, 1);
        assert_eq!(quote.base_subtotal, dec!(35));
        assert_eq!(quote.total, dec!(39.2));
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding() {
        assert_eq!(round_money(dec!(2.125), 2), dec!(2.12)); // rounds to even
        assert_eq!(round_money(dec!(2.135), 2), dec!(2.14)); // rounds to even
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }
}
