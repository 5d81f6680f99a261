//! Numeric input tests
//!
//! Cleared inputs become zero; anything that does not parse is refused and
//! leaves form state untouched.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{coerce_amount, coerce_count, format_vnd, EntityForm, ProductForm};

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_cleared_numeric_fields_submit_zero() {
        let mut form = ProductForm::default();
        form.set_field("name", "Bàn phím cơ").unwrap();
        form.set_field("origin", "Đài Loan").unwrap();
        for field in ["stock", "purchase_cost", "sale_price"] {
            form.set_field(field, "12").unwrap();
            form.set_field(field, "").unwrap();
        }

        let json = serde_json::to_value(form.payload().unwrap()).unwrap();
        assert_eq!(json["stock"], 0);
        assert_eq!(json["GiaNhap"].as_f64(), Some(0.0));
        assert_eq!(json["price"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(Decimal::from(25_000_000)), "25,000,000 VNĐ");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_count_round_trips(value in 0u32..u32::MAX) {
            prop_assert_eq!(coerce_count("stock", &value.to_string()), Ok(value));
        }

        /// Arbitrary text never panics and never yields a negative amount
        #[test]
        fn prop_amount_never_negative(input in "\\PC{0,12}") {
            if let Ok(amount) = coerce_amount("price", &input) {
                prop_assert!(amount >= Decimal::ZERO);
            }
        }

        /// A refused edit keeps the previous stock
        #[test]
        fn prop_bad_stock_keeps_previous(previous in 0u32..10_000, junk in "[a-z]{1,8}") {
            let mut form = ProductForm::default();
            form.set_field("stock", &previous.to_string()).unwrap();
            prop_assert!(form.set_field("stock", &junk).is_err());
            prop_assert_eq!(form.stock, i64::from(previous));
        }
    }
}
