mod common;

use checkout_core::application::checkout::CheckoutSession;
use checkout_core::application::pricing::{PricingEngine, compute_summary};
use checkout_core::domain::catalog::CouponCatalog;
use checkout_core::domain::money::Percentage;
use rust_decimal_macros::dec;

#[test]
fn test_no_coupon_total_formula() {
    for subtotal in common::random_subtotals(500) {
        let summary = compute_summary(subtotal, None).unwrap();
        assert_eq!(
            summary.total.value(),
            subtotal + dec!(5.99) + subtotal * dec!(0.08),
            "subtotal {subtotal}"
        );
    }
}

#[test]
fn test_invalid_coupon_matches_no_coupon() {
    let catalog = CouponCatalog::builtin();
    for subtotal in common::random_subtotals(200) {
        let baseline = compute_summary(subtotal, None).unwrap();
        for coupon in catalog.iter() {
            let invalid = coupon.clone().invalidated();
            assert_eq!(compute_summary(subtotal, Some(&invalid)).unwrap(), baseline);
        }
    }
}

#[test]
fn test_apply_remove_round_trip() {
    let catalog = CouponCatalog::builtin();
    for subtotal in common::random_subtotals(100) {
        let mut session = CheckoutSession::new(PricingEngine::default(), subtotal).unwrap();
        let baseline = *session.summary();
        for coupon in catalog.iter() {
            session.apply(coupon.clone()).unwrap();
            assert_eq!(session.remove().unwrap(), baseline);
        }
    }
}

#[test]
fn test_totals_never_negative_and_discount_capped() {
    let full = checkout_core::domain::coupon::Coupon::new(
        "x",
        "FULL",
        "everything",
        Percentage::new(dec!(100)).unwrap(),
    )
    .with_shipping_waiver(true);

    for subtotal in common::random_subtotals(500) {
        let summary = compute_summary(subtotal, Some(&full)).unwrap();
        assert!(summary.discount <= summary.subtotal);
        assert!(!summary.total.value().is_sign_negative() || summary.total.value().is_zero());
    }
}

#[test]
fn test_freeship_boundary() {
    let catalog = CouponCatalog::builtin();
    let freeship = catalog.find_by_code("FREESHIP");

    assert!(compute_summary(dec!(50), freeship).unwrap().shipping.value().is_zero());
    assert_eq!(
        compute_summary(dec!(49.99), freeship).unwrap().shipping.value(),
        dec!(5.99)
    );
}

#[test]
fn test_identical_inputs_identical_results() {
    let catalog = CouponCatalog::builtin();
    let coupon = catalog.find_by_code("SUMMER10");
    for subtotal in common::random_subtotals(100) {
        let first = compute_summary(subtotal, coupon).unwrap();
        let second = compute_summary(subtotal, coupon).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.total.value().serialize(),
            second.total.value().serialize()
        );
    }
}
