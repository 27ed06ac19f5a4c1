use crate::domain::model::{Gtin, GtinKind};
use crate::utils::error::{GtinError, RestrictedPrefix, Result};

/// Rejects GTINs whose GS1 prefix is reserved for restricted circulation or
/// coupons.
///
/// Only GTIN-13 and GTIN-14 carry a GS1 prefix; GTIN-8 and GTIN-12 always
/// pass. In a GTIN-14 the prefix starts after the indicator digit.
pub fn check_prefix(gtin: &Gtin) -> Result<()> {
    let start = match gtin.kind() {
        GtinKind::Gtin8 | GtinKind::Gtin12 => return Ok(()),
        GtinKind::Gtin13 => 0,
        GtinKind::Gtin14 => 1,
    };

    let digits = gtin.digits();
    let restriction = match (digits[start], digits[start + 1]) {
        (2, _) | (0, 2..=4) => Some(RestrictedPrefix::RestrictedCirculation),
        (9, 8 | 9) => Some(RestrictedPrefix::Coupon98To99),
        (0, 5) => Some(RestrictedPrefix::Coupon05),
        _ => None,
    };

    match restriction {
        Some(reason) => {
            tracing::debug!("{} {} has {}", gtin.kind(), gtin, reason);
            Err(GtinError::RestrictedPrefix(reason))
        }
        None => Ok(()),
    }
}

pub fn is_legal_prefix(gtin: &Gtin) -> bool {
    check_prefix(gtin).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize;

    fn restriction_of(input: &str) -> Option<RestrictedPrefix> {
        check_prefix(&normalize(input).unwrap())
            .err()
            .and_then(|e| e.restriction())
    }

    #[test]
    fn test_short_kinds_always_legal() {
        assert!(is_legal_prefix(&normalize("20000004").unwrap()));
        assert!(is_legal_prefix(&normalize("051234567896").unwrap()));
        assert!(is_legal_prefix(&normalize("981234567891").unwrap()));
    }

    #[test]
    fn test_gtin13_coupon_05() {
        let gtin = normalize("5012345678900").unwrap();
        assert_eq!(gtin.digits()[0], 0);
        assert_eq!(gtin.digits()[1], 5);
        assert_eq!(
            check_prefix(&gtin),
            Err(GtinError::RestrictedPrefix(RestrictedPrefix::Coupon05))
        );
        assert_eq!(
            check_prefix(&gtin).unwrap_err().to_string(),
            "GS1 coupon prefix 05"
        );
    }

    #[test]
    fn test_gtin13_restricted_circulation() {
        for input in ["2012345678901", "3012345678901", "4012345678901"] {
            assert_eq!(
                restriction_of(input),
                Some(RestrictedPrefix::RestrictedCirculation),
                "{}",
                input
            );
        }
        assert_eq!(restriction_of("8719076050360"), None);
        assert_eq!(restriction_of("9780670022151"), None);
    }

    #[test]
    fn test_gtin14_skips_indicator() {
        assert_eq!(
            restriction_of("10212345678904"),
            Some(RestrictedPrefix::RestrictedCirculation)
        );
        assert_eq!(
            restriction_of("12123456789012"),
            Some(RestrictedPrefix::RestrictedCirculation)
        );
        assert_eq!(
            restriction_of("19812345678901"),
            Some(RestrictedPrefix::Coupon98To99)
        );
        assert_eq!(
            restriction_of("39912345678901"),
            Some(RestrictedPrefix::Coupon98To99)
        );
        assert_eq!(
            restriction_of("10512345678901"),
            Some(RestrictedPrefix::Coupon05)
        );
        assert_eq!(restriction_of("50614141000994"), None);
        assert_eq!(restriction_of("08719076050360"), None);
    }

    #[test]
    fn test_gtin14_indicator_digit_not_inspected() {
        // Indicator 2 alone is not a restricted prefix.
        assert!(is_legal_prefix(&normalize("20614141000992").unwrap()));
    }
}
