//! Normalizer for the DID-ordering family of operations.
//!
//! Callers name one of the nine ordering operations and supply an argument
//! bag; the normalizer checks the name against an explicit allow-list before
//! anything else, then validates and encodes the bag against that
//! operation's schema. The allow-list exists so an arbitrary caller-supplied
//! string is never forwarded to the vendor as the API `method`.

use crate::domain::schema::{
    self, Args, OpSpec, BACK_ORDER_DID_CAN, BACK_ORDER_DID_USA, ORDER_DID,
    ORDER_DID_INTERNATIONAL_GEOGRAPHIC, ORDER_DID_INTERNATIONAL_NATIONAL,
    ORDER_DID_INTERNATIONAL_TOLL_FREE, ORDER_DID_VIRTUAL, ORDER_TOLL_FREE, ORDER_VANITY,
};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One of the nine DID-ordering operations VoIP.ms exposes.
pub enum OrderMethod {
    BackOrderDidUsa,
    BackOrderDidCan,
    OrderDid,
    OrderDidInternationalGeographic,
    OrderDidInternationalNational,
    OrderDidInternationalTollFree,
    OrderDidVirtual,
    OrderTollFree,
    OrderVanity,
}

impl OrderMethod {
    /// Every ordering operation, in the vendor's documented order.
    pub const ALL: [OrderMethod; 9] = [
        Self::BackOrderDidUsa,
        Self::BackOrderDidCan,
        Self::OrderDid,
        Self::OrderDidInternationalGeographic,
        Self::OrderDidInternationalNational,
        Self::OrderDidInternationalTollFree,
        Self::OrderDidVirtual,
        Self::OrderTollFree,
        Self::OrderVanity,
    ];

    /// Resolve a vendor method name (exact, case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_method() == name)
    }

    /// The vendor method name sent on the wire.
    pub fn as_method(self) -> &'static str {
        self.spec().method
    }

    pub(crate) fn spec(self) -> &'static OpSpec {
        match self {
            Self::BackOrderDidUsa => &BACK_ORDER_DID_USA,
            Self::BackOrderDidCan => &BACK_ORDER_DID_CAN,
            Self::OrderDid => &ORDER_DID,
            Self::OrderDidInternationalGeographic => &ORDER_DID_INTERNATIONAL_GEOGRAPHIC,
            Self::OrderDidInternationalNational => &ORDER_DID_INTERNATIONAL_NATIONAL,
            Self::OrderDidInternationalTollFree => &ORDER_DID_INTERNATIONAL_TOLL_FREE,
            Self::OrderDidVirtual => &ORDER_DID_VIRTUAL,
            Self::OrderTollFree => &ORDER_TOLL_FREE,
            Self::OrderVanity => &ORDER_VANITY,
        }
    }
}

/// Validate an ordering request and produce the wire method and parameters.
///
/// The method name is checked against the allow-list first; only then are
/// the arguments validated against the operation's schema. No I/O happens
/// here.
pub fn normalize(
    method: &str,
    args: &Args,
) -> Result<(&'static str, Vec<(String, String)>), ValidationError> {
    let order_method =
        OrderMethod::from_name(method).ok_or_else(|| ValidationError::UnknownMethod {
            method: method.to_owned(),
        })?;
    let spec = order_method.spec();
    let params = schema::build(spec, args)?;
    Ok((spec.method, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_did_args() -> Args {
        Args::new()
            .text("did", "5551234567")
            .text("routing", "account:100000")
            .int("pop", 5)
            .int("dialtime", 60)
            .flag("cnam", true)
            .int("billing_type", 1)
    }

    #[test]
    fn rejects_methods_outside_the_allow_list() {
        let err = normalize("getBalance", &order_did_args()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownMethod {
                method: "getBalance".to_owned(),
            }
        );

        // Case matters: the vendor spelling is orderDID.
        assert!(normalize("orderdid", &order_did_args()).is_err());
    }

    #[test]
    fn order_did_round_trips_required_fields() {
        let (method, params) = normalize("orderDID", &order_did_args()).unwrap();
        assert_eq!(method, "orderDID");
        assert_eq!(
            params,
            vec![
                ("did".to_owned(), "5551234567".to_owned()),
                ("routing".to_owned(), "account:100000".to_owned()),
                ("pop".to_owned(), "5".to_owned()),
                ("dialtime".to_owned(), "60".to_owned()),
                ("cnam".to_owned(), "1".to_owned()),
                ("billing_type".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn booleans_encode_as_one_and_zero() {
        let args = order_did_args().flag("test", false);
        let (_, params) = normalize("orderDID", &args).unwrap();
        assert!(params.contains(&("cnam".to_owned(), "1".to_owned())));
        assert!(params.contains(&("test".to_owned(), "0".to_owned())));
    }

    #[test]
    fn missing_required_field_is_named() {
        let args = Args::new()
            .text("did", "5551234567")
            .text("routing", "account:100000")
            .int("pop", 5)
            .int("dialtime", 60)
            .flag("cnam", true);
        let err = normalize("orderDID", &args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                method: "orderDID",
                field: "billing_type",
            }
        );
    }

    #[test]
    fn unknown_fields_are_not_allowed() {
        let args = order_did_args().text("colour", "red");
        let err = normalize("orderDID", &args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                method: "orderDID",
                field: "colour".to_owned(),
            }
        );
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let args = Args::new()
            .text("did", "5551234567")
            .text("routing", "account:100000")
            .text("pop", "5")
            .int("dialtime", 60)
            .flag("cnam", true)
            .int("billing_type", 1);
        let err = normalize("orderDID", &args).unwrap_err();
        assert_eq!(
            err,
            ValidationError::KindMismatch {
                field: "pop".to_owned(),
                expected: "an integer",
            }
        );
    }

    #[test]
    fn every_allow_list_entry_resolves_to_its_own_schema() {
        for method in OrderMethod::ALL {
            assert_eq!(OrderMethod::from_name(method.as_method()), Some(method));
        }
        assert_eq!(OrderMethod::ALL.len(), 9);
    }

    #[test]
    fn back_order_requires_location_fields() {
        let args = Args::new()
            .int("quantity", 1)
            .text("state", "NY")
            .text("ratecenter", "NEW YORK")
            .text("routing", "account:100000")
            .int("pop", 5)
            .int("dialtime", 60)
            .flag("cnam", true)
            .int("billing_type", 1);
        let (method, params) = normalize("backOrderDIDUSA", &args).unwrap();
        assert_eq!(method, "backOrderDIDUSA");
        assert_eq!(params.len(), 8);

        let args = Args::new().int("quantity", 1);
        assert!(matches!(
            normalize("backOrderDIDCAN", &args),
            Err(ValidationError::MissingField {
                method: "backOrderDIDCAN",
                field: "province",
            })
        ));
    }
}
