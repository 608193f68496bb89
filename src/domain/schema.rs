//! Static operation schema for the VoIP.ms API surface.
//!
//! Every operation the client can dispatch is described by an [`OpSpec`]:
//! the vendor method name, the HTTP verb, and the required/optional fields
//! with their declared kinds. One generic validate-and-encode step
//! ([`build`]) replaces per-method hand-written validation: arguments are
//! checked against the entry's field specs, booleans are re-encoded as the
//! vendor's `"1"`/`"0"` convention, and unknown or missing fields are
//! rejected before any network call.

use crate::domain::validation::ValidationError;
use crate::domain::value::{Date, EmailAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Declared kind of a schema field.
pub enum FieldKind {
    Int,
    Float,
    Text,
    Bool,
    /// Text constrained to a real `YYYY-MM-DD` calendar date.
    Date,
    /// Text constrained to e-mail syntax.
    Email,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            Self::Int => "an integer",
            Self::Float => "a float",
            Self::Text => "text",
            Self::Bool => "a boolean",
            Self::Date => "a date in YYYY-MM-DD form",
            Self::Email => "an email address",
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// One named field of an operation.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn f(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verb an operation dispatches over.
pub enum Verb {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy)]
/// Schema entry for one vendor operation.
pub struct OpSpec {
    pub method: &'static str,
    pub verb: Verb,
    pub required: &'static [FieldSpec],
    pub optional: &'static [FieldSpec],
}

impl OpSpec {
    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A caller-supplied argument value, prior to wire encoding.
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Ordered bag of named arguments for one operation.
///
/// Values keep their Rust types until [`build`] validates them against the
/// operation's schema and encodes them as wire strings.
pub struct Args {
    values: Vec<(String, ArgValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push((name.into(), ArgValue::Int(value)));
        self
    }

    pub fn float(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.push((name.into(), ArgValue::Float(value)));
        self
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((name.into(), ArgValue::Text(value.into())));
        self
    }

    pub fn flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.values.push((name.into(), ArgValue::Bool(value)));
        self
    }

    /// Push a pre-validated [`Date`] as its literal text.
    pub fn date(self, name: impl Into<String>, value: &Date) -> Self {
        self.text(name, value.as_str())
    }

    /// Push a pre-validated [`EmailAddress`] as its literal text.
    pub fn email(self, name: impl Into<String>, value: &EmailAddress) -> Self {
        self.text(name, value.as_str())
    }

    /// Append every argument of `other`, preserving order.
    pub fn merge(mut self, other: Args) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Find the schema entry for a vendor method name (exact, case-sensitive).
pub fn lookup(method: &str) -> Option<&'static OpSpec> {
    OPERATIONS.iter().find(|op| op.method == method)
}

/// Validate `args` against `spec` and encode them as wire parameters.
///
/// Unknown field names are rejected in one error enumerating every offender;
/// after encoding, the first missing required field is reported by name.
pub fn build(spec: &'static OpSpec, args: &Args) -> Result<Vec<(String, String)>, ValidationError> {
    let unknown = args
        .iter()
        .filter(|(name, _)| spec.field(name).is_none())
        .map(|(name, _)| name.to_owned())
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownField {
            method: spec.method,
            field: unknown.join(", "),
        });
    }

    let mut params = Vec::with_capacity(args.len());
    for (name, value) in args.iter() {
        if let Some(field) = spec.field(name) {
            params.push((field.name.to_owned(), encode_value(field, value)?));
        }
    }

    for field in spec.required {
        if !args.contains(field.name) {
            return Err(ValidationError::MissingField {
                method: spec.method,
                field: field.name,
            });
        }
    }

    Ok(params)
}

/// [`lookup`] + [`build`] in one step, for dispatch by method name.
pub fn build_for(
    method: &str,
    args: &Args,
) -> Result<(&'static OpSpec, Vec<(String, String)>), ValidationError> {
    let spec = lookup(method).ok_or_else(|| ValidationError::UnknownMethod {
        method: method.to_owned(),
    })?;
    let params = build(spec, args)?;
    Ok((spec, params))
}

fn encode_value(field: &FieldSpec, value: &ArgValue) -> Result<String, ValidationError> {
    match (field.kind, value) {
        (FieldKind::Int, ArgValue::Int(v)) => Ok(v.to_string()),
        (FieldKind::Float, ArgValue::Float(v)) => Ok(v.to_string()),
        (FieldKind::Text, ArgValue::Text(v)) => Ok(v.clone()),
        (FieldKind::Bool, ArgValue::Bool(v)) => Ok(if *v { "1" } else { "0" }.to_owned()),
        (FieldKind::Date, ArgValue::Text(v)) => Ok(Date::new(v.clone())?.as_str().to_owned()),
        (FieldKind::Email, ArgValue::Text(v)) => {
            Ok(EmailAddress::new(v.clone())?.as_str().to_owned())
        }
        (kind, _) => Err(ValidationError::KindMismatch {
            field: field.name.to_owned(),
            expected: kind.expected(),
        }),
    }
}

use FieldKind as K;

const NONE: &[FieldSpec] = &[];

/// Optional fields shared by every DID-ordering operation.
const ORDER_OPTIONAL: &[FieldSpec] = &[
    f("failover_busy", K::Text),
    f("failover_unreachable", K::Text),
    f("failover_noanswer", K::Text),
    f("voicemail", K::Int),
    f("callerid_prefix", K::Text),
    f("note", K::Text),
    f("account", K::Text),
    f("monthly", K::Float),
    f("setup", K::Float),
    f("international_route", K::Int),
    f("trunk", K::Int),
    f("test", K::Bool),
];

pub(crate) const BACK_ORDER_DID_USA: OpSpec = OpSpec {
    method: "backOrderDIDUSA",
    verb: Verb::Post,
    required: &[
        f("quantity", K::Int),
        f("state", K::Text),
        f("ratecenter", K::Text),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const BACK_ORDER_DID_CAN: OpSpec = OpSpec {
    method: "backOrderDIDCAN",
    verb: Verb::Post,
    required: &[
        f("quantity", K::Int),
        f("province", K::Text),
        f("ratecenter", K::Text),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_DID: OpSpec = OpSpec {
    method: "orderDID",
    verb: Verb::Post,
    required: &[
        f("did", K::Text),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_DID_INTERNATIONAL_GEOGRAPHIC: OpSpec = OpSpec {
    method: "orderDIDInternationalGeographic",
    verb: Verb::Post,
    required: &[
        f("location_id", K::Int),
        f("quantity", K::Int),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_DID_INTERNATIONAL_NATIONAL: OpSpec = OpSpec {
    method: "orderDIDInternationalNational",
    verb: Verb::Post,
    required: &[
        f("location_id", K::Int),
        f("quantity", K::Int),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_DID_INTERNATIONAL_TOLL_FREE: OpSpec = OpSpec {
    method: "orderDIDInternationalTollFree",
    verb: Verb::Post,
    required: &[
        f("location_id", K::Int),
        f("quantity", K::Int),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_DID_VIRTUAL: OpSpec = OpSpec {
    method: "orderDIDVirtual",
    verb: Verb::Post,
    required: &[
        f("digits", K::Int),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("billing_type", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_TOLL_FREE: OpSpec = OpSpec {
    method: "orderTollFree",
    verb: Verb::Post,
    required: &[
        f("did", K::Text),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
    ],
    optional: ORDER_OPTIONAL,
};

pub(crate) const ORDER_VANITY: OpSpec = OpSpec {
    method: "orderVanity",
    verb: Verb::Post,
    required: &[
        f("did", K::Text),
        f("routing", K::Text),
        f("pop", K::Int),
        f("dialtime", K::Int),
        f("cnam", K::Bool),
        f("carrier", K::Int),
    ],
    optional: ORDER_OPTIONAL,
};

/// Optional fields shared by the sub-account create/update operations.
const SUB_ACCOUNT_OPTIONAL: &[FieldSpec] = &[
    f("password", K::Text),
    f("description", K::Text),
    f("callerid_number", K::Text),
    f("internal_extension", K::Int),
    f("internal_voicemail", K::Int),
    f("internal_dialtime", K::Int),
    f("reseller_client", K::Int),
    f("language", K::Text),
    f("record_calls", K::Bool),
];

const E911_OPTIONAL: &[FieldSpec] = &[
    f("language", K::Text),
    f("email", K::Email),
    f("other_info", K::Text),
];

const VOICEMAIL_OPTIONAL: &[FieldSpec] = &[
    f("email", K::Email),
    f("email_attachment_format", K::Text),
];

/// Every operation this crate can dispatch, DID ordering included.
pub(crate) const OPERATIONS: &[OpSpec] = &[
    // General
    OpSpec {
        method: "getBalance",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("advanced", K::Bool)],
    },
    OpSpec {
        method: "getIP",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "getTransactionHistory",
        verb: Verb::Get,
        required: &[f("date_from", K::Date), f("date_to", K::Date)],
        optional: NONE,
    },
    OpSpec {
        method: "getCountries",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("country", K::Text)],
    },
    OpSpec {
        method: "getLanguages",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("language", K::Text)],
    },
    OpSpec {
        method: "getServersInfo",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("server_pop", K::Int)],
    },
    // Accounts
    OpSpec {
        method: "createSubAccount",
        verb: Verb::Post,
        required: &[
            f("username", K::Text),
            f("protocol", K::Int),
            f("auth_type", K::Int),
            f("device_type", K::Int),
            f("lock_international", K::Int),
            f("international_route", K::Int),
            f("music_on_hold", K::Text),
            f("allowed_codecs", K::Text),
            f("dtmf_mode", K::Text),
            f("nat", K::Text),
        ],
        optional: SUB_ACCOUNT_OPTIONAL,
    },
    OpSpec {
        method: "setSubAccount",
        verb: Verb::Post,
        required: &[
            f("id", K::Int),
            f("protocol", K::Int),
            f("auth_type", K::Int),
            f("device_type", K::Int),
            f("lock_international", K::Int),
            f("international_route", K::Int),
            f("music_on_hold", K::Text),
            f("allowed_codecs", K::Text),
            f("dtmf_mode", K::Text),
            f("nat", K::Text),
        ],
        optional: SUB_ACCOUNT_OPTIONAL,
    },
    OpSpec {
        method: "delSubAccount",
        verb: Verb::Post,
        required: &[f("id", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getSubAccounts",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("account", K::Text)],
    },
    OpSpec {
        method: "getRegistrationStatus",
        verb: Verb::Get,
        required: &[f("account", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getAllowedCodecs",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("codec", K::Text)],
    },
    OpSpec {
        method: "getAuthTypes",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("auth_type", K::Int)],
    },
    OpSpec {
        method: "getDeviceTypes",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("device_type", K::Int)],
    },
    OpSpec {
        method: "getDTMFModes",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("dtmf_mode", K::Text)],
    },
    OpSpec {
        method: "getLockInternational",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("lock_international", K::Int)],
    },
    OpSpec {
        method: "getMusicOnHold",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("music_on_hold", K::Text)],
    },
    OpSpec {
        method: "getNAT",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("nat", K::Text)],
    },
    OpSpec {
        method: "getProtocols",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("protocol", K::Int)],
    },
    OpSpec {
        method: "getRoutes",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("route", K::Int)],
    },
    // Calls
    OpSpec {
        method: "getCallAccounts",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("client", K::Int)],
    },
    OpSpec {
        method: "getCallBilling",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "getCallTypes",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("client", K::Int)],
    },
    OpSpec {
        method: "getCDR",
        verb: Verb::Get,
        required: &[
            f("date_from", K::Date),
            f("date_to", K::Date),
            f("timezone", K::Int),
        ],
        optional: &[
            f("answered", K::Bool),
            f("noanswer", K::Bool),
            f("busy", K::Bool),
            f("failed", K::Bool),
            f("calltype", K::Text),
            f("callbilling", K::Text),
            f("account", K::Text),
        ],
    },
    OpSpec {
        method: "getRates",
        verb: Verb::Get,
        required: &[f("package", K::Int), f("query", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getResellerCDR",
        verb: Verb::Get,
        required: &[
            f("date_from", K::Date),
            f("date_to", K::Date),
            f("client", K::Int),
            f("timezone", K::Int),
        ],
        optional: &[
            f("answered", K::Bool),
            f("noanswer", K::Bool),
            f("busy", K::Bool),
            f("failed", K::Bool),
            f("calltype", K::Text),
            f("callbilling", K::Text),
        ],
    },
    OpSpec {
        method: "getTerminationRates",
        verb: Verb::Get,
        required: &[f("route", K::Int), f("query", K::Text)],
        optional: NONE,
    },
    // Reseller clients
    OpSpec {
        method: "addCharge",
        verb: Verb::Post,
        required: &[f("client", K::Int), f("charge", K::Float)],
        optional: &[f("description", K::Text), f("test", K::Bool)],
    },
    OpSpec {
        method: "addPayment",
        verb: Verb::Post,
        required: &[f("client", K::Int), f("payment", K::Float)],
        optional: &[f("description", K::Text), f("test", K::Bool)],
    },
    OpSpec {
        method: "getBalanceManagement",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("balance_management", K::Int)],
    },
    OpSpec {
        method: "getCharges",
        verb: Verb::Get,
        required: &[f("client", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getClientPackages",
        verb: Verb::Get,
        required: &[f("client", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getClients",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("client", K::Int)],
    },
    OpSpec {
        method: "getClientThreshold",
        verb: Verb::Get,
        required: &[f("client", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getDeposits",
        verb: Verb::Get,
        required: &[f("client", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getPackages",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("package", K::Int)],
    },
    OpSpec {
        method: "getResellerBalance",
        verb: Verb::Get,
        required: &[f("client", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "setClient",
        verb: Verb::Post,
        required: &[
            f("client", K::Int),
            f("email", K::Email),
            f("password", K::Text),
            f("firstname", K::Text),
            f("lastname", K::Text),
            f("phone_number", K::Text),
        ],
        optional: &[
            f("company", K::Text),
            f("address", K::Text),
            f("city", K::Text),
            f("state", K::Text),
            f("country", K::Text),
            f("zip", K::Text),
            f("balance_management", K::Int),
        ],
    },
    OpSpec {
        method: "setClientThreshold",
        verb: Verb::Post,
        required: &[f("client", K::Int), f("threshold", K::Int)],
        optional: &[f("email", K::Email)],
    },
    OpSpec {
        method: "signupClient",
        verb: Verb::Post,
        required: &[
            f("firstname", K::Text),
            f("lastname", K::Text),
            f("email", K::Email),
            f("confirm_email", K::Email),
            f("password", K::Text),
            f("confirm_password", K::Text),
        ],
        optional: &[
            f("company", K::Text),
            f("address", K::Text),
            f("city", K::Text),
            f("state", K::Text),
            f("country", K::Text),
            f("zip", K::Text),
            f("phone_number", K::Text),
            f("balance_management", K::Int),
            f("activate", K::Bool),
        ],
    },
    // DIDs
    BACK_ORDER_DID_USA,
    BACK_ORDER_DID_CAN,
    ORDER_DID,
    ORDER_DID_INTERNATIONAL_GEOGRAPHIC,
    ORDER_DID_INTERNATIONAL_NATIONAL,
    ORDER_DID_INTERNATIONAL_TOLL_FREE,
    ORDER_DID_VIRTUAL,
    ORDER_TOLL_FREE,
    ORDER_VANITY,
    OpSpec {
        method: "cancelDID",
        verb: Verb::Post,
        required: &[f("did", K::Text)],
        optional: &[
            f("cancelcomment", K::Text),
            f("portout", K::Bool),
            f("test", K::Bool),
        ],
    },
    OpSpec {
        method: "connectDID",
        verb: Verb::Post,
        required: &[
            f("did", K::Text),
            f("account", K::Text),
            f("monthly", K::Float),
            f("setup", K::Float),
            f("minute", K::Float),
        ],
        optional: &[
            f("next_billing", K::Date),
            f("dont_charge_setup", K::Bool),
            f("dont_charge_monthly", K::Bool),
        ],
    },
    OpSpec {
        method: "unconnectDID",
        verb: Verb::Post,
        required: &[f("did", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getCallerIDFiltering",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("filtering", K::Int)],
    },
    OpSpec {
        method: "getDIDCountries",
        verb: Verb::Get,
        required: &[f("type", K::Text)],
        optional: &[f("country_id", K::Int)],
    },
    OpSpec {
        method: "getDIDsCAN",
        verb: Verb::Get,
        required: &[f("province", K::Text)],
        optional: &[f("ratecenter", K::Text)],
    },
    OpSpec {
        method: "getDIDsInfo",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("client", K::Text), f("did", K::Text)],
    },
    OpSpec {
        method: "getDIDsInternationalGeographic",
        verb: Verb::Get,
        required: &[f("country_id", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getDIDsInternationalNational",
        verb: Verb::Get,
        required: &[f("country_id", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getDIDsInternationalTollFree",
        verb: Verb::Get,
        required: &[f("country_id", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getDIDsUSA",
        verb: Verb::Get,
        required: &[f("state", K::Text)],
        optional: &[f("ratecenter", K::Text)],
    },
    OpSpec {
        method: "getProvinces",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "getRateCentersCAN",
        verb: Verb::Get,
        required: &[f("province", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getRateCentersUSA",
        verb: Verb::Get,
        required: &[f("state", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getStates",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "searchDIDsCAN",
        verb: Verb::Get,
        required: &[f("type", K::Text), f("query", K::Text)],
        optional: &[f("province", K::Text)],
    },
    OpSpec {
        method: "searchDIDsUSA",
        verb: Verb::Get,
        required: &[f("type", K::Text), f("query", K::Text)],
        optional: &[f("state", K::Text)],
    },
    OpSpec {
        method: "searchTollFreeCanUS",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("type", K::Text), f("query", K::Text)],
    },
    OpSpec {
        method: "searchVanity",
        verb: Verb::Get,
        required: &[f("type", K::Text), f("query", K::Text)],
        optional: &[f("carrier", K::Int)],
    },
    OpSpec {
        method: "setDIDBillingType",
        verb: Verb::Post,
        required: &[f("did", K::Text), f("billing_type", K::Int)],
        optional: &[f("test", K::Bool)],
    },
    OpSpec {
        method: "setDIDInfo",
        verb: Verb::Post,
        required: &[
            f("did", K::Text),
            f("routing", K::Text),
            f("pop", K::Int),
            f("dialtime", K::Int),
            f("cnam", K::Bool),
        ],
        optional: &[
            f("failover_busy", K::Text),
            f("failover_unreachable", K::Text),
            f("failover_noanswer", K::Text),
            f("voicemail", K::Int),
            f("callerid_prefix", K::Text),
            f("note", K::Text),
            f("billing_type", K::Int),
        ],
    },
    OpSpec {
        method: "setDIDPOP",
        verb: Verb::Post,
        required: &[f("did", K::Text), f("pop", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "setDIDRouting",
        verb: Verb::Post,
        required: &[f("did", K::Text), f("routing", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "setDIDVoicemail",
        verb: Verb::Post,
        required: &[f("did", K::Text)],
        optional: &[f("voicemail", K::Int)],
    },
    // Fax
    OpSpec {
        method: "cancelFaxNumber",
        verb: Verb::Post,
        required: &[f("id", K::Int)],
        optional: &[f("test", K::Bool)],
    },
    OpSpec {
        method: "deleteFaxMessage",
        verb: Verb::Post,
        required: &[f("id", K::Int)],
        optional: &[f("test", K::Bool)],
    },
    OpSpec {
        method: "getFaxFolders",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "getFaxMessages",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("from", K::Date), f("to", K::Date), f("folder", K::Text)],
    },
    OpSpec {
        method: "getFaxNumbersInfo",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("did", K::Text)],
    },
    OpSpec {
        method: "mailFaxMessagePDF",
        verb: Verb::Post,
        required: &[f("id", K::Int), f("email", K::Email)],
        optional: NONE,
    },
    OpSpec {
        method: "orderFaxNumber",
        verb: Verb::Post,
        required: &[f("location", K::Int), f("quantity", K::Int)],
        optional: &[
            f("email", K::Email),
            f("email_enabled", K::Bool),
            f("email_attachment_format", K::Text),
            f("url_callback", K::Text),
            f("test", K::Bool),
        ],
    },
    OpSpec {
        method: "searchFaxAreaCodeCAN",
        verb: Verb::Get,
        required: &[f("area_code", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "searchFaxAreaCodeUSA",
        verb: Verb::Get,
        required: &[f("area_code", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "sendFaxMessage",
        verb: Verb::Post,
        required: &[
            f("to_number", K::Text),
            f("from_name", K::Text),
            f("from_number", K::Text),
            f("file", K::Text),
        ],
        optional: &[
            f("send_email_enabled", K::Bool),
            f("send_email", K::Email),
            f("station_id", K::Text),
            f("test", K::Bool),
        ],
    },
    OpSpec {
        method: "setFaxNumberInfo",
        verb: Verb::Post,
        required: &[f("did", K::Text)],
        optional: &[
            f("email", K::Email),
            f("email_enabled", K::Bool),
            f("email_attachment_format", K::Text),
            f("caller_id", K::Text),
            f("test", K::Bool),
        ],
    },
    // Voicemail
    OpSpec {
        method: "createVoicemail",
        verb: Verb::Post,
        required: &[
            f("digits", K::Int),
            f("name", K::Text),
            f("password", K::Int),
            f("skip_password", K::Bool),
            f("attach_message", K::Bool),
            f("delete_message", K::Bool),
            f("say_time", K::Bool),
            f("timezone", K::Text),
            f("say_callerid", K::Bool),
            f("play_instructions", K::Text),
            f("language", K::Text),
        ],
        optional: VOICEMAIL_OPTIONAL,
    },
    OpSpec {
        method: "delMessages",
        verb: Verb::Post,
        required: &[f("mailbox", K::Int)],
        optional: &[f("folder", K::Text), f("message_num", K::Int)],
    },
    OpSpec {
        method: "delVoicemail",
        verb: Verb::Post,
        required: &[f("mailbox", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getPlayInstructions",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("play_instructions", K::Text)],
    },
    OpSpec {
        method: "getTimezones",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("timezone", K::Text)],
    },
    OpSpec {
        method: "getVoicemails",
        verb: Verb::Get,
        required: NONE,
        optional: &[f("mailbox", K::Int)],
    },
    OpSpec {
        method: "getVoicemailMessages",
        verb: Verb::Get,
        required: &[f("mailbox", K::Int)],
        optional: &[
            f("folder", K::Text),
            f("date_from", K::Date),
            f("date_to", K::Date),
        ],
    },
    OpSpec {
        method: "markListenedVoicemailMessage",
        verb: Verb::Post,
        required: &[
            f("mailbox", K::Int),
            f("folder", K::Text),
            f("message_num", K::Int),
            f("listened", K::Text),
        ],
        optional: NONE,
    },
    OpSpec {
        method: "markUrgentVoicemailMessage",
        verb: Verb::Post,
        required: &[
            f("mailbox", K::Int),
            f("folder", K::Text),
            f("message_num", K::Int),
            f("urgent", K::Text),
        ],
        optional: NONE,
    },
    OpSpec {
        method: "moveFolderVoicemailMessage",
        verb: Verb::Post,
        required: &[
            f("mailbox", K::Int),
            f("folder", K::Text),
            f("message_num", K::Int),
            f("new_folder", K::Text),
        ],
        optional: NONE,
    },
    OpSpec {
        method: "sendVoicemailEmail",
        verb: Verb::Post,
        required: &[
            f("mailbox", K::Int),
            f("folder", K::Text),
            f("message_num", K::Int),
            f("email", K::Email),
        ],
        optional: NONE,
    },
    OpSpec {
        method: "setVoicemail",
        verb: Verb::Post,
        required: &[
            f("mailbox", K::Int),
            f("name", K::Text),
            f("password", K::Int),
            f("skip_password", K::Bool),
            f("attach_message", K::Bool),
            f("delete_message", K::Bool),
            f("say_time", K::Bool),
            f("timezone", K::Text),
            f("say_callerid", K::Bool),
            f("play_instructions", K::Text),
            f("language", K::Text),
        ],
        optional: VOICEMAIL_OPTIONAL,
    },
    // e911
    OpSpec {
        method: "e911Cancel",
        verb: Verb::Post,
        required: &[f("did", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "e911Info",
        verb: Verb::Get,
        required: &[f("did", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "e911Provision",
        verb: Verb::Post,
        required: &[
            f("did", K::Text),
            f("full_name", K::Text),
            f("street_number", K::Text),
            f("street_name", K::Text),
            f("city", K::Text),
            f("state", K::Text),
            f("country", K::Text),
            f("zip_code", K::Text),
        ],
        optional: E911_OPTIONAL,
    },
    OpSpec {
        method: "e911Update",
        verb: Verb::Post,
        required: &[
            f("did", K::Text),
            f("full_name", K::Text),
            f("street_number", K::Text),
            f("street_name", K::Text),
            f("city", K::Text),
            f("state", K::Text),
            f("country", K::Text),
            f("zip_code", K::Text),
        ],
        optional: E911_OPTIONAL,
    },
    OpSpec {
        method: "e911Validate",
        verb: Verb::Get,
        required: &[
            f("did", K::Text),
            f("full_name", K::Text),
            f("street_number", K::Text),
            f("street_name", K::Text),
            f("city", K::Text),
            f("state", K::Text),
            f("country", K::Text),
            f("zip_code", K::Text),
        ],
        optional: E911_OPTIONAL,
    },
    // LNP
    OpSpec {
        method: "addLNPPort",
        verb: Verb::Post,
        required: &[f("numbers", K::Text)],
        optional: &[f("btn", K::Text), f("partial", K::Bool), f("notes", K::Text)],
    },
    OpSpec {
        method: "addLNPFile",
        verb: Verb::Post,
        required: &[f("portid", K::Int), f("file", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "addLNPNote",
        verb: Verb::Post,
        required: &[f("portid", K::Int), f("note", K::Text)],
        optional: NONE,
    },
    OpSpec {
        method: "getLNPAttach",
        verb: Verb::Get,
        required: &[f("portid", K::Int)],
        optional: &[f("attachid", K::Int)],
    },
    OpSpec {
        method: "getLNPListStatus",
        verb: Verb::Get,
        required: NONE,
        optional: NONE,
    },
    OpSpec {
        method: "getLNPNotes",
        verb: Verb::Get,
        required: &[f("portid", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getLNPStatus",
        verb: Verb::Get,
        required: &[f("portid", K::Int)],
        optional: NONE,
    },
    // SMS
    OpSpec {
        method: "deleteSMS",
        verb: Verb::Post,
        required: &[f("id", K::Int)],
        optional: NONE,
    },
    OpSpec {
        method: "getSMS",
        verb: Verb::Get,
        required: NONE,
        optional: &[
            f("from", K::Date),
            f("to", K::Date),
            f("type", K::Bool),
            f("did", K::Text),
            f("contact", K::Text),
            f("limit", K::Int),
            f("timezone", K::Int),
        ],
    },
    OpSpec {
        method: "sendSMS",
        verb: Verb::Post,
        required: &[
            f("did", K::Text),
            f("dst", K::Text),
            f("message", K::Text),
        ],
        optional: NONE,
    },
    OpSpec {
        method: "setSMS",
        verb: Verb::Post,
        required: &[f("did", K::Text), f("enable", K::Bool)],
        optional: &[
            f("email_enabled", K::Bool),
            f("email_address", K::Email),
            f("sms_forward_enable", K::Bool),
            f("sms_forward", K::Text),
            f("url_callback_enable", K::Bool),
            f("url_callback", K::Text),
            f("url_callback_retry", K::Bool),
        ],
    },
];
