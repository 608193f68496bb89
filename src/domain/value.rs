use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::validation::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email regex compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// VoIP.ms API username (`api_username`).
///
/// Invariant: non-empty after trimming. This is the account e-mail the API
/// credentials were enabled for.
pub struct ApiUsername(String);

impl ApiUsername {
    /// Query field name used by VoIP.ms (`api_username`).
    pub const FIELD: &'static str = "api_username";

    /// Create a validated [`ApiUsername`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// VoIP.ms API password (`api_password`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiPassword(String);

impl ApiPassword {
    /// Query field name used by VoIP.ms (`api_password`).
    pub const FIELD: &'static str = "api_password";

    /// Create a validated [`ApiPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Calendar date in the vendor's literal `YYYY-MM-DD` form.
///
/// Invariant: parses as a real calendar date and round-trips to the exact
/// input text, so `2023-02-30` and `02-30-2023` are both rejected.
pub struct Date {
    text: String,
    parsed: NaiveDate,
}

impl Date {
    /// Create a validated [`Date`] from `YYYY-MM-DD` text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
            ValidationError::InvalidDate {
                input: value.clone(),
            }
        })?;
        // chrono accepts un-padded fields; the vendor does not.
        if parsed.format("%Y-%m-%d").to_string() != value {
            return Err(ValidationError::InvalidDate { input: value });
        }
        Ok(Self {
            text: value,
            parsed,
        })
    }

    /// The literal `YYYY-MM-DD` text as sent to VoIP.ms.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date.
    pub fn value(&self) -> NaiveDate {
        self.parsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// E-mail address accepted by VoIP.ms operations (`email`).
///
/// Invariant: matches a single `local@domain` shape with a dotted domain.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Query field name used by VoIP.ms (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check e-mail syntax without constructing a value.
    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// DID number in the digits-only wire representation VoIP.ms expects (`did`).
///
/// Invariant: non-empty after trimming and ASCII digits only. This type does
/// not normalize; if you want E.164 parsing, use [`Did`] and convert it into
/// [`RawDid`].
pub struct RawDid(String);

impl RawDid {
    /// Query field name used by VoIP.ms (`did`).
    pub const FIELD: &'static str = "did";

    /// Create a validated digits-only DID.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidDid {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) digits as sent to VoIP.ms.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<Did> for RawDid {
    /// Convert an already-parsed number to the digits-only wire form.
    fn from(value: Did) -> Self {
        let digits = value
            .e164
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct Did {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl Did {
    /// Parse and normalize a number into E.164.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<phonenumber::country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawDid::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidDid { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for Did {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for Did {}

impl std::hash::Hash for Did {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Header vocabulary of the `header:record_id` routing mini-syntax.
pub enum RoutingHeader {
    Account,
    Fwd,
    Vm,
    Sip,
    Grp,
    Ivr,
    Sys,
    Recording,
    Queue,
    Cb,
    Tc,
    Disa,
    None,
}

impl RoutingHeader {
    /// Wire spelling of the header.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Fwd => "fwd",
            Self::Vm => "vm",
            Self::Sip => "sip",
            Self::Grp => "grp",
            Self::Ivr => "ivr",
            Self::Sys => "sys",
            Self::Recording => "recording",
            Self::Queue => "queue",
            Self::Cb => "cb",
            Self::Tc => "tc",
            Self::Disa => "disa",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Call routing destination (`routing`), e.g. `account:100000_sub`.
///
/// The internals of the mini-syntax are consumed by the vendor, not parsed
/// here: the only invariant is non-empty text. [`Routing::target`] is a
/// convenience for the fixed header vocabulary.
pub struct Routing(String);

impl Routing {
    /// Query field name used by VoIP.ms (`routing`).
    pub const FIELD: &'static str = "routing";

    /// Create a routing destination from literal text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Build a `header:record_id` destination from the fixed vocabulary.
    pub fn target(header: RoutingHeader, record_id: impl AsRef<str>) -> Self {
        Self(format!("{}:{}", header.as_str(), record_id.as_ref()))
    }

    /// Borrow the destination text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Reseller client balance-warning threshold (`threshold`), in dollars.
///
/// Invariant: `1..=250`.
pub struct Threshold(u16);

impl Threshold {
    /// Query field name used by VoIP.ms (`threshold`).
    pub const FIELD: &'static str = "threshold";

    /// Minimum allowed threshold.
    pub const MIN: u16 = 1;
    /// Maximum allowed threshold.
    pub const MAX: u16 = 250;

    /// Create a validated threshold.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN as i64,
                max: Self::MAX as i64,
                actual: value as i64,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    pub fn value(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = ApiUsername::new("  john@example.com ").unwrap();
        assert_eq!(username.as_str(), "john@example.com");
        assert!(ApiUsername::new("  ").is_err());

        let password = ApiPassword::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(ApiPassword::new("").is_err());

        let routing = Routing::new(" account:100000 ").unwrap();
        assert_eq!(routing.as_str(), "account:100000");
        assert!(Routing::new("  ").is_err());
    }

    #[test]
    fn date_rejects_impossible_and_misordered_values() {
        assert!(Date::new("2023-02-30").is_err());
        assert!(Date::new("02-30-2023").is_err());
        assert!(Date::new("2023-2-28").is_err());
        assert!(Date::new(" 2023-02-28").is_err());

        let date = Date::new("2023-02-28").unwrap();
        assert_eq!(date.as_str(), "2023-02-28");
        assert_eq!(
            date.value(),
            chrono::NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn email_accepts_plain_addresses_only() {
        assert!(EmailAddress::new("user@example.com").is_ok());
        assert!(EmailAddress::new("user@@example").is_err());
        assert!(EmailAddress::new("user").is_err());
        assert!(EmailAddress::new("user@example").is_err());
        assert!(EmailAddress::is_valid("first.last+tag@mail.example.org"));
    }

    #[test]
    fn raw_did_is_digits_only() {
        let did = RawDid::new(" 5551234567 ").unwrap();
        assert_eq!(did.raw(), "5551234567");
        assert!(RawDid::new("").is_err());
        assert!(matches!(
            RawDid::new("555-123-4567"),
            Err(ValidationError::InvalidDid { .. })
        ));
    }

    #[test]
    fn did_parsing_and_equality_use_e164() {
        let d1 = Did::parse(None, "+15551234567").unwrap();
        let d2 = Did::parse(None, "+1 555 123-4567").unwrap();
        assert_eq!(d1, d2);
        assert_eq!(d1.e164(), "+15551234567");

        let raw: RawDid = d1.clone().into();
        assert_eq!(raw.raw(), "15551234567");
        assert!(Did::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn routing_target_uses_header_vocabulary() {
        let routing = Routing::target(RoutingHeader::Vm, "101");
        assert_eq!(routing.as_str(), "vm:101");
        assert_eq!(RoutingHeader::None.as_str(), "none");
        assert_eq!(RoutingHeader::Recording.as_str(), "recording");
    }

    #[test]
    fn threshold_enforces_range() {
        assert!(Threshold::new(Threshold::MIN).is_ok());
        assert!(Threshold::new(Threshold::MAX).is_ok());
        assert!(Threshold::new(0).is_err());
        assert!(Threshold::new(251).is_err());
    }
}
