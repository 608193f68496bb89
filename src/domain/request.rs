//! Typed argument bundles for the richer operations.

use crate::domain::schema::Args;
use crate::domain::validation::ValidationError;
use crate::domain::value::{Date, EmailAddress, RawDid};

#[derive(Debug, Clone)]
/// Query for `getCDR` / `getResellerCDR`.
///
/// `timezone` is the offset from UTC in hours. At least one of the status
/// flags should be set or the vendor returns nothing; `answered` defaults
/// to on.
pub struct CdrQuery {
    pub date_from: Date,
    pub date_to: Date,
    pub timezone: i64,
    pub answered: bool,
    pub noanswer: bool,
    pub busy: bool,
    pub failed: bool,
    pub calltype: Option<String>,
    pub callbilling: Option<String>,
    pub account: Option<String>,
}

impl CdrQuery {
    pub fn new(date_from: Date, date_to: Date, timezone: i64) -> Self {
        Self {
            date_from,
            date_to,
            timezone,
            answered: true,
            noanswer: false,
            busy: false,
            failed: false,
            calltype: None,
            callbilling: None,
            account: None,
        }
    }

    pub(crate) fn to_args(&self) -> Args {
        let mut args = Args::new()
            .date("date_from", &self.date_from)
            .date("date_to", &self.date_to)
            .int("timezone", self.timezone)
            .flag("answered", self.answered)
            .flag("noanswer", self.noanswer)
            .flag("busy", self.busy)
            .flag("failed", self.failed);
        if let Some(calltype) = self.calltype.as_deref() {
            args = args.text("calltype", calltype);
        }
        if let Some(callbilling) = self.callbilling.as_deref() {
            args = args.text("callbilling", callbilling);
        }
        if let Some(account) = self.account.as_deref() {
            args = args.text("account", account);
        }
        args
    }
}

#[derive(Debug, Clone, Default)]
/// Filters for `getSMS`. Everything is optional.
pub struct SmsQuery {
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
    /// `Some(true)` limits to received messages, `Some(false)` to sent ones.
    pub received: Option<bool>,
    pub did: Option<RawDid>,
    pub contact: Option<String>,
    pub limit: Option<i64>,
    pub timezone: Option<i64>,
}

impl SmsQuery {
    pub(crate) fn to_args(&self) -> Args {
        let mut args = Args::new();
        if let Some(date_from) = self.date_from.as_ref() {
            args = args.date("from", date_from);
        }
        if let Some(date_to) = self.date_to.as_ref() {
            args = args.date("to", date_to);
        }
        if let Some(received) = self.received {
            args = args.flag("type", received);
        }
        if let Some(did) = self.did.as_ref() {
            args = args.text("did", did.raw());
        }
        if let Some(contact) = self.contact.as_deref() {
            args = args.text("contact", contact);
        }
        if let Some(limit) = self.limit {
            args = args.int("limit", limit);
        }
        if let Some(timezone) = self.timezone {
            args = args.int("timezone", timezone);
        }
        args
    }
}

#[derive(Debug, Clone, Default)]
/// Filters for `getFaxMessages`. Everything is optional.
pub struct FaxQuery {
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
    pub folder: Option<String>,
}

impl FaxQuery {
    pub(crate) fn to_args(&self) -> Args {
        let mut args = Args::new();
        if let Some(date_from) = self.date_from.as_ref() {
            args = args.date("from", date_from);
        }
        if let Some(date_to) = self.date_to.as_ref() {
            args = args.date("to", date_to);
        }
        if let Some(folder) = self.folder.as_deref() {
            args = args.text("folder", folder);
        }
        args
    }
}

#[derive(Debug, Clone)]
/// Physical service address for the e911 operations.
///
/// Invariant: every address component is non-empty after trimming.
pub struct E911Address {
    full_name: String,
    street_number: String,
    street_name: String,
    city: String,
    state: String,
    country: String,
    zip_code: String,
    pub language: Option<String>,
    pub other_info: Option<String>,
    pub email: Option<EmailAddress>,
}

impl E911Address {
    pub fn new(
        full_name: impl Into<String>,
        street_number: impl Into<String>,
        street_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: required(full_name, "full_name")?,
            street_number: required(street_number, "street_number")?,
            street_name: required(street_name, "street_name")?,
            city: required(city, "city")?,
            state: required(state, "state")?,
            country: required(country, "country")?,
            zip_code: required(zip_code, "zip_code")?,
            language: None,
            other_info: None,
            email: None,
        })
    }

    pub(crate) fn to_args(&self) -> Args {
        let mut args = Args::new()
            .text("full_name", &*self.full_name)
            .text("street_number", &*self.street_number)
            .text("street_name", &*self.street_name)
            .text("city", &*self.city)
            .text("state", &*self.state)
            .text("country", &*self.country)
            .text("zip_code", &*self.zip_code);
        if let Some(language) = self.language.as_deref() {
            args = args.text("language", language);
        }
        if let Some(email) = self.email.as_ref() {
            args = args.email("email", email);
        }
        if let Some(other_info) = self.other_info.as_deref() {
            args = args.text("other_info", other_info);
        }
        args
    }
}

fn required(value: impl Into<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdr_query_defaults_to_answered_calls() {
        let query = CdrQuery::new(
            Date::new("2023-01-01").unwrap(),
            Date::new("2023-01-31").unwrap(),
            -5,
        );
        let args = query.to_args();
        assert!(args.contains("answered"));
        assert!(args.contains("noanswer"));
        assert!(!args.contains("calltype"));
        assert_eq!(args.len(), 7);
    }

    #[test]
    fn sms_query_only_emits_supplied_filters() {
        let query = SmsQuery {
            contact: Some("5559876543".to_owned()),
            limit: Some(20),
            ..Default::default()
        };
        let args = query.to_args();
        assert!(args.contains("contact"));
        assert!(args.contains("limit"));
        assert!(!args.contains("from"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn e911_address_rejects_blank_components() {
        let err = E911Address::new("John Doe", " ", "Main St", "Denver", "CO", "US", "80014")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "street_number",
            }
        );
    }

    #[test]
    fn e911_address_emits_optional_fields_when_present() {
        let mut address =
            E911Address::new("John Doe", "123", "Main St", "Denver", "CO", "US", "80014").unwrap();
        address.email = Some(EmailAddress::new("john@example.com").unwrap());
        let args = address.to_args();
        assert!(args.contains("full_name"));
        assert!(args.contains("email"));
        assert_eq!(args.len(), 8);
    }
}
