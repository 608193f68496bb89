//! Typed convenience surface over [`VoipMsClient::call`].
//!
//! Each method builds an argument bag from typed domain values and goes
//! through the schema-checked dispatch path, so the operation schema stays
//! the single place arguments are validated and encoded.

use serde_json::Value;

use crate::domain::{
    Args, CdrQuery, Date, E911Address, EmailAddress, FaxQuery, RawDid, Routing, SmsQuery,
    Threshold, ValidationError,
};

use super::{VoipMsClient, VoipMsError};

impl VoipMsClient {
    // --- General ---

    /// Retrieve the account balance. `advanced` adds spent/calls counters.
    pub async fn get_balance(&self, advanced: bool) -> Result<Option<Value>, VoipMsError> {
        self.call("getBalance", &Args::new().flag("advanced", advanced))
            .await
    }

    /// Retrieve the IP the API sees this client connecting from.
    pub async fn get_ip(&self) -> Result<Option<Value>, VoipMsError> {
        self.call("getIP", &Args::new()).await
    }

    /// Retrieve transactions between two dates (inclusive).
    pub async fn get_transaction_history(
        &self,
        date_from: &Date,
        date_to: &Date,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .date("date_from", date_from)
            .date("date_to", date_to);
        self.call("getTransactionHistory", &args).await
    }

    /// Retrieve the supported languages, or one language by code.
    pub async fn get_languages(
        &self,
        language: Option<&str>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(language) = language {
            args = args.text("language", language);
        }
        self.call("getLanguages", &args).await
    }

    /// Retrieve the server POPs, or one POP by id.
    pub async fn get_servers_info(
        &self,
        server_pop: Option<i64>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(server_pop) = server_pop {
            args = args.int("server_pop", server_pop);
        }
        self.call("getServersInfo", &args).await
    }

    // --- Accounts ---

    /// Retrieve all sub accounts, or one by account name.
    pub async fn get_sub_accounts(
        &self,
        account: Option<&str>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(account) = account {
            args = args.text("account", account);
        }
        self.call("getSubAccounts", &args).await
    }

    /// Delete a sub account by id.
    pub async fn del_sub_account(&self, id: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("delSubAccount", &Args::new().int("id", id)).await
    }

    /// Retrieve the SIP registration status of a sub account.
    pub async fn get_registration_status(
        &self,
        account: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        if account.trim().is_empty() {
            return Err(ValidationError::Empty { field: "account" }.into());
        }
        self.call("getRegistrationStatus", &Args::new().text("account", account.trim()))
            .await
    }

    // --- DIDs ---

    /// Retrieve DIDs, optionally filtered by reseller client or number.
    pub async fn get_dids_info(
        &self,
        client: Option<&str>,
        did: Option<&RawDid>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(client) = client {
            args = args.text("client", client);
        }
        if let Some(did) = did {
            args = args.text("did", did.raw());
        }
        self.call("getDIDsInfo", &args).await
    }

    /// Cancel a DID.
    ///
    /// `portout` marks the number as ported to another carrier; `test`
    /// performs a dry run without touching the account.
    pub async fn cancel_did(
        &self,
        did: &RawDid,
        comment: Option<&str>,
        portout: bool,
        test: bool,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new()
            .text("did", did.raw())
            .flag("portout", portout)
            .flag("test", test);
        if let Some(comment) = comment {
            args = args.text("cancelcomment", comment);
        }
        self.call("cancelDID", &args).await
    }

    /// Point a DID at a new routing destination.
    pub async fn set_did_routing(
        &self,
        did: &RawDid,
        routing: &Routing,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("did", did.raw())
            .text("routing", routing.as_str());
        self.call("setDIDRouting", &args).await
    }

    /// Move a DID to a different server POP.
    pub async fn set_did_pop(&self, did: &RawDid, pop: i64) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new().text("did", did.raw()).int("pop", pop);
        self.call("setDIDPOP", &args).await
    }

    /// Switch a DID between per-minute and flat billing.
    pub async fn set_did_billing_type(
        &self,
        did: &RawDid,
        billing_type: i64,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("did", did.raw())
            .int("billing_type", billing_type);
        self.call("setDIDBillingType", &args).await
    }

    /// Search for available USA DIDs. `search_type` is one of the vendor's
    /// pattern kinds (`starts`, `contains`, `ends`).
    pub async fn search_dids_usa(
        &self,
        state: &str,
        search_type: &str,
        query: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("state", state)
            .text("type", search_type)
            .text("query", query);
        self.call("searchDIDsUSA", &args).await
    }

    /// Search for available Canadian DIDs.
    pub async fn search_dids_can(
        &self,
        province: &str,
        search_type: &str,
        query: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("province", province)
            .text("type", search_type)
            .text("query", query);
        self.call("searchDIDsCAN", &args).await
    }

    // --- Calls ---

    /// Retrieve call detail records for the main account.
    pub async fn get_cdr(&self, query: &CdrQuery) -> Result<Option<Value>, VoipMsError> {
        self.call("getCDR", &query.to_args()).await
    }

    /// Retrieve call detail records for one reseller client.
    ///
    /// The `account` filter of [`CdrQuery`] applies to the main-account
    /// variant only and is rejected here.
    pub async fn get_reseller_cdr(
        &self,
        client: i64,
        query: &CdrQuery,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = query.to_args().int("client", client);
        self.call("getResellerCDR", &args).await
    }

    /// Retrieve rates for a package and destination query.
    pub async fn get_rates(
        &self,
        package: i64,
        query: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new().int("package", package).text("query", query);
        self.call("getRates", &args).await
    }

    /// Retrieve termination rates for a route and destination query.
    pub async fn get_termination_rates(
        &self,
        route: i64,
        query: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new().int("route", route).text("query", query);
        self.call("getTerminationRates", &args).await
    }

    // --- Reseller clients ---

    /// Retrieve all reseller clients, or one by id.
    pub async fn get_clients(&self, client: Option<i64>) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(client) = client {
            args = args.int("client", client);
        }
        self.call("getClients", &args).await
    }

    /// Debit a reseller client's balance.
    pub async fn add_charge(
        &self,
        client: i64,
        charge: f64,
        description: Option<&str>,
        test: bool,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new()
            .int("client", client)
            .float("charge", charge)
            .flag("test", test);
        if let Some(description) = description {
            args = args.text("description", description);
        }
        self.call("addCharge", &args).await
    }

    /// Credit a reseller client's balance.
    pub async fn add_payment(
        &self,
        client: i64,
        payment: f64,
        description: Option<&str>,
        test: bool,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new()
            .int("client", client)
            .float("payment", payment)
            .flag("test", test);
        if let Some(description) = description {
            args = args.text("description", description);
        }
        self.call("addPayment", &args).await
    }

    /// Set the balance-warning threshold for a reseller client.
    pub async fn set_client_threshold(
        &self,
        client: i64,
        threshold: Threshold,
        email: Option<&EmailAddress>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new()
            .int("client", client)
            .int("threshold", threshold.value() as i64);
        if let Some(email) = email {
            args = args.email("email", email);
        }
        self.call("setClientThreshold", &args).await
    }

    /// Retrieve the packages available to a reseller client.
    pub async fn get_client_packages(&self, client: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("getClientPackages", &Args::new().int("client", client))
            .await
    }

    /// Retrieve a reseller client's balance.
    pub async fn get_reseller_balance(&self, client: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("getResellerBalance", &Args::new().int("client", client))
            .await
    }

    // --- SMS ---

    /// Send an SMS message from one of the account's SMS-enabled DIDs.
    pub async fn send_sms(
        &self,
        did: &RawDid,
        dst: &RawDid,
        message: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        if message.trim().is_empty() {
            return Err(ValidationError::Empty { field: "message" }.into());
        }
        let args = Args::new()
            .text("did", did.raw())
            .text("dst", dst.raw())
            .text("message", message);
        self.call("sendSMS", &args).await
    }

    /// Retrieve SMS messages matching the query filters.
    pub async fn get_sms(&self, query: &SmsQuery) -> Result<Option<Value>, VoipMsError> {
        self.call("getSMS", &query.to_args()).await
    }

    /// Delete an SMS message by id.
    pub async fn delete_sms(&self, id: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("deleteSMS", &Args::new().int("id", id)).await
    }

    // --- Voicemail ---

    /// Retrieve all mailboxes, or one by number.
    pub async fn get_voicemails(
        &self,
        mailbox: Option<i64>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(mailbox) = mailbox {
            args = args.int("mailbox", mailbox);
        }
        self.call("getVoicemails", &args).await
    }

    /// Retrieve the messages in a mailbox, optionally from one folder.
    pub async fn get_voicemail_messages(
        &self,
        mailbox: i64,
        folder: Option<&str>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new().int("mailbox", mailbox);
        if let Some(folder) = folder {
            args = args.text("folder", folder);
        }
        self.call("getVoicemailMessages", &args).await
    }

    /// Mark one message listened or unlistened.
    pub async fn mark_listened_voicemail_message(
        &self,
        mailbox: i64,
        folder: &str,
        message_num: i64,
        listened: bool,
    ) -> Result<Option<Value>, VoipMsError> {
        // The vendor wants yes/no here, not the usual 1/0.
        let args = Args::new()
            .int("mailbox", mailbox)
            .text("folder", folder)
            .int("message_num", message_num)
            .text("listened", if listened { "yes" } else { "no" });
        self.call("markListenedVoicemailMessage", &args).await
    }

    /// Delete messages from a mailbox, optionally scoped to one folder.
    pub async fn del_messages(
        &self,
        mailbox: i64,
        folder: Option<&str>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new().int("mailbox", mailbox);
        if let Some(folder) = folder {
            args = args.text("folder", folder);
        }
        self.call("delMessages", &args).await
    }

    // --- Fax ---

    /// Retrieve fax messages matching the query filters.
    pub async fn get_fax_messages(&self, query: &FaxQuery) -> Result<Option<Value>, VoipMsError> {
        self.call("getFaxMessages", &query.to_args()).await
    }

    /// Retrieve all fax numbers, or one by DID.
    pub async fn get_fax_numbers_info(
        &self,
        did: Option<&RawDid>,
    ) -> Result<Option<Value>, VoipMsError> {
        let mut args = Args::new();
        if let Some(did) = did {
            args = args.text("did", did.raw());
        }
        self.call("getFaxNumbersInfo", &args).await
    }

    /// Delete a fax message by id.
    pub async fn delete_fax_message(
        &self,
        id: i64,
        test: bool,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new().int("id", id).flag("test", test);
        self.call("deleteFaxMessage", &args).await
    }

    /// E-mail a fax message as a PDF attachment.
    pub async fn mail_fax_message_pdf(
        &self,
        id: i64,
        email: &EmailAddress,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new().int("id", id).email("email", email);
        self.call("mailFaxMessagePDF", &args).await
    }

    // --- e911 ---

    /// Retrieve the e911 registration for a DID.
    pub async fn e911_info(&self, did: &RawDid) -> Result<Option<Value>, VoipMsError> {
        self.call("e911Info", &Args::new().text("did", did.raw()))
            .await
    }

    /// Register a DID for emergency calling at the given service address.
    pub async fn e911_provision(
        &self,
        did: &RawDid,
        address: &E911Address,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("did", did.raw())
            .merge(address.to_args());
        self.call("e911Provision", &args).await
    }

    /// Update the service address of an existing e911 registration.
    pub async fn e911_update(
        &self,
        did: &RawDid,
        address: &E911Address,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("did", did.raw())
            .merge(address.to_args());
        self.call("e911Update", &args).await
    }

    /// Validate a service address without provisioning it.
    pub async fn e911_validate(
        &self,
        did: &RawDid,
        address: &E911Address,
    ) -> Result<Option<Value>, VoipMsError> {
        let args = Args::new()
            .text("did", did.raw())
            .merge(address.to_args());
        self.call("e911Validate", &args).await
    }

    /// Cancel the e911 registration for a DID.
    pub async fn e911_cancel(&self, did: &RawDid) -> Result<Option<Value>, VoipMsError> {
        self.call("e911Cancel", &Args::new().text("did", did.raw()))
            .await
    }

    // --- LNP ---

    /// Open a port-in request for one or more numbers.
    pub async fn add_lnp_port(
        &self,
        numbers: &[RawDid],
        btn: Option<&str>,
        partial: bool,
        notes: Option<&str>,
    ) -> Result<Option<Value>, VoipMsError> {
        if numbers.is_empty() {
            return Err(ValidationError::Empty { field: "numbers" }.into());
        }
        let joined = numbers
            .iter()
            .map(RawDid::raw)
            .collect::<Vec<_>>()
            .join(",");
        let mut args = Args::new().text("numbers", joined).flag("partial", partial);
        if let Some(btn) = btn {
            args = args.text("btn", btn);
        }
        if let Some(notes) = notes {
            args = args.text("notes", notes);
        }
        self.call("addLNPPort", &args).await
    }

    /// Retrieve the status of a port-in request.
    pub async fn get_lnp_status(&self, portid: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("getLNPStatus", &Args::new().int("portid", portid))
            .await
    }

    /// Retrieve the notes attached to a port-in request.
    pub async fn get_lnp_notes(&self, portid: i64) -> Result<Option<Value>, VoipMsError> {
        self.call("getLNPNotes", &Args::new().int("portid", portid))
            .await
    }

    /// Attach a note to a port-in request.
    pub async fn add_lnp_note(
        &self,
        portid: i64,
        note: &str,
    ) -> Result<Option<Value>, VoipMsError> {
        if note.trim().is_empty() {
            return Err(ValidationError::Empty { field: "note" }.into());
        }
        let args = Args::new().int("portid", portid).text("note", note);
        self.call("addLNPNote", &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{assert_param, make_client, FakeTransport};
    use crate::domain::{
        CdrQuery, Date, E911Address, EmailAddress, RawDid, Routing, RoutingHeader, Threshold,
        ValidationError,
    };
    use crate::VoipMsError;

    const OK: &str = r#"{"status":"success"}"#;

    #[tokio::test]
    async fn get_balance_goes_over_get_with_the_advanced_flag() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        client.get_balance(true).await.unwrap();
        let (verb, url, _) = transport.last_request();
        assert_eq!(verb, Some("GET"));
        let url = url.unwrap();
        assert!(url.contains("method=getBalance"));
        assert!(url.contains("advanced=1"));
    }

    #[tokio::test]
    async fn send_sms_posts_did_dst_and_message() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let did = RawDid::new("5551234567").unwrap();
        let dst = RawDid::new("5559876543").unwrap();
        client.send_sms(&did, &dst, "hello there").await.unwrap();

        let (verb, _, form) = transport.last_request();
        assert_eq!(verb, Some("POST"));
        assert_param(&form, "method", "sendSMS");
        assert_param(&form, "did", "5551234567");
        assert_param(&form, "dst", "5559876543");
        assert_param(&form, "message", "hello there");
    }

    #[tokio::test]
    async fn send_sms_rejects_blank_messages_locally() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let did = RawDid::new("5551234567").unwrap();
        let dst = RawDid::new("5559876543").unwrap();
        let err = client.send_sms(&did, &dst, "   ").await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::Validation(ValidationError::Empty { field: "message" })
        ));
        let (verb, _, _) = transport.last_request();
        assert_eq!(verb, None);
    }

    #[tokio::test]
    async fn get_cdr_encodes_dates_and_status_flags() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let query = CdrQuery::new(
            Date::new("2023-01-01").unwrap(),
            Date::new("2023-01-31").unwrap(),
            -5,
        );
        client.get_cdr(&query).await.unwrap();

        let (verb, url, _) = transport.last_request();
        assert_eq!(verb, Some("GET"));
        let url = url.unwrap();
        assert!(url.contains("method=getCDR"));
        assert!(url.contains("date_from=2023-01-01"));
        assert!(url.contains("timezone=-5"));
        assert!(url.contains("answered=1"));
        assert!(url.contains("noanswer=0"));
    }

    #[tokio::test]
    async fn set_did_routing_uses_the_routing_mini_syntax_untouched() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let did = RawDid::new("5551234567").unwrap();
        let routing = Routing::target(RoutingHeader::Vm, "101");
        client.set_did_routing(&did, &routing).await.unwrap();

        let (_, _, form) = transport.last_request();
        assert_param(&form, "routing", "vm:101");
    }

    #[tokio::test]
    async fn set_client_threshold_sends_the_validated_range() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let email = EmailAddress::new("alerts@example.com").unwrap();
        client
            .set_client_threshold(250692, Threshold::new(10).unwrap(), Some(&email))
            .await
            .unwrap();

        let (_, _, form) = transport.last_request();
        assert_param(&form, "method", "setClientThreshold");
        assert_param(&form, "client", "250692");
        assert_param(&form, "threshold", "10");
        assert_param(&form, "email", "alerts@example.com");
    }

    #[tokio::test]
    async fn e911_provision_posts_the_full_address() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let did = RawDid::new("5551234567").unwrap();
        let address =
            E911Address::new("John Doe", "123", "Main St", "Denver", "CO", "US", "80014").unwrap();
        client.e911_provision(&did, &address).await.unwrap();

        let (verb, _, form) = transport.last_request();
        assert_eq!(verb, Some("POST"));
        assert_param(&form, "method", "e911Provision");
        assert_param(&form, "did", "5551234567");
        assert_param(&form, "full_name", "John Doe");
        assert_param(&form, "zip_code", "80014");
    }

    #[tokio::test]
    async fn add_lnp_port_joins_numbers_with_commas() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        let numbers = vec![
            RawDid::new("5551234567").unwrap(),
            RawDid::new("5559876543").unwrap(),
        ];
        client
            .add_lnp_port(&numbers, Some("5551234567"), false, None)
            .await
            .unwrap();

        let (_, _, form) = transport.last_request();
        assert_param(&form, "numbers", "5551234567,5559876543");
        assert_param(&form, "partial", "0");
        assert_param(&form, "btn", "5551234567");

        let err = client.add_lnp_port(&[], None, false, None).await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::Validation(ValidationError::Empty { field: "numbers" })
        ));
    }

    #[tokio::test]
    async fn mark_listened_sends_yes_no_instead_of_flags() {
        let transport = FakeTransport::new(200, OK);
        let client = make_client(transport.clone());

        client
            .mark_listened_voicemail_message(101, "INBOX", 3, true)
            .await
            .unwrap();
        let (_, _, form) = transport.last_request();
        assert_param(&form, "listened", "yes");
        assert_param(&form, "message_num", "3");
    }
}
