//! Vendor status strings and their documented meanings.
//!
//! Every VoIP.ms response carries a `status` field. `"success"` is the only
//! success sentinel; everything else is a short error code. Lookup here is
//! exact-string and case-sensitive, and codes absent from the table return
//! `None` (the client passes those responses through instead of raising).

/// The only status value VoIP.ms uses for a successful call.
pub const SUCCESS: &str = "success";

/// Map a vendor error status to its documented message.
///
/// Returns `None` for `"success"` and for any status this crate does not
/// know about.
pub fn error_message(status: &str) -> Option<&'static str> {
    Some(match status {
        "account_with_dids" => "The account has DIDs assigned to it",
        "api_not_enabled" => "API has not been enabled or has been disabled",
        "cancel_too_soon" => "You cannot cancel a DID 24 hours before its renewal",
        "did_in_use" => "DID number is already in use",
        "error_deleting_msg" => "The message could not be deleted",
        "error_moving_msg" => "The message could not be moved",
        "exceeds_file_size" => "The file exceeds the maximum size allowed",
        "existing_did" => "You already have this DID in your account",
        "forwards_exceeded" => "You have reached the maximum number of forwarding entries",
        "invalid_account" => "This is not a valid account",
        "invalid_address" => "This is not a valid address",
        "invalid_admin" => "This is not a valid admin",
        "invalid_agent_ring_timeout" => "This is not a valid agent ring timeout",
        "invalid_allowedcodecs" => "One or more of the codecs provided are not valid",
        "invalid_announce_position_frequency" => {
            "This is not a valid announce position frequency"
        }
        "invalid_announce_round_seconds" => "This is not a valid announce round seconds value",
        "invalid_attachid" => "This is not a valid attachment ID",
        "invalid_attachment" => "This is not a valid attachment",
        "invalid_authtype" => "This is not a valid auth type",
        "invalid_balanceannouncement" => "This is not a valid balance announcement value",
        "invalid_billingtype" => "This is not a valid billing type",
        "invalid_callback" => "This is not a valid callback",
        "invalid_callback_enable" => "This is not a valid callback enable value",
        "invalid_callback_retry" => "This is not a valid callback retry",
        "invalid_callerid" => "This is not a valid caller ID",
        "invalid_callparking" => "This is not a valid call parking",
        "invalid_campaign" => "This is not a valid campaign",
        "invalid_carrier" => "This is not a valid carrier",
        "invalid_charge" => "This is not a valid charge amount",
        "invalid_client" => "This is not a valid client",
        "invalid_cnam" => "This is not a valid CNAM value",
        "invalid_country" => "This is not a valid country",
        "invalid_countryid" => "This is not a valid country ID",
        "invalid_credentials" => "Username or password is incorrect",
        "invalid_date" => "This is not a valid date",
        "invalid_daterange" => "This is not a valid date range",
        "invalid_delay_before" => "This is not a valid delay before value",
        "invalid_devicetype" => "This is not a valid device type",
        "invalid_dialtime" => "This is not a valid dial time",
        "invalid_did" => "This is not a valid DID",
        "invalid_digit_timeout" => "This is not a valid digit timeout",
        "invalid_digits" => "This is not a valid digits value",
        "invalid_disa" => "This is not a valid DISA",
        "invalid_dst" => "This is not a valid destination number",
        "invalid_dtmf_digits" => "This is not a valid DTMF digits value",
        "invalid_dtmfmode" => "This is not a valid DTMF mode",
        "invalid_email" => "This is not a valid email",
        "invalid_email_attachment_format" => "This is not a valid email attachment format",
        "invalid_email_enable" => "This is not a valid email enable value",
        "invalid_endhour" => "This is not a valid end hour",
        "invalid_endminute" => "This is not a valid end minute",
        "invalid_extension" => "This is not a valid extension",
        "invalid_failover_header" => "This is not a valid failover header",
        "invalid_fax_id" => "This is not a valid fax ID",
        "invalid_file" => "This is not a valid file",
        "invalid_filter" => "This is not a valid filter",
        "invalid_folder" => "This is not a valid folder",
        "invalid_forwarding" => "This is not a valid forwarding",
        "invalid_frequency_announcement" => "This is not a valid frequency announcement",
        "invalid_from_number" => "This is not a valid sender number",
        "invalid_id" => "This is not a valid ID",
        "invalid_internationalroute" => "This is not a valid international route",
        "invalid_ip" => "This is not a valid IP address",
        "invalid_ivr" => "This is not a valid IVR",
        "invalid_join_when_empty" => "This is not a valid join when empty value",
        "invalid_language" => "This is not a valid language",
        "invalid_leave_when_empty" => "This is not a valid leave when empty value",
        "invalid_location" => "This is not a valid location",
        "invalid_lockinternational" => "This is not a valid lock international value",
        "invalid_mailbox" => "This is not a valid mailbox",
        "invalid_maximum_callers" => "This is not a valid maximum callers value",
        "invalid_maximum_wait_time" => "This is not a valid maximum wait time",
        "invalid_member_delay" => "This is not a valid member delay",
        "invalid_method" => "This is not a valid method",
        "invalid_monthly" => "This is not a valid monthly amount",
        "invalid_musiconhold" => "This is not a valid music on hold",
        "invalid_name" => "This is not a valid name",
        "invalid_nat" => "This is not a valid NAT value",
        "invalid_note" => "This is not a valid note",
        "invalid_number" => "This is not a valid number",
        "invalid_package" => "This is not a valid package",
        "invalid_password" => "This is not a valid password",
        "invalid_payment" => "This is not a valid payment amount",
        "invalid_phonebook" => "This is not a valid phonebook entry",
        "invalid_pin" => "This is not a valid PIN",
        "invalid_playinstructions" => "This is not a valid play instructions value",
        "invalid_pop" => "This is not a valid POP",
        "invalid_priority" => "This is not a valid priority",
        "invalid_protocol" => "This is not a valid protocol",
        "invalid_province" => "This is not a valid province",
        "invalid_quantity" => "This is not a valid quantity",
        "invalid_query" => "This is not a valid query",
        "invalid_ratecenter" => "This is not a valid rate center",
        "invalid_recording" => "This is not a valid recording",
        "invalid_report_estimated_hold_time" => {
            "This is not a valid report estimated hold time value"
        }
        "invalid_resellerclient" => "This is not a valid reseller client",
        "invalid_resellerpackage" => "This is not a valid reseller package",
        "invalid_responsetimeout" => "This is not a valid response timeout",
        "invalid_ringgroup" => "This is not a valid ring group",
        "invalid_route" => "This is not a valid route",
        "invalid_routing" => "This is not a valid routing",
        "invalid_security_code" => "This is not a valid security code",
        "invalid_serverpop" => "This is not a valid server POP",
        "invalid_setup" => "This is not a valid setup amount",
        "invalid_sipuri" => "This is not a valid SIP URI",
        "invalid_sms" => "This is not a valid SMS message",
        "invalid_speed_dial" => "This is not a valid speed dial",
        "invalid_starthour" => "This is not a valid start hour",
        "invalid_startminute" => "This is not a valid start minute",
        "invalid_state" => "This is not a valid state",
        "invalid_threshold" => "This is not a valid threshold amount",
        "invalid_thresholdinformation" => "This is not a valid threshold information value",
        "invalid_timecondition" => "This is not a valid time condition",
        "invalid_timeout" => "This is not a valid timeout",
        "invalid_timerange" => "This is not a valid time range",
        "invalid_timezone" => "This is not a valid timezone",
        "invalid_to_number" => "This is not a valid recipient number",
        "invalid_type" => "This is not a valid type",
        "invalid_username" => "This is not a valid username",
        "invalid_voicemailsetup" => "This is not a valid voicemail setup value",
        "invalid_zip" => "This is not a valid zip code",
        "ip_not_enabled" => "This IP has not been enabled for API use",
        "limit_reached" => "You have reached the maximum number of messages allowed per day",
        "max_phonebook" => "You have reached the maximum number of phonebook entries",
        "mismatch_email_confirm" => "The email addresses provided do not match",
        "mismatch_password_confirm" => "The passwords provided do not match",
        "missing_account" => "The account was not provided",
        "missing_address" => "The address was not provided",
        "missing_allowedcodecs" => "The allowed codecs were not provided",
        "missing_authtype" => "The auth type was not provided",
        "missing_billingtype" => "The billing type was not provided",
        "missing_callback" => "The callback was not provided",
        "missing_carrier" => "The carrier was not provided",
        "missing_charge" => "The charge amount was not provided",
        "missing_city" => "The city was not provided",
        "missing_client" => "The client was not provided",
        "missing_cnam" => "The CNAM value was not provided",
        "missing_country" => "The country was not provided",
        "missing_countryid" => "The country ID was not provided",
        "missing_credentials" => "Username or password was not provided",
        "missing_date" => "The date was not provided",
        "missing_delay_before" => "The delay before value was not provided",
        "missing_devicetype" => "The device type was not provided",
        "missing_dialtime" => "The dial time was not provided",
        "missing_did" => "The DID was not provided",
        "missing_digits" => "The digits value was not provided",
        "missing_disa" => "The DISA was not provided",
        "missing_dst" => "The destination number was not provided",
        "missing_dtmfmode" => "The DTMF mode was not provided",
        "missing_email" => "The email was not provided",
        "missing_endhour" => "The end hour was not provided",
        "missing_endminute" => "The end minute was not provided",
        "missing_fax_id" => "The fax ID was not provided",
        "missing_file" => "The file was not provided",
        "missing_filter" => "The filter was not provided",
        "missing_folder" => "The folder was not provided",
        "missing_forwarding" => "The forwarding was not provided",
        "missing_from_number" => "The sender number was not provided",
        "missing_id" => "The ID was not provided",
        "missing_internationalroute" => "The international route was not provided",
        "missing_ip" => "The IP address was not provided",
        "missing_ivr" => "The IVR was not provided",
        "missing_language" => "The language was not provided",
        "missing_location" => "The location was not provided",
        "missing_lockinternational" => "The lock international value was not provided",
        "missing_mailbox" => "The mailbox was not provided",
        "missing_members" => "The members were not provided",
        "missing_method" => "The method was not provided",
        "missing_monthly" => "The monthly amount was not provided",
        "missing_musiconhold" => "The music on hold was not provided",
        "missing_name" => "The name was not provided",
        "missing_nat" => "The NAT value was not provided",
        "missing_number" => "The number was not provided",
        "missing_package" => "The package was not provided",
        "missing_password" => "The password was not provided",
        "missing_payment" => "The payment amount was not provided",
        "missing_phonebook" => "The phonebook entry was not provided",
        "missing_pin" => "The PIN was not provided",
        "missing_pop" => "The POP was not provided",
        "missing_protocol" => "The protocol was not provided",
        "missing_province" => "The province was not provided",
        "missing_quantity" => "The quantity was not provided",
        "missing_query" => "The query was not provided",
        "missing_ratecenter" => "The rate center was not provided",
        "missing_recording" => "The recording was not provided",
        "missing_resellerclient" => "The reseller client was not provided",
        "missing_resellerpackage" => "The reseller package was not provided",
        "missing_ringgroup" => "The ring group was not provided",
        "missing_route" => "The route was not provided",
        "missing_routing" => "The routing was not provided",
        "missing_security_code" => "The security code was not provided",
        "missing_serverpop" => "The server POP was not provided",
        "missing_setup" => "The setup amount was not provided",
        "missing_sipuri" => "The SIP URI was not provided",
        "missing_sms" => "The SMS message was not provided",
        "missing_starthour" => "The start hour was not provided",
        "missing_startminute" => "The start minute was not provided",
        "missing_state" => "The state was not provided",
        "missing_threshold" => "The threshold amount was not provided",
        "missing_timecondition" => "The time condition was not provided",
        "missing_timezone" => "The timezone was not provided",
        "missing_to_number" => "The recipient number was not provided",
        "missing_type" => "The type was not provided",
        "missing_username" => "The username was not provided",
        "missing_zip" => "The zip code was not provided",
        "no_account" => "There are no accounts",
        "no_attachment" => "There is no attachment",
        "no_base64file" => "The file provided is not base64 encoded",
        "no_callback" => "There are no callbacks",
        "no_callstatus" => "No call status was provided",
        "no_change" => "There were no changes to apply",
        "no_client" => "There are no clients",
        "no_did" => "There are no DIDs",
        "no_disa" => "There are no DISAs",
        "no_ivr" => "There are no IVRs",
        "no_mailbox" => "There are no mailboxes",
        "no_messages" => "There are no messages",
        "no_package" => "There are no packages",
        "no_phonebook" => "There are no phonebook entries",
        "no_rate" => "There are no rates for the given query",
        "no_ringgroup" => "There are no ring groups",
        "no_sms" => "There are no SMS messages",
        "no_timecondition" => "There are no time conditions",
        "non_sufficient_funds" => "Your account does not have sufficient funds",
        "order_failed" => "The order could not be completed",
        "same_did_billing_type" => "The DID already has this billing type",
        "sms_failed" => "The SMS message could not be sent",
        "sms_toolong" => "The SMS message exceeds 160 characters",
        "unavailable_info" => "The information you requested is unavailable",
        "weak_password" => "The password provided is too weak",
        _ => return None,
    })
}
