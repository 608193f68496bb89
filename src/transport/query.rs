//! Query-string and form assembly for the rest.php endpoint.
//!
//! Every request carries the credentials, the `method` name, and the
//! operation parameters. GET requests additionally apply the vendor's
//! literal substitutions to the percent-encoded query: `/` and `:` travel
//! unescaped (routing values like `account:100000` and date-time text rely
//! on this), and CRLF collapses to a bare LF.

use url::form_urlencoded;

/// Build the full percent-encoded query string for a GET request.
pub(crate) fn encode_query(
    username: &str,
    password: &str,
    method: &str,
    params: &[(String, String)],
) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("api_username", username);
    serializer.append_pair("api_password", password);
    serializer.append_pair("method", method);
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    vendor_unescape(serializer.finish())
}

/// Build the form fields for a POST request (no substitutions needed; the
/// body is ordinary urlencoded form data).
pub(crate) fn form_params(
    username: &str,
    password: &str,
    method: &str,
    params: &[(String, String)],
) -> Vec<(String, String)> {
    let mut form = Vec::with_capacity(params.len() + 3);
    form.push(("api_username".to_owned(), username.to_owned()));
    form.push(("api_password".to_owned(), password.to_owned()));
    form.push(("method".to_owned(), method.to_owned()));
    form.extend(params.iter().cloned());
    form
}

fn vendor_unescape(encoded: String) -> String {
    encoded
        .replace("%2F", "/")
        .replace("%3A", ":")
        .replace("%0D%0A", "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn query_carries_credentials_method_and_params() {
        let query = encode_query(
            "john@example.com",
            "secret",
            "getBalance",
            &[pair("advanced", "1")],
        );
        assert_eq!(
            query,
            "api_username=john%40example.com&api_password=secret&method=getBalance&advanced=1"
        );
    }

    #[test]
    fn slash_and_colon_travel_unescaped() {
        let query = encode_query(
            "u",
            "p",
            "setDIDRouting",
            &[pair("did", "5551234567"), pair("routing", "account:100000")],
        );
        assert!(query.ends_with("did=5551234567&routing=account:100000"));
        assert!(!query.contains("%3A"));

        let query = encode_query("u", "p", "getRates", &[pair("query", "1/418")]);
        assert!(query.ends_with("query=1/418"));
        assert!(!query.contains("%2F"));
    }

    #[test]
    fn crlf_collapses_to_lf() {
        let query = encode_query("u", "p", "addLNPNote", &[pair("note", "line1\r\nline2")]);
        assert!(query.ends_with("note=line1%0Aline2"));
    }

    #[test]
    fn form_params_prepend_credentials_and_method() {
        let form = form_params("u", "p", "sendSMS", &[pair("did", "5551234567")]);
        assert_eq!(
            form,
            vec![
                pair("api_username", "u"),
                pair("api_password", "p"),
                pair("method", "sendSMS"),
                pair("did", "5551234567"),
            ]
        );
    }
}
