//! Request signature computation.
//!
//! Every API request carries a `signature` header derived from the common
//! header fields: the fields are sorted lexically by name, joined as
//! `key=value` pairs with `&`, the shared application secret is appended,
//! the whole chain is percent-encoded and the MD5 hex digest of that string
//! is the signature.

/// The header fields that participate in signing. `request_body` is the
/// JSON-serialized payload, or the empty string for body-less requests.
#[derive(Debug, Clone)]
pub struct SignFields<'a> {
    pub nonce: &'a str,
    pub timestamp: &'a str,
    pub authorization: &'a str,
    pub app_key: &'a str,
    pub platform: &'a str,
    pub request_body: &'a str,
}

/// Percent-encodes with `encodeURIComponent` semantics plus the stricter
/// RFC 3986 treatment of `!'()*`: only ALPHA / DIGIT / `-` `_` `.` `~`
/// pass through, everything else becomes uppercase `%XX` per UTF-8 byte.
pub fn fixed_encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Computes the signature for a field set and application secret.
pub fn signature(fields: &SignFields<'_>, secret: &str) -> String {
    let mut entries = [
        ("AppKey", fields.app_key),
        ("Authorization", fields.authorization),
        ("Nonce", fields.nonce),
        ("Platform", fields.platform),
        ("RequestBody", fields.request_body),
        ("Timestamp", fields.timestamp),
    ];
    entries.sort_by_key(|(k, _)| *k);

    let chain = entries
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
        + "&"
        + secret;

    format!("{:x}", md5::compute(fixed_encode_uri_component(&chain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>() -> SignFields<'a> {
        SignFields {
            nonce: "8c9f2f5e-6c3a-4a5e-9f1d-0b7a2a1d9e44",
            timestamp: "1718000000000",
            authorization: "token-abc",
            app_key: "key-123",
            platform: "web",
            request_body: r#"{"activity_id":7}"#,
        }
    }

    #[test]
    fn encoding_matches_js_fixed_encode_uri_component() {
        assert_eq!(fixed_encode_uri_component("a b"), "a%20b");
        assert_eq!(fixed_encode_uri_component("a!b'c(d)e*f"), "a%21b%27c%28d%29e%2Af");
        assert_eq!(fixed_encode_uri_component("k=v&x"), "k%3Dv%26x");
        assert_eq!(fixed_encode_uri_component("A-z_0.9~"), "A-z_0.9~");
        // Multibyte input is encoded per UTF-8 byte.
        assert_eq!(fixed_encode_uri_component("你"), "%E4%BD%A0");
    }

    #[test]
    fn signature_is_deterministic() {
        let a = signature(&fields(), "secret");
        let b = signature(&fields(), "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn any_field_change_changes_the_signature() {
        let base = signature(&fields(), "secret");
        let mut f = fields();
        f.nonce = "other-nonce";
        assert_ne!(signature(&f, "secret"), base);

        let mut f = fields();
        f.authorization = "";
        assert_ne!(signature(&f, "secret"), base);

        let mut f = fields();
        f.request_body = "";
        assert_ne!(signature(&f, "secret"), base);

        assert_ne!(signature(&fields(), "other-secret"), base);
    }
}
