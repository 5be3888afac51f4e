//! Invite-link query helpers.
//!
//! Invite links carry `?scene=invite&c=<code>` plus an optional
//! percent-encoded `targetlink`; the same shape is parsed back when a
//! landing page reconstructs the deep-link payload.

use crate::sign::fixed_encode_uri_component;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteParams {
    pub code: String,
    pub target_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InviteLinkError {
    MissingCode,
}

impl fmt::Display for InviteLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InviteLinkError::MissingCode => f.write_str("invite code missing from query"),
        }
    }
}

impl std::error::Error for InviteLinkError {}

pub fn generate_invite_url_query(code: &str, target_link: Option<&str>) -> String {
    let mut query = format!("?scene=invite&c={}", fixed_encode_uri_component(code));
    if let Some(link) = target_link {
        query.push_str("&targetlink=");
        query.push_str(&fixed_encode_uri_component(link));
    }
    query
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(h), Some(l)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((h * 16 + l) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Accepts a full URL or a bare query string.
pub fn parse_invite_url_query(url_or_query: &str) -> Result<InviteParams, InviteLinkError> {
    let query = url_or_query
        .split_once('?')
        .map(|(_, q)| q)
        .unwrap_or(url_or_query);

    let mut code = None;
    let mut target_link = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "c" => code = Some(percent_decode(value)),
            "targetlink" => target_link = Some(percent_decode(value)),
            _ => {}
        }
    }

    match code {
        Some(code) if !code.is_empty() => Ok(InviteParams { code, target_link }),
        _ => Err(InviteLinkError::MissingCode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_without_target_link() {
        assert_eq!(generate_invite_url_query("AB12", None), "?scene=invite&c=AB12");
    }

    #[test]
    fn round_trip_with_target_link() {
        let query = generate_invite_url_query("A/B", Some("https://x.example/p?q=1"));
        let parsed = parse_invite_url_query(&query).unwrap();
        assert_eq!(parsed.code, "A/B");
        assert_eq!(parsed.target_link.as_deref(), Some("https://x.example/p?q=1"));
    }

    #[test]
    fn parse_accepts_full_urls() {
        let parsed =
            parse_invite_url_query("https://h.example/activity/9?scene=invite&c=ZZ").unwrap();
        assert_eq!(parsed.code, "ZZ");
        assert_eq!(parsed.target_link, None);
    }

    #[test]
    fn missing_code_is_an_error() {
        assert_eq!(
            parse_invite_url_query("?scene=invite&targetlink=x"),
            Err(InviteLinkError::MissingCode)
        );
    }
}
