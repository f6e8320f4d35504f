#![allow(dead_code)]

pub const DEFAULT_ALLOW_ORIGIN: &str = "*";
pub const DEFAULT_ALLOW_HEADERS: &str =
    "Authorization, Content-Type, x-requested-with, origin, true-client-ip, X-Correlation-ID";
pub const DEFAULT_ALLOW_METHODS: &str = "PUT, POST, GET, DELETE, OPTIONS, PATCH";

pub fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &[(String, String)], name: &str) -> bool {
    header_value(headers, name).is_some()
}
