use crate::config::HeaderConfig;
use crate::constants::default;
use crate::cors_header::CorsHeader;
use crate::headers::ResolvedHeaders;

/// Computes the CORS headers to stamp for `config`.
///
/// Each header is taken from the config when a non-empty override is
/// present, otherwise from its built-in default, otherwise omitted.
/// An `Allow-Headers` override is then widened so the default list
/// always stays reachable. The computation is pure and cannot fail.
pub fn resolve(config: &HeaderConfig) -> ResolvedHeaders {
    let mut resolved = ResolvedHeaders::with_capacity(CorsHeader::ALL.len());

    for name in CorsHeader::ALL {
        match config.value_of(name) {
            Some(value) if !value.is_empty() => resolved.insert(name, value.to_string()),
            _ => {
                if let Some(fallback) = name.default_value() {
                    resolved.insert(name, fallback.to_string());
                }
            }
        }
    }

    merge_allow_headers(&mut resolved);

    resolved
}

/// The default allow-header list always leads; a caller override is
/// appended after it verbatim, even when that repeats a default entry.
fn merge_allow_headers(resolved: &mut ResolvedHeaders) {
    let merged = match resolved.get(CorsHeader::AllowHeaders) {
        Some(value) if value != default::ALLOW_HEADERS => {
            Some(format!("{}, {}", default::ALLOW_HEADERS, value))
        }
        _ => None,
    };

    if let Some(value) = merged {
        resolved.insert(CorsHeader::AllowHeaders, value);
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
