#![allow(dead_code)]

use cors_stamp::{CorsHeader, ResolvedHeaders};

use super::context::RecordingResponse;

pub fn assert_header(resolved: &ResolvedHeaders, name: CorsHeader, expected: &str) {
    match resolved.get(name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for {}", name),
        None => panic!("expected {} to be resolved, but it was absent", name),
    }
}

pub fn assert_absent(resolved: &ResolvedHeaders, name: CorsHeader) {
    assert!(
        !resolved.contains(name),
        "expected {} to be absent, got '{}'",
        name,
        resolved.get(name).unwrap_or_default()
    );
}

pub fn assert_stamped(response: &RecordingResponse, name: &str, expected: &str) {
    match response.value_of(name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for {}", name),
        None => panic!("expected {} to be stamped, but it was absent", name),
    }
}

pub fn assert_not_stamped(response: &RecordingResponse, name: &str) {
    assert!(
        response.value_of(name).is_none(),
        "expected {} to be absent, got '{}'",
        name,
        response.value_of(name).unwrap_or_default()
    );
}
