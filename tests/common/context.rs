#![allow(dead_code)]

use cors_stamp::ResponseContext;

/// Response stand-in that records every stamped header in call order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RecordingResponse {
    headers: Vec<(String, String)>,
}

impl RecordingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn names(&self) -> Vec<&str> {
        self.headers.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl ResponseContext for RecordingResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}
