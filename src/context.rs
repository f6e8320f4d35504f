/// Write access to an outgoing response's headers.
///
/// Implement this for whatever response type your framework hands you;
/// the middleware only ever calls [`set_header`](Self::set_header).
/// Setting a name that is already present is expected to replace the
/// previous value.
pub trait ResponseContext {
    fn set_header(&mut self, name: &str, value: &str);
}
