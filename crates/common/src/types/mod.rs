use serde::Serialize;

/// Uniform wrapper around every successful response payload.
///
/// `version` is the configured service version, surfaced verbatim on every
/// success; `data` varies per endpoint (a list of names or a single value).
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub version: String,
    pub data: T,
}
