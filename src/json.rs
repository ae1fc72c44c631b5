//! JSON request/response helpers
//!
//! Every response body is an [`Envelope`]: a flat string-keyed JSON object
//! populated per response by the handler. Request bodies are decoded
//! strictly: one JSON document, a byte cap, and decode failures triaged
//! into the taxonomy in [`crate::error::Error`].

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Largest request body accepted by [`read_json`].
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Top-level shape of every JSON response.
pub type Envelope = Map<String, Value>;

/// Decode the request body into `T`, enforcing the byte cap and strict
/// single-document parsing.
///
/// Consumes the request. Unknown fields are rejected when `T` carries
/// `#[serde(deny_unknown_fields)]`; an invalid decode target cannot occur
/// here since `T` is constrained at compile time.
pub async fn read_json<T: DeserializeOwned>(req: Request) -> Result<T> {
    let bytes = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| Error::BodyTooLarge {
            limit: MAX_BODY_BYTES,
        })?;

    from_slice_strict(&bytes)
}

/// Decode exactly one JSON document from `bytes`.
///
/// Trailing non-whitespace after the first document is rejected, as is an
/// empty (or whitespace-only) input.
pub fn from_slice_strict<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(Error::EmptyBody);
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = T::deserialize(&mut de).map_err(|err| triage(err, bytes))?;

    // end() verifies only whitespace remains; a second document or any
    // trailing garbage fails here.
    de.end().map_err(|_| Error::MultipleJsonValues)?;

    Ok(value)
}

/// Serialize `data` and build the HTTP response.
///
/// Caller headers are copied in first, then `Content-Type` is set, so a
/// caller-supplied content type is always overridden while every other
/// header wins over the defaults. Header assignment happens strictly
/// before the status and body are attached. If serialization fails no
/// response value is constructed at all.
pub fn write_json(
    status: StatusCode,
    data: Envelope,
    headers: Option<HeaderMap>,
) -> Result<Response<Body>> {
    let body = to_vec_indented(&data)?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    if let Some(headers) = headers {
        for (name, value) in headers.iter() {
            response.headers_mut().append(name.clone(), value.clone());
        }
    }
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(response)
}

/// Parse a numeric resource id from a path parameter.
///
/// Base-10 signed 64-bit; zero is valid, negative values are not.
pub fn parse_id_param(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(Error::InvalidIdParameter),
    }
}

/// Tab-indented serialization with a single trailing newline.
fn to_vec_indented(data: &Envelope) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser).map_err(Error::Json)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Map a serde_json decode failure onto the caller-facing taxonomy.
fn triage(err: serde_json::Error, input: &[u8]) -> Error {
    use serde_json::error::Category;

    match err.classify() {
        Category::Eof => Error::TruncatedJson,
        Category::Syntax => Error::MalformedJson {
            offset: byte_offset(input, err.line(), err.column()),
        },
        Category::Data => triage_data(err, input),
        Category::Io => Error::Json(err),
    }
}

fn triage_data(err: serde_json::Error, input: &[u8]) -> Error {
    let message = err.to_string();

    if let Some(field) = backticked_field(&message, "unknown field `") {
        return Error::UnknownKey { field };
    }

    // serde's data errors do not expose the offending field path, so type
    // mismatches are reported positionally.
    if message.starts_with("invalid type") || message.starts_with("invalid value") {
        return Error::MismatchedType {
            offset: byte_offset(input, err.line(), err.column()),
        };
    }

    Error::Json(err)
}

/// Extract the field name from messages shaped like ``unknown field `x`, …``.
fn backticked_field(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Convert serde_json's 1-based line/column position into a byte offset
/// into `input`.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    if line <= 1 {
        return column;
    }

    let mut newlines_left = line - 1;
    for (i, b) in input.iter().enumerate() {
        if *b == b'\n' {
            newlines_left -= 1;
            if newlines_left == 0 {
                return i + 1 + column;
            }
        }
    }
    column
}
