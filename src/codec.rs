//! HTTP/1.1 framing for the one-request-per-connection protocol.
//!
//! The wire surface is deliberately small: a request line, a handful of
//! headers of which only `Content-Length` matters, and a protobuf body.
//! Responses are built as complete byte frames so the transport can write
//! them in one call.

use prost::Message;

use crate::error::WorkerError;

/// Upper bound on a buffered request, header block included. Connections
/// advertising more are dropped without a response.
pub const MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;

pub const CONTENT_TYPE_PROTO: &str = "application/proto";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Parsed request head. The HTTP method is carried for logging only; the
/// router keys on the path alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub method: String,
    pub path: String,
    pub content_length: Option<usize>,
}

/// Frame a successful protobuf response.
pub fn frame_success(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(96 + body.len());
    out.extend_from_slice(b"HTTP/1.1 200 OK\r\n");
    out.extend_from_slice(format!("Content-Type: {CONTENT_TYPE_PROTO}\r\n").as_bytes());
    out.extend_from_slice(format!("Content-Length: {}\r\n\r\n", body.len()).as_bytes());
    out.extend_from_slice(body);
    out
}

/// Frame an error as plain text. The reason phrase is always `Error`; the
/// body is the message with no trailing newline.
pub fn frame_error(status: u16, message: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(96 + message.len());
    out.extend_from_slice(format!("HTTP/1.1 {status} Error\r\n").as_bytes());
    out.extend_from_slice(format!("Content-Type: {CONTENT_TYPE_TEXT}\r\n").as_bytes());
    out.extend_from_slice(format!("Content-Length: {}\r\n\r\n", message.len()).as_bytes());
    out.extend_from_slice(message.as_bytes());
    out
}

/// Offset just past the `\r\n\r\n` header terminator, if present.
pub fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

/// Parse the request line and headers. `None` means the head is not
/// usable and the connection should be dropped without a response.
///
/// Header names are matched ASCII-case-insensitively; an unparseable
/// `Content-Length` value is treated as absent.
pub fn parse_head(head: &[u8]) -> Option<RequestHead> {
    let text = String::from_utf8_lossy(head);
    let mut lines = text.split("\r\n");

    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();
    parts.next()?; // the HTTP version must at least be present

    let mut content_length = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse::<usize>().ok();
            }
        }
    }

    Some(RequestHead {
        method,
        path,
        content_length,
    })
}

/// Decode a protobuf request body.
pub fn decode<M: Message + Default>(body: &[u8]) -> Result<M, WorkerError> {
    M::decode(body).map_err(WorkerError::from)
}
