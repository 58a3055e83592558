//! Streaming relay
//!
//! Forwards an upstream response body to the client as it arrives. Chunks are
//! relayed verbatim, in arrival order, with no reframing and no buffering of
//! the full body — the upstream framing (SSE or otherwise) is opaque here.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::warn;

/// Relay a stream of upstream byte chunks to the client.
///
/// Zero-length chunks are skipped rather than forwarded as distinct units.
/// The relayed sequence ends when the upstream closes its connection; each
/// request gets its own relay, and dropping the returned stream (client
/// disconnect) drops the upstream response with it, releasing the connection.
pub fn relay<S>(upstream: S) -> impl Stream<Item = Result<Bytes, reqwest::Error>>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    upstream.filter_map(|chunk| async move {
        match chunk {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => Some(Ok(bytes)),
            Err(e) => {
                warn!(error = %e, "Upstream stream error");
                Some(Err(e))
            }
        }
    })
}
