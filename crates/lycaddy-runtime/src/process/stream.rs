//! Async stream readers for child output (non-UTF8-safe).
//!
//! The server can emit non-UTF8 bytes on stdout/stderr. Using
//! `BufReader::lines()` would terminate the reader task on invalid UTF-8, so
//! lines are read as bytes and decoded lossily. A line longer than
//! [`MAX_CHUNK_BYTES`] is split into several events.

use std::sync::Arc;

use lycaddy_core::{StreamKind, SupervisorEvent, SupervisorEventEmitter};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

/// Largest output event emitted for a single unterminated line.
pub(super) const MAX_CHUNK_BYTES: u64 = 64 * 1024;

/// Spawn a task forwarding each line of `stream` as an output event.
///
/// Output without a newline is flushed every [`MAX_CHUNK_BYTES`] bytes.
///
/// The task ends at EOF or on the first read error.
pub(super) fn spawn_stream_reader(
    stream: impl AsyncRead + Unpin + Send + 'static,
    kind: StreamKind,
    emitter: Arc<dyn SupervisorEventEmitter>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut reader = BufReader::new(stream);
        let mut buf: Vec<u8> = Vec::with_capacity(1024);

        loop {
            buf.clear();
            let mut limited = (&mut reader).take(MAX_CHUNK_BYTES);
            match limited.read_until(b'\n', &mut buf).await {
                Ok(0) => break, // EOF
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                        if buf.last() == Some(&b'\r') {
                            buf.pop();
                        }
                    }

                    let line = String::from_utf8_lossy(&buf).into_owned();
                    debug!(stream = kind.as_str(), "{}", line);
                    emitter.emit(SupervisorEvent::output(kind, line));
                }
                Err(e) => {
                    debug!(stream = kind.as_str(), error = %e, "output reader exiting due to read error");
                    break;
                }
            }
        }

        debug!(stream = kind.as_str(), "output reader task exiting");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBroadcaster;

    #[tokio::test]
    async fn forwards_lines_and_decodes_lossily() {
        let broadcaster = Arc::new(EventBroadcaster::new());
        let mut rx = broadcaster.subscribe();

        let input: &[u8] = b"first\r\nsecond \xff\nlast";
        spawn_stream_reader(input, StreamKind::Stderr, broadcaster.clone())
            .await
            .unwrap();

        let mut lines = Vec::new();
        while let Ok(event) = rx.try_recv() {
            lines.push(event);
        }
        assert_eq!(
            lines,
            vec![
                SupervisorEvent::Stderr {
                    text: "first".into()
                },
                SupervisorEvent::Stderr {
                    text: "second \u{fffd}".into()
                },
                SupervisorEvent::Stderr {
                    text: "last".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn long_lines_are_split_into_bounded_chunks() {
        let broadcaster = Arc::new(EventBroadcaster::new());
        let mut rx = broadcaster.subscribe();

        let cap = usize::try_from(MAX_CHUNK_BYTES).unwrap();
        let mut input = vec![b'a'; cap + 10];
        input.extend_from_slice(b"\nnext\n");
        spawn_stream_reader(std::io::Cursor::new(input), StreamKind::Stdout, broadcaster.clone())
            .await
            .unwrap();

        let mut lengths = Vec::new();
        while let Ok(SupervisorEvent::Stdout { text }) = rx.try_recv() {
            lengths.push(text.len());
        }
        assert_eq!(lengths, vec![cap, 10, 4]);
    }
}
