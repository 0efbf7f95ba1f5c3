//! Unix-socket accept loop.
//!
//! The worker is strictly sequential: one connection accepted at a time,
//! one request per connection, no keep-alive. The listener and the session
//! live on the same task, so handlers get `&mut Session` with no locking.

use std::io;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, info, warn};

use crate::codec;
use crate::dispatch;
use crate::session::Session;

const READ_CHUNK: usize = 4096;

pub struct Server {
    listener: UnixListener,
    socket_path: PathBuf,
}

struct RawRequest {
    path: String,
    body: Vec<u8>,
}

impl Server {
    /// Bind the worker socket, replacing any stale file left behind by a
    /// previous run. Must be called from within a runtime.
    pub fn bind(socket_path: &Path) -> io::Result<Server> {
        if socket_path.exists() {
            std::fs::remove_file(socket_path)?;
        }
        let listener = UnixListener::bind(socket_path)?;
        info!(socket = %socket_path.display(), "worker listening");
        Ok(Server {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accept and fully serve a single connection. Connection-level I/O
    /// errors are logged and swallowed; only accept failures propagate.
    pub async fn serve_one(&self, session: &mut Session) -> io::Result<()> {
        let (stream, _addr) = self.listener.accept().await?;
        if let Err(err) = serve_connection(stream, session).await {
            warn!(error = %err, "connection error");
        }
        Ok(())
    }

    /// Serve connections until a termination signal arrives.
    pub async fn run(&self, session: &mut Session) -> io::Result<()> {
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigquit = signal(SignalKind::quit())?;
        loop {
            tokio::select! {
                result = self.serve_one(session) => result?,
                _ = sigterm.recv() => {
                    info!("received SIGTERM, shutting down");
                    return Ok(());
                }
                _ = sigint.recv() => {
                    info!("received SIGINT, shutting down");
                    return Ok(());
                }
                _ = sigquit.recv() => {
                    info!("received SIGQUIT, shutting down");
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

async fn serve_connection(mut stream: UnixStream, session: &mut Session) -> io::Result<()> {
    let request = match read_request(&mut stream).await? {
        Some(request) => request,
        None => return Ok(()),
    };
    let response = dispatch::handle(session, &request.path, &request.body);
    stream.write_all(&response).await?;
    stream.shutdown().await
}

/// Read one request off the stream. `None` means the connection is not
/// serviceable (clean close, malformed head, or an oversized payload) and
/// should be dropped without a response.
async fn read_request(stream: &mut UnixStream) -> io::Result<Option<RawRequest>> {
    let mut buf = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    let head_end = loop {
        if let Some(end) = codec::header_end(&buf) {
            break end;
        }
        if buf.len() > codec::MAX_REQUEST_BYTES {
            warn!(bytes = buf.len(), "request headers exceed limit, dropping");
            return Ok(None);
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            if buf.is_empty() {
                debug!("connection closed without a request");
            } else {
                warn!(bytes = buf.len(), "connection closed mid-headers");
            }
            return Ok(None);
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = match codec::parse_head(&buf[..head_end]) {
        Some(head) => head,
        None => {
            warn!("unparseable request head, dropping");
            return Ok(None);
        }
    };
    let content_length = head.content_length.unwrap_or(0);
    if content_length > codec::MAX_REQUEST_BYTES {
        warn!(content_length, "request body exceeds limit, dropping");
        return Ok(None);
    }
    debug!(method = %head.method, path = %head.path, content_length, "request head");

    let mut body = buf.split_off(head_end);
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            warn!(
                have = body.len(),
                want = content_length,
                "connection closed mid-body"
            );
            return Ok(None);
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Ok(Some(RawRequest {
        path: head.path,
        body,
    }))
}
