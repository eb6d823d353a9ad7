use std::io::{self, ErrorKind};
use tracing::{debug, trace};

use crate::platform::native::file_ops;

/// Largest number of bytes requested from a read primitive per call
pub const READ_CHUNK_SIZE: usize = 4096;

/// Read until end of input or until `max_size` bytes have been collected.
///
/// `content` is cleared first. `max_size == 0` means no limit. Interrupted
/// and would-block errors are retried; any other error returns `false`,
/// leaving whatever was already appended in `content`.
pub fn read_from<F>(mut read: F, content: &mut Vec<u8>, max_size: usize) -> bool
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    content.clear();

    let mut chunk = [0u8; READ_CHUNK_SIZE];
    let mut remaining = (max_size > 0).then_some(max_size);

    loop {
        let requested = remaining.map_or(READ_CHUNK_SIZE, |r| r.min(READ_CHUNK_SIZE));

        let bytes_read = match read(&mut chunk[..requested]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                trace!("Retrying read after transient error: {}", e);
                continue;
            }
            Err(e) => {
                debug!("Read failed after {} bytes: {}", content.len(), e);
                return false;
            }
        };

        if bytes_read > requested {
            debug!(
                "Read primitive reported {} bytes for a {} byte request",
                bytes_read, requested
            );
            return false;
        }
        content.extend_from_slice(&chunk[..bytes_read]);

        if let Some(r) = remaining.as_mut() {
            *r -= bytes_read;
            if *r == 0 {
                break;
            }
        }
    }

    true
}

/// Single write attempt of the whole of `data`; a short write is a failure
pub fn write_to<F>(write: F, data: &[u8]) -> bool
where
    F: FnOnce(&[u8]) -> io::Result<usize>,
{
    match write(data) {
        Ok(written) if written == data.len() => true,
        Ok(written) => {
            debug!("Short write: {} of {} bytes", written, data.len());
            false
        }
        Err(e) => {
            debug!("Write failed: {}", e);
            false
        }
    }
}

/// Write `content` to `filename`, replacing any existing file
pub fn write_file(content: &str, filename: &str) -> bool {
    file_ops::write_file_bytes(content.as_bytes(), filename)
}
