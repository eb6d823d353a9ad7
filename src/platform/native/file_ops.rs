use crate::core::{read_from, write_to};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use tracing::debug;

/// Permission bits for files created by [`write_file_bytes`]
#[cfg(unix)]
const WRITE_FILE_MODE: u32 = 0o755;

/// Create or truncate `filename` and write all of `data` in a single attempt
pub fn write_file_bytes(data: &[u8], filename: &str) -> bool {
    debug!("Writing {} bytes to {}", data.len(), filename);

    let mut file = match open_for_write(filename) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {} for writing: {}", filename, e);
            return false;
        }
    };

    if !write_to(|buf| file.write(buf), data) {
        debug!("Failed to write {}", filename);
        return false;
    }

    match file.flush() {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to flush {}: {}", filename, e);
            false
        }
    }
}

/// Read up to `max_size` bytes of `filename` into `content` (`0` = whole file)
pub fn read_file(filename: &str, content: &mut Vec<u8>, max_size: usize) -> bool {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {} for reading: {}", filename, e);
            content.clear();
            return false;
        }
    };

    read_from(|buf| file.read(buf), content, max_size)
}

fn open_for_write(filename: &str) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(WRITE_FILE_MODE);
    }

    options.open(filename)
}
