use bstr::ByteSlice;
use std::io::{self, BufRead};

/// Byte-line reader that ends a line at `\n`, `\r` or `\r\n`.
///
/// Lines are returned without their terminator and without any decoding,
/// so bytes that are not valid UTF-8 pass through untouched.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next line into `line`, replacing its contents.
    ///
    /// Returns `Ok(false)` once the input is exhausted. A final line without
    /// a terminator is still returned.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> io::Result<bool> {
        line.clear();
        let mut read_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                return Ok(read_any);
            }
            read_any = true;

            if let Some(end) = available.find_byteset(b"\r\n") {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                self.inner.consume(end + 1);
                if terminator == b'\r' {
                    self.skip_line_feed()?;
                }
                return Ok(true);
            }

            let len = available.len();
            line.extend_from_slice(available);
            self.inner.consume(len);
        }
    }

    /// Swallows the `\n` of a `\r\n` pair split across buffer refills.
    fn skip_line_feed(&mut self) -> io::Result<()> {
        loop {
            match self.inner.fill_buf() {
                Ok(bytes) => {
                    if bytes.first() == Some(&b'\n') {
                        self.inner.consume(1);
                    }
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}
