//! DOT format utilities for graph rendering.

use std::fmt::{self, Write as _};
use std::io;

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
///
/// Not injective: `a.b` and `a_b` both become `a_b`.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT quoted strings.
pub fn escape_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote and escape a value, e.g. `does "X"` becomes `"does \"X\""`.
pub fn quote(input: &str) -> String {
    format!("\"{}\"", escape_value(input))
}

/// Build a `key="value"` attribute token.
pub fn attr(key: &str, value: &str) -> String {
    format!("{key}={}", quote(value))
}

/// Compose an attribute list from candidate tokens.
///
/// Empty candidates are dropped; the survivors are joined with `,` inside a
/// single `[...]`. When nothing survives the result is empty, not `[]`.
pub fn attrs<S: AsRef<str>>(list: &[S]) -> String {
    let kept: Vec<&str> = list
        .iter()
        .map(AsRef::as_ref)
        .filter(|x| !x.is_empty())
        .collect();
    if kept.is_empty() {
        return String::new();
    }
    format!("[{}]", kept.join(","))
}

/// Streaming DOT writer over an `io::Write` sink.
///
/// Counts every byte the sink accepts. The first failure is kept and turns
/// every later write into a no-op, so the closing brace is never written
/// after a broken line.
pub struct DotWriter<'a, W: io::Write + ?Sized> {
    sink: &'a mut W,
    written: u64,
    error: Option<io::Error>,
    line: String,
}

impl<'a, W: io::Write + ?Sized> DotWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            sink,
            written: 0,
            error: None,
            line: String::with_capacity(256),
        }
    }

    /// Target of `write!` / `writeln!`.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let mut line = std::mem::take(&mut self.line);
        line.clear();
        let _ = line.write_fmt(args);
        self.write_str(&line);
        self.line = line;
    }

    /// Write raw text to the sink.
    pub fn write_str(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let mut buf = text.as_bytes();
        while !buf.is_empty() {
            match self.sink.write(buf) {
                Ok(0) => {
                    self.error = Some(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ));
                    return;
                }
                Ok(n) => {
                    self.written += n as u64;
                    buf = &buf[n..];
                }
                // Nothing was accepted; reissue as `write_all` does.
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.error = Some(err);
                    return;
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Bytes accepted by the sink so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Finish writing: bytes written, or the first error with the byte count
    /// reached before it.
    pub fn finish(self) -> Result<u64, WriteError> {
        match self.error {
            None => Ok(self.written),
            Some(error) => Err(WriteError {
                written: self.written,
                error,
            }),
        }
    }
}

/// A sink write failure during rendering.
#[derive(Debug)]
pub struct WriteError {
    written: u64,
    error: io::Error,
}

impl WriteError {
    /// Bytes the sink accepted before the failure.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn error(&self) -> &io::Error {
        &self.error
    }

    /// The underlying I/O error, unwrapped.
    pub fn into_error(self) -> io::Error {
        self.error
    }

    pub fn into_parts(self) -> (u64, io::Error) {
        (self.written, self.error)
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write failed after {} bytes: {}", self.written, self.error)
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<WriteError> for io::Error {
    fn from(err: WriteError) -> Self {
        err.error
    }
}

impl From<WriteError> for archview_error::Error {
    fn from(err: WriteError) -> Self {
        let (written, error) = err.into_parts();
        archview_error::Error::write_failed(written, error.to_string())
            .with_operation("dot::render")
            .set_source(error)
    }
}
