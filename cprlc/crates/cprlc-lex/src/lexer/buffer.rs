//! Scan buffer.
//!
//! The buffer is allocated once per lexer and reused for every identifier and
//! literal. A [`Scan`] can only be obtained through [`ScanBuffer::begin`],
//! which clears the buffer, so text from one token never leaks into the next.

/// Initial capacity of the scan buffer.
const INITIAL_CAPACITY: usize = 100;

#[derive(Debug)]
pub(crate) struct ScanBuffer {
    text: String,
}

impl ScanBuffer {
    pub(crate) fn new() -> Self {
        Self {
            text: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Starts a new scan over an empty buffer.
    pub(crate) fn begin(&mut self) -> Scan<'_> {
        self.text.clear();
        Scan {
            text: &mut self.text,
        }
    }
}

/// Exclusive handle on a cleared scan buffer.
#[derive(Debug)]
pub(crate) struct Scan<'b> {
    text: &'b mut String,
}

impl Scan<'_> {
    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub(crate) fn as_str(&self) -> &str {
        self.text
    }

    /// Copies the accumulated text out, keeping the allocation for reuse.
    pub(crate) fn finish(self) -> String {
        self.text.clone()
    }
}
