use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated token reader over any line source. Several values
/// may be given on one line or spread over many.
pub struct InputReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before the game finished",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token as an integer; `Ok(None)` if the token is not one.
    pub fn next_int(&mut self) -> io::Result<Option<i64>> {
        Ok(self.next_token()?.parse().ok())
    }
}
