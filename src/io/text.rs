use crate::algebra::TextIoError;
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Splits a buffered reader into whitespace-separated tokens.
///
/// Tokens may be spread over any number of lines, so a grid written on one
/// line and a grid written one row per line read back identically.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>, TextIoError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.consumed += 1;
        Ok(self.pending.pop_front())
    }

    /// Reads exactly `count` values.
    ///
    /// Nothing is returned unless all `count` tokens were present and parsed.
    pub fn read_values<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>, TextIoError> {
        let mut values = Vec::with_capacity(count);
        for found in 0..count {
            let token = match self.next_token()? {
                Some(token) => token,
                None => {
                    return Err(TextIoError::UnexpectedEof {
                        expected: count,
                        found,
                    })
                }
            };
            let value = token.parse::<T>().map_err(|_| TextIoError::Parse {
                token: token.clone(),
                position: self.consumed - 1,
            })?;
            values.push(value);
        }
        Ok(values)
    }
}

/// Containers that can be filled from whitespace-delimited text.
///
/// The container's current shape decides how many values are read.  On
/// failure the container is left exactly as it was.
pub trait ReadText {
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError>;

    /// Convenience wrapper reading from a string slice
    fn read_str(&mut self, text: &str) -> Result<(), TextIoError> {
        self.read_text(&mut TokenReader::new(text.as_bytes()))
    }
}

#[test]
fn test_token_reader_spans_lines() {
    let text = "1 2\n\n  3\t4\n5";
    let mut tokens = TokenReader::new(text.as_bytes());
    let first: Vec<i32> = tokens.read_values(3).unwrap();
    assert_eq!(first, vec![1, 2, 3]);
    let rest: Vec<i32> = tokens.read_values(2).unwrap();
    assert_eq!(rest, vec![4, 5]);
    assert_eq!(tokens.consumed(), 5);
    assert!(tokens.next_token().unwrap().is_none());
}

#[test]
fn test_token_reader_errors() {
    let mut tokens = TokenReader::new("1 x 3".as_bytes());
    match tokens.read_values::<i32>(3) {
        Err(TextIoError::Parse { token, position }) => {
            assert_eq!(token, "x");
            assert_eq!(position, 1);
        }
        other => panic!("unexpected result {:?}", other),
    }

    let mut tokens = TokenReader::new("1 2".as_bytes());
    match tokens.read_values::<i32>(3) {
        Err(TextIoError::UnexpectedEof { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected result {:?}", other),
    }
}
