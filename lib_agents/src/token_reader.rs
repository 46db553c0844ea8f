use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input ended")]
    EndOfInput,
}

/// Splits line-based input into words, the way a console player types them:
/// several values may share a line, or be spread over several lines.
/// Commas count as whitespace, so "3,4 x" is three words.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// The next word, reading more lines as needed.
    pub fn next_word(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }

            self.pending.extend(
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|w| !w.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    /// The next word parsed as `T`. On a parse failure the offending word is
    /// returned as the error, and the rest of its line is dropped.
    pub fn next_value<T: FromStr>(&mut self) -> Result<Result<T, String>, InputError> {
        let word = self.next_word()?;

        match word.parse() {
            Ok(value) => Ok(Ok(value)),
            Err(_) => {
                self.discard_line();
                Ok(Err(word))
            }
        }
    }

    /// Forgets whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn words_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("3\n4 x\n\n  o  \n"));

        assert_eq!("3", reader.next_word().unwrap());
        assert_eq!("4", reader.next_word().unwrap());
        assert_eq!("x", reader.next_word().unwrap());
        assert_eq!("o", reader.next_word().unwrap());
        assert!(matches!(reader.next_word(), Err(InputError::EndOfInput)));
    }

    #[test]
    fn commas_separate_words() {
        let mut reader = TokenReader::new(Cursor::new("2,5, x\n"));

        assert_eq!(Ok(2), reader.next_value::<i64>().unwrap());
        assert_eq!(Ok(5), reader.next_value::<i64>().unwrap());
        assert_eq!("x", reader.next_word().unwrap());
    }

    #[test]
    fn parse_failure_drops_rest_of_line() {
        let mut reader = TokenReader::new(Cursor::new("abc 4 x\n7\n"));

        assert_eq!(Err("abc".to_owned()), reader.next_value::<i64>().unwrap());
        assert_eq!(Ok(7), reader.next_value::<i64>().unwrap());
    }
}
