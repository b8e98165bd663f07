//! Stream-style text input for [`Complex`].
//!
//! The text form is two numbers followed by one more token, the unit marker:
//!
//! ```markdown
//! <real> <imaginary> <unit>
//! ```
//!
//! Numbers are scanned greedily rather than split on whitespace, the same way a C++ `istream`
//! extracts a `double`. So `3 4 i`, `3+4i` and `3-4i` all read, and anything written by
//! [`Display`](std::fmt::Display) reads back. The unit marker is any run of non-whitespace
//! bytes, and is discarded.
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::Complex;
use crate::error::{Component, ReadError};

#[inline]
const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Reads [`Complex`] values off of a [`BufRead`], one after the other.
///
/// After a successful read, the underlying reader is left positioned right after the unit
/// marker. After an error, a few bytes the scanner looked ahead at may still be held by the
/// scanner rather than the reader, and are only seen by later reads through the same
/// [`Scanner`].
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    /// scratch space for the numeric token being scanned.
    token: Vec<u8>,
    /// bytes taken off the reader that turned out not to belong to the token being scanned
    /// (i.e the `in` of `infin`). Always served before the reader.
    pushback: Vec<u8>,
}

impl<R> Scanner<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::with_capacity(32),
            pushback: Vec::new(),
        }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Scanner<R> {
    /// Reads the next [`Complex`].
    pub fn read_complex(&mut self) -> Result<Complex, ReadError> {
        let mut complex = Complex::ZERO;
        self.read_parts(&mut complex)?;
        Ok(complex)
    }

    /// Reads the real part, the imaginary part and the unit marker, in that order. Each part
    /// is written to `dst` as soon as it's read, so on error the parts read before the failure
    /// are already updated.
    fn read_parts(&mut self, dst: &mut Complex) -> Result<(), ReadError> {
        let result = self.read_number(Component::Real).and_then(|real| {
            *dst.real_mut() = real;
            let imaginary = self.read_number(Component::Imaginary)?;
            *dst.imaginary_mut() = imaginary;
            self.skip_unit()
        });

        if let Err(ref error) = result {
            tracing::debug!(message = "failed to read complex number", %error);
        }

        result
    }

    fn read_number(&mut self, component: Component) -> Result<f64, ReadError> {
        self.skip_whitespace()?;

        let Some(next) = self.peek()? else {
            return Err(ReadError::MissingToken { component });
        };

        let is_word = self.scan_number()?;

        if self.token.is_empty() {
            return Err(ReadError::InvalidNumber {
                component,
                found: (next as char).escape_default().to_string(),
            });
        }

        let scanned = String::from_utf8_lossy(&self.token);
        match scanned.parse::<f64>() {
            // out of range literals (i.e 1e400) fail instead of saturating to +/- Inf
            Ok(value) if value.is_finite() || is_word => Ok(value),
            _ => Err(ReadError::InvalidNumber {
                component,
                found: scanned.into_owned(),
            }),
        }
    }

    /// Consumes the unit marker, which must be at least 1 byte long.
    fn skip_unit(&mut self) -> Result<(), ReadError> {
        self.skip_whitespace()?;

        let mut len = 0_usize;
        while let Some(byte) = self.peek()? {
            if is_space(byte) {
                break;
            }
            self.bump();
            len += 1;
        }

        if len == 0 {
            Err(ReadError::MissingToken {
                component: Component::Unit,
            })
        } else {
            Ok(())
        }
    }

    /// Scans the longest prefix that looks like a float into `self.token`. The result isn't
    /// guaranteed to parse (i.e a lone `-`, or `1e`), which is left for [`str::parse`] to
    /// reject.
    ///
    /// Returns whether the token is spelled out (`inf`, `infinity` or `nan`) rather than made
    /// of digits.
    fn scan_number(&mut self) -> io::Result<bool> {
        self.token.clear();
        self.take_if(|b| matches!(b, b'+' | b'-'))?;

        match self.peek()? {
            Some(b'i' | b'I') => {
                if self.take_word(b"inf")? {
                    self.take_infinity_tail()?;
                }
                return Ok(true);
            }
            Some(b'n' | b'N') => {
                self.take_word(b"nan")?;
                return Ok(true);
            }
            _ => (),
        }

        let mut digits = self.take_digits()?;
        if self.take_if(|b| b == b'.')? {
            digits += self.take_digits()?;
        }

        if digits > 0 && self.take_if(|b| matches!(b, b'e' | b'E'))? {
            self.take_if(|b| matches!(b, b'+' | b'-'))?;
            self.take_digits()?;
        }

        Ok(false)
    }

    /// Takes the `inity` that turns `inf` into `infinity`. If only part of it is there (i.e
    /// `infi`, where the `i` is the unit marker), the bytes read are pushed back.
    fn take_infinity_tail(&mut self) -> io::Result<()> {
        const TAIL: &[u8; 5] = b"inity";

        let mut taken = [0_u8; 5];
        for (idx, expected) in TAIL.iter().enumerate() {
            match self.peek()? {
                Some(byte) if byte.eq_ignore_ascii_case(expected) => {
                    self.bump();
                    taken[idx] = byte;
                }
                _ => {
                    self.pushback.splice(0..0, taken[..idx].iter().copied());
                    return Ok(());
                }
            }
        }

        self.token.extend_from_slice(&taken);
        Ok(())
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !is_space(byte) {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        if let Some(&byte) = self.pushback.first() {
            return Ok(Some(byte));
        }
        Ok(self.reader.fill_buf()?.first().copied())
    }

    /// Consumes the byte last returned by [`Scanner::peek`].
    #[inline]
    fn bump(&mut self) {
        if self.pushback.is_empty() {
            self.reader.consume(1);
        } else {
            self.pushback.remove(0);
        }
    }

    fn take_if(&mut self, accept: impl Fn(u8) -> bool) -> io::Result<bool> {
        match self.peek()? {
            Some(byte) if accept(byte) => {
                self.token.push(byte);
                self.bump();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn take_digits(&mut self) -> io::Result<usize> {
        let mut count = 0;
        while self.take_if(|b| b.is_ascii_digit())? {
            count += 1;
        }
        Ok(count)
    }

    /// Takes bytes as long as they match `word` (ignoring case), returning whether all of
    /// `word` matched.
    fn take_word(&mut self, word: &[u8]) -> io::Result<bool> {
        for expected in word {
            if !self.take_if(|b| b.eq_ignore_ascii_case(expected))? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Complex {
    /// Reads a [`Complex`] from `reader`, consuming the real part, the imaginary part and the
    /// unit marker.
    ///
    /// Pass `&mut reader` to keep reading from the same source afterwards:
    /// ```
    /// # use complex::Complex;
    /// let mut input = "1 2 i 3-4j".as_bytes();
    ///
    /// assert_eq!(Complex::read_from(&mut input).unwrap(), Complex::new(1.0, 2.0));
    /// assert_eq!(Complex::read_from(&mut input).unwrap(), Complex::new(3.0, -4.0));
    /// assert!(Complex::read_from(&mut input).is_err());
    /// ```
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        Scanner::new(reader).read_complex()
    }

    /// Reads into an existing value. If this fails after the real part was read, the real
    /// part is still overwritten while the imaginary part keeps its old value.
    pub fn read_into<R: BufRead>(
        &mut self,
        scanner: &mut Scanner<R>,
    ) -> Result<&mut Self, ReadError> {
        scanner.read_parts(self)?;
        Ok(self)
    }
}

impl FromStr for Complex {
    type Err = ReadError;

    /// Parses a single value. Unlike [`Complex::read_from`], anything but whitespace after the
    /// unit marker is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s.as_bytes());
        let complex = scanner.read_complex()?;

        // the scanner only stops on ascii bytes, so this is always a char boundary.
        let remaining = scanner.into_inner().len();
        let rest = s[s.len() - remaining..].trim();

        if rest.is_empty() {
            Ok(complex)
        } else {
            Err(ReadError::TrailingInput(rest.to_owned()))
        }
    }
}
