//! The binary digit text format: `'0'`/`'1'` characters, most significant bit first,
//! no separators and no padding. Zero is written as a single `"0"`.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::storage::headroom;
use super::{BigUint, LIMB_BITS};
use crate::error::ParseBigUintError;

#[inline]
fn is_bin_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

impl BigUint {
    /// Build a number from ASCII binary digits, most significant first.
    /// Every byte must be a binary digit.
    fn from_bin_digits(digits: &[u8]) -> Self {
        if digits.is_empty() {
            return Self::zero();
        }

        let limbs = digits.len().div_ceil(LIMB_BITS as usize);
        let mut out = Self::with_capacity(headroom(limbs));

        // full limbs come off the low end, whatever is left over forms a partial top limb
        for chunk in digits.rchunks(LIMB_BITS as usize) {
            let limb = chunk
                .iter()
                .fold(0u32, |acc, &digit| (acc << 1) | u32::from(digit == b'1'));
            out.push_limb(limb, None);
        }

        // leading zero digits leave zero limbs on top
        out.trim();
        out
    }

    /// Encode as binary digits, most significant bit first
    /// ```
    /// use aint::BigUint;
    /// assert_eq!(BigUint::zero().to_bin_string(), "0");
    /// assert_eq!(BigUint::from(0b1011u8).to_bin_string(), "1011");
    /// assert_eq!(BigUint::from(1u64 << 32).to_bin_string(), format!("1{}", "0".repeat(32)));
    /// ```
    pub fn to_bin_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        (0..self.bit_length())
            .rev()
            .map(|bit| if self.test_bit(bit) { '1' } else { '0' })
            .collect()
    }

    /// Write the binary digit encoding to `writer`
    pub fn write_bin<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_bin_string().as_bytes())
    }

    /// Read a number from a stream of binary digits.
    ///
    /// Leading ASCII whitespace is skipped, then digits are taken up to the end of the
    /// input or the first byte that isn't `'0'` or `'1'`. That byte is left in the reader
    /// so the next read starts from it. Input without any digits reads as zero.
    /// ```
    /// use aint::BigUint;
    /// let mut input = "  1010\n110 tail".as_bytes();
    /// assert_eq!(BigUint::read_bin(&mut input)?, BigUint::from(10u8));
    /// assert_eq!(BigUint::read_bin(&mut input)?, BigUint::from(6u8));
    /// assert_eq!(BigUint::read_bin(&mut input)?, BigUint::zero());
    /// assert_eq!(input, b"tail");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn read_bin<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Self> {
        consume_while(reader, |b| b.is_ascii_whitespace(), None)?;

        let mut digits = Vec::new();
        consume_while(reader, is_bin_digit, Some(&mut digits))?;

        Ok(Self::from_bin_digits(&digits))
    }

    /// The same lenient decoding as [`BigUint::read_bin`] over a string, also returning
    /// the unconsumed rest of the string
    /// ```
    /// use aint::BigUint;
    /// let (n, rest) = BigUint::parse_bin_prefix(" 1102");
    /// assert_eq!(n, BigUint::from(6u8));
    /// assert_eq!(rest, "2");
    /// ```
    pub fn parse_bin_prefix(s: &str) -> (Self, &str) {
        let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let end = s.bytes().take_while(|&b| is_bin_digit(b)).count();
        let (digits, rest) = s.split_at(end);
        (Self::from_bin_digits(digits.as_bytes()), rest)
    }
}

/// Consume bytes while `keep` accepts them, copying them into `sink` if one is given.
/// The first rejected byte stays in the reader.
fn consume_while<R: BufRead + ?Sized>(
    reader: &mut R,
    keep: impl Fn(u8) -> bool,
    mut sink: Option<&mut Vec<u8>>,
) -> io::Result<()> {
    loop {
        let (taken, exhausted) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            let taken = buf.iter().take_while(|&&b| keep(b)).count();
            if let Some(sink) = sink.as_deref_mut() {
                sink.extend_from_slice(&buf[..taken]);
            }

            (taken, buf.is_empty() || taken < buf.len())
        };

        reader.consume(taken);
        if exhausted {
            return Ok(());
        }
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_bin_string())
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_bin_string())
    }
}

/// Strict parsing, the whole string has to be binary digits after an optional `0b`
impl FromStr for BigUint {
    type Err = ParseBigUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0b").unwrap_or(s);
        let offset = s.len() - digits.len();

        if digits.is_empty() {
            return Err(ParseBigUintError::Empty);
        }

        if let Some((position, digit)) = digits
            .char_indices()
            .find(|&(_, c)| !matches!(c, '0' | '1'))
        {
            return Err(ParseBigUintError::InvalidDigit {
                digit,
                position: position + offset,
            });
        }

        Ok(Self::from_bin_digits(digits.as_bytes()))
    }
}
