// Conversion between linear grid indices and "a0"-style cell labels.
//
// The column letter comes from the first `width` lowercase ASCII letters and
// the row is printed as a plain decimal number, so index 15 on a 7-wide grid
// is column 1, row 2, label "b2".

use crate::error::{Error, Result};
use crate::MAX_GRID_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codec {
    width: usize,
}

impl Codec {
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 || width > MAX_GRID_LENGTH {
            return Err(Error::InvalidConfig(format!(
                "grid width must be between 1 and {MAX_GRID_LENGTH}, got {width}"
            )));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, `width²`.
    pub fn size(&self) -> usize {
        self.width * self.width
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn column(&self, index: usize) -> usize {
        index % self.width
    }

    /// Column letters in order, e.g. `"abcdefg"` for width 7.
    pub fn alphabet(&self) -> String {
        (0..self.width).map(letter).collect()
    }

    pub fn encode(&self, index: usize) -> Result<String> {
        if index >= self.size() {
            return Err(Error::IndexOutOfRange { index, size: self.size() });
        }
        Ok(format!("{}{}", letter(self.column(index)), self.row(index)))
    }

    pub fn decode(&self, label: &str) -> Result<usize> {
        let malformed = || Error::MalformedLabel(label.to_string());

        let mut chars = label.chars();
        let column = chars
            .next()
            .filter(char::is_ascii_lowercase)
            .map(|c| (c as u8 - b'a') as usize)
            .filter(|&column| column < self.width)
            .ok_or_else(malformed)?;

        // Only the canonical spelling produced by `encode` is accepted.
        let digits = chars.as_str();
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits.len() == 1 || !digits.starts_with('0'));
        if !canonical {
            return Err(malformed());
        }
        let row: usize = digits.parse().map_err(|_| malformed())?;
        if row >= self.width {
            return Err(malformed());
        }

        Ok(row * self.width + column)
    }
}

fn letter(column: usize) -> char {
    (b'a' + column as u8) as char
}
