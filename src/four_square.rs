//! Four-square digraph cipher.
//!
//! Four grids of `side x side` cells are built for every call: grids 0 and 2
//! hold the alphabet in order, grids 1 and 3 hold a keyword followed by the
//! rest of the alphabet. A plaintext digraph `(m1, m2)` is located in grids
//! 0 and 2 and replaced by the characters at the crossed corners of grids 1
//! and 3. Decryption swaps the roles of the two grid pairs.
//!
//! ```text
//!  grid 0 (plain)  | grid 1 (keyword 1)
//!  ----------------+-------------------
//!  grid 3 (kw 2)   | grid 2 (plain)
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::alphabet::{Alphabet, AlphabetKind};
use crate::engine::{check_len, Direction};
use crate::error::{CipherError, InputKind};

/// Number of grids in a key matrix.
const NUM_GRIDS: usize = 4;

/// Separator between keyword phrases in a four-square key.
const PHRASE_SEPARATOR: char = ',';

/// A square grid of alphabet characters, row-major. `None` marks a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Lays `chars` out row-major, padding trailing cells with blanks.
    fn fill<I: IntoIterator<Item = char>>(side: usize, chars: I) -> Self {
        let mut cells: Vec<Option<char>> = chars.into_iter().take(side * side).map(Some).collect();
        cells.resize(side * side, None);
        Grid { side, cells }
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the character at `(row, col)`, or `None` for a blank cell or
    /// an out-of-range position.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells[row * self.side + col]
    }

    /// Returns the `(row, col)` of `c`, or `None` if the grid does not hold it.
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&cell| cell == Some(c))
            .map(|i| (i / self.side, i % self.side))
    }

    /// Iterates over the non-blank characters, row-major.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns the number of blank cells.
    pub fn blanks(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.side).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or(' '))?;
            }
        }
        Ok(())
    }
}

/// The four grids of a four-square key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    grids: [Grid; NUM_GRIDS],
}

impl KeyMatrix {
    /// Builds the four grids for `alphabet` from two keyword phrases.
    ///
    /// Keywords are uppercased, folded and stripped of whitespace; repeated
    /// characters keep their first occurrence only.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if a keyword character is outside
    /// the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use elementary_ciphers::{AlphabetKind, KeyMatrix};
    ///
    /// let latin = AlphabetKind::Latin.alphabet();
    /// let matrix = KeyMatrix::build(latin, ["example", "keyword"]).unwrap();
    ///
    /// assert_eq!(matrix.grid(1).get(0, 0), Some('E'));
    /// assert_eq!(matrix.grid(1).get(1, 0), Some('L'));
    /// assert_eq!(matrix.grid(0).get(0, 0), Some('A'));
    /// ```
    pub fn build(alphabet: &Alphabet, keywords: [&str; 2]) -> Result<Self, CipherError> {
        let side = alphabet.matrix_side();
        let plain = || Grid::fill(side, alphabet.characters().iter().copied());
        let first = Grid::fill(side, keyword_sequence(alphabet, keywords[0])?);
        let second = Grid::fill(side, keyword_sequence(alphabet, keywords[1])?);

        let matrix = KeyMatrix {
            grids: [plain(), first, plain(), second],
        };
        trace!(
            side,
            blanks = matrix.grids[1].blanks(),
            "four-square key matrix built"
        );
        Ok(matrix)
    }

    /// Returns grid `index`; indices wrap modulo 4.
    pub fn grid(&self, index: usize) -> &Grid {
        &self.grids[index % NUM_GRIDS]
    }

    /// Returns all four grids.
    pub fn grids(&self) -> &[Grid; NUM_GRIDS] {
        &self.grids
    }

    /// Substitutes one digraph.
    ///
    /// Encryption looks the pair up in grids 0/2 and reads grids 1/3;
    /// decryption does the opposite.
    fn substitute(
        &self,
        first: char,
        second: char,
        direction: Direction,
    ) -> Result<[char; 2], CipherError> {
        let (src, dst) = match direction {
            Direction::Encrypt => ((0, 2), (1, 3)),
            Direction::Decrypt => ((1, 3), (0, 2)),
        };

        let (r1, c1) = self.grids[src.0]
            .position(first)
            .ok_or(CipherError::InvalidCharacter { character: first })?;
        let (r2, c2) = self.grids[src.1]
            .position(second)
            .ok_or(CipherError::InvalidCharacter { character: second })?;

        let blank = CipherError::BlankCell { first, second };
        let out1 = self.grids[dst.0].get(r1, c2).ok_or_else(|| blank.clone())?;
        let out2 = self.grids[dst.1].get(r2, c1).ok_or(blank)?;
        Ok([out1, out2])
    }
}

/// Keyword characters in first-occurrence order, then the unused remainder
/// of the alphabet.
fn keyword_sequence(alphabet: &Alphabet, keyword: &str) -> Result<Vec<char>, CipherError> {
    let mut sequence: Vec<char> = Vec::with_capacity(alphabet.power());
    for c in alphabet.canonical_chars(keyword).filter(|c| !c.is_whitespace()) {
        if !alphabet.contains(c) {
            return Err(CipherError::InvalidKey { character: c });
        }
        if !sequence.contains(&c) {
            sequence.push(c);
        }
    }
    for &c in alphabet.characters() {
        if !sequence.contains(&c) {
            sequence.push(c);
        }
    }
    Ok(sequence)
}

/// Four-square cipher bound to one alphabet.
///
/// Holds no per-call state: the key matrix is rebuilt on every call, so one
/// instance can be shared across keys and threads.
///
/// # Examples
///
/// ```
/// use elementary_ciphers::{AlphabetKind, FourSquareCipher};
///
/// let cipher = FourSquareCipher::new(AlphabetKind::Latin.alphabet());
/// let key = "example, keyword";
///
/// let ciphertext = cipher.encrypt("Hello", key).unwrap();
/// assert_eq!(ciphertext, "FYGFNX");
///
/// // The odd-length padding survives decryption.
/// assert_eq!(cipher.decrypt(&ciphertext, key).unwrap(), "HELLOZ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FourSquareCipher<'a> {
    alphabet: &'a Alphabet,
    max_len: Option<usize>,
}

impl FourSquareCipher<'static> {
    /// Creates a cipher over one of the built-in alphabets.
    pub fn with_kind(kind: AlphabetKind) -> Self {
        Self::new(kind.alphabet())
    }
}

impl<'a> FourSquareCipher<'a> {
    /// Creates a cipher over `alphabet` with no input-length ceiling.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        FourSquareCipher {
            alphabet,
            max_len: None,
        }
    }

    /// Installs an input-length ceiling, counted in characters of the raw text.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidLimit`] if `max_len` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use elementary_ciphers::{AlphabetKind, CipherError, FourSquareCipher};
    ///
    /// let cipher = FourSquareCipher::with_kind(AlphabetKind::Latin)
    ///     .with_max_len(4)
    ///     .unwrap();
    /// assert_eq!(
    ///     cipher.encrypt("HELLO", "A,B"),
    ///     Err(CipherError::TooLong { len: 5, max: 4 })
    /// );
    /// ```
    pub fn with_max_len(self, max_len: usize) -> Result<Self, CipherError> {
        if max_len == 0 {
            return Err(CipherError::InvalidLimit);
        }
        Ok(FourSquareCipher {
            max_len: Some(max_len),
            ..self
        })
    }

    /// Returns the alphabet this cipher is bound to.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Encrypts `plaintext` under a comma-separated key.
    ///
    /// The text is uppercased, folded and stripped of everything outside the
    /// alphabet; an odd-length result gets the alphabet's padding character
    /// appended. Only the first two phrases of the key select grids.
    ///
    /// # Errors
    /// - [`CipherError::TooLong`] if a ceiling is set and exceeded.
    /// - [`CipherError::EmptyInput`] if text or key normalizes to nothing.
    /// - [`CipherError::InvalidKeyStructure`] if the first or second phrase is
    ///   missing or empty.
    /// - [`CipherError::InvalidKey`] if a key character is outside the alphabet.
    /// - [`CipherError::BlankCell`] if a digraph lands on a blank grid cell.
    pub fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        self.apply(plaintext, key, Direction::Encrypt)
    }

    /// Decrypts `ciphertext` under a comma-separated key.
    ///
    /// Ciphertext is normalized exactly like plaintext, padding included.
    /// Padding added during encryption is returned as part of the plaintext.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
        self.apply(ciphertext, key, Direction::Decrypt)
    }

    fn apply(&self, text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
        check_len(text, self.max_len)?;
        let normalized = self.prepare_text(text)?;
        let keywords = parse_key(self.alphabet, key)?;
        let matrix = KeyMatrix::build(self.alphabet, [keywords[0].as_str(), keywords[1].as_str()])?;

        let mut output = String::with_capacity(normalized.len() * 4);
        for pair in normalized.chunks_exact(2) {
            output.extend(matrix.substitute(pair[0], pair[1], direction)?);
        }

        debug!(
            %direction,
            power = self.alphabet.power(),
            digraphs = normalized.len() / 2,
            "four-square transform complete"
        );
        Ok(output)
    }

    /// Normalizes text and pads it to an even length.
    fn prepare_text(&self, text: &str) -> Result<Vec<char>, CipherError> {
        let mut normalized: Vec<char> = self.alphabet.normalize(text).chars().collect();
        if normalized.is_empty() {
            return Err(CipherError::EmptyInput(InputKind::Text));
        }
        if normalized.len() % 2 == 1 {
            normalized.push(self.alphabet.padding());
        }
        Ok(normalized)
    }
}

/// Splits a four-square key into its keyword phrases.
///
/// The key is uppercased, folded and stripped of whitespace before splitting
/// on commas. Phrases keep their positions: the first two must be non-empty,
/// and every character of every phrase must belong to the alphabet. Phrases
/// past the second are checked but do not select any grid.
pub(crate) fn parse_key(alphabet: &Alphabet, key: &str) -> Result<Vec<String>, CipherError> {
    let canonical: String = alphabet
        .canonical_chars(key)
        .filter(|c| !c.is_whitespace())
        .collect();
    if canonical.is_empty() {
        return Err(CipherError::EmptyInput(InputKind::Key));
    }

    let phrases: Vec<String> = canonical.split(PHRASE_SEPARATOR).map(str::to_string).collect();
    for position in 0..2 {
        if !phrases.get(position).is_some_and(|phrase| !phrase.is_empty()) {
            return Err(CipherError::InvalidKeyStructure {
                position: position + 1,
            });
        }
    }
    if let Some(character) = phrases
        .iter()
        .flat_map(|phrase| phrase.chars())
        .find(|&c| !alphabet.contains(c))
    {
        return Err(CipherError::InvalidKey { character });
    }
    Ok(phrases)
}
