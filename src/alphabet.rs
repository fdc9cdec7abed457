//! Fixed character sets shared by both ciphers.
//!
//! An [`Alphabet`] is an ordered set of unique characters together with the
//! padding character used for odd-length four-square text, the character
//! folds applied before filtering (Latin `J -> I`), and the side length of
//! the square matrices the four-square cipher lays it out in.
//!
//! The two built-in alphabets are process-wide constants reached through
//! [`AlphabetKind`]; nothing in this module is mutable after construction.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::CipherError;

/// Latin alphabet with `I` and `J` merged.
const LATIN_CHARACTERS: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Russian Cyrillic alphabet, including `Ё`.
const CYRILLIC_CHARACTERS: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

static LATIN: OnceLock<Alphabet> = OnceLock::new();
static CYRILLIC: OnceLock<Alphabet> = OnceLock::new();

/// An ordered, immutable character set.
///
/// # Examples
///
/// ```
/// use elementary_ciphers::AlphabetKind;
///
/// let latin = AlphabetKind::Latin.alphabet();
/// assert_eq!(latin.power(), 25);
/// assert_eq!(latin.matrix_side(), 5);
/// assert_eq!(latin.index_of('K'), Some(9));
/// assert!(!latin.contains('J'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    characters: Vec<char>,
    padding: char,
    folds: Vec<(char, char)>,
    matrix_side: usize,
}

impl Alphabet {
    /// Builds a custom alphabet.
    ///
    /// # Parameters
    /// - `characters`: The alphabet in order. Must be non-empty with no repeats.
    /// - `padding`: Character appended to odd-length four-square text. Must be
    ///   a member of `characters`.
    /// - `folds`: `(from, to)` substitutions applied to uppercased input before
    ///   filtering. Every `to` must be a member of `characters`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidAlphabet`] if any of the above does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use elementary_ciphers::Alphabet;
    ///
    /// let abc = Alphabet::new("ABCDEFG", 'G', &[]).unwrap();
    /// assert_eq!(abc.power(), 7);
    /// assert_eq!(abc.matrix_side(), 3);
    ///
    /// assert!(Alphabet::new("ABCA", 'A', &[]).is_err());
    /// ```
    pub fn new(
        characters: &str,
        padding: char,
        folds: &[(char, char)],
    ) -> Result<Self, CipherError> {
        let chars: Vec<char> = characters.chars().collect();
        if chars.is_empty() {
            return Err(CipherError::InvalidAlphabet);
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(CipherError::InvalidAlphabet);
            }
        }
        if !chars.contains(&padding) {
            return Err(CipherError::InvalidAlphabet);
        }
        if folds.iter().any(|(_, to)| !chars.contains(to)) {
            return Err(CipherError::InvalidAlphabet);
        }
        Ok(Self::from_parts(chars, padding, folds))
    }

    /// Internal constructor for already-validated parts.
    fn from_parts(characters: Vec<char>, padding: char, folds: &[(char, char)]) -> Self {
        let matrix_side = matrix_side_for(characters.len());
        Alphabet {
            characters,
            padding,
            folds: folds.to_vec(),
            matrix_side,
        }
    }

    /// Returns the characters in alphabet order.
    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    /// Returns the number of characters (the alphabet power).
    pub fn power(&self) -> usize {
        self.characters.len()
    }

    /// Returns the side length of the four-square grids.
    pub fn matrix_side(&self) -> usize {
        self.matrix_side
    }

    /// Returns the four-square padding character.
    pub fn padding(&self) -> char {
        self.padding
    }

    /// Reports whether `c` belongs to the alphabet. No case mapping or folding
    /// is applied.
    pub fn contains(&self, c: char) -> bool {
        self.characters.contains(&c)
    }

    /// Returns the zero-based position of `c`, or `None` if absent.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.characters.iter().position(|&x| x == c)
    }

    /// Returns the character at `index`, or `None` past the end.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.characters.get(index).copied()
    }

    /// Applies the alphabet's folds to an already-uppercased character.
    pub fn fold(&self, c: char) -> char {
        self.folds
            .iter()
            .find(|(from, _)| *from == c)
            .map_or(c, |&(_, to)| to)
    }

    /// Uppercases and folds every character of `text`, keeping everything
    /// else (including characters outside the alphabet).
    pub(crate) fn canonical_chars<'a>(&'a self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        text.chars()
            .flat_map(char::to_uppercase)
            .map(move |c| self.fold(c))
    }

    /// Uppercases, folds and drops every character outside the alphabet,
    /// whitespace included.
    ///
    /// # Examples
    ///
    /// ```
    /// use elementary_ciphers::AlphabetKind;
    ///
    /// let latin = AlphabetKind::Latin.alphabet();
    /// assert_eq!(latin.normalize("Jolly jumper, 42!"), "IOLLYIUMPER");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        self.canonical_chars(text)
            .filter(|&c| self.contains(c))
            .collect()
    }
}

/// `round(sqrt(power))`, raised by one when rounding down leaves too few cells.
fn matrix_side_for(power: usize) -> usize {
    let mut side = (power as f64).sqrt().round() as usize;
    if side * side < power {
        side += 1;
    }
    side
}

/// Selector for the built-in alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetKind {
    /// 25 letters, `J` folded into `I`, 5x5 grids, padding `Z`.
    Latin,
    /// 33 letters, 6x6 grids with three blank cells, padding `Й`.
    Cyrillic,
}

impl AlphabetKind {
    /// Returns the process-wide alphabet for this selector.
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetKind::Latin => LATIN.get_or_init(|| {
                Alphabet::from_parts(LATIN_CHARACTERS.chars().collect(), 'Z', &[('J', 'I')])
            }),
            AlphabetKind::Cyrillic => CYRILLIC.get_or_init(|| {
                Alphabet::from_parts(CYRILLIC_CHARACTERS.chars().collect(), 'Й', &[])
            }),
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetKind::Latin => write!(f, "latin"),
            AlphabetKind::Cyrillic => write!(f, "cyrillic"),
        }
    }
}

impl FromStr for AlphabetKind {
    type Err = CipherError;

    /// Accepts the display names and the language names `english` / `russian`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latin" | "english" => Ok(AlphabetKind::Latin),
            "cyrillic" | "russian" => Ok(AlphabetKind::Cyrillic),
            _ => Err(CipherError::UnknownSelector(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_constants() {
        let latin = AlphabetKind::Latin.alphabet();
        assert_eq!(latin.power(), 25);
        assert_eq!(latin.matrix_side(), 5);
        assert_eq!(latin.padding(), 'Z');
        assert_eq!(latin.characters().iter().collect::<String>(), LATIN_CHARACTERS);
    }

    #[test]
    fn test_cyrillic_constants() {
        let cyrillic = AlphabetKind::Cyrillic.alphabet();
        assert_eq!(cyrillic.power(), 33);
        assert_eq!(cyrillic.matrix_side(), 6);
        assert_eq!(cyrillic.padding(), 'Й');
        assert_eq!(cyrillic.index_of('Ё'), Some(6));
        assert_eq!(cyrillic.index_of('Я'), Some(32));
    }

    #[test]
    fn test_index_of_absent() {
        let latin = AlphabetKind::Latin.alphabet();
        assert_eq!(latin.index_of('J'), None);
        assert_eq!(latin.index_of('a'), None);
        assert_eq!(latin.index_of('Д'), None);
    }

    #[test]
    fn test_char_at_matches_index_of() {
        for kind in [AlphabetKind::Latin, AlphabetKind::Cyrillic] {
            let alphabet = kind.alphabet();
            for (i, &c) in alphabet.characters().iter().enumerate() {
                assert_eq!(alphabet.index_of(c), Some(i));
                assert_eq!(alphabet.char_at(i), Some(c));
            }
            assert_eq!(alphabet.char_at(alphabet.power()), None);
        }
    }

    #[test]
    fn test_builtin_alphabets_have_no_duplicates() {
        for kind in [AlphabetKind::Latin, AlphabetKind::Cyrillic] {
            let chars = kind.alphabet().characters();
            for (i, c) in chars.iter().enumerate() {
                assert!(!chars[i + 1..].contains(c), "{} repeats '{}'", kind, c);
            }
        }
    }

    #[test]
    fn test_fold_latin_j() {
        let latin = AlphabetKind::Latin.alphabet();
        assert_eq!(latin.fold('J'), 'I');
        assert_eq!(latin.fold('K'), 'K');
        assert_eq!(AlphabetKind::Cyrillic.alphabet().fold('J'), 'J');
    }

    #[test]
    fn test_normalize_cyrillic_keeps_yo() {
        let cyrillic = AlphabetKind::Cyrillic.alphabet();
        assert_eq!(cyrillic.normalize("ёлка, Hello!"), "ЁЛКА");
    }

    #[test]
    fn test_matrix_side_for() {
        assert_eq!(matrix_side_for(1), 1);
        assert_eq!(matrix_side_for(25), 5);
        assert_eq!(matrix_side_for(26), 6);
        assert_eq!(matrix_side_for(30), 6);
        assert_eq!(matrix_side_for(33), 6);
        assert_eq!(matrix_side_for(36), 6);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert_eq!(Alphabet::new("", 'A', &[]), Err(CipherError::InvalidAlphabet));
        assert_eq!(Alphabet::new("ABB", 'A', &[]), Err(CipherError::InvalidAlphabet));
        assert_eq!(Alphabet::new("ABC", 'Z', &[]), Err(CipherError::InvalidAlphabet));
        assert_eq!(
            Alphabet::new("ABC", 'A', &[('D', 'E')]),
            Err(CipherError::InvalidAlphabet)
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("latin".parse::<AlphabetKind>(), Ok(AlphabetKind::Latin));
        assert_eq!("English".parse::<AlphabetKind>(), Ok(AlphabetKind::Latin));
        assert_eq!(" RUSSIAN ".parse::<AlphabetKind>(), Ok(AlphabetKind::Cyrillic));
        assert_eq!(
            "greek".parse::<AlphabetKind>(),
            Err(CipherError::UnknownSelector("greek".to_string()))
        );
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in [AlphabetKind::Latin, AlphabetKind::Cyrillic] {
            assert_eq!(kind.to_string().parse::<AlphabetKind>(), Ok(kind));
        }
    }
}
