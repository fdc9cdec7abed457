//! Running-key Vigenère cipher.
//!
//! Each alphabet character of the text is shifted by the position of the
//! current key character, modulo the alphabet power. The key index advances
//! only on characters that are actually emitted; anything outside the
//! alphabet is skipped and does not appear in the output.

use tracing::debug;

use crate::alphabet::{Alphabet, AlphabetKind};
use crate::engine::{check_len, Direction};
use crate::error::{CipherError, InputKind};

/// Vigenère cipher bound to one alphabet.
///
/// Text and key go through the alphabet's folds before lookup. Over the
/// 25-letter Latin alphabet this means `J` is enciphered as `I` and a key
/// `J` shifts like `I`; a decrypted `J` therefore comes back as `I`.
///
/// # Examples
///
/// ```
/// use elementary_ciphers::{AlphabetKind, VigenereCipher};
///
/// let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
///
/// let ciphertext = cipher.encrypt("Привет", "кот").unwrap();
/// assert_eq!(ciphertext, "ЪЯЫМУЕ");
/// assert_eq!(cipher.decrypt(&ciphertext, "кот").unwrap(), "ПРИВЕТ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VigenereCipher<'a> {
    alphabet: &'a Alphabet,
    max_len: Option<usize>,
}

impl VigenereCipher<'static> {
    /// Creates a cipher over one of the built-in alphabets.
    pub fn with_kind(kind: AlphabetKind) -> Self {
        Self::new(kind.alphabet())
    }
}

impl<'a> VigenereCipher<'a> {
    /// Creates a cipher over `alphabet` with no input-length ceiling.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        VigenereCipher {
            alphabet,
            max_len: None,
        }
    }

    /// Installs an input-length ceiling, counted in characters of the raw text.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidLimit`] if `max_len` is zero.
    pub fn with_max_len(self, max_len: usize) -> Result<Self, CipherError> {
        if max_len == 0 {
            return Err(CipherError::InvalidLimit);
        }
        Ok(VigenereCipher {
            max_len: Some(max_len),
            ..self
        })
    }

    /// Returns the alphabet this cipher is bound to.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Encrypts `plaintext`: `c = (m + k) mod power`.
    ///
    /// # Errors
    /// - [`CipherError::TooLong`] if a ceiling is set and exceeded.
    /// - [`CipherError::EmptyInput`] if the key is blank or the text has no
    ///   alphabet characters.
    /// - [`CipherError::InvalidKey`] if a key character is outside the alphabet.
    pub fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        self.apply(plaintext, key, Direction::Encrypt)
    }

    /// Decrypts `ciphertext`: `m = (c - k + power) mod power`.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
        self.apply(ciphertext, key, Direction::Decrypt)
    }

    fn apply(&self, text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
        check_len(text, self.max_len)?;
        let shifts = self.key_shifts(key)?;
        let power = self.alphabet.power();

        let mut output = String::with_capacity(text.len());
        let mut emitted = 0usize;
        for c in self.alphabet.canonical_chars(text) {
            let Some(index) = self.alphabet.index_of(c) else {
                continue;
            };
            let shift = shifts[emitted % shifts.len()];
            let shifted = match direction {
                Direction::Encrypt => (index + shift) % power,
                Direction::Decrypt => (index + power - shift) % power,
            };
            output.extend(self.alphabet.char_at(shifted));
            emitted += 1;
        }

        if emitted == 0 {
            return Err(CipherError::EmptyInput(InputKind::Text));
        }
        debug!(%direction, power, emitted, key_len = shifts.len(), "vigenère transform complete");
        Ok(output)
    }

    /// Converts the key into alphabet positions, ignoring whitespace.
    fn key_shifts(&self, key: &str) -> Result<Vec<usize>, CipherError> {
        let shifts = self
            .alphabet
            .canonical_chars(key)
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                self.alphabet
                    .index_of(c)
                    .ok_or(CipherError::InvalidKey { character: c })
            })
            .collect::<Result<Vec<usize>, CipherError>>()?;
        if shifts.is_empty() {
            return Err(CipherError::EmptyInput(InputKind::Key));
        }
        Ok(shifts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shifts() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
        assert_eq!(cipher.key_shifts("к о т").unwrap(), vec![11, 15, 19]);
    }

    #[test]
    fn test_key_shifts_latin_fold() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin);
        assert_eq!(cipher.key_shifts("Jab").unwrap(), vec![8, 0, 1]);
    }

    #[test]
    fn test_key_shifts_rejects_foreign() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
        assert_eq!(
            cipher.key_shifts("КОT"),
            Err(CipherError::InvalidKey { character: 'T' })
        );
    }

    #[test]
    fn test_key_shifts_empty() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin);
        assert_eq!(
            cipher.key_shifts(" \t "),
            Err(CipherError::EmptyInput(InputKind::Key))
        );
    }

    #[test]
    fn test_skips_foreign_text_without_advancing_key() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
        assert_eq!(cipher.encrypt("ПРИВЕТ, МИР!", "КОТ").unwrap(), "ЪЯЫМУЕЧЧГ");
        assert_eq!(
            cipher.encrypt("ПРИВЕТ", "КОТ").unwrap(),
            cipher.encrypt("П-Р И_В1Е Т", "КОТ").unwrap()
        );
    }

    #[test]
    fn test_latin_known_vector() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin);
        assert_eq!(cipher.encrypt("attack at dawn", "lemon").unwrap(), "LXEOPUEERNGR");
        assert_eq!(cipher.decrypt("LXEOPUEERNGR", "LEMON").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_zero_shift_key_is_identity() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin);
        assert_eq!(cipher.encrypt("Hello World", "aaa").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_latin_j_folds_into_i() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin);
        assert_eq!(cipher.encrypt("JJ", "A").unwrap(), "II");
        assert_eq!(cipher.encrypt("AB", "J").unwrap(), cipher.encrypt("AB", "I").unwrap());
        let ciphertext = cipher.encrypt("Jam", "key").unwrap();
        assert_eq!(cipher.decrypt(&ciphertext, "key").unwrap(), "IAM");
    }

    #[test]
    fn test_alphabet_getter() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
        assert!(std::ptr::eq(cipher.alphabet(), AlphabetKind::Cyrillic.alphabet()));
        assert_eq!(cipher.alphabet().power(), 33);
    }

    #[test]
    fn test_empty_text() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Cyrillic);
        assert_eq!(
            cipher.encrypt("hello", "КОТ"),
            Err(CipherError::EmptyInput(InputKind::Text))
        );
    }

    #[test]
    fn test_with_max_len() {
        let cipher = VigenereCipher::with_kind(AlphabetKind::Latin)
            .with_max_len(3)
            .unwrap();
        assert!(cipher.encrypt("abc", "k").is_ok());
        assert_eq!(
            cipher.encrypt("abcd", "k"),
            Err(CipherError::TooLong { len: 4, max: 3 })
        );
        assert!(matches!(cipher.with_max_len(0), Err(CipherError::InvalidLimit)));
    }
}
