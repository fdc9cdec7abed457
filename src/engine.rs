//! Entry points for callers that pick a cipher, direction and alphabet at
//! run time.
//!
//! The four free functions are pure: each call builds whatever it needs on
//! the stack and returns either the transformed string or a [`CipherError`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::alphabet::AlphabetKind;
use crate::error::{CipherError, InputKind};
use crate::four_square::FourSquareCipher;
use crate::vigenere::VigenereCipher;

/// Input-length ceiling a front end applies to loaded text files.
/// The engine functions do not enforce it; pass it to `with_max_len` to opt in.
pub const UI_TEXT_LIMIT: usize = 1000;

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl FromStr for Direction {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            _ => Err(CipherError::UnknownSelector(s.to_string())),
        }
    }
}

/// Which cipher a transform uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cipher {
    /// Four-square digraph cipher.
    FourSquare,
    /// Vigenère running-key cipher.
    Vigenere,
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cipher::FourSquare => write!(f, "four-square"),
            Cipher::Vigenere => write!(f, "vigenere"),
        }
    }
}

impl FromStr for Cipher {
    type Err = CipherError;

    /// Accepts `playfair` as an alias for the four-square cipher.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "four-square" | "foursquare" | "playfair" => Ok(Cipher::FourSquare),
            "vigenere" | "vigenère" => Ok(Cipher::Vigenere),
            _ => Err(CipherError::UnknownSelector(s.to_string())),
        }
    }
}

/// Rejects text longer than `max_len` characters.
pub(crate) fn check_len(text: &str, max_len: Option<usize>) -> Result<(), CipherError> {
    if let Some(max) = max_len {
        let len = text.chars().count();
        if len > max {
            return Err(CipherError::TooLong { len, max });
        }
    }
    Ok(())
}

/// Encrypts with the four-square cipher. See [`FourSquareCipher::encrypt`].
///
/// # Examples
///
/// ```
/// use elementary_ciphers::{four_square_encrypt, AlphabetKind};
///
/// let c = four_square_encrypt(AlphabetKind::Latin, "hello", "example, keyword").unwrap();
/// assert_eq!(c, "FYGFNX");
/// ```
pub fn four_square_encrypt(
    alphabet: AlphabetKind,
    plaintext: &str,
    key: &str,
) -> Result<String, CipherError> {
    FourSquareCipher::with_kind(alphabet).encrypt(plaintext, key)
}

/// Decrypts with the four-square cipher. See [`FourSquareCipher::decrypt`].
pub fn four_square_decrypt(
    alphabet: AlphabetKind,
    ciphertext: &str,
    key: &str,
) -> Result<String, CipherError> {
    FourSquareCipher::with_kind(alphabet).decrypt(ciphertext, key)
}

/// Encrypts with the Vigenère cipher. See [`VigenereCipher::encrypt`].
pub fn vigenere_encrypt(
    alphabet: AlphabetKind,
    plaintext: &str,
    key: &str,
) -> Result<String, CipherError> {
    VigenereCipher::with_kind(alphabet).encrypt(plaintext, key)
}

/// Decrypts with the Vigenère cipher. See [`VigenereCipher::decrypt`].
///
/// # Examples
///
/// ```
/// use elementary_ciphers::{vigenere_decrypt, AlphabetKind, CipherError};
///
/// assert_eq!(vigenere_decrypt(AlphabetKind::Cyrillic, "ЪЯЫМУЕ", "КОТ").unwrap(), "ПРИВЕТ");
/// assert_eq!(
///     vigenere_decrypt(AlphabetKind::Cyrillic, "ЪЯЫМУЕ", "KOT"),
///     Err(CipherError::InvalidKey { character: 'K' })
/// );
/// ```
pub fn vigenere_decrypt(
    alphabet: AlphabetKind,
    ciphertext: &str,
    key: &str,
) -> Result<String, CipherError> {
    VigenereCipher::with_kind(alphabet).decrypt(ciphertext, key)
}

/// Runs one cipher in one direction, the single dispatch point a front end
/// calls.
///
/// Blank text or key is rejected up front with [`CipherError::EmptyInput`],
/// before any normalization.
///
/// # Examples
///
/// ```
/// use elementary_ciphers::{transform, AlphabetKind, Cipher, Direction};
///
/// let out = transform(Cipher::Vigenere, Direction::Encrypt, AlphabetKind::Latin, "abc", "b");
/// assert_eq!(out.unwrap(), "BCD");
/// ```
pub fn transform(
    cipher: Cipher,
    direction: Direction,
    alphabet: AlphabetKind,
    text: &str,
    key: &str,
) -> Result<String, CipherError> {
    if text.trim().is_empty() {
        return Err(CipherError::EmptyInput(InputKind::Text));
    }
    if key.trim().is_empty() {
        return Err(CipherError::EmptyInput(InputKind::Key));
    }
    debug!(%cipher, %direction, %alphabet, text_len = text.chars().count(), "transform requested");

    match (cipher, direction) {
        (Cipher::FourSquare, Direction::Encrypt) => four_square_encrypt(alphabet, text, key),
        (Cipher::FourSquare, Direction::Decrypt) => four_square_decrypt(alphabet, text, key),
        (Cipher::Vigenere, Direction::Encrypt) => vigenere_encrypt(alphabet, text, key),
        (Cipher::Vigenere, Direction::Decrypt) => vigenere_decrypt(alphabet, text, key),
    }
}
