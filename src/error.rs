//! Error types for the elementary ciphers library.

use std::fmt;

/// Which caller-supplied input an [`CipherError::EmptyInput`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// The plaintext or ciphertext.
    Text,
    /// The key phrase.
    Key,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => write!(f, "Text"),
            InputKind::Key => write!(f, "Key"),
        }
    }
}

/// Errors produced by the elementary ciphers library.
///
/// Every variant is terminal for the call that produced it; the message is
/// meant to be shown to the user as-is.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// A key character is not part of the selected alphabet.
    #[error("Key contains character '{character}' outside the selected alphabet")]
    InvalidKey {
        /// The offending character, after uppercasing.
        character: char,
    },
    /// The first or second comma-separated phrase of a four-square key is
    /// missing or empty.
    #[error("Four-square key phrase {position} is missing or empty")]
    InvalidKeyStructure {
        /// One-based position of the offending phrase.
        position: usize,
    },
    /// A character expected in a key grid was not found there.
    #[error("Character '{character}' is missing from the key matrix")]
    InvalidCharacter {
        /// The character that failed the lookup.
        character: char,
    },
    /// A digraph maps onto a blank cell of the key matrix, which has no
    /// character to emit. Only alphabets whose power is not a perfect square
    /// have blank cells.
    #[error("Digraph '{first}{second}' maps onto a blank cell of the key matrix")]
    BlankCell {
        /// First character of the digraph.
        first: char,
        /// Second character of the digraph.
        second: char,
    },
    /// Text or key is empty after normalization.
    #[error("{0} is empty after normalization")]
    EmptyInput(InputKind),
    /// Text is longer than the configured ceiling.
    #[error("Text is {len} characters long, the limit is {max}")]
    TooLong {
        /// Length of the rejected input in characters.
        len: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// A custom alphabet is empty or repeats a character.
    #[error("Alphabet must be non-empty and must not repeat characters")]
    InvalidAlphabet,
    /// A zero input-length ceiling was requested.
    #[error("Input length limit must be at least 1")]
    InvalidLimit,
    /// An alphabet, cipher or direction name was not recognized.
    #[error("Unknown selector '{0}'")]
    UnknownSelector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey { character: 'Q' };
        assert_eq!(
            format!("{}", err),
            "Key contains character 'Q' outside the selected alphabet"
        );
    }

    #[test]
    fn test_display_invalid_key_structure() {
        let err = CipherError::InvalidKeyStructure { position: 2 };
        assert_eq!(format!("{}", err), "Four-square key phrase 2 is missing or empty");
    }

    #[test]
    fn test_display_invalid_character() {
        let err = CipherError::InvalidCharacter { character: 'Ж' };
        assert_eq!(
            format!("{}", err),
            "Character 'Ж' is missing from the key matrix"
        );
    }

    #[test]
    fn test_display_blank_cell() {
        let err = CipherError::BlankCell {
            first: 'Э',
            second: 'Д',
        };
        assert_eq!(
            format!("{}", err),
            "Digraph 'ЭД' maps onto a blank cell of the key matrix"
        );
    }

    #[test]
    fn test_display_empty_input() {
        assert_eq!(
            format!("{}", CipherError::EmptyInput(InputKind::Text)),
            "Text is empty after normalization"
        );
        assert_eq!(
            format!("{}", CipherError::EmptyInput(InputKind::Key)),
            "Key is empty after normalization"
        );
    }

    #[test]
    fn test_display_too_long() {
        let err = CipherError::TooLong {
            len: 1001,
            max: 1000,
        };
        assert_eq!(
            format!("{}", err),
            "Text is 1001 characters long, the limit is 1000"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::EmptyInput(InputKind::Key),
            CipherError::EmptyInput(InputKind::Key)
        );
        assert_ne!(
            CipherError::EmptyInput(InputKind::Key),
            CipherError::EmptyInput(InputKind::Text)
        );
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::InvalidKey { character: 'W' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CipherError::InvalidLimit);
    }
}
