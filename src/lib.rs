//! Elementary classical ciphers over fixed alphabets.
//!
//! Two stateless text-substitution ciphers share one alphabet abstraction:
//! a four-square (Playfair-family) digraph cipher and a running-key
//! Vigenère cipher. Each works over either the 25-letter Latin alphabet
//! (`I`/`J` merged) or the 33-letter Russian Cyrillic alphabet.
//!
//! These are historical ciphers. They offer no security.
//!
//! # Architecture
//!
//! ```text
//! Alphabet          (ordered charset + padding + folds + grid side)
//!     ├── FourSquareCipher  (KeyMatrix of 4 grids, rebuilt per call)
//!     └── VigenereCipher    (shift by key position, mod power)
//! engine            (free functions + Cipher/Direction dispatch)
//! ```
//!
//! # Examples
//!
//! Four-square over the Latin alphabet. Odd-length text is padded with `Z`,
//! and the padding comes back on decryption:
//!
//! ```
//! use elementary_ciphers::{four_square_decrypt, four_square_encrypt, AlphabetKind};
//!
//! let key = "example, keyword";
//! let ciphertext = four_square_encrypt(AlphabetKind::Latin, "Hello", key).unwrap();
//! assert_eq!(ciphertext, "FYGFNX");
//!
//! let plaintext = four_square_decrypt(AlphabetKind::Latin, &ciphertext, key).unwrap();
//! assert_eq!(plaintext, "HELLOZ");
//! ```
//!
//! Vigenère over the Cyrillic alphabet:
//!
//! ```
//! use elementary_ciphers::{vigenere_decrypt, vigenere_encrypt, AlphabetKind};
//!
//! let ciphertext = vigenere_encrypt(AlphabetKind::Cyrillic, "Привет", "Кот").unwrap();
//! assert_eq!(ciphertext, "ЪЯЫМУЕ");
//! assert_eq!(
//!     vigenere_decrypt(AlphabetKind::Cyrillic, &ciphertext, "Кот").unwrap(),
//!     "ПРИВЕТ"
//! );
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod engine;
mod four_square;
mod vigenere;

pub use alphabet::{Alphabet, AlphabetKind};
pub use engine::{
    four_square_decrypt, four_square_encrypt, transform, vigenere_decrypt, vigenere_encrypt, Cipher,
    Direction, UI_TEXT_LIMIT,
};
pub use error::{CipherError, InputKind};
pub use four_square::{FourSquareCipher, Grid, KeyMatrix};
pub use vigenere::VigenereCipher;
