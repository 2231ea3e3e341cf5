//! Random password generation and plain-text saving.
//!
//! ```
//! # use passgen::{generate, ALPHABET};
//! let password = generate(8)?;
//!
//! assert_eq!(8, password.len());
//! assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod writer;

pub use alphabet::ALPHABET;
pub use error::Error;
pub use generator::{generate, generate_with, parse_length, MAX_LENGTH};
pub use writer::save;
