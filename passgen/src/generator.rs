use crate::alphabet::{ACCEPT_BELOW, ALPHABET};
use crate::Error;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Longest password `generate` agrees to build.
pub const MAX_LENGTH: usize = 1 << 20;

const BATCH: usize = 64;

/// Parse the content of a length field.
///
/// ```
/// # use passgen::{parse_length, Error};
/// assert_eq!(12, parse_length(" 12 ")?);
/// assert!(matches!(parse_length("abc"), Err(Error::InputParse { .. })));
/// # Ok::<(), Error>(())
/// ```
pub fn parse_length(input: &str) -> Result<i64, Error> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| Error::InputParse {
            input: input.to_owned(),
            source,
        })
}

/// Generate a password of `requested` characters using the operating system's CSPRNG.
///
/// ```
/// # use passgen::{generate, Error};
/// assert_eq!("", generate(0)?);
/// assert!(matches!(generate(-1), Err(Error::InvalidLength { requested: -1 })));
/// # Ok::<(), Error>(())
/// ```
pub fn generate(requested: i64) -> Result<String, Error> {
    let length = usize::try_from(requested)
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or(Error::InvalidLength { requested })?;

    generate_with(&mut OsRng, length)
}

/// Generate a password of `length` characters, each drawn uniformly from [`ALPHABET`].
///
/// Either every character is produced or the error of the random source is returned.
pub fn generate_with<R>(rng: &mut R, length: usize) -> Result<String, Error>
where
    R: RngCore + CryptoRng,
{
    let mut password = String::with_capacity(length);
    let mut buf = [0u8; BATCH];

    while password.len() < length {
        rng.try_fill_bytes(&mut buf)?;

        for byte in buf.iter().filter(|b| **b < ACCEPT_BELOW) {
            if password.len() == length {
                break;
            }
            let idx = *byte as usize % ALPHABET.len();
            password.push(ALPHABET[idx] as char);
        }
    }

    Ok(password)
}
