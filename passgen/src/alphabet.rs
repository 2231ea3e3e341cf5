/// Characters passwords are drawn from: every printable, non-space ASCII character.
pub const ALPHABET: &[u8; 94] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~\\";

/// Random bytes at or above this value are rejected so that `byte % 94` stays unbiased.
pub(crate) const ACCEPT_BELOW: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;
