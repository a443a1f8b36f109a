//! Random password generation.

use rand::Rng;

/// Default length for generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// ASCII letters, digits, and punctuation.
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generates a random password of the given length.
///
/// Characters are drawn uniformly from ASCII letters, digits, and
/// punctuation using the process RNG, which is seeded from the operating
/// system.
///
/// # Examples
///
/// ```
/// let password = passfort_core::generate_password(16);
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        for length in [0, 1, 12, 64] {
            assert_eq!(generate_password(length).len(), length);
        }
    }

    #[test]
    fn test_characters_are_printable_ascii() {
        let password = generate_password(256);
        assert!(password.chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn test_no_whitespace() {
        let password = generate_password(256);
        assert!(!password.contains(char::is_whitespace));
    }

    #[test]
    fn test_successive_passwords_differ() {
        // 32 characters over a ~94-symbol alphabet; a collision would
        // indicate a broken RNG rather than bad luck.
        assert_ne!(generate_password(32), generate_password(32));
    }
}
