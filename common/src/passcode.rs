// Random passcode generation

use rand::Rng;

const VALID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random passcode of `length` characters drawn from A-Z0-9.
pub fn generate(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| VALID_CHARS[rng.gen_range(0..VALID_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        assert_eq!(generate(6).len(), 6);
        assert_eq!(generate(12).len(), 12);
        assert_eq!(generate(0).len(), 0);
    }

    #[test]
    fn test_charset() {
        let code = generate(64);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
