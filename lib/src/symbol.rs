//! Output symbol selection
//!
//! The encoding is strictly binary: a pixel is either dark or light.
//! Light pixels render as a space, dark pixels as a random lowercase
//! letter drawn independently for every pixel.

use rand::Rng;

/// Grayscale values at or above this threshold count as light.
pub const DARK_THRESHOLD: u8 = 128;

/// Size of the dark-pixel alphabet (`a..=z`).
pub const NUM_LETTERS: u8 = 26;

/// Symbol emitted for light pixels.
pub const EMPTY_CHAR: char = ' ';

/// Draw a uniformly random letter in `a..=z`.
pub fn random_letter<R: Rng>(rng: &mut R) -> char {
    (b'a' + rng.gen_range(0..NUM_LETTERS)) as char
}

/// Select the output symbol for a grayscale value.
///
/// # Arguments
/// * `value` - Grayscale intensity, 0 = black, 255 = white
/// * `rng` - Generator used when the value falls on the dark side
///
/// # Returns
/// A space for values >= [`DARK_THRESHOLD`], otherwise a random
/// lowercase letter. Two calls with the same dark value will generally
/// return different letters.
pub fn symbol_for<R: Rng>(value: u8, rng: &mut R) -> char {
    if value < DARK_THRESHOLD {
        random_letter(rng)
    } else {
        EMPTY_CHAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_values_are_space() {
        let mut rng = rand::thread_rng();
        for value in DARK_THRESHOLD..=255 {
            assert_eq!(symbol_for(value, &mut rng), EMPTY_CHAR);
        }
    }

    #[test]
    fn test_dark_values_are_lowercase_letters() {
        let mut rng = rand::thread_rng();
        for value in 0..DARK_THRESHOLD {
            let ch = symbol_for(value, &mut rng);
            assert!(
                ch.is_ascii_lowercase(),
                "value {} produced non-letter {:?}",
                value,
                ch
            );
        }
    }

    #[test]
    fn test_random_letter_stays_in_alphabet() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let ch = random_letter(&mut rng);
            assert!(('a'..='z').contains(&ch));
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let mut rng = rand::thread_rng();
        assert!(symbol_for(127, &mut rng).is_ascii_lowercase());
        assert_eq!(symbol_for(128, &mut rng), EMPTY_CHAR);
    }
}
