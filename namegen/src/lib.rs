//! Random name generation for Eldra creatures and characters.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const MIN_LENGTH: usize = 5;
const MAX_LENGTH: usize = 25;

/// Generate a random name
///
/// The name is 5 to 25 letters long, drawn uniformly from lowercase a-z,
/// with the first letter capitalized.
pub fn random_name() -> String {
    random_name_with(&mut rand::thread_rng())
}

/// Same as [`random_name`], drawing from a caller-supplied generator
pub fn random_name_with<R: Rng>(rng: &mut R) -> String {
    let length = rng.gen_range(MIN_LENGTH..=MAX_LENGTH);
    let mut name = String::with_capacity(length);
    for position in 0..length {
        let letter = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
        if position == 0 {
            name.push(letter.to_ascii_uppercase());
        } else {
            name.push(letter);
        }
    }
    name
}
