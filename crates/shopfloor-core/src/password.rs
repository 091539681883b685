//! Device password generation.

use rand::Rng;
use rand::seq::SliceRandom;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_.";

/// Length of passwords generated during device registration.
pub const DEVICE_PASSWORD_LEN: usize = 8;

/// Shortest password that still fits one character of each required class.
pub const MIN_PASSWORD_LEN: usize = 3;

/// Generate a random password from the thread-local CSPRNG.
///
/// The result always holds at least one uppercase letter, one lowercase
/// letter and one digit. Lengths below [`MIN_PASSWORD_LEN`] are raised to it.
pub fn generate_password(length: usize) -> String {
    let length = length.max(MIN_PASSWORD_LEN);
    let mut rng = rand::rng();

    let pick = |rng: &mut rand::rngs::ThreadRng, set: &[u8]| -> char {
        char::from(set[rng.random_range(0..set.len())])
    };

    let mut chars = Vec::with_capacity(length);
    chars.push(pick(&mut rng, UPPER));
    chars.push(pick(&mut rng, LOWER));
    chars.push(pick(&mut rng, DIGITS));

    let all: Vec<u8> = [UPPER, LOWER, DIGITS, SPECIAL].concat();
    while chars.len() < length {
        chars.push(pick(&mut rng, &all));
    }

    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}
