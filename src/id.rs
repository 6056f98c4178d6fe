//! Crypto-random token identifiers
//!
//! Generates the short ids stored under the `jti` claim: 20 characters from
//! a 32-symbol alphabet chosen to be unambiguous when read aloud or typed
//! (`0`/`o` and `1`/`i`/`l` are excluded). Characters are drawn uniformly by
//! rejection sampling 5-bit chunks from the operating system's
//! cryptographically secure random source.

const ID_LENGTH: usize = 20;
const BITS_PER_CHAR: u32 = 5;
const ALPHABET_MASK: u64 = (1 << BITS_PER_CHAR) - 1;

// readable 32 chars (no 0, o, 1, i, l); a second g pads the set to 32
const ALPHABET: &[u8] = b"23456789abcdefgghjkmnpqrstuvwxyz";

/// Generate a 20-character random identifier
///
/// # Panics
///
/// Panics if the operating system's random source fails. There is no
/// fallback to a weaker source.
pub fn generate() -> String {
    let mut out = Vec::with_capacity(ID_LENGTH);
    let mut cache: u64 = 0;
    let mut bits: u32 = 0;

    while out.len() < ID_LENGTH {
        if bits < BITS_PER_CHAR {
            cache = random_u64();
            bits = u64::BITS;
        }

        let index = (cache & ALPHABET_MASK) as usize;
        cache >>= BITS_PER_CHAR;
        bits -= BITS_PER_CHAR;

        if index >= ALPHABET.len() {
            continue;
        }
        out.push(ALPHABET[index]);
    }

    String::from_utf8(out).expect("alphabet is ASCII")
}

fn random_u64() -> u64 {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).expect("OS random source unavailable");
    u64::from_le_bytes(buf)
}
