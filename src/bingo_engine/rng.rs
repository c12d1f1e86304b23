use rand::{Error, RngCore};

/// Substitute state for seeds that hash to exactly 0. A zero state would
/// make the xorshift step a fixed point and the stream all zeros.
const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;

/// Deterministic pseudo-random source seeded from a string.
///
/// The seed's code points are folded into a 32-bit hash
/// (`hash = hash * 31 + code_point`, wrapping), which becomes the state of
/// an xorshift32 generator. The same seed always reproduces the same
/// stream, which is what makes a stored card reconstructible. Not
/// cryptographically strong -- it only has to shuffle bingo squares
/// reproducibly.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Seed from any string. Degenerate seeds (empty, single character)
    /// still produce a usable non-zero state.
    pub fn new(seed: &str) -> Self {
        let mut hash: u32 = 0;
        for ch in seed.chars() {
            hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
        }
        SeededRng {
            state: if hash == 0 { ZERO_SEED_FALLBACK } else { hash },
        }
    }

    /// One xorshift32 step: 13 left, 17 right, 5 left, each XORed in.
    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Map the next value onto `0..len`: `floor(next_f64() * len)`.
    ///
    /// This is the draw used for sampling without replacement; `len` is the
    /// remaining pool size, so the result is always a valid index.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.step()) << 32) | u64::from(self.step())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
