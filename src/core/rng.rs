//! Entropy Sources
//!
//! Production rounds draw from the operating system (`rand::rngs::OsRng`).
//! Tests inject [`DeterministicRng`], a seeded Xorshift128+ generator that
//! produces the identical sequence on every platform.
//!
//! Every draw made by the round goes through `try_fill_bytes`, so an
//! exhausted or missing entropy source surfaces as an error instead of a panic.

use rand::RngCore;

/// Deterministic PRNG using Xorshift128+ algorithm.
///
/// Not cryptographically secure. Only meant to be injected where a
/// reproducible sequence is required.
///
/// # Example
///
/// ```
/// use fair_rps::core::rng::DeterministicRng;
/// use rand::RngCore;
///
/// let mut rng = DeterministicRng::new(12345);
/// let value = rng.next_u64();
/// assert_eq!(value, 6233086606872742541); // Always the same!
/// ```
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }
}

impl RngCore for DeterministicRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Draw a uniformly distributed index in `[0, bound)`.
///
/// Uses rejection sampling over 32-bit draws, so no index is favoured
/// regardless of `bound`. Fails only if the source cannot supply bytes.
///
/// # Panics
/// Panics if `bound` is zero or does not fit in a `u32`.
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> Result<usize, rand::Error> {
    let bound = u32::try_from(bound).expect("index bound must fit in u32");
    assert!(bound > 0, "index bound must be non-zero");

    // Largest multiple of `bound` representable in u32 space.
    let zone = u32::MAX - (u32::MAX - bound + 1) % bound;
    let mut buf = [0u8; 4];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        let value = u32::from_le_bytes(buf);
        if value <= zone {
            return Ok((value % bound) as usize);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
