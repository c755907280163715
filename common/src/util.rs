// Simple pseudorandom number generator using xorshift algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the zero state
        let state = if seed == 0 { 0x1234567890abcdef } else { seed };
        PseudoRandom { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PseudoRandom::new(42);
        let mut b = PseudoRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_zero_seed_still_produces_values() {
        let mut rng = PseudoRandom::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_next_bool_yields_both_values() {
        let mut rng = PseudoRandom::new(7);
        let heads = (0..1000).filter(|_| rng.next_bool()).count();
        assert!(heads > 100 && heads < 900);
    }
}
