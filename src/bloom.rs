use bit_vec::BitVec;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::error::{Error, Result};

/// Classic Bloom filter over a fixed-size bit array.
///
/// Bits only ever flip from 0 to 1, so an item that was added can never be
/// reported absent. The price is a false-positive rate that grows with the
/// fill ratio of the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    // number of bits in the filter
    size: u64,
    // number of salted hash rounds per item
    hash_count: u64,

    bits: BitVec,
}

impl BloomFilter {
    /// size -- length of the bit array, hash_count -- hash rounds per item.
    /// Both must be at least 1.
    pub fn new(size: u64, hash_count: u64) -> Result<Self> {
        if size < 1 {
            return Err(Error::InvalidParameters(format!(
                "size must be at least 1, got {size}"
            )));
        }
        if hash_count < 1 {
            return Err(Error::InvalidParameters(format!(
                "hash_count must be at least 1, got {hash_count}"
            )));
        }
        Ok(Self {
            size,
            hash_count,
            bits: BitVec::from_elem(size as usize, false),
        })
    }

    // One index per round: seeding xxh3 with the round number derives
    // hash_count index functions from a single deterministic primitive.
    fn index(&self, item: &str, round: u64) -> usize {
        (xxh3_64_with_seed(item.as_bytes(), round) % self.size) as usize
    }

    /// Set every index of `item`. Idempotent; adding the same item again
    /// leaves the bit array unchanged.
    pub fn add(&mut self, item: &str) {
        for i in 0..self.hash_count {
            let idx = self.index(item, i);
            self.bits.set(idx, true);
        }
    }

    /// `true` means possibly present, `false` means definitely absent.
    /// Short-circuits on the first unset bit.
    pub fn check(&self, item: &str) -> bool {
        for i in 0..self.hash_count {
            if self.bits.get(self.index(item, i)) == Some(false) {
                return false;
            }
        }
        true
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn hash_count(&self) -> u64 {
        self.hash_count
    }

    /// Number of bits currently set to 1.
    pub fn set_bits(&self) -> usize {
        self.bits.iter().filter(|&b| b).count()
    }

    /// Fraction of the bit array that is set.
    pub fn fill_ratio(&self) -> f64 {
        self.set_bits() as f64 / self.size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};

    fn random_word(rng: &mut impl Rng) -> String {
        (0..12).map(|_| char::from(rng.sample(Alphanumeric))).collect()
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(BloomFilter::new(0, 3).is_err());
        assert!(BloomFilter::new(1000, 0).is_err());
        assert!(BloomFilter::new(0, 0).is_err());
        assert!(BloomFilter::new(1, 1).is_ok());
    }

    #[test]
    fn simple_check() {
        let mut bf = BloomFilter::new(1000, 3).unwrap();
        bf.add("alpha");
        bf.add("beta");
        bf.add("gamma");

        assert!(bf.check("alpha"), "stored value is not found!");
        assert!(bf.check("beta"), "stored value is not found!");
        assert!(bf.check("gamma"), "stored value is not found!");

        // 9 of 1000 bits set, so a false positive here is ~7e-7.
        assert!(!bf.check("delta"), "not stored value is found!");
    }

    #[test]
    fn empty_filter_reports_everything_absent() {
        let bf = BloomFilter::new(1000, 3).unwrap();
        let mut rng = thread_rng();
        for _ in 0..100 {
            assert!(!bf.check(&random_word(&mut rng)));
        }
        assert!(!bf.check(""));
    }

    #[test]
    fn no_false_negatives_across_configurations() {
        let words = ["alpha", "beta", "gamma", "delta", "", "caf\u{e9}"];
        for size in [1, 7, 64, 1000] {
            for hash_count in [1, 2, 8] {
                let mut bf = BloomFilter::new(size, hash_count).unwrap();
                for word in words {
                    bf.add(word);
                }
                for word in words {
                    assert!(
                        bf.check(word),
                        "stored value is not found! size={size} hash_count={hash_count}"
                    );
                }
            }
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = BloomFilter::new(1000, 3).unwrap();
        once.add("alpha");

        let mut thrice = BloomFilter::new(1000, 3).unwrap();
        thrice.add("alpha");
        thrice.add("alpha");
        thrice.add("alpha");

        assert_eq!(once, thrice);
        assert_eq!(once.set_bits(), thrice.set_bits());
    }

    #[test]
    fn fill_is_monotonic() {
        let mut bf = BloomFilter::new(1000, 3).unwrap();
        let mut rng = thread_rng();
        let mut previous = 0;
        for _ in 0..200 {
            bf.add(&random_word(&mut rng));
            let current = bf.set_bits();
            assert!(current >= previous, "set bit count decreased!");
            previous = current;
        }
    }

    #[test]
    fn identical_add_sequences_are_bit_identical() {
        let words = ["alpha", "beta", "gamma", "delta"];
        let mut left = BloomFilter::new(4096, 5).unwrap();
        let mut right = BloomFilter::new(4096, 5).unwrap();
        for word in words {
            left.add(word);
            right.add(word);
        }
        assert_eq!(left, right);

        let mut rng = thread_rng();
        for _ in 0..100 {
            let probe = random_word(&mut rng);
            assert_eq!(left.check(&probe), right.check(&probe));
        }
    }

    #[test]
    fn false_positive_rate_tracks_theoretical_estimate() {
        let (m, k) = (1_000_000u64, 3u64);
        let mut bf = BloomFilter::new(m, k).unwrap();
        let inserted = ["alpha", "beta", "gamma"];
        for word in inserted {
            bf.add(word);
        }

        // (1 - e^(-k*n/m))^k for n inserted items
        let n = inserted.len() as f64;
        let estimate = (1.0 - (-(k as f64) * n / m as f64).exp()).powi(k as i32);

        let mut rng = thread_rng();
        let mut false_positive = 0u32;
        let queries = 10_000u32;
        for _ in 0..queries {
            let word = random_word(&mut rng);
            if bf.check(&word) && !inserted.contains(&word.as_str()) {
                false_positive += 1;
            }
        }

        let observed = f64::from(false_positive) / f64::from(queries);
        // Tolerance band, not exact equality: with 3 items in a million
        // bits the estimate is vanishingly small, so any real cluster of
        // false positives is a hashing defect.
        assert!(
            observed <= estimate + 1e-3,
            "false positive rate {observed} far above estimate {estimate}"
        );
    }
}
