use std::collections::HashSet;
use std::fmt;

use crate::bloom::BloomFilter;
use crate::error::Result;

/// 2x2 tally of filter verdicts against genuine membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
}

impl ConfusionMatrix {
    /// Number of queries classified. Every query lands in exactly one
    /// bucket, so this equals the length of the query stream.
    pub fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.true_positive += 1,
            (true, false) => self.false_positive += 1,
            (false, true) => self.false_negative += 1,
            (false, false) => self.true_negative += 1,
        }
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "True Positives: {}", self.true_positive)?;
        writeln!(f, "True Negatives: {}", self.true_negative)?;
        writeln!(f, "False Positives: {}", self.false_positive)?;
        write!(f, "False Negatives: {}", self.false_negative)
    }
}

/// Accuracy harness for one filter configuration.
///
/// Every loaded word goes into the filter and into an exact ground-truth
/// set, in identical normalized form, so each query verdict can be scored
/// against genuine membership. A nonzero false-negative count therefore
/// indicates a normalization mismatch between the two phases, never a
/// filter defect.
pub struct Evaluator {
    filter: BloomFilter,
    truth: HashSet<String>,
}

impl Evaluator {
    pub fn new(filter: BloomFilter) -> Self {
        Self {
            filter,
            truth: HashSet::new(),
        }
    }

    /// Load phase: insert every reference word into the filter and the
    /// ground-truth set. Returns the number of words loaded.
    pub fn load<I>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut loaded = 0;
        for word in words {
            let word = word?;
            self.filter.add(&word);
            self.truth.insert(word);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Query phase: classify every query word into exactly one bucket.
    pub fn run<I>(&self, queries: I) -> Result<ConfusionMatrix>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        self.run_with(queries, |_, _| {})
    }

    /// Same as [`Evaluator::run`], additionally invoking `verdict` with
    /// each word and the filter's prediction as it is classified.
    pub fn run_with<I, F>(&self, queries: I, mut verdict: F) -> Result<ConfusionMatrix>
    where
        I: IntoIterator<Item = Result<String>>,
        F: FnMut(&str, bool),
    {
        let mut matrix = ConfusionMatrix::default();
        for word in queries {
            let word = word?;
            let predicted = self.filter.check(&word);
            let actual = self.truth.contains(&word);
            matrix.record(predicted, actual);
            verdict(&word, predicted);
        }
        Ok(matrix)
    }

    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    pub fn ground_truth(&self) -> &HashSet<String> {
        &self.truth
    }
}
