use std::collections::BTreeMap;
use std::time::Duration;

use pixquant_imgproc::reduce::ReduceStrategy;

/// Elapsed time accumulated per strategy over all the iterations.
#[derive(Clone, Debug, Default)]
pub struct StrategyTimings {
    totals: BTreeMap<ReduceStrategy, Duration>,
}

impl StrategyTimings {
    /// Add the duration of one run of `strategy`.
    pub fn add(&mut self, strategy: ReduceStrategy, elapsed: Duration) {
        *self.totals.entry(strategy).or_default() += elapsed;
    }

    /// Total time spent in `strategy`, zero if it never ran.
    pub fn total(&self, strategy: ReduceStrategy) -> Duration {
        self.totals.get(&strategy).copied().unwrap_or_default()
    }

    /// Mean time per run of `strategy` in milliseconds.
    pub fn mean_ms(&self, strategy: ReduceStrategy, iterations: usize) -> f64 {
        if iterations == 0 {
            return 0.0;
        }
        self.total(strategy).as_secs_f64() * 1000.0 / iterations as f64
    }

    /// Iterate over the strategies that ran and their total time.
    pub fn iter(&self) -> impl Iterator<Item = (ReduceStrategy, Duration)> + '_ {
        self.totals.iter().map(|(s, d)| (*s, *d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut timings = StrategyTimings::default();
        timings.add(ReduceStrategy::RowIndex, Duration::from_millis(2));
        timings.add(ReduceStrategy::RowIndex, Duration::from_millis(4));
        timings.add(ReduceStrategy::LookupTable, Duration::from_millis(1));

        assert_eq!(timings.total(ReduceStrategy::RowIndex), Duration::from_millis(6));
        assert_eq!(timings.total(ReduceStrategy::Indexed), Duration::ZERO);
        assert!((timings.mean_ms(ReduceStrategy::RowIndex, 2) - 3.0).abs() < 1e-9);
        assert_eq!(timings.mean_ms(ReduceStrategy::RowIndex, 0), 0.0);
        assert_eq!(timings.iter().count(), 2);
    }
}
