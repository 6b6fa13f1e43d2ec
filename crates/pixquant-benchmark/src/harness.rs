use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use pixquant_image::{Image, ImageError};
use pixquant_imgproc::reduce::{ColorReducer, ReduceStrategy};

use crate::error::BenchmarkError;
use crate::source::ImageSource;
use crate::timings::StrategyTimings;

/// Benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Quantization step shared by every strategy
    pub div: u8,
    /// Number of times every strategy is run
    pub iterations: usize,
    /// Strategies to compare, in report order
    pub strategies: Vec<ReduceStrategy>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            div: 64,
            iterations: 10,
            strategies: ReduceStrategy::ALL.to_vec(),
        }
    }
}

/// Mean time of one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkEntry {
    /// The measured strategy
    pub strategy: ReduceStrategy,
    /// Mean time per run in milliseconds
    pub mean_ms: f64,
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkReport<const C: usize> {
    iterations: usize,
    strategies: Vec<ReduceStrategy>,
    timings: StrategyTimings,
    outputs: BTreeMap<ReduceStrategy, Image<u8, C>>,
}

impl<const C: usize> BenchmarkReport<C> {
    /// Number of runs per strategy.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The accumulated timings.
    pub fn timings(&self) -> &StrategyTimings {
        &self.timings
    }

    /// Mean time per strategy, in the configured order.
    pub fn entries(&self) -> Vec<BenchmarkEntry> {
        self.strategies
            .iter()
            .map(|&strategy| BenchmarkEntry {
                strategy,
                mean_ms: self.timings.mean_ms(strategy, self.iterations),
            })
            .collect()
    }

    /// One `"<index>. <description> = <mean> ms"` line per strategy.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{i}. {} = {:.4} ms",
                    entry.strategy.description(),
                    entry.mean_ms
                )
            })
            .collect()
    }

    /// The image produced by the last run of `strategy`.
    pub fn output(&self, strategy: ReduceStrategy) -> Option<&Image<u8, C>> {
        self.outputs.get(&strategy)
    }

    /// The images produced by the last run of every strategy.
    pub fn outputs(&self) -> impl Iterator<Item = (ReduceStrategy, &Image<u8, C>)> {
        self.outputs.iter().map(|(s, image)| (*s, image))
    }
}

/// Time a single application of the reducer.
///
/// Only the traversal is measured; the image must already be loaded.
pub fn time_once<const C: usize>(
    image: &mut Image<u8, C>,
    reducer: &ColorReducer,
) -> Result<Duration, ImageError> {
    let start = Instant::now();
    reducer.apply(image)?;
    Ok(start.elapsed())
}

/// Time a single reduction of `src` into `dst`.
///
/// `dst` is only allocated when its size differs from `src`, so a persistent
/// output image is reused across runs and only the traversal is measured.
pub fn time_into<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    reducer: &ColorReducer,
) -> Result<Duration, ImageError> {
    let start = Instant::now();
    reducer.apply_into(src, dst)?;
    Ok(start.elapsed())
}

/// Run every configured strategy `iterations` times and collect their timings.
///
/// All the strategies are prepared before anything is timed, so an invalid
/// divisor fails the run before the source is ever loaded. Each timed run gets
/// its own freshly loaded image, loading is not part of the measurement. The
/// input/output strategy writes into an output image kept across runs.
///
/// # Errors
///
/// Any failure to prepare a strategy or to load the source aborts the whole
/// run without a report.
pub fn run_benchmark<const C: usize, S>(
    source: &S,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport<C>, BenchmarkError>
where
    S: ImageSource<C>,
{
    if config.iterations == 0 {
        return Err(BenchmarkError::NoIterations);
    }

    let mut strategies: Vec<ReduceStrategy> = Vec::with_capacity(config.strategies.len());
    for strategy in &config.strategies {
        if !strategies.contains(strategy) {
            strategies.push(*strategy);
        }
    }

    if strategies.is_empty() {
        return Err(BenchmarkError::NoStrategies);
    }

    let reducers = strategies
        .iter()
        .map(|&strategy| ColorReducer::new(strategy, config.div))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Running {} strategies with div: {}, iterations: {}",
        reducers.len(),
        config.div,
        config.iterations
    );

    let mut timings = StrategyTimings::default();
    let mut outputs: BTreeMap<ReduceStrategy, Image<u8, C>> = BTreeMap::new();

    for k in 0..config.iterations {
        log::info!("{} of {}", k, config.iterations);

        for reducer in &reducers {
            let strategy = reducer.strategy();
            let mut image = source.load()?;

            let elapsed = if strategy == ReduceStrategy::InputOutput {
                let output = outputs.entry(strategy).or_default();
                time_into(&image, output, reducer)?
            } else {
                let elapsed = time_once(&mut image, reducer)?;
                outputs.insert(strategy, image);
                elapsed
            };
            log::debug!("{}: {:?}", strategy, elapsed);

            timings.add(strategy, elapsed);
        }
    }

    Ok(BenchmarkReport {
        iterations: config.iterations,
        strategies,
        timings,
        outputs,
    })
}
