//! Repeated timing of one algorithm against one fixed dataset.

use crate::algorithm::Algorithm;
use crate::error::BenchError;
use crate::timer::measure;
use log::debug;

/// Times `thunk` `repetitions` times, one duration (ns) per call, in call order.
///
/// The thunk is prepared by the caller and closes over everything the
/// algorithm needs, so this never has to know what it is timing.
pub fn collect_sample<R, F>(repetitions: usize, mut thunk: F) -> Result<Vec<u64>, BenchError>
where
    F: FnMut() -> R,
{
    if repetitions < 1 {
        return Err(BenchError::InvalidRepetitions(repetitions));
    }

    let mut sample = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        sample.push(measure(&mut thunk));
    }
    Ok(sample)
}

/// Runs `algorithm` against the same `dataset` `repetitions` times.
///
/// The dataset is never regenerated between runs; every run sorts its own
/// copy of it.
pub fn run_trials<T>(
    algorithm: Algorithm,
    dataset: &[T],
    repetitions: usize,
) -> Result<Vec<u64>, BenchError>
where
    T: Clone + Ord,
{
    debug!(
        "timing {} on {} elements x{}",
        algorithm,
        dataset.len(),
        repetitions
    );
    collect_sample(repetitions, || algorithm.sort(dataset))
}
