//! Execution strategies: pipelined (one pass) or N-way chunked parallel.
//!
//! Purpose
//! - Wrap any `ops::Operation` with a concurrency policy picked by `ExecCfg::threads`
//!   and time the whole invocation (partition + dispatch + compute + merge).
//!
//! Model
//! - `threads == 0`: one chunk over the full input on the calling thread.
//! - `threads == n >= 1`: up to `n` contiguous, near-equal chunks (`partition`), each
//!   run on a per-invocation rayon pool with one thread per chunk. Partials are
//!   collected by chunk index and merged in that order, so output order never
//!   depends on scheduling.
//! - The first failing chunk (lowest index) decides the error. No retries, no
//!   cancellation, and no state outlives the call.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::Instant;

use rayon::prelude::*;

use crate::ops::Operation;
use crate::repr::Encoding;

mod error;

pub use error::EngineError;

/// Execution configuration.
///
/// `threads == 0` is the pipeline sentinel, not "auto".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecCfg {
    pub threads: usize,
}

impl ExecCfg {
    #[inline]
    pub fn pipelined() -> Self {
        Self { threads: 0 }
    }

    #[inline]
    pub fn parallel(threads: usize) -> Self {
        Self { threads }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        match NonZeroUsize::new(self.threads) {
            None => Strategy::Pipelined,
            Some(n) => Strategy::Parallel(n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Pipelined,
    Parallel(NonZeroUsize),
}

/// Result value plus wall-clock time of the invocation in fractional milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_ms: f64,
}

/// Split `0..len` into at most `n` contiguous ranges, in order.
///
/// Sizes differ by at most one; the first `len % k` ranges take the extra element,
/// where `k = min(n, len)`. Workers past `len` would only see empty chunks, whose
/// partials are the merge identity, so they are never created. Empty input gives a
/// single empty range.
pub fn partition(len: usize, n: NonZeroUsize) -> Vec<Range<usize>> {
    let n = n.get().min(len).max(1);
    let base = len / n;
    let extra = len % n;
    let mut out = Vec::with_capacity(n);
    let mut start = 0;
    for i in 0..n {
        let size = base + usize::from(i < extra);
        out.push(start..start + size);
        start += size;
    }
    debug_assert_eq!(start, len);
    out
}

/// Run `op` over `shapes` under the strategy selected by `cfg`.
pub fn execute<E, O>(op: &O, shapes: &[E], cfg: ExecCfg) -> Result<Timed<O::Output>, EngineError>
where
    E: Encoding,
    O: Operation<E>,
{
    let start = Instant::now();
    let strategy = cfg.strategy();
    let repr = E::REPR;
    let chunks = match strategy {
        Strategy::Pipelined => 1,
        Strategy::Parallel(n) => n.get().min(shapes.len()).max(1),
    };
    tracing::debug!(
        op = op.name(),
        %repr,
        ?strategy,
        shapes = shapes.len(),
        chunks,
        "execute"
    );
    let value = match strategy {
        Strategy::Pipelined => {
            let partial = op.run_chunk(shapes, 0)?;
            op.merge(vec![partial])
        }
        Strategy::Parallel(n) => run_parallel(op, shapes, n)?,
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::debug!(op = op.name(), elapsed_ms, "executed");
    Ok(Timed { value, elapsed_ms })
}

fn run_parallel<E, O>(op: &O, shapes: &[E], n: NonZeroUsize) -> Result<O::Output, EngineError>
where
    E: Encoding,
    O: Operation<E>,
{
    let chunks = partition(shapes.len(), n);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .thread_name(|i| format!("shapebench-{i}"))
        .build()
        .map_err(|err| EngineError::Pool(err.to_string()))?;

    // Indexed collect: results[i] belongs to chunks[i] whatever finishes first.
    let results: Vec<_> = pool.install(|| {
        chunks
            .par_iter()
            .map(|r| op.run_chunk(&shapes[r.clone()], r.start))
            .collect()
    });

    let mut partials = Vec::with_capacity(results.len());
    for (chunk, result) in results.into_iter().enumerate() {
        match result {
            Ok(p) => partials.push(p),
            Err(source) => {
                tracing::debug!(chunk, error = %source, "worker failed");
                return Err(EngineError::WorkerFailure { chunk, source });
            }
        }
    }
    Ok(op.merge(partials))
}
