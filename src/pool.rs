use {
    super::{fan_in::fan_in, mapper::FilterMapper},
    crossbeam_channel::Receiver,
    std::thread,
};

/// Runs n_workers concurrent workers over one shared input channel.
///
/// Each worker receives values from the input (every value goes to
/// exactly one worker), applies f, and forwards the results f kept.
/// The per-worker results are fanned back into the returned channel,
/// so output order follows completion order, not input order. The
/// output closes once the input is exhausted and every worker has
/// finished; workers beyond the available input simply observe the
/// closed channel and exit.
///
/// A concurrency level of 0 uses the number of available CPUs.
pub fn worker_pool<In, F>(n_workers: usize, input: Receiver<In>, f: F) -> Receiver<F::Out>
where
    In: Send + 'static,
    F: FilterMapper<In> + Clone + Send + 'static,
    F::Out: Send + 'static,
{
    let n_workers = match n_workers {
        0 => default_parallelism(),
        n => n,
    };
    let mut outputs = Vec::with_capacity(n_workers);
    for _ in 0..n_workers {
        let (tx, rx) = crossbeam_channel::bounded(0);
        let input = input.clone();
        let mut f = f.clone();
        thread::spawn(move || {
            while let Ok(v) = input.recv() {
                if let Some(out) = f.apply(v) {
                    tx.send(out).unwrap();
                }
            }
        });
        outputs.push(rx);
    }
    fan_in(outputs)
}

pub(crate) fn default_parallelism() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
