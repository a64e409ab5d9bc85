use {
    super::{fan_in::merge, fan_out::broadcast, mapper::FilterMapper, pool::default_parallelism},
    crossbeam_channel::Receiver,
    std::thread,
};

/// scoped_send_iter is [`send_iter`](crate::send_iter) for scoped
/// threads: the sending thread is spawned on the given scope, so the
/// values may borrow from the enclosing environment.
pub fn scoped_send_iter<'scope, 'env, I>(
    scope: &'scope thread::Scope<'scope, 'env>,
    values: I,
) -> Receiver<I::Item>
where
    I: IntoIterator + Send + 'env,
    I::Item: Send + 'env,
{
    let (tx, rx) = crossbeam_channel::bounded(0);
    scope.spawn(move || {
        for v in values {
            tx.send(v).unwrap();
        }
    });
    rx
}

/// scoped_fan_in is [`fan_in`](crate::fan_in()) for scoped threads.
pub fn scoped_fan_in<'scope, 'env, T, I>(
    scope: &'scope thread::Scope<'scope, 'env>,
    inputs: I,
) -> Receiver<T>
where
    T: Send + 'env,
    I: IntoIterator<Item = Receiver<T>>,
{
    let inputs: Vec<Receiver<T>> = inputs.into_iter().collect();
    let (tx, rx) = crossbeam_channel::bounded(0);
    scope.spawn(move || merge(inputs, tx));
    rx
}

/// scoped_fan_out is [`fan_out`](crate::fan_out()) for scoped threads.
pub fn scoped_fan_out<'scope, 'env, T>(
    scope: &'scope thread::Scope<'scope, 'env>,
    n: usize,
    input: Receiver<T>,
) -> Vec<Receiver<T>>
where
    T: Clone + Send + 'env,
{
    let (senders, receivers): (Vec<_>, Vec<_>) =
        (0..n).map(|_| crossbeam_channel::bounded(0)).unzip();
    scope.spawn(move || broadcast(input, senders));
    receivers
}

/// scoped_worker_pool is [`worker_pool`](crate::worker_pool) for
/// scoped threads: the workers run on the given scope and the filter
/// mapper may borrow from the enclosing environment.
pub fn scoped_worker_pool<'scope, 'env, In, F>(
    scope: &'scope thread::Scope<'scope, 'env>,
    n_workers: usize,
    input: Receiver<In>,
    f: F,
) -> Receiver<F::Out>
where
    In: Send + 'env,
    F: FilterMapper<In> + Clone + Send + 'env,
    F::Out: Send + 'env,
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
        scope.spawn(move || {
            while let Ok(v) = input.recv() {
                if let Some(out) = f.apply(v) {
                    tx.send(out).unwrap();
                }
            }
        });
        outputs.push(rx);
    }
    scoped_fan_in(scope, outputs)
}
