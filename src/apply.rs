use {
    super::{
        mapper::Mapper,
        pool::default_parallelism,
        scoped::{scoped_send_iter, scoped_worker_pool},
    },
    std::thread,
};

/// Applies f to every element of a collection concurrently and
/// returns the results in input order.
///
/// Elements are tagged with their position, processed by a worker
/// pool, and written into the matching slot of the result, so the
/// output order does not depend on completion order. A concurrency
/// level of 0 uses the number of available CPUs; levels beyond the
/// input length are clamped, as the extra workers would have nothing
/// to do.
///
/// The pool runs on an internal thread scope, so neither the
/// elements nor f need to be 'static.
pub fn apply<In, M>(n_workers: usize, input: Vec<In>, mapper: M) -> Vec<M::Out>
where
    In: Send,
    M: Mapper<In> + Clone + Send,
    M::Out: Send,
{
    if input.is_empty() {
        return Vec::new();
    }
    let n_workers = match n_workers {
        0 => default_parallelism(),
        n => n,
    }
    .min(input.len());

    let mut slots: Vec<Option<M::Out>> = Vec::new();
    slots.resize_with(input.len(), || None);

    thread::scope(|s| {
        let mut mapper = mapper;
        let indexed = scoped_send_iter(s, input.into_iter().enumerate());
        let results = scoped_worker_pool(s, n_workers, indexed, move |(index, v): (usize, In)| {
            Some((index, mapper.apply(v)))
        });
        // Each index arrives exactly once, so the disjoint slot
        // writes below need no further synchronization.
        for (index, v) in results {
            slots[index] = Some(v);
        }
    });

    slots.into_iter().map(|slot| slot.unwrap()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_text(code: u16) -> &'static str {
        match code {
            200 => "OK",
            303 => "See Other",
            404 => "Not Found",
            418 => "I'm a teapot",
            500 => "Internal Server Error",
            _ => "",
        }
    }

    #[test]
    fn results_come_back_in_input_order() {
        let out = apply(2, vec![200, 404, 418, 303, 500], status_text);
        assert_eq!(
            out,
            vec!["OK", "Not Found", "I'm a teapot", "See Other", "Internal Server Error"]
        );
    }

    #[test]
    fn zero_workers_picks_a_default() {
        assert_eq!(apply(0, vec![25.0f64], |x: f64| x.sqrt()), vec![5.0]);
    }

    #[test]
    fn workers_clamped_to_input_length() {
        assert_eq!(apply(10_000, vec![25.0f64], |x: f64| x.sqrt()), vec![5.0]);
    }

    #[test]
    fn order_holds_under_concurrency() {
        for w in 1..5 {
            let out = apply(w, (0..100).collect(), |x: i32| x * 2);
            assert_eq!(out, (0..100).map(|x| x * 2).collect::<Vec<_>>());
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(apply(3, Vec::<i32>::new(), |x: i32| x), Vec::<i32>::new());
    }

    #[test]
    fn input_may_borrow() {
        let words = vec![String::from("one"), String::from("three")];
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(apply(2, refs, |w: &str| w.len()), vec![3, 5]);
    }
}
