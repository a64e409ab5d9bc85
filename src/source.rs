use {crossbeam_channel::Receiver, std::thread};

/// Turns a finite sequence into a channel.
///
/// A dedicated thread sends each value in order, blocking until the
/// receiving side is ready, then closes the channel by dropping the
/// sender. An empty sequence yields a channel that is closed from
/// the start.
pub fn send_iter<I>(values: I) -> Receiver<I::Item>
where
    I: IntoIterator + Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(0);
    thread::spawn(move || {
        for v in values {
            tx.send(v).unwrap();
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::sink::{collect, count, drain},
    };

    #[test]
    fn yields_values_in_order() {
        assert_eq!(collect(send_iter([1, 2, 3])), vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_closes_immediately() {
        assert_eq!(count(send_iter(Vec::<i32>::new())), 0);
    }

    #[test]
    fn producer_runs_to_completion_when_drained() {
        drain(send_iter(0..1000));
    }
}
