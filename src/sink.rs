use crossbeam_channel::Receiver;

/// Receives and discards every value until the channel closes.
/// Useful to let the threads feeding a channel run to completion
/// when the results are not needed.
pub fn drain<T>(input: Receiver<T>) {
    for _ in input {}
}

/// Receives until the channel closes and returns how many values
/// were seen. An already closed channel counts 0.
pub fn count<T>(input: Receiver<T>) -> usize {
    input.into_iter().count()
}

/// Receives until the channel closes, accumulating the values in
/// arrival order. For a channel fed by [`fan_in`](crate::fan_in())
/// that is the merge order, not any single producer's order.
pub fn collect<T>(input: Receiver<T>) -> Vec<T> {
    input.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use {super::*, crate::source::send_iter};

    #[test]
    fn drain_returns_on_a_closed_channel() {
        let (tx, rx) = crossbeam_channel::bounded::<i32>(0);
        drop(tx);
        drain(rx);
    }

    #[test]
    fn drain_consumes_buffered_values() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        tx.send(1).unwrap();
        drop(tx);
        drain(rx);
    }

    #[test]
    fn count_matches_input_length() {
        for n in 0..3 {
            assert_eq!(count(send_iter(vec![0; n])), n);
        }
    }

    #[test]
    fn count_of_a_closed_channel_is_zero() {
        let (tx, rx) = crossbeam_channel::bounded::<i32>(0);
        drop(tx);
        assert_eq!(count(rx), 0);
    }

    #[test]
    fn collect_preserves_send_order() {
        assert_eq!(collect(send_iter(0..5)), vec![0, 1, 2, 3, 4]);
    }
}
