use {
    crossbeam_channel::{Receiver, Select, Sender},
    std::thread,
};

/// Broadcasts one channel to n output channels.
///
/// Every input value is delivered to every output, in input order on
/// each of them, before the next value is taken from the input. The
/// outputs all close once the input closes. An output whose receiver
/// has been dropped stops participating; the rest keep receiving.
pub fn fan_out<T>(n: usize, input: Receiver<T>) -> Vec<Receiver<T>>
where
    T: Clone + Send + 'static,
{
    let (senders, receivers): (Vec<_>, Vec<_>) =
        (0..n).map(|_| crossbeam_channel::bounded(0)).unzip();
    thread::spawn(move || broadcast(input, senders));
    receivers
}

/// Send-side select loop shared by fan_out and scoped_fan_out. Each
/// input value is offered to all live outputs at once; an output
/// leaves the round as soon as it has been sent to, so every round
/// delivers to each output exactly once. Outputs found disconnected
/// are excluded from all later rounds.
pub(crate) fn broadcast<T: Clone>(input: Receiver<T>, senders: Vec<Sender<T>>) {
    let mut open = vec![true; senders.len()];
    for value in input {
        let live: Vec<usize> = (0..senders.len()).filter(|&i| open[i]).collect();
        let mut sel = Select::new();
        for &i in &live {
            sel.send(&senders[i]);
        }
        let mut pending = live.len();
        while pending > 0 {
            let oper = sel.select();
            let index = oper.index();
            if oper.send(&senders[live[index]], value.clone()).is_err() {
                open[live[index]] = false;
            }
            sel.remove(index);
            pending -= 1;
        }
    }
}
