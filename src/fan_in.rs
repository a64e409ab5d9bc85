use {
    crossbeam_channel::{Receiver, Select, Sender},
    std::thread,
};

/// Merges any number of input channels into one.
///
/// Values are forwarded in whatever order the inputs make them
/// available; nothing is guaranteed about fairness between inputs.
/// The returned channel closes once every input has closed. With no
/// inputs it is closed from the start.
pub fn fan_in<T, I>(inputs: I) -> Receiver<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Receiver<T>>,
{
    let inputs: Vec<Receiver<T>> = inputs.into_iter().collect();
    let (tx, rx) = crossbeam_channel::bounded(0);
    thread::spawn(move || merge(inputs, tx));
    rx
}

/// Receive-side select loop shared by fan_in and scoped_fan_in.
/// Waits across all still-open inputs at once; an input leaves the
/// select set only when it is observed closed.
pub(crate) fn merge<T>(inputs: Vec<Receiver<T>>, output: Sender<T>) {
    let mut sel = Select::new();
    for rx in &inputs {
        sel.recv(rx);
    }
    let mut open = inputs.len();
    while open > 0 {
        let oper = sel.select();
        let index = oper.index();
        match oper.recv(&inputs[index]) {
            Ok(v) => output.send(v).unwrap(),
            Err(_) => {
                sel.remove(index);
                open -= 1;
            }
        }
    }
}
