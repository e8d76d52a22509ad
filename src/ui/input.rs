use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Forward stdin lines to the async side from a dedicated thread.
///
/// The thread is detached; it ends on EOF, on a read error, or when the
/// receiver is dropped and the next line cannot be delivered.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx
}
