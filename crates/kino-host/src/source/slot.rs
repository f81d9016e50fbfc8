use std::sync::{Arc, Mutex};

/// Creates a connected sender/receiver pair over a single shared slot.
pub fn slot() -> (SourceSender, SourceReceiver) {
    let cell = Arc::new(Mutex::new(None));
    (
        SourceSender { cell: cell.clone() },
        SourceReceiver { cell },
    )
}

/// Publishing half. Cloneable; any thread may send.
#[derive(Clone)]
pub struct SourceSender {
    cell: Arc<Mutex<Option<String>>>,
}

impl SourceSender {
    /// Overwrites the slot with `path`. Last write wins.
    ///
    /// The lock is held only for the swap, never across an engine call.
    pub fn send(&self, path: impl Into<String>) {
        let path = path.into();
        *self.cell.lock().unwrap() = Some(path);
    }
}

/// Reading half, held by the render-loop driver.
#[derive(Clone)]
pub struct SourceReceiver {
    cell: Arc<Mutex<Option<String>>>,
}

impl SourceReceiver {
    /// Returns the most recently sent path, if any.
    ///
    /// Non-consuming: surface recreation re-reads the same value so the
    /// newest source survives a context loss.
    pub fn latest(&self) -> Option<String> {
        self.cell.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_yields_none() {
        let (_tx, rx) = slot();
        assert_eq!(rx.latest(), None);
    }

    #[test]
    fn last_write_wins() {
        let (tx, rx) = slot();
        tx.send("/media/first.mkv");
        tx.send("/media/second.mkv");
        tx.send("/media/third.mkv");
        assert_eq!(rx.latest(), Some("/media/third.mkv".to_string()));
    }

    #[test]
    fn latest_does_not_consume() {
        let (tx, rx) = slot();
        tx.send("/media/a.webm");
        assert_eq!(rx.latest(), Some("/media/a.webm".to_string()));
        assert_eq!(rx.latest(), Some("/media/a.webm".to_string()));
    }

    #[test]
    fn concurrent_senders_never_tear_the_value() {
        let (tx, rx) = slot();

        let written: Vec<String> = (0..8).map(|i| format!("/media/file-{i}.mkv")).collect();
        let handles: Vec<_> = written
            .iter()
            .cloned()
            .map(|path| {
                let tx = tx.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        tx.send(path.clone());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // The slot must hold exactly one of the written strings, intact.
        let out = rx.latest().expect("slot written");
        assert!(written.contains(&out), "torn or foreign value: {out}");
    }
}
