use crossbeam_channel::{Receiver, Sender};

use crate::{Error, Result};

pub fn unbounded<T>() -> (Tx<T>, Rx<T>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (Tx { tx }, Rx { rx })
}

pub struct Tx<T> {
    tx: Sender<T>,
}

impl<T> Tx<T> {
    pub fn send(&self, ele: T) -> Result<()> {
        self.tx
            .send(ele)
            .map_err(|_e| Error::Other("chan broken".into()))
    }
}

pub struct Rx<T> {
    rx: Receiver<T>,
}

impl<T> Rx<T> {
    pub fn recv(&self) -> Option<T> {
        self.rx.recv().ok()
    }
}
