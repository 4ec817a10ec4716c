//! Kernel bus: editor edits on their way to the playground, in the order they happened.

use std::sync::mpsc::{self, Receiver, SendError, Sender};

use crate::kernel::{Action, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelMessage {
    /// Full text of an editor after one content mutation.
    BufferEdited { lang: Language, text: String },
}

impl KernelMessage {
    pub fn into_action(self) -> Action {
        match self {
            KernelMessage::BufferEdited { lang, text } => Action::BufferChanged { lang, text },
        }
    }
}

/// One per editor; every clone feeds the same playground.
#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: Receiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    /// Fails only once the playground is gone.
    pub fn buffer_edited(
        &self,
        lang: Language,
        text: String,
    ) -> Result<(), SendError<KernelMessage>> {
        self.tx.send(KernelMessage::BufferEdited { lang, text })
    }
}

impl KernelBusReceiver {
    /// Oldest queued message, without blocking.
    pub fn try_next(&mut self) -> Option<KernelMessage> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
