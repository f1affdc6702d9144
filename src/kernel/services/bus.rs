//! 内核消息总线：编辑器追踪等后台组件通过它把 `Action` 投递给 `Store`。

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender};
use std::time::Duration;

use crate::kernel::Action;

#[derive(Debug)]
pub enum KernelMessage {
    Action(Action),
}

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
    /// Fails once the receiving side is gone.
    pub fn send_action(&self, action: Action) -> Result<(), SendError<KernelMessage>> {
        self.tx.send(KernelMessage::Action(action))
    }
}

impl KernelBusReceiver {
    /// Everything queued right now, in send order. Never blocks.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        self.rx
            .try_iter()
            .map(|msg| match msg {
                KernelMessage::Action(action) => action,
            })
            .collect()
    }

    pub fn recv_action_timeout(&mut self, timeout: Duration) -> Option<Action> {
        match self.rx.recv_timeout(timeout) {
            Ok(KernelMessage::Action(action)) => Some(action),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
