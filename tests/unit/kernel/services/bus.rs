use super::*;

#[test]
fn drain_keeps_send_order() {
    let (tx, mut rx) = kernel_bus();
    tx.send_action(Action::UserWantsToSeeScratchesList).unwrap();
    tx.send_action(Action::UserOpenedScratch {
        file_name: "scratch.txt".to_string(),
    })
    .unwrap();

    let actions = rx.drain_actions();
    assert_eq!(
        actions,
        vec![
            Action::UserWantsToSeeScratchesList,
            Action::UserOpenedScratch {
                file_name: "scratch.txt".to_string(),
            },
        ]
    );
    assert!(rx.drain_actions().is_empty());
}

#[test]
fn send_reports_closed_receiver() {
    let (tx, rx) = kernel_bus();
    drop(rx);
    let err = tx
        .send_action(Action::UserWantsToOpenDefaultScratch)
        .unwrap_err();
    assert!(matches!(
        err.0,
        KernelMessage::Action(Action::UserWantsToOpenDefaultScratch)
    ));
}

#[test]
fn recv_timeout_returns_none_when_idle() {
    let (_tx, mut rx) = kernel_bus();
    assert_eq!(rx.recv_action_timeout(Duration::from_millis(10)), None);
}
