//! Bulk handler collection via `inventory` submissions.
#![cfg(feature = "inventory")]

use herald::{
    BoxError, CancellationToken, Dispatcher, HandlerSubmission, RegistryBuilder, Signal,
    SignalHandler, SignalKind,
};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug)]
struct CollectedNote;

impl Signal for CollectedNote {}

static CALLS: AtomicUsize = AtomicUsize::new(0);

struct SubmittedHandler;

impl SignalHandler<CollectedNote> for SubmittedHandler {
    async fn handle(
        &self,
        _signal: &CollectedNote,
        _cancel: &CancellationToken,
    ) -> Result<(), BoxError> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

herald::inventory::submit! {
    HandlerSubmission::new(|builder| builder.register_mut::<CollectedNote, _>(SubmittedHandler))
}

#[tokio::test]
async fn submitted_handlers_are_collected_and_dispatched() {
    let registry = RegistryBuilder::new().register_collected().build();
    assert_eq!(registry.handler_count(SignalKind::of::<CollectedNote>()), 1);

    let dispatcher = Dispatcher::new(registry);
    dispatcher.raise_async(CollectedNote).await.unwrap();
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}
