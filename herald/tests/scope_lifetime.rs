//! Scope acquisition and release across every exit path.

use herald::{
    CancellationToken, Dispatcher, RegistryBuilder,
    testing::{CancellingHandler, CountingScopeProvider, FailingHandler},
};

mod common;
use common::{TestNote, note};

#[tokio::test]
async fn scope_released_once_on_success() {
    let provider = CountingScopeProvider::new(RegistryBuilder::new().build());
    let spy = provider.clone();
    let dispatcher = Dispatcher::with_provider(provider);

    dispatcher.raise_async(note("fine")).await.unwrap();

    assert_eq!(spy.created(), 1);
    assert_eq!(spy.dropped(), 1);
}

#[tokio::test]
async fn scope_released_once_when_all_handlers_fail() {
    let registry = RegistryBuilder::new()
        .register::<TestNote, _>(FailingHandler::new("boom"))
        .build();
    let provider = CountingScopeProvider::new(registry);
    let spy = provider.clone();
    let dispatcher = Dispatcher::with_provider(provider);

    dispatcher.raise_async(note("boom")).await.unwrap_err();

    assert_eq!(spy.created(), 1);
    assert_eq!(spy.dropped(), 1);
}

#[tokio::test]
async fn scope_released_once_under_cancellation() {
    let registry = RegistryBuilder::new()
        .register::<TestNote, _>(CancellingHandler)
        .register::<TestNote, _>(FailingHandler::new("never reached"))
        .build();
    let provider = CountingScopeProvider::new(registry);
    let spy = provider.clone();
    let dispatcher = Dispatcher::with_provider(provider);

    dispatcher
        .raise_async_with(note("stop"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(spy.created(), 1);
    assert_eq!(spy.dropped(), 1);
}

#[test]
fn sync_raise_releases_its_scope() {
    let provider = CountingScopeProvider::new(RegistryBuilder::new().build());
    let spy = provider.clone();
    let dispatcher = Dispatcher::with_provider(provider);

    dispatcher.raise(note("sync")).unwrap();

    assert_eq!(spy.created(), 1);
    assert_eq!(spy.dropped(), 1);
}

#[tokio::test]
async fn each_raise_gets_its_own_scope() {
    let provider = CountingScopeProvider::new(RegistryBuilder::new().build());
    let spy = provider.clone();
    let dispatcher = Dispatcher::with_provider(provider);

    dispatcher.raise_async(note("one")).await.unwrap();
    dispatcher.raise_async(note("two")).await.unwrap();
    dispatcher.raise_async(note("three")).await.unwrap();

    assert_eq!(spy.created(), 3);
    assert_eq!(spy.dropped(), 3);
}
