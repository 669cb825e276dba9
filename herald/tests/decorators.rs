//! Standard decorator handlers.

mod common;

#[cfg(feature = "tracing")]
mod logging {
    use super::common::{TestNote, note};
    use herald::{Dispatcher, RegistryBuilder, handlers::LoggingHandler, testing::CountingHandler};

    #[tokio::test]
    async fn logging_decorator_delegates_to_inner_handler() {
        let counter = CountingHandler::new();
        let registry = RegistryBuilder::new()
            .register::<TestNote, _>(LoggingHandler::new(counter.clone()))
            .build();
        let dispatcher = Dispatcher::new(registry);

        dispatcher.raise_async(note("observed")).await.unwrap();
        assert_eq!(counter.calls(), 1);
    }
}

#[cfg(feature = "timeout")]
mod timeout {
    use super::common::{TestNote, note};
    use herald::{
        BoxError, CancellationToken, Dispatcher, RaiseError, RegistryBuilder, SignalHandler,
        handlers::TimeoutHandler,
    };
    use std::time::Duration;

    struct SlowHandler;

    impl SignalHandler<TestNote> for SlowHandler {
        async fn handle(
            &self,
            _signal: &TestNote,
            _cancel: &CancellationToken,
        ) -> Result<(), BoxError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn slow_handler_becomes_a_captured_failure() {
        let registry = RegistryBuilder::new()
            .register::<TestNote, _>(TimeoutHandler::new(
                SlowHandler,
                Duration::from_millis(10),
            ))
            .build();
        let dispatcher = Dispatcher::new(registry);

        let err = dispatcher.raise_async(note("slow")).await.unwrap_err();
        match err {
            RaiseError::Aggregate(agg) => {
                assert_eq!(agg.len(), 1);
                assert!(agg.failures()[0].to_string().contains("timed out"));
            }
            other => panic!("expected aggregate error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fast_handler_passes_through() {
        let counter = herald::testing::CountingHandler::new();
        let registry = RegistryBuilder::new()
            .register::<TestNote, _>(TimeoutHandler::new(
                counter.clone(),
                Duration::from_secs(1),
            ))
            .build();
        let dispatcher = Dispatcher::new(registry);

        dispatcher.raise_async(note("fast")).await.unwrap();
        assert_eq!(counter.calls(), 1);
    }
}
