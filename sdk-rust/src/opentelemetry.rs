use crate::ClientResult;
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Component of the client an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Auth,
    Store,
    Storage,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Store => "store",
            Self::Storage => "storage",
        }
    }
}

pub struct OperationSpan {
    span: Span,
    start_time: Instant,
    ended: bool,
}

impl OperationSpan {
    pub fn new(component: Component, operation: &'static str) -> Self {
        let span = match component {
            Component::Auth => info_span!("picture_link.auth"),
            Component::Store => info_span!("picture_link.store"),
            Component::Storage => info_span!("picture_link.storage"),
        };
        span.set_attribute("picture_link.component", component.as_str());
        span.set_attribute("picture_link.operation", operation);

        Self {
            span,
            start_time: Instant::now(),
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.span.set_attribute(
            "picture_link.duration",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

/// Run one client operation inside its span, recording failures on it.
pub async fn trace_operation<T, F, Fut>(
    component: Component,
    operation: &'static str,
    f: F,
) -> ClientResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = ClientResult<T>>,
{
    let mut span = OperationSpan::new(component, operation);
    let result = span.instrument_future(f()).await;

    if let Err(error) = &result {
        span.on_error(error);
    }

    span.on_end();
    result
}
