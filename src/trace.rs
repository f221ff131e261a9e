//! Feature-gated tracing macros.
//!
//! With the `tracing` feature on, `trace_span!` and `trace_event!` forward to
//! `tracing::info_span!` and `tracing::info!`. With it off, spans become a
//! `NoopSpan` and events compile away, so call sites need no `cfg` of their own.

/// Opens an info-level span around a padding or correlation pass.
///
/// With `tracing` enabled this is `tracing::info_span!`; otherwise it yields a
/// `NoopSpan` whose `entered()` returns itself.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event carrying grid sizes or pad extents.
///
/// With `tracing` enabled this is `tracing::info!`; otherwise the field values
/// are still evaluated and then dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Keeps the fields used so disabled builds stay warning-free.
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard used when tracing is disabled.
///
/// Lets `let _span = trace_span!(..).entered();` compile the same way in both
/// configurations.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns the guard unchanged, standing in for `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
