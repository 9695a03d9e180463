//! Strategies invoked when a [`RingBuffer`](crate::RingBuffer) rejects a write or a read.
//!
//! The hooks take no arguments and run synchronously in place of the rejected
//! operation. Whatever a hook does, the buffer it belongs to is left untouched,
//! so execution may continue once it returns.

use tracing::warn;

pub trait OverrunHandler {
    /// Called when a write finds no free slot.
    fn overrun(&mut self);

    /// Called when a read finds nothing unread. Shares the overrun hook unless overridden.
    fn underrun(&mut self) {
        self.overrun()
    }
}

impl<F: FnMut()> OverrunHandler for F {
    #[inline]
    fn overrun(&mut self) {
        self()
    }
}

/// Ignores both conditions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoNothing;

impl OverrunHandler for DoNothing {
    #[inline]
    fn overrun(&mut self) {}
}

/// Panics, for callers that treat either condition as a bug.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Panic;

impl OverrunHandler for Panic {
    fn overrun(&mut self) {
        panic!("ring buffer overrun");
    }

    fn underrun(&mut self) {
        panic!("ring buffer underrun");
    }
}

/// Emits a warning event tagged with the buffer's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    name: &'static str,
}

impl Trace {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new("ring")
    }
}

impl OverrunHandler for Trace {
    fn overrun(&mut self) {
        warn!(buffer = self.name, "overrun, write dropped");
    }

    fn underrun(&mut self) {
        warn!(buffer = self.name, "underrun, nothing to read");
    }
}

/// Tallies rejections so the caller can poll them after the fact.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    overruns: usize,
    underruns: usize,
}

impl Count {
    pub fn overruns(&self) -> usize {
        self.overruns
    }

    pub fn underruns(&self) -> usize {
        self.underruns
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl OverrunHandler for Count {
    #[inline]
    fn overrun(&mut self) {
        self.overruns += 1;
    }

    #[inline]
    fn underrun(&mut self) {
        self.underruns += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        io,
        rc::Rc,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[test]
    fn closure_serves_both_hooks() {
        let calls = Rc::new(Cell::new(0));
        let mut handler = {
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        };

        handler.overrun();
        handler.underrun();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn fn_pointer_is_a_handler() {
        fn noop() {}

        let mut handler: fn() = noop;
        handler.overrun();
        handler.underrun();
    }

    #[test]
    fn count_separates_conditions() {
        let mut count = Count::default();
        count.overrun();
        count.overrun();
        count.underrun();

        assert_eq!(count.overruns(), 2);
        assert_eq!(count.underruns(), 1);

        count.reset();
        assert_eq!(count, Count::default());
    }

    #[test]
    #[should_panic(expected = "ring buffer overrun")]
    fn panic_on_overrun() {
        Panic.overrun();
    }

    #[test]
    #[should_panic(expected = "ring buffer underrun")]
    fn panic_on_underrun() {
        Panic.underrun();
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn trace_warns_with_buffer_name() {
        let captured = Captured::default();
        let subscriber = {
            let captured = captured.clone();
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(move || captured.clone())
                .finish()
        };

        let mut trace = Trace::new("uart-rx");
        tracing::subscriber::with_default(subscriber, || {
            trace.overrun();
            trace.underrun();
        });

        let out = captured.contents();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.contains("WARN") && l.contains(r#"buffer="uart-rx""#)));
        assert!(lines[0].contains("overrun, write dropped"));
        assert!(lines[1].contains("underrun, nothing to read"));

        assert_eq!(trace.name(), "uart-rx");
        assert_eq!(Trace::default().name(), "ring");
    }
}
