//! Handler trait for the record pipeline

use super::{error::Result, record::Record};

/// One node of a logger's handler tree.
///
/// Terminals own a destination and decide whether a record is written;
/// decorators own exactly one inner handler and forward to it.
///
/// `handle` never reports failure: a handler that cannot write absorbs the
/// error and reports it on stderr. `reload` is the only fallible lifecycle
/// call. `close` is best-effort and must tolerate being called twice.
pub trait Handler: Send + Sync {
    fn handle(&self, record: &Record);
    fn reload(&self) -> Result<()>;
    fn close(&self);
    fn name(&self) -> &str;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, record: &Record) {
        (**self).handle(record)
    }

    fn reload(&self) -> Result<()> {
        (**self).reload()
    }

    fn close(&self) {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
