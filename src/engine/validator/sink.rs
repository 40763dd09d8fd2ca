use std::cell::RefCell;
use std::rc::Rc;

use log::error;

/// Receives the rendered message of every failed validator check.
pub trait ReportSink {
    fn report_failure(&self, message: &str);
}

/// Writes failures to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report_failure(&self, message: &str) {
        error!("{message}");
    }
}

/// Panics with the failure message, the way test-framework assertions do.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicSink;

impl ReportSink for PanicSink {
    fn report_failure(&self, message: &str) {
        panic!("{message}");
    }
}

/// Records failure messages. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl CollectingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl ReportSink for CollectingSink {
    fn report_failure(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
