use std::cell::RefCell;

use fmxml_core::{CommandSet, FileMaker, RawResult, Record, Transport, TransportError};

/// Database name used by every test connection
#[allow(dead_code)]
pub const DATABASE: &str = "contacts";

/// Transport that answers with a canned outcome and remembers what it was sent
#[allow(dead_code)]
#[derive(Debug)]
pub struct StubTransport {
    outcome: Result<RawResult, TransportError>,
    sent: RefCell<Vec<CommandSet>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn returning(result: RawResult) -> Self {
        Self {
            outcome: Ok(result),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            outcome: Err(err),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Every command set received, oldest first
    pub fn sent(&self) -> Vec<CommandSet> {
        self.sent.borrow().clone()
    }

    pub fn last_sent(&self) -> Option<CommandSet> {
        self.sent.borrow().last().cloned()
    }

    pub fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for StubTransport {
    fn execute(&self, commands: &CommandSet) -> Result<RawResult, TransportError> {
        self.sent.borrow_mut().push(commands.clone());
        self.outcome.clone()
    }
}

/// Three records with a LastName of Smith
#[allow(dead_code)]
pub fn three_smiths() -> RawResult {
    RawResult::success(vec![
        Record::new(1)
            .with_field("FirstName", "Ann")
            .with_field("LastName", "Smith"),
        Record::new(2)
            .with_field("FirstName", "Bob")
            .with_field("LastName", "Smith"),
        Record::new(3)
            .with_field("FirstName", "Cy")
            .with_field("LastName", "Smith"),
    ])
}

/// A connection over `transport` with the `people` layout already set
#[allow(dead_code)]
pub fn people_connection<T: Transport>(transport: T) -> FileMaker<T> {
    use fmxml_core::FileMakerInterface;

    let mut fm = FileMaker::new(transport, DATABASE);
    fm.set_layout("people").unwrap();
    fm
}
