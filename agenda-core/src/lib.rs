//! Core of the agenda event manager.
//!
//! This crate owns the event lifecycle: validating user input, coordinating
//! writes to an [`EventStore`](storage::EventStore), and keeping one reminder
//! per event scheduled through an [`AlarmPort`](alarm::AlarmPort).
//!
//! - `lifecycle` is the orchestrator (create, update, delete, query)
//! - `validator` holds the pure field and ordering checks
//! - `storage` and `alarm` define the collaborator contracts and adapters
//! - `clock` supplies "now" and wall-clock to instant conversion

pub mod alarm;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod lifecycle;
pub mod outcome;
pub mod storage;
pub mod validator;

pub use clock::{Clock, ClockTime, ManualClock, SystemClock};
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventChanges, EventId, NewEvent, ReminderRequest};
pub use lifecycle::EventLifecycle;
pub use outcome::OperationResult;
