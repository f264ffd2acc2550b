//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! dispatched from `App::update()`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Report(msg) => ReportHandler.handle(&mut self.state, msg),
//!         Message::Subjects(msg) => SubjectsHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod metrics;
mod report;
mod subjects;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use metrics::MetricsHandler;
pub use report::{ReportHandler, mount_tab, reload};
pub use subjects::SubjectsHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// Returns `Task::none()` when there is no follow-up work.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
