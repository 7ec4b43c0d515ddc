use crate::descriptor::{ClassDescriptor, WindowDescriptor};
use crate::dispatch::Reply;
use crate::enums::ShowCommand;
use crate::error::{Error, Result};
use crate::message::{RawMessage, WindowId};

/// Callback the platform routes dispatched messages through.
pub type MessageSink<'a> = dyn FnMut(&RawMessage) -> Reply + 'a;

/// The windowing subsystem of the host.
///
/// Everything the event loop needs from the operating system goes through this trait.
pub trait Platform {
    /// Registers `class` together with the platform's window procedure.
    fn register_class(&mut self, class: &ClassDescriptor) -> Result<()>;

    /// Creates a top-level window of an already registered class.
    fn create_window(&mut self, class: &ClassDescriptor, window: &WindowDescriptor) -> Result<WindowId>;

    fn show_window(&mut self, window: WindowId, show: ShowCommand);

    /// Removes the next pending message for `window` from the queue without blocking.
    ///
    /// Messages other threads send to the window are delivered while polling; they reach `sink`
    /// exactly like dispatched ones.
    fn poll_message(&mut self, window: WindowId, sink: &mut MessageSink<'_>) -> Option<RawMessage>;

    /// Turns key input into additional character messages.
    fn translate_message(&mut self, message: &RawMessage);

    /// Sends `message` to the window procedure, which forwards it to `sink`.
    ///
    /// Returns the result the window procedure handed back to the subsystem.
    fn dispatch_message(&mut self, message: &RawMessage, sink: &mut MessageSink<'_>) -> isize;

    /// Human readable text for `error`. Empty for `Error::SUCCESS`.
    fn error_message(&self, error: Error) -> String;
}
