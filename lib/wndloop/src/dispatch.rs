use crate::message::{Event, RawMessage};

/// Application side of the window.
///
/// Each method covers one kind of work the event loop hands out. All of them have defaults,
/// so an implementation only overrides what it actually cares about.
pub trait Handler {
    /// Called when the window is destroyed. The returned value becomes the exit code of the loop.
    fn on_destroy(&mut self) -> i32 {
        0
    }

    /// Called for every event except `Event::Destroy`.
    ///
    /// Returning `None` hands the event to the default window procedure.
    fn on_event(&mut self, _event: &Event) -> Option<isize> {
        None
    }

    /// Called once per loop iteration in which no message was pending.
    fn on_frame(&mut self) {}
}

/// What the platform should answer the subsystem after a message was dispatched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Reply {
    /// Return this value from the window procedure
    Handled(isize),
    /// Post a quit request with this exit code and return 0
    Quit(i32),
    /// Return whatever the default window procedure computes
    Default
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped {
        exit_code: i32
    }
}

impl Default for LoopState {
    fn default() -> Self {
        LoopState::Running
    }
}

impl LoopState {
    pub fn is_running(self) -> bool {
        matches!(self, LoopState::Running)
    }
}

/// Routes a single message to `handler`.
///
/// A destroy notification is the only thing that moves `state` out of `Running`.
pub fn dispatch<H: Handler + ?Sized>(handler: &mut H, state: &mut LoopState, message: &RawMessage) -> Reply {
    match Event::decode(message) {
        Event::Destroy => {
            let exit_code = handler.on_destroy();
            tracing::debug!("Window {:?} destroyed, stopping with exit code {}", message.window, exit_code);
            *state = LoopState::Stopped { exit_code };
            Reply::Quit(exit_code)
        }
        event => match handler.on_event(&event) {
            Some(result) => Reply::Handled(result),
            None => Reply::Default
        }
    }
}
