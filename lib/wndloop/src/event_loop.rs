use crate::descriptor::{ClassDescriptor, WindowDescriptor};
use crate::dispatch::{dispatch, Handler, LoopState};
use crate::enums::ShowCommand;
use crate::error::StartupError;
use crate::message::{RawMessage, WindowId};
use crate::platform::Platform;

/// Registers `class`, creates `window` from it and shows it.
///
/// Creation is never attempted when the registration fails.
pub fn startup<P: Platform + ?Sized>(platform: &mut P, class: &ClassDescriptor, window: &WindowDescriptor, show: ShowCommand) -> Result<WindowId, StartupError> {
    class.validate()
        .and_then(|_| platform.register_class(class))
        .map_err(|code| StartupError::ClassRegistration {
            class: class.name.clone(),
            code,
            message: platform.error_message(code)
        })?;
    tracing::debug!("Registered window class \"{}\" ({:?})", class.name, class.style);

    let id = platform.create_window(class, window)
        .map_err(|code| StartupError::WindowCreation {
            title: window.title.clone(),
            code,
            message: platform.error_message(code)
        })?;
    tracing::debug!("Created window \"{}\" ({:?})", window.title, id);

    platform.show_window(id, show);
    Ok(id)
}

/// Outcome of a single `EventLoop::step`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Iteration {
    /// A message was dispatched, either from the queue or sent to the window while polling
    Dispatched,
    /// No message was pending, so the frame slot ran
    Idle,
    /// The loop already stopped; nothing happened
    Stopped
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    pub exit_code: i32,
    pub dispatched: u64,
    pub frames: u64
}

/// Non-blocking message loop for a single window.
pub struct EventLoop<'a, P: Platform + ?Sized> {
    platform: &'a mut P,
    window: WindowId,
    state: LoopState,
    dispatched: u64,
    frames: u64
}

impl<'a, P: Platform + ?Sized> EventLoop<'a, P> {

    pub fn new(platform: &'a mut P, window: WindowId) -> Self {
        Self {
            platform,
            window,
            state: LoopState::Running,
            dispatched: 0,
            frames: 0
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn step<H: Handler + ?Sized>(&mut self, handler: &mut H) -> Iteration {
        if !self.state.is_running() {
            return Iteration::Stopped;
        }
        let polled = {
            let state = &mut self.state;
            self.platform.poll_message(self.window, &mut |raw: &RawMessage| dispatch(handler, state, raw))
        };
        // a message sent from another thread may already have destroyed the window
        if !self.state.is_running() {
            tracing::trace!("Window destroyed while polling");
            self.dispatched += 1;
            return Iteration::Dispatched;
        }
        match polled {
            Some(message) => {
                self.platform.translate_message(&message);
                let state = &mut self.state;
                let result = self.platform.dispatch_message(&message, &mut |raw: &RawMessage| dispatch(handler, state, raw));
                tracing::trace!("Dispatched {:#06X} -> {}", message.message, result);
                self.dispatched += 1;
                Iteration::Dispatched
            }
            None => {
                handler.on_frame();
                self.frames += 1;
                Iteration::Idle
            }
        }
    }

    /// Steps until the window is gone.
    pub fn run<H: Handler + ?Sized>(mut self, handler: &mut H) -> RunSummary {
        tracing::debug!("Entering event loop for {:?}", self.window);
        while self.step(handler) != Iteration::Stopped {}
        let summary = self.summary();
        tracing::debug!("Left event loop after {} messages and {} frames", summary.dispatched, summary.frames);
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            exit_code: match self.state {
                LoopState::Running => 0,
                LoopState::Stopped { exit_code } => exit_code
            },
            dispatched: self.dispatched,
            frames: self.frames
        }
    }
}

/// Brings up the window and runs its event loop.
///
/// Returns the process status: the loop's exit code, or `StartupError::EXIT_CODE` when startup failed.
pub fn launch<P: Platform + ?Sized, H: Handler + ?Sized>(platform: &mut P, class: &ClassDescriptor, window: &WindowDescriptor, show: ShowCommand, handler: &mut H) -> i32 {
    match startup(platform, class, window, show) {
        Ok(id) => EventLoop::new(platform, id).run(handler).exit_code,
        Err(err) => {
            tracing::error!("{}", err);
            err.exit_code()
        }
    }
}
