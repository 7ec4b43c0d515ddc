pub use enums::{ClassStyle, ShowCommand};
pub use descriptor::{ClassDescriptor, WindowDescriptor, MAX_CLASS_NAME_LENGTH};
pub use message::{Event, RawMessage, WindowId};
pub use dispatch::{dispatch, Handler, LoopState, Reply};
pub use platform::{MessageSink, Platform};
pub use event_loop::{startup, launch, EventLoop, Iteration, RunSummary};
pub use error::{Error, Result, StartupError};

#[cfg(windows)]
pub use win32::{format_message, Win32};

pub mod message;
mod enums;
mod descriptor;
mod dispatch;
mod platform;
mod event_loop;
mod error;
#[cfg(windows)]
mod win32;
#[cfg(test)]
mod testing;
