use std::collections::{HashSet, VecDeque};

use crate::descriptor::{ClassDescriptor, WindowDescriptor};
use crate::dispatch::Reply;
use crate::enums::ShowCommand;
use crate::error::{Error, Result};
use crate::message::{RawMessage, WindowId, WM_CHAR, WM_CLOSE, WM_DESTROY, WM_KEYDOWN, WM_QUIT};
use crate::platform::{MessageSink, Platform};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Call {
    RegisterClass(String),
    CreateWindow(String),
    ShowWindow(WindowId, ShowCommand),
    Translate(u32),
    Dispatch(u32),
    Send(u32),
    DefaultHandler(u32),
    PostQuit(i32)
}

/// In-memory windowing subsystem that records every call made against it.
#[derive(Default)]
pub struct TestPlatform {
    pub calls: Vec<Call>,
    pub classes: HashSet<String>,
    pub queue: VecDeque<RawMessage>,
    pub register_error: Option<Error>,
    pub create_error: Option<Error>,
    pub default_result: isize,
    pub queued_on_create: Vec<u32>,
    pub sent: VecDeque<RawMessage>,
    windows: isize
}

impl TestPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_registration(error: Error) -> Self {
        Self { register_error: Some(error), ..Self::default() }
    }

    pub fn failing_creation(error: Error) -> Self {
        Self { create_error: Some(error), ..Self::default() }
    }

    /// Queues `message` for the window as soon as it is created.
    pub fn queue_on_create(mut self, message: u32) -> Self {
        self.queued_on_create.push(message);
        self
    }

    pub fn post(&mut self, window: WindowId, message: u32, wparam: usize) {
        self.queue.push_back(RawMessage::new(window, message, wparam, 0));
    }

    /// Sends `message` from another thread; it is delivered during the next poll.
    pub fn send_on_poll(&mut self, window: WindowId, message: u32) {
        self.sent.push_back(RawMessage::new(window, message, 0, 0));
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn shown(&self) -> Vec<(WindowId, ShowCommand)> {
        self.calls.iter()
            .filter_map(|c| match c {
                Call::ShowWindow(window, show) => Some((*window, *show)),
                _ => None
            })
            .collect()
    }

    fn default_window_proc(&mut self, message: &RawMessage, sink: &mut MessageSink<'_>) -> isize {
        self.calls.push(Call::DefaultHandler(message.message));
        match message.message {
            // closing destroys the window, which sends WM_DESTROY right away
            WM_CLOSE => {
                let destroy = RawMessage::new(message.window, WM_DESTROY, 0, 0);
                self.window_proc(&destroy, sink);
                0
            }
            _ => self.default_result
        }
    }

    fn window_proc(&mut self, message: &RawMessage, sink: &mut MessageSink<'_>) -> isize {
        match sink(message) {
            Reply::Handled(result) => result,
            Reply::Quit(exit_code) => {
                self.calls.push(Call::PostQuit(exit_code));
                self.queue.push_back(RawMessage::new(WindowId::NONE, WM_QUIT, exit_code as usize, 0));
                0
            }
            Reply::Default => self.default_window_proc(message, sink)
        }
    }
}

impl Platform for TestPlatform {
    fn register_class(&mut self, class: &ClassDescriptor) -> Result<()> {
        self.calls.push(Call::RegisterClass(class.name.clone()));
        if let Some(error) = self.register_error {
            return Err(error);
        }
        match self.classes.insert(class.name.clone()) {
            true => Ok(()),
            false => Err(Error::CLASS_ALREADY_EXISTS)
        }
    }

    fn create_window(&mut self, class: &ClassDescriptor, window: &WindowDescriptor) -> Result<WindowId> {
        self.calls.push(Call::CreateWindow(window.title.clone()));
        if let Some(error) = self.create_error {
            return Err(error);
        }
        if !self.classes.contains(&class.name) {
            return Err(Error::CANNOT_FIND_WND_CLASS);
        }
        self.windows += 1;
        let id = WindowId(0x1000 + self.windows);
        for message in std::mem::take(&mut self.queued_on_create) {
            self.post(id, message, 0);
        }
        Ok(id)
    }

    fn show_window(&mut self, window: WindowId, show: ShowCommand) {
        self.calls.push(Call::ShowWindow(window, show));
    }

    fn poll_message(&mut self, window: WindowId, sink: &mut MessageSink<'_>) -> Option<RawMessage> {
        // sent messages bypass the queue and go straight to the window procedure
        while let Some(message) = self.sent.pop_front() {
            self.calls.push(Call::Send(message.message));
            self.window_proc(&message, sink);
        }
        let index = self.queue.iter().position(|m| m.window == window)?;
        self.queue.remove(index)
    }

    fn translate_message(&mut self, message: &RawMessage) {
        self.calls.push(Call::Translate(message.message));
        if message.message != WM_KEYDOWN {
            return;
        }
        let character = match message.wparam as u8 {
            key @ b'A'..=b'Z' => Some(key.to_ascii_lowercase()),
            key @ (b'0'..=b'9' | b' ') => Some(key),
            _ => None
        };
        if let Some(character) = character {
            self.queue.push_front(RawMessage::new(message.window, WM_CHAR, character as usize, message.lparam));
        }
    }

    fn dispatch_message(&mut self, message: &RawMessage, sink: &mut MessageSink<'_>) -> isize {
        self.calls.push(Call::Dispatch(message.message));
        self.window_proc(message, sink)
    }

    fn error_message(&self, error: Error) -> String {
        if error.is_success() {
            return String::new();
        }
        let text = match error {
            Error::NOT_ENOUGH_MEMORY => "Not enough memory resources are available to process this command.",
            Error::INVALID_PARAMETER => "The parameter is incorrect.",
            Error::CANNOT_FIND_WND_CLASS => "Cannot find window class.",
            Error::CLASS_ALREADY_EXISTS => "Class already exists.",
            _ => ""
        };
        match text.is_empty() {
            true => format!("Unknown error {}", error),
            false => text.to_owned()
        }
    }
}
