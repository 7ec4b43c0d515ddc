pub const WM_DESTROY: u32 = 0x0002;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_QUIT: u32 = 0x0012;
pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_CHAR: u32 = 0x0102;

/// Opaque handle of a window owned by the windowing subsystem.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowId(pub isize);

impl WindowId {
    pub const NONE: WindowId = WindowId(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// A message as it was retrieved from the queue of the current thread.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RawMessage {
    pub window: WindowId,
    pub message: u32,
    pub wparam: usize,
    pub lparam: isize
}

impl RawMessage {
    pub fn new(window: WindowId, message: u32, wparam: usize, lparam: isize) -> Self {
        Self { window, message, wparam, lparam }
    }
}

/// Decoded form of a `RawMessage`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    /// The window is being destroyed
    Destroy,
    /// A character produced by translating key input
    Char(char),
    /// Everything else
    Other(RawMessage)
}

impl Event {
    pub fn decode(raw: &RawMessage) -> Event {
        match raw.message {
            WM_DESTROY => Event::Destroy,
            WM_CHAR => u32::try_from(raw.wparam)
                .ok()
                .and_then(char::from_u32)
                .map_or(Event::Other(*raw), Event::Char),
            _ => Event::Other(*raw)
        }
    }
}
