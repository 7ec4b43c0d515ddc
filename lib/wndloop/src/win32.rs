use std::cell::Cell;
use std::ffi::OsStr;
use std::iter::once;
use std::mem::size_of;
use std::os::windows::prelude::OsStrExt;
use std::ptr::NonNull;

use windows::core::{HRESULT, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::{GetStartupInfoW, STARTF_USESHOWWINDOW, STARTUPINFOW};
use windows::Win32::UI::WindowsAndMessaging::{CreateWindowExW, DefWindowProcW, DispatchMessageW, PeekMessageW, PostQuitMessage, RegisterClassExW, ShowWindow, TranslateMessage, CW_USEDEFAULT, HMENU, MSG, PM_REMOVE, SHOW_WINDOW_CMD, SW_FORCEMINIMIZE, SW_HIDE, SW_MINIMIZE, SW_RESTORE, SW_SHOW, SW_SHOWDEFAULT, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWMINNOACTIVE, SW_SHOWNA, SW_SHOWNOACTIVATE, SW_SHOWNORMAL, WINDOW_EX_STYLE, WNDCLASSEXW, WNDCLASS_STYLES, WS_OVERLAPPEDWINDOW};

use crate::descriptor::{ClassDescriptor, WindowDescriptor};
use crate::dispatch::Reply;
use crate::enums::ShowCommand;
use crate::error::{Error, Result};
use crate::message::{RawMessage, WindowId};
use crate::platform::{MessageSink, Platform};

thread_local! {
    static ACTIVE_SINK: Cell<Option<NonNull<MessageSink<'static>>>> = Cell::new(None);
}

/// Makes a sink visible to `window_proc` until dropped.
struct SinkGuard {
    previous: Option<NonNull<MessageSink<'static>>>
}

impl SinkGuard {
    fn install(sink: &mut MessageSink<'_>) -> Self {
        let sink: NonNull<MessageSink<'_>> = NonNull::from(sink);
        // the guard never outlives the borrow, so erasing the lifetime is fine
        let sink: NonNull<MessageSink<'static>> = unsafe { std::mem::transmute(sink) };
        Self {
            previous: ACTIVE_SINK.with(|slot| slot.replace(Some(sink)))
        }
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        ACTIVE_SINK.with(|slot| slot.set(self.previous));
    }
}

unsafe extern "system" fn window_proc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let raw = RawMessage::new(WindowId(window.0), message, wparam.0, lparam.0);

    // Taken out while it runs; restored before DefWindowProcW which may call back into us
    let reply = match ACTIVE_SINK.with(|slot| slot.take()) {
        Some(mut sink) => {
            let reply = (sink.as_mut())(&raw);
            ACTIVE_SINK.with(|slot| slot.set(Some(sink)));
            reply
        }
        None => Reply::Default
    };

    match reply {
        Reply::Handled(result) => LRESULT(result),
        Reply::Quit(exit_code) => {
            PostQuitMessage(exit_code);
            LRESULT(0)
        }
        Reply::Default => DefWindowProcW(window, message, wparam, lparam)
    }
}

fn win32_string( value: &str ) -> Vec<u16> {
    OsStr::new( value ).encode_wide().chain( once( 0 ) ).collect()
}

/// Text of a system error code. Empty for `Error::SUCCESS`.
///
/// The system buffer behind the text is allocated and released inside this call.
pub fn format_message(error: Error) -> String {
    if error.is_success() {
        return String::new();
    }
    let message = HRESULT::from_win32(error.code()).message().to_string_lossy();
    match message.trim_end() {
        "" => format!("Unknown error {}", error),
        trimmed => trimmed.to_owned()
    }
}

impl From<ShowCommand> for SHOW_WINDOW_CMD {
    fn from(value: ShowCommand) -> Self {
        match value {
            ShowCommand::Hide => SW_HIDE,
            ShowCommand::Normal => SW_SHOWNORMAL,
            ShowCommand::ShowMinimized => SW_SHOWMINIMIZED,
            ShowCommand::Maximize => SW_SHOWMAXIMIZED,
            ShowCommand::ShowNoActivate => SW_SHOWNOACTIVATE,
            ShowCommand::Show => SW_SHOW,
            ShowCommand::Minimize => SW_MINIMIZE,
            ShowCommand::ShowMinNoActive => SW_SHOWMINNOACTIVE,
            ShowCommand::ShowNa => SW_SHOWNA,
            ShowCommand::Restore => SW_RESTORE,
            ShowCommand::Default => SW_SHOWDEFAULT,
            ShowCommand::ForceMinimize => SW_FORCEMINIMIZE
        }
    }
}

impl From<&MSG> for RawMessage {
    fn from(msg: &MSG) -> Self {
        RawMessage::new(WindowId(msg.hwnd.0), msg.message, msg.wParam.0, msg.lParam.0)
    }
}

/// The Win32 windowing subsystem of the current thread.
pub struct Win32 {
    instance: HINSTANCE,
    last: Option<MSG>
}

impl Win32 {

    pub fn new() -> Result<Self> {
        let module = unsafe { GetModuleHandleW(PCWSTR::null()) }
            .map_err(|_| Error::last())?;
        Ok(Self {
            instance: HINSTANCE(module.0),
            last: None
        })
    }

    /// The display hint the process was started with.
    pub fn startup_show_command() -> ShowCommand {
        let mut info = STARTUPINFOW {
            cb: size_of::<STARTUPINFOW>() as u32,
            ..Default::default()
        };
        unsafe { GetStartupInfoW(&mut info) };
        if info.dwFlags.0 & STARTF_USESHOWWINDOW.0 == 0 {
            return ShowCommand::Default;
        }
        ShowCommand::try_from(i32::from(info.wShowWindow)).unwrap_or_else(|_| {
            tracing::warn!("Unknown startup show command: {}", info.wShowWindow);
            ShowCommand::Default
        })
    }

    fn native(&self, message: &RawMessage) -> MSG {
        match self.last {
            Some(msg) if RawMessage::from(&msg) == *message => msg,
            _ => MSG {
                hwnd: HWND(message.window.0),
                message: message.message,
                wParam: WPARAM(message.wparam),
                lParam: LPARAM(message.lparam),
                ..Default::default()
            }
        }
    }
}

impl Platform for Win32 {
    fn register_class(&mut self, class: &ClassDescriptor) -> Result<()> {
        let name = win32_string(&class.name);
        let wnd_class = WNDCLASSEXW {
            cbSize: size_of::<WNDCLASSEXW>() as u32,
            style: WNDCLASS_STYLES(class.style.bits()),
            lpfnWndProc: Some(window_proc),
            hInstance: self.instance,
            lpszClassName: PCWSTR(name.as_ptr()),
            ..Default::default()
        };
        match unsafe { RegisterClassExW(&wnd_class) } {
            0 => Err(Error::last()),
            atom => {
                tracing::trace!("Registered class atom {:#X}", atom);
                Ok(())
            }
        }
    }

    fn create_window(&mut self, class: &ClassDescriptor, window: &WindowDescriptor) -> Result<WindowId> {
        let class_name = win32_string(&class.name);
        let title = win32_string(&window.title);
        let (x, y) = window.position.unwrap_or((CW_USEDEFAULT, CW_USEDEFAULT));
        let (width, height) = window.size.unwrap_or((CW_USEDEFAULT, CW_USEDEFAULT));

        let handle = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                x,
                y,
                width,
                height,
                HWND::default(),
                HMENU::default(),
                self.instance,
                None)
        };

        match handle.0 {
            0 => Err(Error::last()),
            hwnd => Ok(WindowId(hwnd))
        }
    }

    fn show_window(&mut self, window: WindowId, show: ShowCommand) {
        unsafe { ShowWindow(HWND(window.0), show.into()) };
    }

    fn poll_message(&mut self, window: WindowId, sink: &mut MessageSink<'_>) -> Option<RawMessage> {
        let mut msg = MSG::default();
        // PeekMessageW calls window_proc directly for messages sent by other threads
        let _guard = SinkGuard::install(sink);
        match unsafe { PeekMessageW(&mut msg, HWND(window.0), 0, 0, PM_REMOVE) }.as_bool() {
            true => {
                self.last = Some(msg);
                Some(RawMessage::from(&msg))
            },
            false => None
        }
    }

    fn translate_message(&mut self, message: &RawMessage) {
        let msg = self.native(message);
        unsafe { TranslateMessage(&msg) };
    }

    fn dispatch_message(&mut self, message: &RawMessage, sink: &mut MessageSink<'_>) -> isize {
        let msg = self.native(message);
        let _guard = SinkGuard::install(sink);
        unsafe { DispatchMessageW(&msg) }.0
    }

    fn error_message(&self, error: Error) -> String {
        format_message(error)
    }
}
