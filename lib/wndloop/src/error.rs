use std::{fmt, error};

/// Windows error code.
///
/// See [System Error Codes](https://msdn.microsoft.com/en-us/library/windows/desktop/ms681381.aspx) for more information.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Error(u32);

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub const SUCCESS: Error = Error(0);
    pub const NOT_ENOUGH_MEMORY: Error = Error(8);
    pub const INVALID_PARAMETER: Error = Error(87);
    pub const CANNOT_FIND_WND_CLASS: Error = Error(1407);
    pub const CLASS_ALREADY_EXISTS: Error = Error(1410);
}

impl Error {
    pub const fn new(code: u32) -> Error {
        Error(code)
    }
    /// Returns true if this is the success error code.
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
    pub const fn code(self) -> u32 {
        self.0
    }
    /// Gets the last error code of the calling thread.
    ///
    /// See [GetLastError function](https://msdn.microsoft.com/en-us/library/windows/desktop/ms679360.aspx) for more information.
    #[cfg(windows)]
    pub fn last() -> Error {
        Error(unsafe { windows::Win32::Foundation::GetLastError() }.0)
    }
}

impl From<u32> for Error {
    fn from(code: u32) -> Self {
        Error(code)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ErrorCode({:#X})", self.0)
    }
}
impl error::Error for Error {}

/// The two ways bringing up the window can fail.
///
/// Both carry the system error code together with the text the platform produced for it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StartupError {
    ClassRegistration {
        class: String,
        code: Error,
        message: String
    },
    WindowCreation {
        title: String,
        code: Error,
        message: String
    }
}

impl StartupError {
    pub const EXIT_CODE: i32 = -1;

    pub fn code(&self) -> Error {
        match self {
            StartupError::ClassRegistration { code, .. } => *code,
            StartupError::WindowCreation { code, .. } => *code
        }
    }

    /// The process status used when startup fails.
    pub fn exit_code(&self) -> i32 {
        Self::EXIT_CODE
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StartupError::ClassRegistration { class, code, message } =>
                write!(f, "Failed to register window class \"{}\" ({}): {}", class, code, message),
            StartupError::WindowCreation { title, code, message } =>
                write!(f, "Failed to create window \"{}\" ({}): {}", title, code, message)
        }
    }
}

impl error::Error for StartupError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            StartupError::ClassRegistration { code, .. } => Some(code),
            StartupError::WindowCreation { code, .. } => Some(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_formatting() {
        assert_eq!(Error::CLASS_ALREADY_EXISTS.to_string(), "0x582");
        assert_eq!(format!("{:?}", Error::INVALID_PARAMETER), "ErrorCode(0x57)");
        assert!(Error::SUCCESS.is_success());
        assert!(!Error::from(5).is_success());
    }

    #[test]
    fn startup_errors_exit_with_minus_one() {
        let err = StartupError::WindowCreation {
            title: String::from("Window"),
            code: Error::NOT_ENOUGH_MEMORY,
            message: String::from("Not enough memory resources are available to process this command.")
        };
        assert_eq!(err.exit_code(), -1);
        assert_eq!(err.code(), Error::NOT_ENOUGH_MEMORY);
        assert!(err.to_string().starts_with("Failed to create window \"Window\" (0x8)"));
    }
}
