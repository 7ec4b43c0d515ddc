use crate::enums::ClassStyle;
use crate::error::{Error, Result};

/// Longest class name `RegisterClassExW` accepts, in UTF-16 code units.
pub const MAX_CLASS_NAME_LENGTH: usize = 256;

/// Template describing the behaviour shared by every window created from it.
///
/// The window procedure and the owning module are filled in by the platform when the class is registered.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClassDescriptor {
    pub name: String,
    pub style: ClassStyle
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: ClassStyle::default()
        }
    }

    pub fn with_style(mut self, style: ClassStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks that the name can be handed to the windowing subsystem.
    pub fn validate(&self) -> Result<()> {
        let length = self.name.encode_utf16().count();
        if length == 0 || length > MAX_CLASS_NAME_LENGTH || self.name.contains('\0') {
            tracing::debug!("Rejecting class name {:?} ({} code units)", self.name, length);
            return Err(Error::INVALID_PARAMETER);
        }
        Ok(())
    }
}

/// A single top-level window.
///
/// `None` for the position or size lets the subsystem pick a default.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WindowDescriptor {
    pub title: String,
    pub position: Option<(i32, i32)>,
    pub size: Option<(i32, i32)>
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: String::from("Window"),
            position: None,
            size: None
        }
    }
}

impl WindowDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
