use std::fmt::{Display, Formatter};
use std::fmt;
use std::str::FromStr;
use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

bitflags! {
    /// Window class styles.
    ///
    /// See [Window Class Styles](https://learn.microsoft.com/en-us/windows/win32/winmsg/window-class-styles) for more information.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ClassStyle : u32 {
        const VREDRAW = 0x0001;
        const HREDRAW = 0x0002;
        const DBLCLKS = 0x0008;
        const OWNDC = 0x0020;
        const CLASSDC = 0x0040;
        const PARENTDC = 0x0080;
        const NOCLOSE = 0x0200;
        const SAVEBITS = 0x0800;
        const GLOBALCLASS = 0x4000;
    }
}

impl Default for ClassStyle {
    /// Redraw the whole window whenever its width or height changes.
    fn default() -> Self {
        ClassStyle::HREDRAW | ClassStyle::VREDRAW
    }
}

/// How a window should be shown.
///
/// The discriminants match the `SW_*` constants of [ShowWindow](https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindow).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(i32)]
pub enum ShowCommand {
    Hide            = 0,
    Normal          = 1,
    ShowMinimized   = 2,
    Maximize        = 3,
    ShowNoActivate  = 4,
    Show            = 5,
    Minimize        = 6,
    ShowMinNoActive = 7,
    ShowNa          = 8,
    Restore         = 9,
    Default         = 10,
    ForceMinimize   = 11
}

impl Default for ShowCommand {
    fn default() -> Self {
        ShowCommand::Normal
    }
}

const SHOW_COMMAND_NAMES: [(&str, ShowCommand); 12] = [
    ("hide", ShowCommand::Hide),
    ("normal", ShowCommand::Normal),
    ("show_minimized", ShowCommand::ShowMinimized),
    ("maximize", ShowCommand::Maximize),
    ("show_no_activate", ShowCommand::ShowNoActivate),
    ("show", ShowCommand::Show),
    ("minimize", ShowCommand::Minimize),
    ("show_min_no_active", ShowCommand::ShowMinNoActive),
    ("show_na", ShowCommand::ShowNa),
    ("restore", ShowCommand::Restore),
    ("default", ShowCommand::Default),
    ("force_minimize", ShowCommand::ForceMinimize)
];

impl ShowCommand {
    pub fn name(self) -> &'static str {
        SHOW_COMMAND_NAMES[i32::from(self) as usize].0
    }
}

impl Display for ShowCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShowCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some((_, cmd)) = SHOW_COMMAND_NAMES.iter().find(|(name, _)| *name == lower) {
            return Ok(*cmd);
        }
        match lower.parse::<i32>().ok().and_then(|v| ShowCommand::try_from(v).ok()) {
            Some(cmd) => Ok(cmd),
            None => Err(format!("[{}] is not a valid show command. Supported values: [{}]", s,
                                SHOW_COMMAND_NAMES.map(|(name, _)| name).join(", ")))
        }
    }
}
