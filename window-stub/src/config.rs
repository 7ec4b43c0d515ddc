use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{ensure, WrapErr};
use serde::{Deserialize, Serialize};
use wndloop::{ClassDescriptor, ShowCommand, WindowDescriptor};

const CONFIG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".ron");

const HELP: &str = concat!("\
USAGE:
  ", env!("CARGO_PKG_NAME"), " [OPTIONS]
FLAGS:
  -h, --help            Prints help information
OPTIONS:
  --config PATH         Reads the configuration from PATH
  --title TITLE         Overrides the window title
  --show MODE           Overrides the display hint (hide, normal, show_minimized, maximize, ...)
");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub class_name: String,
    pub title: String,
    pub position: Option<(i32, i32)>,
    pub size: Option<(i32, i32)>,
    pub show: Option<ShowCommand>
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_name: String::from("applicationwindow"),
            title: WindowDescriptor::default().title,
            position: None,
            size: None,
            show: None
        }
    }
}

impl Config {

    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Reads the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Could not parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn apply(&mut self, args: &Args) {
        if let Some(title) = &args.title {
            self.title = title.clone();
        }
        if args.show.is_some() {
            self.show = args.show;
        }
    }

    pub fn class(&self) -> ClassDescriptor {
        ClassDescriptor::new(self.class_name.as_str())
    }

    pub fn window(&self) -> WindowDescriptor {
        WindowDescriptor {
            title: self.title.clone(),
            position: self.position,
            size: self.size
        }
    }

}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub show: Option<ShowCommand>,
    pub help: bool
}

impl Args {
    pub fn parse(args: Vec<OsString>) -> Result<Self, pico_args::Error> {
        let mut pargs = pico_args::Arguments::from_vec(args);

        let args = Args {
            config: pargs.opt_value_from_str("--config")?,
            title: pargs.opt_value_from_str("--title")?,
            show: pargs.opt_value_from_str("--show")?,
            // checked last so option values like `--title -h` are not taken for the flag
            help: pargs.contains(["-h", "--help"])
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            tracing::warn!("Unused arguments left: {:?}", remaining);
        }

        Ok(args)
    }

    /// Reads the config named by `--config`, which has to exist, or the one at the default location.
    pub fn load_config(&self) -> eyre::Result<Config> {
        match &self.config {
            Some(path) => {
                ensure!(path.exists(), "Config file {} does not exist", path.display());
                Config::load(path)
            }
            None => Config::load(&Config::default_path())
        }
    }
}

pub fn parse_args() -> Result<Args, pico_args::Error> {
    let args = Args::parse(std::env::args_os().skip(1).collect())?;

    if args.help {
        print!("{}", HELP);
        std::process::exit(0);
    }

    Ok(args)
}
