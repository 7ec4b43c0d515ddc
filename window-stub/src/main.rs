#[cfg_attr(not(windows), allow(dead_code))]
mod app;
#[cfg_attr(not(windows), allow(dead_code))]
mod config;
mod utils;

use eyre::Result;

use crate::config::{parse_args, Config};

fn main() -> Result<()> {
    utils::error::set_eyre_hook()?;
    utils::init_logging();

    tracing::info!("Hello from {}!", env!("CARGO_PKG_NAME"));

    let args = parse_args()?;
    let mut config = args.load_config()?;
    config.apply(&args);

    let status = run(&config)?;
    tracing::info!("Exiting with status {}", status);
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}

#[cfg(windows)]
fn run(config: &Config) -> Result<i32> {
    use eyre::WrapErr;
    use wndloop::Win32;

    let mut platform = Win32::new()
        .wrap_err("Could not get the module handle of the process")?;
    let show = config.show.unwrap_or_else(Win32::startup_show_command);
    let mut app = app::App::default();
    let status = wndloop::launch(&mut platform, &config.class(), &config.window(), show, &mut app);
    tracing::debug!("Ran {} idle frames", app.frames());
    Ok(status)
}

#[cfg(not(windows))]
fn run(_config: &Config) -> Result<i32> {
    eyre::bail!("{} needs the Win32 windowing subsystem", env!("CARGO_PKG_NAME"))
}
