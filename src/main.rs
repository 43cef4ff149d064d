use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use squaregrid::cli::CliArgs;
use squaregrid::runtime::App;

fn main() -> Result<()> {
    squaregrid::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
