use clap::Parser;
use env_logger::Env;

use scanfill::display::{Display, RenderTarget};
use scanfill::{Args, Config, Error, Flow, Session};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_args(&args)?;

    let (mut display, texture_creator) =
        Display::with_options(&config.title, config.width, config.height, config.vsync)?;

    log::info!(
        "{}x{}, vsync {}",
        config.width,
        config.height,
        if config.vsync { "on" } else { "off" }
    );
    println!("Controls:");
    println!("  Left click - Add vertex");
    println!("  Enter      - Close and fill polygon (needs 3+ vertices)");
    println!("  F          - Smooth the picture");
    println!("  C          - Clear");
    println!("  Escape     - Quit");

    let mut session = Session::new(config);
    let mut target = RenderTarget::with_size(
        &texture_creator,
        session.buffer().width(),
        session.buffer().height(),
    )?;

    'main: loop {
        for event in display.poll_events() {
            if session.handle_event(&event) == Flow::Exit {
                break 'main;
            }
        }

        session.draw_overlay();

        if !target.matches(session.buffer()) {
            target = RenderTarget::with_size(
                &texture_creator,
                session.buffer().width(),
                session.buffer().height(),
            )?;
        }
        display.present(&mut target, session.buffer())?;
    }

    Ok(())
}
