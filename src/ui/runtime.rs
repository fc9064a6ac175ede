use std::io;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::carousel::CarouselController;
use crate::config::{CarouselTuning, Slide};
use crate::scheduler::TokioScheduler;
use crate::ui::app::App;
use crate::ui::events::{HostEvent, InputReader};
use crate::ui::input::handle_event;
use crate::ui::render::draw;
use crate::ui::strip::StripPresenter;
use crate::ui::terminal_guard::setup_terminal;

/// Redraw cadence while the strip is moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Run the terminal host until the user quits.
///
/// One loop owns the controller. Terminal input, fired timers and signals all
/// arrive through the same channel, so controller state is only ever touched
/// here.
pub async fn run(slides: Vec<Slide>, tuning: CarouselTuning) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (mut terminal, guard) = setup_terminal()?;
    let input = InputReader::spawn(tx.clone());

    let signal_tx = tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(HostEvent::Shutdown);
        }
    });

    let scheduler = TokioScheduler::new(tx, HostEvent::Timer);
    let presenter = StripPresenter::new(tuning.settle_duration());
    let controller = CarouselController::new(slides.len(), tuning, scheduler, presenter);
    let size = terminal.size()?;
    let area = Rect {
        x: 0,
        y: 0,
        width: size.width,
        height: size.height,
    };
    let mut app = App::new(controller, slides, area);

    // The strip fills the screen on mount.
    app.controller_mut().on_visibility_change(true);

    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        let animating = app.is_animating(Instant::now());
        tokio::select! {
            event = rx.recv() => match event {
                Some(HostEvent::Terminal(event)) => handle_event(&mut app, event),
                Some(HostEvent::Timer(handle)) => app.controller_mut().on_timer(handle),
                Some(HostEvent::Shutdown) | None => {
                    tracing::info!("Shutdown requested");
                    app.request_quit();
                }
            },
            _ = frames.tick(), if animating => {}
        }
    }

    app.controller_mut().destroy();
    drop(input);
    drop(guard);
    Ok(())
}
