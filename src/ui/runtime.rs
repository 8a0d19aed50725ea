use crate::articles::ArticlesHandle;
use crate::shutdown::Shutdown;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Drive the terminal until the user quits or shutdown is signalled.
///
/// Redraws after every input event and every published snapshot.
pub async fn run(
    handle: ArticlesHandle,
    tick_rate: Duration,
    shutdown: Shutdown,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut snapshots = handle.subscribe();
    let mut app = App::new(handle);
    let mut events = EventHandler::new(tick_rate, shutdown.clone());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = snapshots.borrow_and_update().clone();
                app.on_state(state);
            }
            _ = shutdown.wait() => break,
        }
    }

    shutdown.signal("user quit");
    drop(guard);
    Ok(())
}
