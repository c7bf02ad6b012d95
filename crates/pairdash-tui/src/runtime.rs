use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use pairdash_core::events::ObservationEvent;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

const UI_TICK: Duration = Duration::from_millis(250);

async fn next_observation_event(
    rx: &mut Option<mpsc::Receiver<ObservationEvent>>,
) -> Option<ObservationEvent> {
    match rx.as_mut() {
        Some(rx) => rx.recv().await,
        // No subscription: park this select arm forever
        None => std::future::pending().await,
    }
}

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut ui_tick = tokio::time::interval(UI_TICK);

    // The initial fetch already happened in FeedRuntime::start; swallow the
    // interval's immediate first tick so the next poll lands one full
    // period out.
    let mut poll = tokio::time::interval(app.feeds.poll_interval());
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    poll.tick().await;

    let mut observation_rx = app.feeds.take_event_rx();

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.scroll_up(3),
                            MouseEventKind::ScrollDown => app.scroll_down(3),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }

            // Push notifications for the observation log, in arrival order
            event = next_observation_event(&mut observation_rx) => {
                match event {
                    Some(event) => app.feeds.apply_observation_event(event),
                    None => {
                        // Channel closed: subscription is gone for this mount
                        observation_rx = None;
                    }
                }
            }

            // Fixed-interval stats re-poll; dies with this loop on unmount
            _ = poll.tick() => {
                app.feeds.refresh_stats().await;
            }

            _ = ui_tick.tick() => {
                app.tick();
            }
        }
    }

    app.feeds.shutdown();
    Ok(())
}
