// SPDX-License-Identifier: MPL-2.0
//! Async event loop hosting an [`OverlaySession`].
//!
//! D-pad presses and timer fires arrive on two channels and are applied to the
//! session one at a time on the calling task, so the session itself never
//! needs to be shared.

use crate::application::port::{PlaybackEngine, Scheduler, TimerFired};
use crate::domain::overlay::DpadEvent;
use crate::ui::overlay::{OverlaySession, OverlayView};
use tokio::sync::mpsc;

/// Runs the session until the input channel closes.
///
/// `render` is called with the initial view and then after every change.
/// When the inputs end, the session is stopped, rendered one last time if that
/// changed anything, and handed back.
pub async fn run<E, S, F>(
    mut session: OverlaySession<E, S>,
    mut timers: mpsc::UnboundedReceiver<TimerFired>,
    mut inputs: mpsc::Receiver<DpadEvent>,
    mut render: F,
) -> OverlaySession<E, S>
where
    E: PlaybackEngine,
    S: Scheduler,
    F: FnMut(&OverlayView),
{
    session.start();
    let mut last = session.view();
    render(&last);

    loop {
        tokio::select! {
            biased;

            input = inputs.recv() => {
                let Some(event) = input else {
                    log::debug!("Input channel closed");
                    break;
                };
                if let Err(err) = session.handle_input(event) {
                    log::warn!("Input {} failed: {}", event, err);
                }
            }
            Some(fired) = timers.recv() => {
                session.handle_timer(fired);
            }
        }

        let view = session.view();
        if view != last {
            render(&view);
            last = view;
        }
    }

    session.stop();
    let view = session.view();
    if view != last {
        render(&view);
    }
    session
}
