use std::time::Duration as StdDuration;

use super::CountdownApp;

/// Longest the UI sleeps between wall-clock checks. Repaint delays run on
/// the monotonic clock, which does not see system sleep or clock changes.
const MAX_REFRESH_WAIT: StdDuration = StdDuration::from_secs(60);

impl CountdownApp {
    /// Fire the midnight timer when due and wake the UI for the next one.
    pub(super) fn refresh_countdown(&mut self, ctx: &egui::Context) {
        let tick = self.engine.tick_with_clock(self.clock.as_ref());
        if tick.changed {
            ctx.request_repaint();
        }

        ctx.request_repaint_after(next_refresh_wait(tick.next_due_in));
    }
}

fn next_refresh_wait(next_due_in: Option<StdDuration>) -> StdDuration {
    next_due_in
        .unwrap_or(MAX_REFRESH_WAIT)
        .min(MAX_REFRESH_WAIT)
}
