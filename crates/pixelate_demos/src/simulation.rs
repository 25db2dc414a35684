//! # Fixed-Step Simulation Loop
//!
//! The interactive demos advance one tick at a time:
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │ 1. TICK  - read controls, move        │
//! │ 2. DRAW  - clear the frame and redraw │
//! │ 3. SNAP  - hand the frame to a sink   │
//! └───────────────────────────────────────┘
//! ```
//!
//! There is no clock: a run is a fixed number of ticks, or fewer if the
//! simulation asks to quit.

use pixelate_raster::Bitmap;

/// What the loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Draw this tick, then stop.
    Quit,
}

/// A demo that moves over time.
pub trait Simulation {
    /// Advances one tick.
    fn tick(&mut self, tick: u32) -> Flow;

    /// Draws the current state, replacing the previous frame.
    fn draw(&self, target: &mut Bitmap);
}

/// Outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed.
    pub ticks: u32,
    /// Frames passed to the sink.
    pub snapshots: u32,
    /// The simulation stopped itself.
    pub quit: bool,
}

/// Runs `sim` for up to `ticks` ticks.
///
/// Every `snapshot_every`-th frame (ticks 0, n, 2n, ...) and the final
/// frame go to `on_snapshot` together with their tick number. With
/// `snapshot_every == 0` only the final frame is kept.
///
/// # Errors
///
/// Stops at the first error returned by `on_snapshot` and returns it.
pub fn run<S, E>(
    sim: &mut S,
    target: &mut Bitmap,
    ticks: u32,
    snapshot_every: u32,
    mut on_snapshot: impl FnMut(u32, &Bitmap) -> Result<(), E>,
) -> Result<RunSummary, E>
where
    S: Simulation + ?Sized,
{
    let mut summary = RunSummary {
        ticks: 0,
        snapshots: 0,
        quit: false,
    };

    for tick in 0..ticks {
        let flow = sim.tick(tick);
        sim.draw(target);
        summary.ticks = tick + 1;
        summary.quit = flow == Flow::Quit;

        let last = summary.quit || summary.ticks == ticks;
        let due = snapshot_every > 0 && tick % snapshot_every == 0;
        if last || due {
            on_snapshot(tick, target)?;
            summary.snapshots += 1;
        }
        if summary.quit {
            break;
        }
    }

    tracing::debug!(
        ticks = summary.ticks,
        snapshots = summary.snapshots,
        quit = summary.quit,
        "simulation finished"
    );
    Ok(summary)
}
