/// Frame driver.  The host supplies input, presentation and pacing; `run`
/// strings them together around `Session::tick`.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::entities::Snapshot;
use crate::session::Session;

/// Host-side collaborator invoked once per frame.
pub trait FrameHost {
    type Error;

    /// Feed pending input events into the session.  `Ok(false)` stops the
    /// loop.
    fn poll_input<R: Rng>(&mut self, session: &mut Session<R>) -> Result<bool, Self::Error>;

    fn present(&mut self, snapshot: &Snapshot<'_>) -> Result<(), Self::Error>;

    /// Block until the next frame is due.
    fn wait_next_frame(&mut self);
}

/// Drive `session` until the host asks to stop.  Returns the number of frames
/// run.
pub fn run<R: Rng, H: FrameHost>(session: &mut Session<R>, host: &mut H) -> Result<u64, H::Error> {
    let mut frames = 0;
    while host.poll_input(session)? {
        let snapshot = session.tick();
        host.present(&snapshot)?;
        frames += 1;
        host.wait_next_frame();
    }
    Ok(frames)
}

/// Sleeps off whatever is left of a fixed frame budget.
#[derive(Debug)]
pub struct FixedRate {
    frame: Duration,
    frame_start: Instant,
}

impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
