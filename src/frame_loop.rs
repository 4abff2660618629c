//! Per-frame sequencing: poll quit, step, rasterize, present

use crate::color::Color;
use crate::config::Config;
use crate::display::PixelBuffer;
use crate::error::Result;
use crate::pendulum::Pendulum;
use crate::util::FpsCounter;
use log::{debug, info};

/// Window and presentation collaborator driven by [`FrameLoop::run`]
pub trait Host {
    /// Drain pending input; true once the user asked to quit
    fn poll_quit(&mut self) -> bool;

    /// Show a finished frame
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

/// Everything that stays fixed while the pendulum runs
#[derive(Debug, Clone, Copy)]
struct Style {
    background: Color,
    arm: Color,
    bob: Color,
    bob_radius: i32,
    phase_offset: f32,
}

/// Owns the framebuffer and the pendulum for the lifetime of the run
pub struct FrameLoop {
    buffer: PixelBuffer,
    pendulum: Pendulum,
    style: Style,
    frame_limit: Option<u64>,
}

impl FrameLoop {
    /// Validate the config and allocate the framebuffer
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let buffer = PixelBuffer::with_size(config.width, config.height)?;
        Ok(Self {
            buffer,
            pendulum: config.pendulum(),
            style: Style {
                background: config.background,
                arm: config.arm_color,
                bob: config.bob_color,
                bob_radius: config.bob_radius,
                phase_offset: config.phase_offset,
            },
            frame_limit: None,
        })
    }

    /// Stop after `frames` frames even if the host never asks to quit
    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        self.frame_limit = frames;
        self
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    /// Advance one tick and redraw the whole buffer
    pub fn frame(&mut self) {
        self.pendulum.step();
        let (end_x, end_y) = self.pendulum.endpoint(self.style.phase_offset);
        let (pivot_x, pivot_y) = self.pendulum.pivot;

        // Float to pixel conversion truncates toward zero
        let (px, py) = (pivot_x as i32, pivot_y as i32);
        let (ex, ey) = (end_x as i32, end_y as i32);

        self.buffer.clear(self.style.background);
        self.buffer.line(px, py, ex, ey, self.style.arm);
        self.buffer.fill_circle(ex, ey, self.style.bob_radius, self.style.bob);
    }

    /// Run until the host reports quit or the frame limit is hit.
    /// Returns the number of frames presented.
    pub fn run(&mut self, host: &mut impl Host) -> Result<u64> {
        let mut fps = FpsCounter::new(60);
        let mut frames = 0u64;

        loop {
            if host.poll_quit() {
                info!("Quit requested");
                break;
            }
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                info!("Frame limit of {} reached", frames);
                break;
            }

            self.frame();
            host.present(&self.buffer)?;
            frames += 1;

            fps.tick();
            if fps.report_due(1.0) {
                let (min_fps, max_fps) = fps.min_max_fps();
                debug!(
                    "FPS {:.0} avg  {:.0} min  {:.0} max  {:.2}ms  angle {:.4}",
                    fps.avg_fps(),
                    min_fps,
                    max_fps,
                    fps.avg_frame_time_ms(),
                    self.pendulum.angle
                );
            }
        }

        Ok(frames)
    }
}
