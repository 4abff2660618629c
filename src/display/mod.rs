mod pixel_buffer;
mod raster;

pub use pixel_buffer::{Dimension, PixelBuffer};

use crate::error::{Error, Result};
use crate::frame_loop::Host;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

/// Streaming texture the framebuffer is uploaded into each frame
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

impl Display {
    /// Create a centred window sized to the framebuffer
    /// vsync=true: locked to monitor refresh
    /// vsync=false: present as fast as the loop runs
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(Error::display)?;
        let video_subsystem = sdl_context.video().map_err(Error::display)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(Error::display)?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(Error::display)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::display)?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn present(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<()> {
        if (buffer.width(), buffer.height()) != (target.width, target.height) {
            return Err(Error::Display(format!(
                "framebuffer is {}x{} but render target is {}x{}",
                buffer.width(),
                buffer.height(),
                target.width,
                target.height
            )));
        }

        target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(Error::display)?;

        self.canvas
            .copy(&target.texture, None, None)
            .map_err(Error::display)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain the event pump. Closing the window or pressing Escape quits;
    /// every other event is ignored.
    pub fn poll_quit(&mut self) -> bool {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                _ => {},
            }
        }
        quit
    }
}

impl<'a> RenderTarget<'a> {
    /// 32-bit XRGB texture with the framebuffer's exact size
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB888, width, height)
            .map_err(Error::display)?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}

/// Window plus its texture, the [`Host`] the binary runs against
pub struct Screen<'a> {
    pub display: Display,
    pub target: RenderTarget<'a>,
}

impl Host for Screen<'_> {
    fn poll_quit(&mut self) -> bool {
        self.display.poll_quit()
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        self.display.present(&mut self.target, buffer)
    }
}
