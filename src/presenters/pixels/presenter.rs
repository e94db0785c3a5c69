use egui::{ClippedPrimitive, Context as EguiContext, TexturesDelta};
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::window::Window;

use crate::adapters::pixel_format::{copy_packed_rgba_to_bytes, draw_crosshair};
use crate::controllers::interactive::ports::display::DisplaySurface;
use crate::core::data::raster::Raster;
use crate::input::gui::app::ports::display::GuiDisplayPort;

#[derive(Debug, Error)]
pub enum PixelsPresenterError {
    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("frame is {actual_width}x{actual_height} but the surface buffer is {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

struct Overlay {
    primitives: Vec<ClippedPrimitive>,
    textures_delta: TexturesDelta,
    pixels_per_point: f32,
}

/// Shows rasters in a window through `pixels`, with an optional egui
/// overlay composited on top.
///
/// The pixel buffer keeps the raster size; `pixels` scales it to the
/// surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    overlay: Option<Overlay>,
    buffer_width: u32,
    buffer_height: u32,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(width, height, surface_texture)?;

        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        let egui_renderer = EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1);

        Ok(Self {
            pixels,
            egui_renderer,
            overlay: None,
            buffer_width: width,
            buffer_height: height,
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl DisplaySurface for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn update_surface(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        if raster.width() != self.buffer_width || raster.height() != self.buffer_height {
            return Err(PixelsPresenterError::SizeMismatch {
                width: self.buffer_width,
                height: self.buffer_height,
                actual_width: raster.width(),
                actual_height: raster.height(),
            });
        }

        let frame = self.pixels.frame_mut();
        copy_packed_rgba_to_bytes(raster.pixels(), frame);
        draw_crosshair(frame, self.buffer_width, self.buffer_height);

        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let overlay = self.overlay.take();
        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.surface_width, self.surface_height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let Some(overlay) = overlay else {
                return Ok(());
            };

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: overlay.pixels_per_point,
            };

            for (id, delta) in &overlay.textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &overlay.primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &overlay.primitives, &screen_descriptor);
            }

            for id in &overlay.textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}

impl GuiDisplayPort for PixelsPresenter {
    fn set_overlay(&mut self, ctx: &EguiContext, output: egui::FullOutput) {
        let pixels_per_point = ctx.pixels_per_point();
        let mut textures_delta = output.textures_delta;

        if let Some(previous) = self.overlay.take() {
            // Texture uploads from an overlay that was never drawn still apply.
            let mut merged = previous.textures_delta;
            merged.append(textures_delta);
            textures_delta = merged;
        }

        self.overlay = Some(Overlay {
            primitives: ctx.tessellate(output.shapes, pixels_per_point),
            textures_delta,
            pixels_per_point,
        });
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), Self::Error> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    fn window_to_raster(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| (px as f64, py as f64))
    }
}
