use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::interactive::session::{SessionControl, ViewerSession};
use crate::core::fractals::mandelbrot::palette::PaletteKind;
use crate::input::gui::app::key_input::KeyInputState;
use crate::input::gui::app::ports::display::GuiDisplayPort;
use crate::input::gui::events::GuiEvent;

const MAX_ITERATIONS_RANGE: std::ops::RangeInclusive<u32> = 1..=5000;

pub struct GuiApp<D: GuiDisplayPort> {
    session: ViewerSession<D>,
    input: KeyInputState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<D: GuiDisplayPort> GuiApp<D> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<GuiEvent>, session: ViewerSession<D>) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            session,
            input: KeyInputState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds a window event to egui, then to the viewer input unless egui
    /// consumed it. Returns whether a redraw is wanted.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        let mut repaint = response.repaint;

        match event {
            WindowEvent::CloseRequested => {
                self.input.request_quit();
                repaint = true;
            }
            WindowEvent::KeyboardInput { event, .. } if !response.consumed => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.input.handle_key_event(key_code, event.state, event.repeat);
                    repaint = true;
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                self.input.handle_scroll(*delta);
                repaint = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pointer = self.session.display_mut().window_to_raster(position.x, position.y);
                self.input.handle_pointer(pointer);
            }
            WindowEvent::CursorLeft { .. } => self.input.handle_pointer(None),
            WindowEvent::Focused(false) => self.input.release_all(),
            _ => {}
        }

        repaint
    }

    /// Applies input, submits a render if the view changed and presents.
    pub fn frame(&mut self, window: &Window) -> Result<SessionControl, D::Error> {
        let snapshot = self.input.snapshot(self.egui_ctx.wants_keyboard_input());
        if self.session.handle_input(&snapshot) == SessionControl::Exit {
            return Ok(SessionControl::Exit);
        }

        let egui_output = self.update_ui(window);
        self.session.submit_if_needed();

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());
        self.session.display_mut().set_overlay(&self.egui_ctx, egui_output);

        if !self.session.present()? {
            self.session.redraw()?;
        }

        Ok(SessionControl::Continue)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), D::Error> {
        self.session.display_mut().resize_surface(width, height)
    }

    /// True while held keys keep the view moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.input.is_panning()
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let session = &mut self.session;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Viewer")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    let settings = session.settings_mut();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(&mut settings.max_iterations, MAX_ITERATIONS_RANGE));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        egui::ComboBox::from_id_source("palette")
                            .selected_text(settings.palette.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PaletteKind::ALL {
                                    ui.selectable_value(&mut settings.palette, kind, kind.display_name());
                                }
                            });
                    });

                    ui.separator();
                    let viewport = *session.viewport();
                    ui.label(format!("Centre: {:.6} {:+.6}i", viewport.offset_x(), viewport.offset_y()));
                    ui.label(format!("Zoom: {:.3e}", viewport.zoom()));

                    if ui.button("Reset view").clicked() {
                        session.reset_view();
                    }

                    ui.separator();
                    ui.label(format!(
                        "Generation: {} / {}",
                        session.last_presented_generation(),
                        session.latest_submitted_generation()
                    ));
                    if let Some(render_duration) = session.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = session.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
