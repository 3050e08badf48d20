use crate::core::{FrameClock, Scene};
use crate::input::{self, InputState};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stop,
}

pub struct FrameContext {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub input: Rc<RefCell<InputState>>,
    pub gpu: render::GpuState,
    pub started: Instant,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStatus {
        let elapsed = self.started.elapsed().as_secs_f32();
        let delta = self.clock.tick(elapsed);

        let snapshot = {
            let mut state = self.input.borrow_mut();
            state.scroll_y = input::window_scroll_y(&self.window);
            *state
        };
        let mut scene = self.scene.borrow_mut();
        scene.advance(&snapshot.frame_input(delta));

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&scene, snapshot.pixel_ratio as f32) {
            Ok(()) => FrameStatus::Continue,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                self.gpu.reconfigure();
                FrameStatus::Continue
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] out of GPU memory; stopping animation");
                FrameStatus::Stop
            }
            Err(e) => {
                log::warn!("[frame] render skipped: {:?}", e);
                FrameStatus::Continue
            }
        }
    }
}

/// Owns the self-rescheduling animation-frame callback.
pub struct LoopHandle {
    window: web::Window,
    running: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Cancel the pending frame and release the callback. Must not be
    /// called from inside the frame callback itself.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.request_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(window: &web::Window, mut frame_ctx: FrameContext) -> LoopHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let request_id = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let request_tick = request_id.clone();
    let wnd = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_tick.set(None);
        if !running_tick.get() {
            return;
        }
        if frame_ctx.frame() == FrameStatus::Stop {
            running_tick.set(false);
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match wnd.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => request_tick.set(Some(id)),
                Err(e) => {
                    log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                    running_tick.set(false);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => request_id.set(Some(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                running.set(false);
            }
        }
    }

    LoopHandle {
        window: window.clone(),
        running,
        request_id,
        tick,
    }
}
