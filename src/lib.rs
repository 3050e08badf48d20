#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_SELECTOR, DEBUG_PANEL_ID};
use crate::core::lifecycle::{MountGate, MountOutcome, UnmountAction};
use crate::core::{FrameClock, Scene, SceneConfig};
use crate::error::MountError;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod panel;
mod render;

/// Everything a mounted backdrop owns. Dropping it stops the loop, removes
/// the listeners and takes the debug panel out of the page.
struct Mount {
    frame_loop: frame::LoopHandle,
    listeners: Vec<dom::Listener>,
    panel: Option<Rc<panel::DebugPanel>>,
}

impl Mount {
    fn teardown(self) {
        self.frame_loop.stop();
        log::info!(
            "[mount] teardown: {} listeners, panel={}",
            self.listeners.len(),
            self.panel.is_some()
        );
        drop(self.listeners);
        drop(self.panel);
    }
}

thread_local! {
    static GATE: Cell<MountGate> = Cell::new(MountGate::default());
    static ACTIVE: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

fn with_gate<T>(f: impl FnOnce(&mut MountGate) -> T) -> T {
    GATE.with(|cell| {
        let mut gate = cell.get();
        let out = f(&mut gate);
        cell.set(gate);
        out
    })
}

fn page_config() -> SceneConfig {
    web::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| SceneConfig::from_query(&search))
        .unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = page_config();
    let level = if config.log_debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = mount_with(config).await {
            log::error!("[mount] {}", e);
        }
    });
    Ok(())
}

/// Mount the backdrop onto `canvas.webgl` (again) after an `unmount()`.
#[wasm_bindgen]
pub async fn mount() -> Result<(), JsValue> {
    mount_with(page_config())
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Stop the animation loop and release every listener. Safe to call when
/// nothing is mounted; a mount still in flight is torn down as it completes.
#[wasm_bindgen]
pub fn unmount() {
    match with_gate(MountGate::request_unmount) {
        UnmountAction::Teardown => {
            if let Some(m) = ACTIVE.with(|slot| slot.borrow_mut().take()) {
                m.teardown();
            }
        }
        UnmountAction::Deferred => log::info!("[mount] unmount requested while mounting"),
        UnmountAction::Nothing => {}
    }
}

async fn mount_with(config: SceneConfig) -> Result<(), MountError> {
    if !with_gate(MountGate::begin) {
        log::warn!("[mount] refused, gate is {:?}", with_gate(|g| g.phase()));
        return Err(MountError::AlreadyMounted);
    }
    match build(config).await {
        Ok(m) => match with_gate(MountGate::complete) {
            MountOutcome::Install => {
                ACTIVE.with(|slot| *slot.borrow_mut() = Some(m));
                Ok(())
            }
            MountOutcome::Discard => {
                m.teardown();
                Ok(())
            }
        },
        Err(e) => {
            with_gate(MountGate::fail);
            Err(e)
        }
    }
}

async fn build(config: SceneConfig) -> Result<Mount, MountError> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = dom::query_canvas(&document, CANVAS_SELECTOR)?;

    let viewport = input::window_viewport(&window);
    let input_state = Rc::new(RefCell::new(input::InputState::new(
        viewport,
        window.device_pixel_ratio(),
    )));
    dom::sync_canvas_size(&canvas, &input_state.borrow());

    let scene = match config.seed {
        Some(seed) => Scene::new(&config, viewport, &mut StdRng::seed_from_u64(seed)),
        None => Scene::new(&config, viewport, &mut rand::thread_rng()),
    };
    let gpu = render::GpuState::new(&canvas, &scene.particles)
        .await
        .map_err(MountError::Gpu)?;
    let scene = Rc::new(RefCell::new(scene));

    let mut listeners = vec![
        events::wire_resize(
            &window,
            events::resize::ResizeWiring {
                canvas: canvas.clone(),
                scene: scene.clone(),
                input_state: input_state.clone(),
            },
        ),
        events::wire_pointermove(&window, input_state.clone()),
    ];

    // The panel is cosmetic; a failure here leaves the backdrop running
    let panel = match build_panel(&document, &config, &scene) {
        Ok(p) => {
            listeners.push(events::wire_panel_toggle(&window, p.clone()));
            Some(p)
        }
        Err(e) => {
            log::warn!("[panel] disabled: {:#}", e);
            None
        }
    };

    {
        let s = scene.borrow();
        let st = input_state.borrow();
        log::info!(
            "[mount] particles={} viewport={}x{} pixel_ratio={} color={} light={}@{:?}",
            s.particles.len(),
            st.viewport.width,
            st.viewport.height,
            st.pixel_ratio,
            s.material.color,
            s.light.color,
            s.light.position.to_array()
        );
        let (low, high) = s
            .particles
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        log::debug!(
            "[mount] particle band y={:.2}..{:.2}, {} section(s) of {}",
            low,
            high,
            ((high - low) / s.object_distance()).ceil(),
            s.object_distance()
        );
    }

    let frame_loop = frame::start_loop(
        &window,
        frame::FrameContext {
            window: window.clone(),
            canvas,
            scene,
            input: input_state,
            gpu,
            started: Instant::now(),
            clock: FrameClock::new(),
        },
    );

    Ok(Mount {
        frame_loop,
        listeners,
        panel,
    })
}

fn build_panel(
    document: &web::Document,
    config: &SceneConfig,
    scene: &Rc<RefCell<Scene>>,
) -> anyhow::Result<Rc<panel::DebugPanel>> {
    let panel = panel::DebugPanel::new(document, DEBUG_PANEL_ID, config.show_debug_panel)?;
    let scene_color = scene.clone();
    panel.add_color("materialColor", config.material_color, move |color| {
        scene_color.borrow_mut().set_material_color(color);
        log::debug!("[panel] materialColor={}", color);
    })?;
    Ok(Rc::new(panel))
}
