//! Sky Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent};

    use sky_hop::input::Key;
    use sky_hop::renderer::CanvasSurface;
    use sky_hop::{Driver, FrameStatus, Tuning};

    /// Game instance holding all state
    struct Game {
        driver: Driver,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Sky Hop starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let seed = js_sys::Date::now() as u64;
        let driver = Driver::with_tuning(seed, Tuning::load())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // The canvas follows the simulated view
        canvas.set_width(driver.state.tuning.view_width as u32);
        canvas.set_height(driver.state.tuning.view_height as u32);

        let game = Rc::new(RefCell::new(Game {
            driver,
            surface: CanvasSurface::new(&canvas)?,
        }));

        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Sky Hop running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().driver.input.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().driver.input.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().driver.input.clear();
                log::debug!("Input released (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop not scheduled");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = {
            let mut g = game.borrow_mut();
            let Game { driver, surface } = &mut *g;
            driver.frame(surface)
        };

        match status {
            FrameStatus::Continue => request_animation_frame(game),
            FrameStatus::Stopped => {
                let g = game.borrow();
                log::info!("Run finished with score {}", g.driver.state.score);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_hop::driver::Autopilot;
    use sky_hop::{Driver, Tuning};
    use sky_hop::renderer::RecordingSurface;

    /// Safety stop for the demo run
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Sky Hop (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut driver = match Driver::with_tuning(seed, Tuning::load()) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{}; using default tuning", e);
            Driver::new(seed)
        }
    };
    let mut surface = RecordingSurface::new();
    let mut pilot = Autopilot::default();

    let snapshot = driver.run_headless(&mut surface, MAX_FRAMES, |state, input| {
        log_progress(state);
        pilot.control(state, input);
    });

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize run summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn log_progress(state: &sky_hop::sim::GameState) {
    if state.frame > 0 && state.frame % 600 == 0 {
        log::info!(
            "frame {}: score {}, {} platforms, {} obstacles",
            state.frame,
            state.score,
            state.platforms.len(),
            state.obstacles.len()
        );
    }
}
