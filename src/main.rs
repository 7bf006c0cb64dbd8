//! Horizon Velocity entry point
//!
//! Owns the per-frame loop and all browser plumbing: canvas sizing, pointer
//! and touch input, overlay/HUD switching, and loop cancellation. The
//! simulation itself lives in `horizon_velocity::sim` and never touches the
//! DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use horizon_velocity::audio::{AudioManager, SoundCue};
    use horizon_velocity::renderer::Painter;
    use horizon_velocity::sim::{GamePhase, GameState, tick};

    /// Game instance holding the simulation and its drawing surface
    struct Game {
        state: GameState,
        painter: Painter,
    }

    /// Handle for the recurring animation-frame schedule.
    ///
    /// The scheduling primitive has no ownership check of its own, so the
    /// pending request id is tracked here and invalidated on cancel; a
    /// cancelled loop can never tick against a destroyed surface.
    struct FrameLoop {
        raf_id: Cell<Option<i32>>,
        cancelled: Cell<bool>,
    }

    impl FrameLoop {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                raf_id: Cell::new(None),
                cancelled: Cell::new(false),
            })
        }

        fn cancel(&self) {
            self.cancelled.set(true);
            if let Some(id) = self.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }
    }

    thread_local! {
        static FRAME_LOOP: RefCell<Option<Rc<FrameLoop>>> = const { RefCell::new(None) };
    }

    /// Cancel the frame loop when the surrounding page unmounts the game
    pub fn unmount() {
        FRAME_LOOP.with(|slot| {
            if let Some(frame_loop) = slot.borrow_mut().take() {
                frame_loop.cancel();
                log::info!("frame loop cancelled");
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Horizon Velocity starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = fit_canvas(&canvas);

        let seed = js_sys::Date::now() as u64;
        let painter = Painter::new(canvas.clone()).expect("no 2d context");
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, width, height),
            painter,
        }));
        let audio = Rc::new(AudioManager::new());

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        setup_overlay_buttons(game.clone(), audio);

        let frame_loop = FrameLoop::new();
        FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop.clone()));
        request_frame(frame_loop, game);

        log::info!("Horizon Velocity running!");
    }

    /// Match the canvas backing store to its container so surface pixels map
    /// 1:1 to CSS pixels and event offsets are surface coordinates
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let (w, h) = match canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        canvas.set_width(w.max(1) as u32);
        canvas.set_height(h.max(1) as u32);
        (w as f32, h as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - offset coords are already canvas-relative
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .state
                    .pointer_moved(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().state.pointer_moved(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            game.borrow_mut().state.resize(width, height);
            log::info!("surface resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_overlay_buttons(game: Rc<RefCell<Game>>, audio: Rc<AudioManager>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // Launch button on the start overlay
        if let Some(btn) = document.get_element_by_id("launch-btn") {
            {
                let game = game.clone();
                let audio = audio.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    audio.resume();
                    audio.play(SoundCue::Click);
                    game.borrow_mut().state.start();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            {
                let audio = audio.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    audio.play(SoundCue::Hover);
                });
                let _ = btn.add_event_listener_with_callback(
                    "mouseenter",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }

        // Retry button on the game-over panel
        if let Some(btn) = document.get_element_by_id("retry-btn") {
            {
                let game = game.clone();
                let audio = audio.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    audio.resume();
                    audio.play(SoundCue::Click);
                    game.borrow_mut().state.restart();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    audio.play(SoundCue::Hover);
                });
                let _ = btn.add_event_listener_with_callback(
                    "mouseenter",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn request_frame(frame_loop: Rc<FrameLoop>, game: Rc<RefCell<Game>>) {
        if frame_loop.cancelled.get() {
            return;
        }
        let window = web_sys::window().expect("no window");
        let next = frame_loop.clone();
        let closure = Closure::once(move |_time: f64| {
            frame(next, game);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => frame_loop.raf_id.set(Some(id)),
            Err(_) => log::warn!("requestAnimationFrame refused - frame loop halted"),
        }
        closure.forget();
    }

    fn frame(frame_loop: Rc<FrameLoop>, game: Rc<RefCell<Game>>) {
        if frame_loop.cancelled.get() {
            return;
        }
        frame_loop.raf_id.set(None);

        {
            let mut g = game.borrow_mut();

            if !g.painter.is_attached() {
                // Surface is gone: skip the tick and stop rescheduling
                log::warn!("drawing surface detached - halting the frame loop");
                return;
            }

            tick(&mut g.state);

            if g.state.phase == GamePhase::Running {
                // Flame flicker is render-only randomness; the sim stays
                // deterministic under its seed
                let flame_length = 10.0 + js_sys::Math::random() as f32 * 20.0;
                g.painter.draw_frame(&g.state, flame_length);
            }

            update_hud(&g.state);
        }

        request_frame(frame_loop, game);
    }

    /// Overlay UI polls the public signals (score, best, phase) once per frame
    fn update_hud(state: &GameState) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(el) = document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&state.score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("hud-best") {
            el.set_text_content(Some(&state.best_score.to_string()));
        }

        // Start overlay shows only while idle
        if let Some(el) = document.get_element_by_id("start-overlay") {
            let class = if state.phase == GamePhase::Idle {
                "game-overlay"
            } else {
                "game-overlay hidden"
            };
            let _ = el.set_attribute("class", class);
        }

        // Game-over panel with the final score
        if let Some(el) = document.get_element_by_id("gameover-overlay") {
            if state.phase == GamePhase::Over {
                let _ = el.set_attribute("class", "game-overlay");
                if let Some(score_el) = document.get_element_by_id("final-score") {
                    score_el.set_text_content(Some(&state.score.to_string()));
                }
            } else {
                let _ = el.set_attribute("class", "game-overlay hidden");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Cancel the frame loop when the surrounding page unmounts the game section
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_game::unmount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Horizon Velocity (native) starting...");
    log::info!("The game is web-only - run with `trunk serve` for the playable version");

    println!("\nRunning headless demo session...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use horizon_velocity::sim::{GamePhase, GameState, tick};

    let mut state = GameState::new(4242, 800.0, 450.0);
    state.start();

    for t in 0..2000u32 {
        // Sweep the ship back and forth across the surface
        let x = 400.0 + 350.0 * ((t as f32) * 0.01).sin();
        state.pointer_moved(x);
        tick(&mut state);
        if state.phase == GamePhase::Over {
            break;
        }
    }

    println!(
        "✓ demo session: {} ticks, score {}, {} obstacles live, phase {:?}",
        state.tick_count,
        state.score,
        state.obstacles.len(),
        state.phase
    );
}
