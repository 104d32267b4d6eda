//! Puff Swing entry point
//!
//! Web: drives the swing from `requestAnimationFrame` and writes each frame
//! into the page. Native: runs a headless session and prints a JSON trace.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent, TouchEvent};

    use puff_swing::scene::{Lang, PUSH_BUBBLE_SCALE, hint};
    use puff_swing::session::SessionFrame;
    use puff_swing::sim::Zone;
    use puff_swing::{Session, Tuning};

    /// Element ids the page must provide
    const SCENE_ID: &str = "scene";
    const SWING_ID: &str = "swing";
    const RIDER_ID: &str = "rider";
    const BUBBLE_ID: &str = "bubble";
    const MESSAGE_ID: &str = "message";
    const HINT_ID: &str = "hint";
    const FLASH_ID: &str = "push-flash";

    /// Page elements touched every frame
    struct View {
        scene: Option<Element>,
        swing: Option<Element>,
        rider: Option<Element>,
        bubble: Option<Element>,
        message: Option<Element>,
        flash: Option<Element>,
    }

    impl View {
        fn find(document: &Document) -> Self {
            let lookup = |id: &str| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::warn!("Element #{} not found, skipping it", id);
                }
                el
            };
            Self {
                scene: lookup(SCENE_ID),
                swing: lookup(SWING_ID),
                rider: lookup(RIDER_ID),
                bubble: lookup(BUBBLE_ID),
                message: lookup(MESSAGE_ID),
                flash: lookup(FLASH_ID),
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        view: View,
        lang: Lang,
        /// Zone last written to the page
        shown_zone: Option<Zone>,
        shown_feedback: bool,
    }

    impl Game {
        fn new(session: Session, view: View, lang: Lang) -> Self {
            Self {
                session,
                view,
                lang,
                shown_zone: None,
                shown_feedback: false,
            }
        }

        fn push(&mut self, now_ms: f64) {
            self.session.request_push(now_ms);
        }

        /// Run one tick and update the page
        fn update(&mut self, time: f64) {
            let out = self.session.advance(time);
            self.render(&out);
        }

        fn render(&mut self, out: &SessionFrame) {
            if let Some(swing) = &self.view.swing {
                let style = format!("transform: rotate({:.3}deg)", out.frame.rotation_deg());
                let _ = swing.set_attribute("style", &style);
            }

            // Zone-driven parts only change on transitions
            if self.shown_zone != Some(out.frame.zone) {
                self.render_zone(out.frame.zone);
                self.shown_zone = Some(out.frame.zone);
            }

            if self.shown_feedback != out.push_feedback {
                self.render_feedback(out.push_feedback);
                self.shown_feedback = out.push_feedback;
            }
        }

        fn render_zone(&self, zone: Zone) {
            let p = self.session.presentation();

            if let Some(scene) = &self.view.scene {
                let _ = scene.set_attribute("style", &format!("background: {}", p.sky.css()));
                let _ = scene.set_attribute("data-zone", zone.as_str());
            }
            if let Some(rider) = &self.view.rider {
                let _ = rider.set_attribute("data-mood", p.mood.as_str());
                for (name, value) in p.mood.face().data_attributes() {
                    let _ = rider.set_attribute(name, value);
                }
            }
            if let Some(message) = &self.view.message {
                message.set_text_content(Some(p.message.text(self.lang)));
                let _ = message.set_attribute("style", &format!("color: {}", p.style.color));
                let _ = message.set_attribute("class", p.style.emphasis.css_class());
            }
        }

        fn render_feedback(&self, active: bool) {
            let scale = if active { PUSH_BUBBLE_SCALE } else { 1.0 };
            if let Some(bubble) = &self.view.bubble {
                let _ = bubble.set_attribute("style", &format!("transform: scale({})", scale));
            }
            if let Some(flash) = &self.view.flash {
                let _ = flash.set_attribute("class", if active { "" } else { "hidden" });
            }
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Puff Swing starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window, not starting");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document, not starting");
            return;
        };

        let lang = document
            .document_element()
            .and_then(|el| el.get_attribute("lang"))
            .and_then(|tag| Lang::from_str(&tag))
            .unwrap_or_default();

        if let Some(el) = document.get_element_by_id(HINT_ID) {
            el.set_text_content(Some(hint(lang)));
        }

        let session = match Session::with_tuning(Tuning::default()) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Failed to start swing: {}", e);
                return;
            }
        };

        let view = View::find(&document);
        let scene = view.scene.clone();
        let game = Rc::new(RefCell::new(Game::new(session, view, lang)));

        match scene {
            Some(scene) => setup_input_handlers(&scene, game.clone()),
            None => log::error!("No #{} element, the swing cannot be pushed", SCENE_ID),
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Puff Swing running!");
    }

    fn setup_input_handlers(scene: &Element, game: Rc<RefCell<Game>>) {
        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().push(now_ms());
            });
            let _ = scene
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                // Stop the emulated mousedown from pushing a second time
                event.prevent_default();
                game.borrow_mut().push(now_ms());
            });
            let _ = scene
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard, while the scene has focus
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if matches!(event.key().as_str(), " " | "Enter") {
                    event.prevent_default();
                    game.borrow_mut().push(now_ms());
                }
            });
            let _ = scene
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod trace {
    use std::io::{self, BufWriter, Write};

    use puff_swing::sim::Zone;
    use puff_swing::{Session, Tuning, frame_ms};

    pub const DEFAULT_FRAMES: u64 = 600;
    pub const DEFAULT_PUSH_EVERY: u64 = 45;

    /// Trace run parameters
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct TraceArgs {
        pub frames: u64,
        /// Push every N frames during the first half; 0 never pushes
        pub push_every: u64,
    }

    impl Default for TraceArgs {
        fn default() -> Self {
            Self {
                frames: DEFAULT_FRAMES,
                push_every: DEFAULT_PUSH_EVERY,
            }
        }
    }

    impl TraceArgs {
        /// `[frames] [push_every]`; anything unparseable keeps its default
        pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
            let mut parsed = Self::default();
            let mut args = args.into_iter();

            if let Some(arg) = args.next() {
                match arg.parse() {
                    Ok(frames) => parsed.frames = frames,
                    Err(_) => log::warn!("Ignoring frame count {:?}, using {}", arg, parsed.frames),
                }
            }
            if let Some(arg) = args.next() {
                match arg.parse() {
                    Ok(every) => parsed.push_every = every,
                    Err(_) => log::warn!(
                        "Ignoring push interval {:?}, using {}",
                        arg,
                        parsed.push_every
                    ),
                }
            }
            parsed
        }
    }

    /// Run a scripted session, one JSON line per frame
    pub fn run<W: Write>(args: TraceArgs, out: W) -> io::Result<()> {
        let mut out = BufWriter::new(out);
        let mut session = Session::with_tuning(Tuning::default())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut zone_ticks = [0u64; Zone::ALL.len()];
        let mut peak_amplitude: f64 = 0.0;

        for i in 0..args.frames {
            let now = i as f64 * frame_ms();
            if args.push_every > 0 && i < args.frames / 2 && i % args.push_every == 0 {
                session.request_push(now);
            }

            let frame = session.advance(now);
            zone_ticks[frame.frame.zone.index()] += 1;
            peak_amplitude = peak_amplitude.max(frame.frame.amplitude_deg);

            serde_json::to_writer(&mut out, &frame)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        let histogram: Vec<String> = Zone::ALL
            .iter()
            .map(|z| format!("{}={}", z, zone_ticks[z.index()]))
            .collect();
        log::info!(
            "Traced {} frames: {} (peak amplitude {:.1}°)",
            args.frames,
            histogram.join(" "),
            peak_amplitude
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Puff Swing (native) starting...");
    log::info!("Native mode prints a headless trace - run with `trunk serve` for the web version");

    let args = trace::TraceArgs::parse(std::env::args().skip(1));
    let stdout = std::io::stdout();
    if let Err(e) = trace::run(args, stdout.lock()) {
        log::error!("Trace failed: {}", e);
        std::process::exit(1);
    }
}
