//! Headless driver: wires a detection feed to the drawing session.
//!
//! Reads sidecar detection lines from stdin, applies each frame to the
//! session and the software raster, logs the resulting UI actions, and
//! exports the drawing as a timestamped PNG when the feed ends.
//!
//! `aircanvas chat <message>` instead sends one message to the AI side-panel
//! service and prints the reply (or the fallback text on failure).

use std::io::BufReader;
use std::time::Instant;

use aircanvas::chat::{self, ChatClient};
use aircanvas::raster::{Raster, export_filename, now_ms};
use aircanvas::session::{Action, Session};
use aircanvas::tracker::{Detection, FrameReader};

const DEFAULT_CANVAS_WIDTH: u32 = 1280;
const DEFAULT_CANVAS_HEIGHT: u32 = 720;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if let [_, cmd, message] = args.as_slice()
        && cmd == "chat"
    {
        run_chat(message).await;
        return;
    }

    run_draw_loop();
}

/// One-shot side-panel exchange.
async fn run_chat(message: &str) {
    let client = ChatClient::from_env().expect("chat client configuration failed");
    let reply = chat::reply_or_fallback(&client, message).await;
    println!("{reply}");
}

/// Frame loop: stdin detection lines in, PNG out at end of feed.
fn run_draw_loop() {
    let width = env_parse("CANVAS_WIDTH", DEFAULT_CANVAS_WIDTH);
    let height = env_parse("CANVAS_HEIGHT", DEFAULT_CANVAS_HEIGHT);

    let mut raster = Raster::new(width, height);
    let mut session = Session::new();
    // Seed history with the blank canvas so the first undo lands somewhere.
    session.capture_snapshot(&raster);

    tracing::info!(width, height, "air canvas session started");

    let stdin = std::io::stdin();
    let mut reader = FrameReader::new(BufReader::new(stdin.lock()));

    loop {
        let detection = match reader.next_detection() {
            Ok(Some(detection)) => detection,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable detection record");
                continue;
            }
        };

        let frame = match detection {
            Detection::Hand(frame) => Some(frame),
            Detection::NoHand => None,
        };

        let now = Instant::now();
        for action in session.on_frame(frame.as_ref(), now, &mut raster) {
            apply_action(&action, &mut session, &mut raster);
        }
        for action in session.tick(Instant::now()) {
            apply_action(&action, &mut session, &mut raster);
        }
    }

    let png = raster.to_png_bytes().expect("png encode failed");
    let filename = export_filename(now_ms());
    std::fs::write(&filename, png).expect("export write failed");
    tracing::info!(%filename, "drawing exported");
}

/// Stand-in for the UI layer: log affordances, accept the clear gate.
fn apply_action(action: &Action, session: &mut Session, raster: &mut Raster) {
    match action {
        Action::Status { text, .. } => tracing::debug!(status = %text),
        Action::CursorShown { x, y } => tracing::trace!(x = *x, y = *y, "cursor"),
        Action::CursorHidden => tracing::trace!("cursor hidden"),
        Action::ColorChanged(hex) => tracing::info!(color = %hex, "brush color changed"),
        Action::ClearRequested => {
            // Headless stand-in for the confirmation dialog.
            tracing::info!("clear hold elapsed; clearing canvas");
            for follow_up in session.confirm_clear(raster) {
                if let Action::Status { text, .. } = follow_up {
                    tracing::debug!(status = %text);
                }
            }
        }
        Action::ReminderShown => tracing::info!("gesture reminder shown"),
        Action::ReminderHidden => tracing::trace!("gesture reminder hidden"),
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
