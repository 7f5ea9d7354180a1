use scrollhero_game::frame::{Frame, Hud};

/// Consumes frames produced by the session loop. Implementations own
/// their presentation; the simulation never waits on a renderer.
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Headless renderer that reports HUD changes and banners through
/// tracing instead of drawing.
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_hud: Option<Hud>,
    last_overlay: Option<String>,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame) {
        if frame.overlay != self.last_overlay {
            if let Some(text) = &frame.overlay {
                tracing::info!(%text, "banner");
            }
            self.last_overlay = frame.overlay.clone();
        }
        if self.last_hud != Some(frame.hud) {
            tracing::info!(
                score = frame.hud.score,
                health = frame.hud.health,
                level = frame.hud.level,
                "hud"
            );
            self.last_hud = Some(frame.hud);
        }
    }
}
