//! Terminal frontend: framebuffer, view and renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Frame, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
