//! Widgets for the chat screen.

mod delete_dialog;
mod disclaimer;
mod footer_hints;
mod header;
mod help;
mod input_bar;
mod sidebar;
mod transcript;

pub use delete_dialog::DeleteDialogOverlay;
pub use disclaimer::Disclaimer;
pub use footer_hints::{FooterHints, KeyHint};
pub use header::Header;
pub use help::HelpOverlay;
pub use input_bar::{InputBar, PLACEHOLDER};
pub use sidebar::Sidebar;
pub use transcript::{max_scroll, transcript_lines, Transcript};
