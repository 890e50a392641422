// Contact Book - Core Library
// Exposes the directory, menu and command loop for the CLI and tests

pub mod config;
pub mod directory;
pub mod menu;
pub mod phone;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use config::{DeleteConfirmation, SessionConfig, UnknownChoice};
pub use directory::{ContactDirectory, DirectoryError, Entry, Listing};
pub use phone::{PhoneError, PhoneNumber};
pub use menu::{ChoiceError, MenuChoice, CHOICE_PROMPT, MENU_TEXT};
pub use render::{render_listing, Painter, EMPTY_BOOK};
pub use session::{Session, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
