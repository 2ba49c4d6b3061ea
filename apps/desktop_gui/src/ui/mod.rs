//! UI layer: app shell, the two cards, and theme.

pub mod app;
pub mod landing;
pub mod signup;
pub mod theme;

pub use app::WaitlistApp;
