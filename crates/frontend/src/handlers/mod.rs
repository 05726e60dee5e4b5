//! Page lifecycle handlers

pub mod login;
pub mod replay;

pub use login::{LoginOutcome, LoginSubmitHandler};
pub use replay::{FALLBACK_HTML, ReplayOutcome, TokenReplayHandler};
