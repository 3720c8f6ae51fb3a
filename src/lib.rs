//! Utility routines for an x11rb-based window manager: bounded string
//! copies into fixed buffers, detached command spawning with
//! per-screen `DISPLAY` rewriting, window text-property retrieval,
//! and argument parsing for relative/absolute value commands.

pub mod fatal;
pub mod spawn;
pub mod strutil;
pub mod textprop;
pub mod value;

pub use spawn::{rewrite_display, xinerama_is_active, SpawnError, Spawner};
pub use strutil::{strcpy, strlen, strncpy};
pub use textprop::get_text_prop;
pub use value::compute_new_value;
