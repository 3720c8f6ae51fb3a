//! Reading window text properties (WM_NAME and friends).

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt, Window};

use crate::strutil::strncpy;

/// Fetches a window's text property into `dst`.
///
/// Returns `false` with `dst` cleared to `""` when the property
/// cannot be read or is empty. `STRING` properties are copied raw;
/// anything else is treated as an X text list and its first element
/// is taken. `dst` ends NUL-terminated on every path, truncating
/// oversized values silently.
pub fn get_text_prop(conn: &impl Connection, window: Window, atom: Atom, dst: &mut [u8]) -> bool {
    if dst.is_empty() {
        return false;
    }
    dst[0] = 0;

    let Ok(cookie) = conn.get_property(false, window, atom, AtomEnum::ANY, 0, u32::MAX) else {
        return false;
    };
    let Ok(reply) = cookie.reply() else {
        return false;
    };
    if reply.value_len == 0 {
        return false;
    }

    if reply.type_ == u32::from(AtomEnum::STRING) {
        strncpy(dst, &reply.value, dst.len() - 1);
    } else if let Some(first) = first_text_item(&reply.value) {
        strncpy(dst, first.as_bytes(), dst.len() - 1);
    }
    // The property existed even if conversion produced nothing.

    if let Some(last) = dst.last_mut() {
        *last = 0;
    }
    true
}

/// First element of a NUL-separated X text list, if it decodes.
fn first_text_item(value: &[u8]) -> Option<&str> {
    let first = value.split(|&b| b == 0).next().unwrap_or(&[]);
    std::str::from_utf8(first).ok()
}
