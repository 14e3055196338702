//! Opaque handle spellings.
//!
//! Handles resolve to a signed platform-width integer. Their `P`/`LP`
//! pointer variants are not enumerated; the reference-alias stage strips the
//! prefix and checks this set instead.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const HANDLE_TYPES: &[&str] = &[
    "HANDLE",
    "HACCEL",
    "HBITMAP",
    "HBRUSH",
    "HCOLORSPACE",
    "HCONV",
    "HCONVLIST",
    "HCURSOR",
    "HDC",
    "HDDEDATA",
    "HDESK",
    "HDROP",
    "HDWP",
    "HENHMETAFILE",
    "HFONT",
    "HGDIOBJ",
    "HGLOBAL",
    "HHOOK",
    "HICON",
    "HINSTANCE",
    "HKEY",
    "HKL",
    "HLOCAL",
    "HMENU",
    "HMETAFILE",
    "HMODULE",
    "HMONITOR",
    "HPALETTE",
    "HPEN",
    "HRGN",
    "HRSRC",
    "HSZ",
    "HWINSTA",
    "HWND",
    "SC_HANDLE",
    "SERVICE_STATUS_HANDLE",
    "ADCONNECTION_HANDLE",
    "LDAP_UDP_HANDLE",
    "PCONTEXT_HANDLE",
    "RPC_BINDING_HANDLE",
];

static HANDLES: Lazy<HashSet<&'static str>> = Lazy::new(|| HANDLE_TYPES.iter().copied().collect());

pub fn is_handle_type(token: &str) -> bool {
    HANDLES.contains(token)
}

/// All known handle spellings.
pub fn handle_types() -> &'static [&'static str] {
    HANDLE_TYPES
}

/// If `token` is `P<Handle>` or `LP<Handle>`, return the handle spelling.
pub fn strip_handle_pointer(token: &str) -> Option<&str> {
    let by_long_prefix = token.strip_prefix("LP").filter(|rest| is_handle_type(rest));
    by_long_prefix.or_else(|| token.strip_prefix('P').filter(|rest| is_handle_type(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_handle_pointer() {
        assert_eq!(strip_handle_pointer("PHWND"), Some("HWND"));
        assert_eq!(strip_handle_pointer("LPHINSTANCE"), Some("HINSTANCE"));
        assert_eq!(strip_handle_pointer("HWND"), None);
        assert_eq!(strip_handle_pointer("PDWORD"), None);
    }

    #[test]
    fn test_handle_pointer_that_is_itself_a_handle() {
        // PCONTEXT_HANDLE is a handle; its own pointer form is PPCONTEXT_HANDLE
        assert!(is_handle_type("PCONTEXT_HANDLE"));
        assert_eq!(strip_handle_pointer("PPCONTEXT_HANDLE"), Some("PCONTEXT_HANDLE"));
    }
}
