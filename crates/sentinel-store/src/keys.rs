//! The fixed keys of the persisted device-store layout.
//!
//! Four independently-keyed fields; each is read and rewritten in full.

/// JSON array of registered accounts. Written by registration.
pub const USERS: &str = "users";

/// JSON boolean: whether a session is authenticated. Written by login and
/// logout.
pub const AUTH_STATE: &str = "auth_state";

/// JSON account record of the signed-in user, or absent. Written by login
/// and logout.
pub const CURRENT_USER: &str = "currentUser";

/// JSON boolean: whether the detection workflow completed this session.
pub const DETECTION_COMPLETE: &str = "detection_complete";
