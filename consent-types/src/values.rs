//! Well-known consent value tokens.

pub const GRANTED: &str = "granted";
pub const DENIED: &str = "denied";
pub const DO_NOT_TRACK: &str = "do_not_track";
