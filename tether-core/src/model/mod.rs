mod room;
mod session;
mod signaling;

pub use room::{RoomId, STREAM_ROOM};
pub use session::{ParseSessionIdError, SessionId};
pub use signaling::{ClientEvent, ServerEvent};
