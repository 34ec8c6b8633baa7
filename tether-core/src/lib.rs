pub mod model;

pub use model::{
    ClientEvent, ParseSessionIdError, RoomId, STREAM_ROOM, ServerEvent, SessionId,
};
