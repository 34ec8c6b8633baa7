mod room_relay;

pub use room_relay::*;
