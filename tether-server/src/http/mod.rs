mod routes;

pub use routes::*;
