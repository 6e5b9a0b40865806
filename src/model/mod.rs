//! Wire-format transfer objects shared by the HTTP layer.
//!
//! These types are serialized as JSON request and response bodies and carry the
//! OpenAPI schema derives. They hold no persistence concerns; conversion to and from
//! domain models lives in `server::model`.

pub mod api;
pub mod park;
pub mod trail;
