//! Value helpers shared by the service clients.

pub mod money;
pub mod order_id;
pub mod timestamp;

pub use money::OutOfRange;
pub use order_id::{create_uid, ensure_order_id};
pub use timestamp::{from_timestamp, to_timestamp};
