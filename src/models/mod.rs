pub mod activity;
pub mod message;

pub use activity::{Activity, ActivityName};
pub use message::MessageResponse;
