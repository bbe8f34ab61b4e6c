mod delivery;
mod message_sender;
mod producer_settings;
mod producer_wrapper;
mod record_sink;

pub use delivery::*;
pub use message_sender::*;
pub use producer_settings::*;
pub use producer_wrapper::*;
pub use record_sink::*;
