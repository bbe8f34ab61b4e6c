mod auto_offset_reset;
mod consume_loop;
mod consumer_settings;
mod consumer_wrapper;
mod message_handler;
mod offset_ledger;
mod record;
mod record_source;

pub use auto_offset_reset::*;
pub use consume_loop::*;
pub use consumer_settings::*;
pub use consumer_wrapper::*;
pub use message_handler::*;
pub use offset_ledger::*;
pub use record::*;
pub use record_source::*;
