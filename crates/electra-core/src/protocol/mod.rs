//! The two Electra remote protocols and the framing contract they share.

pub mod green;
pub mod layout;
pub mod orange;
pub mod remote;

pub use green::GreenRemote;
pub use layout::{BitField, ByteField};
pub use orange::OrangeRemote;
pub use remote::{Remote, RemoteProtocol};
