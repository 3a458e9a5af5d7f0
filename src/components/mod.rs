pub mod header;
pub mod waitlist;
