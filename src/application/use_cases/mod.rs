pub mod launch;
pub mod waitlist;
