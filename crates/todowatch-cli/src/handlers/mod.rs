pub mod list;
pub mod providers;
pub mod watch;
