pub mod use_activity_info;
pub mod use_open_install;

pub use use_activity_info::*;
pub use use_open_install::*;
