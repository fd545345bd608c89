mod answered;
mod question;
mod results;

pub use self::answered::*;
pub use self::question::*;
pub use self::results::*;
