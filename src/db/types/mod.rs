mod code;
mod new_chat;
mod title;

pub use code::*;
pub use new_chat::*;
pub use title::*;
