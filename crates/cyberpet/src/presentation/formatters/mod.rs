pub mod html;
pub mod text;

pub use html::{Escaped, escape};
pub use text::head;
