mod list;
mod text_input;

pub use list::{ListItem, SelectList};
pub use text_input::{CHAR_LIMIT, PLACEHOLDER, TextInput};
