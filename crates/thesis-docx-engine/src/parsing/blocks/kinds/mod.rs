pub mod emphasis_line;
pub mod heading;
pub mod list_item;
pub mod note_reference;
pub mod table_row;
pub mod thematic_break;

pub use emphasis_line::EmphasisLine;
pub use heading::Heading;
pub use list_item::ListItem;
pub use note_reference::NoteReference;
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
