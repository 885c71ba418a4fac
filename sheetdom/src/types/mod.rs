mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Align, Backdrop, Border, Direction, Justify, Overflow, Position, Size};
pub use style::Style;
