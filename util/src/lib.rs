pub mod color;
pub mod error;
pub mod mapping;
pub mod piece;
pub mod position;

pub use color::Color;
pub use error::GridError;
pub use mapping::Mapping2D;
pub use piece::Piece;
pub use position::Position;
