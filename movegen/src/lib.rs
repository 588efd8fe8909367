pub mod board;
pub mod display;
pub mod movegen;
pub mod parse;
pub mod pointer;
pub mod weight_map;

pub use board::{Board, Square};
pub use movegen::MovementRule;
pub use parse::layout::Layout;
pub use pointer::ChessPointer;
pub use weight_map::{create_weight_map, WeightSettings};

pub use util::{Color, GridError, Mapping2D, Piece, Position};
