use thiserror::Error;
use util::{error::GridError, position::Position};

use crate::SearchResult;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("search endpoint {0} is not passable")]
    ImpassableEndpoint(Position),
    #[error("search already finished with {0:?}")]
    Terminated(SearchResult),
}
