use thiserror::Error;

use crate::catalogue::CatalogueError;
use crate::model::QuestionError;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
