use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerceptionError {
    #[error("field-of-view half-angle {0}° must lie strictly between 0° and 180°")]
    InvalidFieldOfView(f32),
}

pub type PerceptionResult<T> = Result<T, PerceptionError>;
