use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("patrol route must contain at least one waypoint")]
    EmptyPatrolRoute,

    #[error("stopping distance {0} must be positive")]
    InvalidStoppingDistance(f32),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
