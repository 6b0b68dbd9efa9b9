use crate::error::TierlistError;

pub type TierlistResult<T> = Result<T, TierlistError>;
