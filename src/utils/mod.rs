//! Input checks for a round of the numbers game

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::{
    MAX_TARGET, MIN_TARGET, NUMBER_COUNT, allowed_instances, validate_numbers, validate_target,
};
