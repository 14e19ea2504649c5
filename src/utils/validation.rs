use std::collections::HashMap;

use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// How many numbers a round is played with
pub const NUMBER_COUNT: usize = 6;
pub const MIN_TARGET: i64 = 100;
pub const MAX_TARGET: i64 = 999;

const BIG_NUMBERS: [i64; 4] = [25, 50, 75, 100];

/// How often `number` may appear in one round, `None` if it is not a card
pub fn allowed_instances(number: i64) -> Option<usize> {
    if (1..=10).contains(&number) {
        Some(2)
    } else if BIG_NUMBERS.contains(&number) {
        Some(1)
    } else {
        None
    }
}

/// # Errors
///
/// Returns an error if the target is outside `100..=999`.
pub fn validate_target(target: i64) -> Result<(), UtilsError> {
    if !(MIN_TARGET..=MAX_TARGET).contains(&target) {
        warn!("Target {} is out of range", target);
        return Err(UtilsError::TargetOutOfRange {
            target,
            min: MIN_TARGET,
            max: MAX_TARGET,
        });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if there are not exactly six numbers, if any number is
/// not a card of the game, or if a card appears more often than allowed.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.len() != NUMBER_COUNT {
        warn!("Got {} numbers instead of {}", numbers.len(), NUMBER_COUNT);
        return Err(UtilsError::WrongNumberCount {
            expected: NUMBER_COUNT,
            actual: numbers.len(),
        });
    }

    let mut used: HashMap<i64, usize> = HashMap::new();
    for &number in numbers {
        let Some(allowed) = allowed_instances(number) else {
            warn!("{} is not a valid number", number);
            return Err(UtilsError::InvalidNumber(number));
        };

        let count = used.entry(number).or_default();
        *count += 1;
        if *count > allowed {
            warn!("{} appears more than {} times", number, allowed);
            return Err(UtilsError::TooManyInstances { number, allowed });
        }
    }

    debug!("Number validation successful");
    Ok(())
}
