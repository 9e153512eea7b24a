use crate::storage::{SaveError, Storage};

/// The storage key under which the high score is kept
pub(crate) const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Read the high score from storage.  A missing or malformed value counts as
/// zero.
pub(crate) fn load_high_score<S: Storage>(storage: &S) -> u32 {
    let Some(value) = storage.get_item(HIGH_SCORE_KEY) else {
        return 0;
    };
    match value.trim().parse::<u32>() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("Ignoring malformed stored high score {value:?}: {e}");
            0
        }
    }
}

pub(crate) fn save_high_score<S: Storage>(storage: &mut S, score: u32) -> Result<(), SaveError> {
    log::info!("Saving new high score: {score}");
    storage.set_item(HIGH_SCORE_KEY, score.to_string())
}

pub(crate) fn reset_high_score<S: Storage>(storage: &mut S) -> Result<(), SaveError> {
    log::info!("Clearing stored high score");
    storage.remove_item(HIGH_SCORE_KEY)
}
