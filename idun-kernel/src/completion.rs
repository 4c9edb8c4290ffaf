//! Argument completion backed by the session's last fuzzy match.

use crate::state::SessionState;

/// Commands whose file argument completes to the last `ff` result.
const FILE_TAKING: [&str; 3] = ["run", "show", "zload"];

/// Completion candidates for `command`.
///
/// The recorded last match is the sole candidate for the file-taking
/// commands; every other command completes to nothing.
pub fn candidates(state: &SessionState, command: &str) -> Vec<String> {
    if FILE_TAKING.contains(&command) {
        state.last_match().map(str::to_string).into_iter().collect()
    } else {
        Vec::new()
    }
}
