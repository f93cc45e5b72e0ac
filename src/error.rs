use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// No Node satisfying the goal can be reached, or none within the configured Cost ceiling.
	#[error("No path found")]
	PathNotFound,

	/// The bookkeeping of a search does not lead back to the start.
	///
	/// This never happens with a correct successor Function and indicates a bug.
	#[error("Inconsistent search state: {0}")]
	InconsistentState(String),
}

impl SearchError {
	/// Returns `true` if no Path exists under the given constraints.
	///
	/// ```
	/// # use implicit_pathfinding::SearchError;
	/// assert!(SearchError::PathNotFound.is_path_not_found());
	/// assert!(!SearchError::InconsistentState(String::new()).is_path_not_found());
	/// ```
	pub fn is_path_not_found(&self) -> bool {
		matches!(self, SearchError::PathNotFound)
	}
}

/// Result when a search might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
