// User-facing text shown by the recommendation widget.

/// Blocking notice for blank skill input.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter at least one skill.";

/// Single list item rendered when the backend returns no titles.
pub const NO_RECOMMENDATIONS_ITEM: &str = "No recommendations found. Try different skills.";

/// Single list item rendered for any failed request.
pub const REQUEST_FAILED_ITEM: &str = "An error occurred. Please check the console or try again.";
