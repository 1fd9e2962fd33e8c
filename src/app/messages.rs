// User-facing notification text
// Fallbacks are shown when the backend supplies no `detail`

pub const LOGIN_SUCCESS: &str = "Signed in";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_SUCCESS: &str = "Account created, please sign in";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const PROFILE_UPDATED: &str = "Profile updated";

pub const CREATED: &str = "Created";
pub const UPDATED: &str = "Updated";
pub const DELETED: &str = "Deleted";
pub const CANCELLED: &str = "Cancellation requested";

pub const LOAD_FAILED: &str = "Failed to load";
pub const SAVE_FAILED: &str = "Failed to save";
pub const DELETE_FAILED: &str = "Failed to delete";
pub const CANCEL_FAILED: &str = "Failed to cancel";
pub const AVAILABLE_AGENTS_FAILED: &str = "Failed to load available agents";

pub const SYSTEM_MESSAGE_REQUIRED: &str = "Please enter a system message";
pub const NOT_CANCELLABLE: &str = "Only pending or running conversations can be cancelled";
