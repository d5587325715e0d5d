pub mod backend;
pub mod tokens;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use backend::{FakeBackend, RecordedRequest};
#[allow(unused_imports)]
pub use tokens::{
    expired_student_token, forged_student_token, non_student_token, not_yet_valid_student_token,
    student_token, PUBLIC_KEY_B64,
};
