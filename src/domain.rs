mod form_input;
mod submission_payload;
mod submission_state;
mod validation;

pub use form_input::{FormField, FormInput};
pub use submission_payload::{SubmissionPayload, ValidationError};
pub use submission_state::SubmissionState;
pub use validation::*;
