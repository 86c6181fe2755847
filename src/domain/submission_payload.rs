use super::{is_non_empty, is_valid_email, sanitize_message, trim_whitespace, FormInput};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todos los campos obligatorios deben estar completos.")]
    MissingRequiredFields,
    #[error("El correo no es válido.")]
    InvalidEmail,
}

/// POST /api/contact 的请求体
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

impl TryFrom<&FormInput> for SubmissionPayload {
    type Error = ValidationError;

    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        // 电话选填
        let required = [&input.name, &input.email, &input.message];
        if !required.iter().all(|value| is_non_empty(value)) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if !is_valid_email(&input.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            full_name: trim_whitespace(&input.name).into(),
            email: trim_whitespace(&input.email).into(),
            phone_number: trim_whitespace(&input.phone).into(),
            message: sanitize_message(&input.message),
        })
    }
}
