use crate::{
    contact_client::ContactClient,
    domain::{FormField, FormInput, SubmissionPayload, SubmissionState},
};

/// 不向用户展示接收服务返回的具体错误
pub const SUBMISSION_FAILED_MESSAGE: &str = "Error al enviar el formulario. Intenta de nuevo.";

/// 联系表单：当前输入和最近一次提交的结果
#[derive(Debug, Default)]
pub struct ContactForm {
    input: FormInput,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value.into());
    }

    /// 校验、清理并提交表单，所有失败都记录在 `state` 中
    #[tracing::instrument(name = "handling contact form submit", skip_all)]
    pub async fn on_submit(&mut self, client: &ContactClient) {
        if self.state.is_loading() {
            tracing::warn!("submit ignored, previous attempt still in flight.");
            return;
        }
        let attempt = Attempt::begin(&mut self.state);

        let payload = match SubmissionPayload::try_from(&self.input) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::info!(error = %e, "contact form rejected by validation.");
                attempt.finish(SubmissionState::Failed(e.to_string()));
                return;
            }
        };

        match client.submit(&payload).await {
            Ok(_) => {
                tracing::info!("contact form submitted.");
                self.input = FormInput::default();
                attempt.finish(SubmissionState::Succeeded);
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "failed to submit contact form.");
                attempt.finish(SubmissionState::Failed(SUBMISSION_FAILED_MESSAGE.into()));
            }
        }
    }
}

/// 提交期间 state 保持 `Loading`，future 中途被丢弃时恢复为 `Idle`
struct Attempt<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> Attempt<'a> {
    fn begin(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Loading;
        Self { state }
    }

    fn finish(self, outcome: SubmissionState) {
        *self.state = outcome;
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if self.state.is_loading() {
            *self.state = SubmissionState::Idle;
        }
    }
}
