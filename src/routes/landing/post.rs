use actix_web::{web, Responder};

use crate::{contact_client::ContactClient, domain::FormField, form::ContactForm};

use super::render_landing;

/// 按字段名逐个写入表单后提交，结果渲染在页面上
#[tracing::instrument(name = "posting contact form", skip_all)]
pub async fn contact(
    fields: web::Form<Vec<(String, String)>>,
    contact_client: web::Data<ContactClient>,
) -> impl Responder {
    let mut form = ContactForm::new();
    for (name, value) in fields.into_inner() {
        match name.parse::<FormField>() {
            Ok(field) => form.on_field_change(field, value),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    form.on_submit(&contact_client).await;

    render_landing(&form)
}
