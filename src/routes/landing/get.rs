use actix_web::{http::header::ContentType, HttpResponse, Responder};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{domain::SubmissionState, form::ContactForm};

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "¡Nunca pensé que algo tan rápido pudiera saber tan bien! Recomiendo la BBQ.",
        "Ana G.",
    ),
    (
        "El combo familiar fue perfecto para nuestra reunión. ¡Volveremos pronto!",
        "Luis R.",
    ),
    (
        "El servicio es excelente y la hamburguesa veggie es mi favorita.",
        "Mariana T.",
    ),
];

pub async fn home() -> impl Responder {
    render_landing(&ContactForm::new())
}

/// 根据表单当前输入和提交状态渲染页面
pub fn render_landing(form: &ContactForm) -> HttpResponse {
    let input = form.input();
    let feedback = match form.state() {
        SubmissionState::Succeeded => {
            r#"<p class="feedback success">Mensaje enviado correctamente!</p>"#.to_string()
        }
        SubmissionState::Failed(message) => format!(
            r#"<p class="feedback error">{}</p>"#,
            encode_text(message)
        ),
        SubmissionState::Idle | SubmissionState::Loading => String::new(),
    };
    // 提交中禁止再次提交
    let (button_label, button_disabled) = if form.is_loading() {
        ("Enviando...", " disabled")
    } else {
        ("Enviar", "")
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            include_str!("landing.html"),
            testimonials = testimonials_html(),
            name = encode_double_quoted_attribute(&input.name),
            email = encode_double_quoted_attribute(&input.email),
            phone = encode_double_quoted_attribute(&input.phone),
            message = encode_text(&input.message),
            button_disabled = button_disabled,
            button_label = button_label,
            feedback = feedback,
        ))
}

fn testimonials_html() -> String {
    TESTIMONIALS
        .iter()
        .map(|(quote, author)| {
            format!(
                "<blockquote><div class=\"stars\">★★★★★</div><p>“{quote}”</p><footer>– {author}</footer></blockquote>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
