use crate::helper::{assert_form_values, spawn_app};

#[tokio::test]
async fn landing_page_shows_sections_and_empty_form() {
    let app = spawn_app().await;

    let html = app.get_landing_html().await;
    for section in [
        "Burger Express",
        "¿Por qué elegirnos?",
        "Nuestras Especialidades",
        "Clientes felices",
        "– Mariana T.",
        "¿Tienes preguntas o comentarios?",
    ] {
        assert!(html.contains(section), "`{section}` is missing.");
    }
    assert_form_values(&html, "", "", "", "");
    assert!(html.contains(r#"<button type="submit">Enviar</button>"#));
    assert!(!html.contains(r#"class="feedback"#));
}
