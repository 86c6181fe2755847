use std::net::TcpListener;

use actix_web::web;
use burger_express::{contact_client::ContactClient, telemetry};
use once_cell::sync::Lazy;
use wiremock::MockServer;

// TEST_LOG=1 时输出日志
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_subscriber(telemetry::get_subscriber("test", "debug", std::io::stdout));
    } else {
        telemetry::init_subscriber(telemetry::get_subscriber("test", "debug", std::io::sink));
    }
});

pub struct TestApp {
    pub address: String,
    pub contact_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_landing_html(&self) -> String {
        self.api_client
            .get(&self.address)
            .send()
            .await
            .expect("failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn post_contact<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.api_client
            .post(format!("{}/contact", &self.address))
            .form(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    /// 接收服务收到的全部请求体
    pub async fn received_contact_bodies(&self) -> Vec<serde_json::Value> {
        self.contact_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // 模拟联系表单接收服务
    let contact_server = MockServer::start().await;
    let mut config = burger_express::config::config();
    config.contact_client.base_url = contact_server.uri();
    let contact_client = web::Data::new(
        ContactClient::from_config(&config.contact_client)
            .expect("failed to build contact client."),
    );

    // 获取绑定的随机端口
    let listener =
        TcpListener::bind(format!("{}:0", &config.web.host)).expect("failed to bind web port.");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://{}:{}", &config.web.host, port);

    let server = burger_express::run(listener, contact_client).expect("failed to start server.");
    tokio::spawn(server);

    TestApp {
        address,
        contact_server,
        api_client: reqwest::Client::new(),
    }
}

/// 页面表单中回显的值，需已转义
pub fn assert_form_values(html: &str, name: &str, email: &str, phone: &str, message: &str) {
    let expected = [
        format!(r#"name="name" placeholder="Tu nombre" value="{name}""#),
        format!(r#"name="email" placeholder="Tu correo" value="{email}""#),
        format!(r#"name="phone" placeholder="Tu teléfono (opcional)" value="{phone}""#),
        format!(r#"placeholder="Tu mensaje" required>{message}</textarea>"#),
    ];
    for snippet in expected {
        assert!(html.contains(&snippet), "`{snippet}` is not rendered.");
    }
}
