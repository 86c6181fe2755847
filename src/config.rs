use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub contact_client: ContactClientConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 联系表单接收服务
#[derive(serde::Deserialize, Clone)]
pub struct ContactClientConfig {
    pub base_url: String,
    /// 不设置则不超时
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment, use `local` or `production`."
            )),
        }
    }
}

pub fn try_config() -> Result<Config, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_file = format!("configuration/{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(config::File::new(
            "configuration/base.yaml",
            config::FileFormat::Yaml,
        ))
        .add_source(config::File::new(
            &environment_file,
            config::FileFormat::Yaml,
        ))
        // APP_WEB__PORT=8001 覆盖 web.port
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
}

pub fn config() -> Config {
    try_config().expect("failed to read configuration.")
}
