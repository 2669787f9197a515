use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, ObjectStoreConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("CAMPUS")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("upload.temp_dir", std::env::var("UPLOAD_DIR").ok())?
            .set_override_option(
                "object_store.bucket",
                std::env::var("S3_BUCKET_NAME").ok(),
            )?
            .set_override_option("object_store.region", std::env::var("S3_REGION").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ObjectStoreConfig {
    /// 对象的公开访问前缀（不含结尾斜杠）
    pub fn public_base(&self) -> String {
        if !self.public_base_url.is_empty() {
            self.public_base_url.trim_end_matches('/').to_string()
        } else {
            format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_config(public_base_url: &str) -> ObjectStoreConfig {
        ObjectStoreConfig {
            store_type: "local".to_string(),
            dir: "objects".to_string(),
            public_base_url: public_base_url.to_string(),
            bucket: "campus-goods".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn test_public_base_defaults_to_s3() {
        assert_eq!(
            store_config("").public_base(),
            "https://campus-goods.s3.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_public_base_override() {
        assert_eq!(
            store_config("http://localhost:8000/objects/").public_base(),
            "http://localhost:8000/objects"
        );
    }
}
