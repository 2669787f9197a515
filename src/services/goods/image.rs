//! 商品图片处理
//!
//! 解析 `data:image/<subtype>;base64,<payload>`，校验类型与内容后
//! 写入临时文件，交给对象存储上传，最后删除临时文件。

use base64::{Engine, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::UploadConfig;
use crate::errors::{CampusError, Result};
use crate::object_store::ObjectStore;
use crate::utils::{generate_random_code, validate_magic_bytes};

static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^data:image/([A-Za-z0-9.+-]+);base64,(.*)$").expect("Invalid data URI regex")
});

/// 对象文件名中随机部分的长度
const OBJECT_NAME_LEN: usize = 16;

/// 解码后的图片
#[derive(Debug)]
pub struct DecodedImage {
    pub extension: String,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    /// 随机对象名，如 `Q3ZK8W1M0A7PB2XD.png`
    pub fn object_name(&self) -> String {
        format!(
            "{}.{}",
            generate_random_code(OBJECT_NAME_LEN),
            self.extension
        )
    }
}

fn image_error(detail: impl std::fmt::Display) -> CampusError {
    CampusError::image_processing(format!("Error when creating image: {detail}"))
}

/// 解析并校验 data URI
pub fn decode_data_uri(uri: &str, config: &UploadConfig) -> Result<DecodedImage> {
    let captures = DATA_URI_RE
        .captures(uri.trim())
        .ok_or_else(|| image_error("Invalid image data URI"))?;

    let subtype = captures[1].to_lowercase();
    let extension = match subtype.as_str() {
        "jpeg" => "jpg".to_string(),
        other => other.to_string(),
    };

    let allowed = config
        .allowed_extensions
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(&extension) || ext.eq_ignore_ascii_case(&subtype));
    if !allowed {
        return Err(image_error(format!("Extension {extension} is not valid")));
    }

    let payload: String = captures[2].split_whitespace().collect();
    let bytes = STANDARD.decode(payload.as_bytes()).map_err(image_error)?;

    if bytes.is_empty() {
        return Err(image_error("Image data is empty"));
    }
    if bytes.len() > config.max_size {
        return Err(image_error(format!(
            "Image exceeds the maximum size of {} bytes",
            config.max_size
        )));
    }
    if !validate_magic_bytes(&bytes, &extension) {
        return Err(image_error(format!(
            "Image content does not match extension {extension}"
        )));
    }

    Ok(DecodedImage { extension, bytes })
}

/// 已上传的图片
#[derive(Debug)]
pub struct StoredImage {
    pub object_name: String,
    pub url: String,
}

/// 处理 data URI 并上传
pub async fn store_image(
    uri: &str,
    object_store: &dyn ObjectStore,
    config: &UploadConfig,
) -> Result<StoredImage> {
    let image = decode_data_uri(uri, config)?;
    let object_name = image.object_name();

    tokio::fs::create_dir_all(&config.temp_dir)
        .await
        .map_err(image_error)?;
    let temp_path = PathBuf::from(&config.temp_dir).join(&object_name);

    let uploaded = match tokio::fs::write(&temp_path, &image.bytes).await {
        Ok(()) => object_store
            .upload(&temp_path, &object_name)
            .await
            .map_err(|e| image_error(e.message())),
        Err(e) => Err(image_error(e)),
    };

    // 写入失败时也可能留下部分文件，统一清理
    match tokio::fs::remove_file(&temp_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("删除临时图片失败 {}: {}", temp_path.display(), e),
    }

    let url = uploaded?;
    debug!("图片已上传: {}", url);
    Ok(StoredImage { object_name, url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // 1x1 透明 PNG
    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn config() -> UploadConfig {
        config_in(std::env::temp_dir().join("campus-image-tests"))
    }

    fn config_in(temp_dir: PathBuf) -> UploadConfig {
        UploadConfig {
            temp_dir: temp_dir.to_string_lossy().into_owned(),
            max_size: 1024,
            allowed_extensions: vec![
                "png".to_string(),
                "gif".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
            ],
        }
    }

    #[test]
    fn test_decode_png() {
        let image = decode_data_uri(&format!("data:image/png;base64,{PNG_B64}"), &config()).unwrap();
        assert_eq!(image.extension, "png");
        assert!(image.bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));

        let name = image.object_name();
        assert_eq!(name.len(), OBJECT_NAME_LEN + ".png".len());
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_jpeg_maps_to_jpg() {
        let payload = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        let image =
            decode_data_uri(&format!("data:image/jpeg;base64,{payload}"), &config()).unwrap();
        assert_eq!(image.extension, "jpg");
    }

    #[test]
    fn test_rejects_unlisted_extension() {
        let err = decode_data_uri("data:image/bmp;base64,Qk0=", &config()).unwrap_err();
        assert!(matches!(err, CampusError::ImageProcessing(_)));
        assert_eq!(
            err.message(),
            "Error when creating image: Extension bmp is not valid"
        );
    }

    #[test]
    fn test_rejects_non_data_uri() {
        let err = decode_data_uri("https://example.com/a.png", &config()).unwrap_err();
        assert!(err.message().starts_with("Error when creating image:"));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = decode_data_uri("data:image/png;base64,@@@@", &config()).unwrap_err();
        assert!(matches!(err, CampusError::ImageProcessing(_)));
    }

    #[test]
    fn test_rejects_mismatched_content() {
        let payload = STANDARD.encode(b"GIF89a....");
        let err = decode_data_uri(&format!("data:image/png;base64,{payload}"), &config())
            .unwrap_err();
        assert!(err.message().contains("does not match"));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.resize(2048, 0);
        let payload = STANDARD.encode(&data);
        let err = decode_data_uri(&format!("data:image/png;base64,{payload}"), &config())
            .unwrap_err();
        assert!(err.message().contains("maximum size"));
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ObjectStore for FailingStore {
        async fn upload(&self, _local_path: &Path, _filename: &str) -> Result<String> {
            Err(CampusError::object_store("bucket unavailable"))
        }

        async fn delete(&self, _filename: &str) -> Result<()> {
            Ok(())
        }
    }

    fn temp_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_temp_file_removed_after_upload() {
        let root = std::env::temp_dir().join(format!("campus-image-{}", generate_random_code(8)));
        let store = crate::object_store::local::LocalObjectStore::new(
            root.join("objects"),
            "http://cdn.test",
        );
        let config = config_in(root.join("tmp"));

        let stored = store_image(&format!("data:image/png;base64,{PNG_B64}"), &store, &config)
            .await
            .unwrap();
        assert_eq!(stored.url, format!("http://cdn.test/{}", stored.object_name));
        assert!(root.join("objects").join(&stored.object_name).exists());
        assert_eq!(temp_entries(&root.join("tmp")), 0);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_temp_file_removed_when_upload_fails() {
        let root = std::env::temp_dir().join(format!("campus-image-{}", generate_random_code(8)));
        let config = config_in(root.join("tmp"));

        let err = store_image(&format!("data:image/png;base64,{PNG_B64}"), &FailingStore, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::ImageProcessing(_)));
        assert_eq!(err.message(), "Error when creating image: bucket unavailable");
        assert_eq!(temp_entries(&root.join("tmp")), 0);

        let _ = std::fs::remove_dir_all(&root);
    }
}
