//! 可本地化的拒绝消息
//!
//! Defaults are the Indonesian texts served by the production deployment;
//! every entry can be overridden through the environment without a rebuild.
//!
//! | 字段 | 环境变量 |
//! |------|----------|
//! | body_required | MSG_BODY_REQUIRED |
//! | document_required | MSG_DOCUMENT_REQUIRED |
//! | file_name_required | MSG_FILENAME_REQUIRED |
//! | printer_name_required | MSG_PRINTERNAME_REQUIRED |
//! | username_required | MSG_USERNAME_REQUIRED |
//! | convert_base64_failed | MSG_BASE64_FAILED |
//! | write_failed | MSG_WRITE_FAILED |

/// User-facing rejection messages
#[derive(Debug, Clone)]
pub struct Messages {
    /// Request body absent or not JSON
    pub body_required: String,
    pub document_required: String,
    pub file_name_required: String,
    pub printer_name_required: String,
    pub username_required: String,
    /// Prefix for base64 decode failures, decoder detail appended
    pub convert_base64_failed: String,
    /// Prefix for hot folder write failures, path and OS detail appended
    pub write_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            body_required: "Request print harus diisi json.".into(),
            document_required:
                "Property Document harus diisi dengan string base64 dari file yang akan dicetak."
                    .into(),
            file_name_required: "FileName harus diisi.".into(),
            printer_name_required: "PrinterName harus diisi.".into(),
            username_required: "Username harus diisi.".into(),
            convert_base64_failed: "Gagal melakukan konversi Document dari Base64.".into(),
            write_failed: "Gagal menulis file".into(),
        }
    }
}

impl Messages {
    /// 从环境变量加载覆盖，未设置的键保留默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            body_required: env_or("MSG_BODY_REQUIRED", defaults.body_required),
            document_required: env_or("MSG_DOCUMENT_REQUIRED", defaults.document_required),
            file_name_required: env_or("MSG_FILENAME_REQUIRED", defaults.file_name_required),
            printer_name_required: env_or("MSG_PRINTERNAME_REQUIRED", defaults.printer_name_required),
            username_required: env_or("MSG_USERNAME_REQUIRED", defaults.username_required),
            convert_base64_failed: env_or("MSG_BASE64_FAILED", defaults.convert_base64_failed),
            write_failed: env_or("MSG_WRITE_FAILED", defaults.write_failed),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}
