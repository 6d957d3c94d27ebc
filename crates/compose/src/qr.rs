use serde::{Deserialize, Serialize};

/// The external service that renders scannable codes.
///
/// The composer never draws the code itself; it only builds the request URL
/// the renderer fetches the image from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrCodeService {
    pub base_url: String,
    /// Requested bitmap size in pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for QrCodeService {
    fn default() -> Self {
        Self {
            base_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            width: 150,
            height: 150,
        }
    }
}

impl QrCodeService {
    /// `base?size=<w>x<h>&data=<percent-encoded link>`
    ///
    /// Everything except `A-Z a-z 0-9 - _ . ~` in the link is escaped.
    pub fn request_url(&self, link: &str) -> String {
        format!(
            "{}?size={}x{}&data={}",
            self.base_url,
            self.width,
            self.height,
            urlencoding::encode(link.trim())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_link() {
        let url = QrCodeService::default().request_url("https://x.com");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Fx.com"
        );
    }

    #[test]
    fn test_query_characters_are_escaped() {
        let service = QrCodeService {
            base_url: "https://qr.example/render".to_string(),
            width: 300,
            height: 200,
        };
        let url = service.request_url("https://shop.example/p?id=1&ref=flyer 2");
        assert_eq!(
            url,
            "https://qr.example/render?size=300x200&data=https%3A%2F%2Fshop.example%2Fp%3Fid%3D1%26ref%3Dflyer%202"
        );
    }

    #[test]
    fn test_url_is_deterministic() {
        let service = QrCodeService::default();
        assert_eq!(service.request_url("wa.me/5511"), service.request_url("wa.me/5511"));
    }
}
