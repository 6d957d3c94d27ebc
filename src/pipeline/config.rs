use flyer_compose::QrCodeService;
use flyer_layout::PageConfig;
use flyer_style::Theme;
use serde::{Deserialize, Serialize};

/// Deployment-level settings of an export pipeline.
///
/// Every section is optional in JSON; missing keys fall back to the A4
/// defaults, the public QR service and the default theme.
///
/// ```json
/// {
///   "page": { "pageSize": "Letter", "gap": 6 },
///   "qr": { "width": 300, "height": 300 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    pub page: PageConfig,
    pub qr: QrCodeService,
    pub theme: Theme,
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
