//! WASM bindings for Aadhaar card OCR text extraction.
//!
//! Text recognition runs in the browser; these bindings turn the recognized
//! text into a structured record.

use wasm_bindgen::prelude::*;

use aadhaar_core::document::require_sides;
use aadhaar_core::models::config::AadhaarConfig;
use aadhaar_core::{AadhaarParser, DocumentVerifier, ExtractionResult, RecordParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extract a record from the raw text of a card.
///
/// No marker check is done; absent fields are left out of the result.
#[wasm_bindgen]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    let result = AadhaarParser::new().parse(text);
    serde_wasm_bindgen::to_value(&result.record).map_err(to_js_error)
}

/// Verify the front and back text of a card and extract its record.
///
/// Rejections carry the user-facing message, e.g. "Invalid Front Image, ...".
#[wasm_bindgen]
pub fn verify(front: Option<String>, back: Option<String>) -> Result<JsValue, JsValue> {
    let (front, back) = require_sides(front, back).map_err(to_js_error)?;

    let result = DocumentVerifier::default()
        .verify(&front, &back)
        .map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&result.record).map_err(to_js_error)
}

/// Validate an Aadhaar number (length, leading digit and Verhoeff checksum).
#[wasm_bindgen]
pub fn validate_aadhaar(number: &str) -> bool {
    aadhaar_core::extract::rules::validate_aadhaar(number)
}

/// Format an Aadhaar number in groups of four digits.
#[wasm_bindgen]
pub fn format_aadhaar(number: &str) -> String {
    aadhaar_core::extract::rules::format_aadhaar(number)
}

/// Aadhaar extractor class for browser use.
#[wasm_bindgen]
pub struct AadhaarExtractor {
    verifier: DocumentVerifier,
}

#[wasm_bindgen]
impl AadhaarExtractor {
    /// Create an extractor with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            verifier: DocumentVerifier::default(),
        }
    }

    /// Create an extractor from a JSON configuration.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<AadhaarExtractor, JsValue> {
        let config: AadhaarConfig = serde_json::from_str(config_json).map_err(to_js_error)?;
        let verifier = DocumentVerifier::from_config(&config).map_err(to_js_error)?;
        Ok(Self { verifier })
    }

    /// Configure Verhoeff checksum validation of ID number candidates.
    #[wasm_bindgen]
    pub fn set_validate_checksum(&mut self, validate: bool) -> Result<(), JsValue> {
        let mut config = AadhaarConfig::default();
        config.extraction.validate_checksum = validate;
        self.verifier = DocumentVerifier::from_config(&config).map_err(to_js_error)?;
        Ok(())
    }

    /// Extract a record from raw text without the marker check.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.verifier.parser().parse(text);
        serde_wasm_bindgen::to_value(&result.record).map_err(to_js_error)
    }

    /// Verify both sides and return the record with warnings and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, front: &str, back: &str) -> Result<JsValue, JsValue> {
        let result: ExtractionResult = self.verifier.verify(front, back).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }
}

impl Default for AadhaarExtractor {
    fn default() -> Self {
        Self::new()
    }
}
