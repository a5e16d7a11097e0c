use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use drift_motion_core::{parse_page_snapshot_json, Engine, Inputs, Outputs, PageView};

/// The motion engine behind one page. The JS host scans the document into a
/// snapshot object, constructs this once at page-ready, applies the ops
/// returned by `start()`, then calls `update(dt, inputs)` every animation
/// frame and applies the returned ops.
#[wasm_bindgen]
pub struct DriftMotion {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl DriftMotion {
    /// Create an engine from a page snapshot object (see the core snapshot
    /// schema). Counter values may be raw attribute strings; malformed ones
    /// degrade to 0.
    #[wasm_bindgen(constructor)]
    pub fn new(snapshot: JsValue) -> Result<DriftMotion, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&snapshot) {
            return Err(JsError::new("snapshot is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&snapshot)
            .map_err(|e| JsError::new(&format!("snapshot stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("snapshot stringify produced non-string"))?;
        let page: PageView = parse_page_snapshot_json(&s)
            .map_err(|e| JsError::new(&format!("snapshot parse error: {e}")))?;

        Ok(DriftMotion {
            core: Engine::new(page),
        })
    }

    /// Run every module's init. Returns the initial Outputs JSON (observer
    /// registrations; immediate end states under reduced motion). Call once
    /// per page load.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.start();
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Step by dt (seconds) with this frame's inputs JSON. Returns Outputs
    /// JSON to apply to the document.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Currently active filter key.
    #[wasm_bindgen(js_name = active_filter_key)]
    pub fn active_filter_key(&self) -> String {
        self.core.active_filter_key().to_string()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
