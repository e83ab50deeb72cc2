use serde::Serialize;

use cmx_model::Schema;

use crate::settings::CoreSettings;

/// Flat settings object handed to the external page renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerSettings {
    /// Page to open on.
    pub overwrite: usize,
    pub dir: String,
    #[serde(rename = "imgprebuffer")]
    pub img_pre_buffer: u32,
    #[serde(rename = "imgpostbuffer")]
    pub img_post_buffer: u32,
    pub diameter: u32,
    pub lines: u32,
    pub rate: f64,
    pub back: String,
    #[serde(rename = "loaderback")]
    pub loader_back: String,
    pub color: String,
    #[serde(rename = "pageSave")]
    pub page_save: bool,
    #[serde(rename = "pagePush")]
    pub page_push: bool,
}

impl ViewerSettings {
    pub fn from_schema(schema: &Schema, settings: CoreSettings) -> Self {
        let config = schema.config();
        let loading = schema.loading();
        Self {
            overwrite: config.start_page,
            dir: config.dir.clone(),
            img_pre_buffer: config.img_pre_buffer,
            img_post_buffer: config.img_post_buffer,
            diameter: loading.diameter,
            lines: loading.lines,
            rate: loading.rate,
            back: config.back.to_string(),
            loader_back: loading.back.to_string(),
            color: loading.color.to_string(),
            page_save: settings.page_save,
            page_push: settings.page_push,
        }
    }
}
