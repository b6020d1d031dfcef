// DOM contract and page layout for the web front-end.

// Host elements
pub const CUBE_CONTAINER_ID: &str = "cube-container";
pub const GLOBE_CONTAINER_ID: &str = "globe-container";

// Destination pop-up
pub const POPUP_ID: &str = "popup";
pub const POPUP_TITLE_ID: &str = "popup-title";
pub const POPUP_DESCRIPTION_ID: &str = "popup-description";
pub const HIDDEN_CLASS: &str = "hidden";
// Inline `display` value set while hidden; other inline styles are left alone
pub const HIDDEN_DISPLAY: &str = "none";

// The cube canvas spans the window width at a fixed height (CSS pixels)
pub const CUBE_VIEW_HEIGHT: u32 = 500;

pub const WEBGPU_MISSING: &str = "WebGPU is not available. Make sure the browser supports it.";
