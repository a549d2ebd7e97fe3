pub const DEFAULT_API_URL: &str = "https://chic-integrity-production.up.railway.app/api";
pub const CONFIG_FILE: &str = ".taskhub-config.json";

pub const API_URL_ENV: &str = "TASKHUB_API_URL";
pub const TOKEN_ENV: &str = "TASKHUB_TOKEN";

// Avatar URLs offered by the picker. Anything outside this set goes through
// the image-upload path instead.
pub const AVATAR_PRESETS: &[&str] = &[
    "/avatars/pattern.png",
    "/avatars/circuit.png",
    "/avatars/orbit.png",
    "/avatars/prism.png",
    "/avatars/ember.png",
    "/avatars/tide.png",
];
