#[cfg(debug_assertions)]
pub fn get_api_base_url() -> &'static str {
    "http://localhost:3001/radar/api" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_api_base_url() -> &'static str {
    "https://anycode-sy.com/radar/api"
}

pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.anycode.radar";
pub const DIRECT_DOWNLOAD_URL: &str = "https://www.filemail.com/d/zrspxlcqwmtranx";
pub const WHATSAPP_CONTACT_URL: &str = "https://wa.me/+963968972764";
