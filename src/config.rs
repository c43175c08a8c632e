use crate::deeplink::LinkTarget;

// Brand palette, referenced by the scoped <style> blocks and inline styles.
pub const BG: &str = "#0D0D0D";
pub const PANEL: &str = "#1A1A1A";
pub const NEON: &str = "#00FF87";
pub const ORANGE: &str = "#FF4D00";
pub const TEXT: &str = "#EAEAEA";

pub const LOGO_URL: &str = "https://i.postimg.cc/dVgVdhQ4/the-football-analyst.png";
pub const HERO_VIDEO_URL: &str =
    "https://cdn.coverr.co/videos/coverr-soccer-players-kicking-ball-5991/1080p.mp4";

pub const MEMBER_COUNT: &str = "12,678";

pub const HEADLINE_ROTATION_MS: u32 = 3_000;
pub const CAROUSEL_ADVANCE_MS: u32 = 4_000;
/// How long the native attempt gets before the web fallback kicks in.
pub const FALLBACK_DELAY_MS: u32 = 400;

const TELEGRAM_CHANNEL: &str = "thefootballanalyst";
const TELEGRAM_INVITE: &str = "your_channel_invite";
const WHATSAPP_PHONE: &str = "0000000000";
const WHATSAPP_PREFILL: &str = "Hey, I want in on the insider alerts!";

pub fn telegram_target() -> LinkTarget {
    LinkTarget::new(
        format!("tg://resolve?domain={}", TELEGRAM_CHANNEL),
        format!("https://t.me/+{}", TELEGRAM_INVITE),
    )
}

pub fn whatsapp_target() -> LinkTarget {
    let text = urlencoding::encode(WHATSAPP_PREFILL);
    LinkTarget::new(
        format!("whatsapp://send?phone={}&text={}", WHATSAPP_PHONE, text),
        format!("https://wa.me/{}?text={}", WHATSAPP_PHONE, text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_are_well_formed() {
        let telegram = telegram_target();
        assert!(telegram.native_uri.starts_with("tg://resolve?domain="));
        assert!(telegram.fallback_url.starts_with("https://t.me/+"));

        let whatsapp = whatsapp_target();
        assert!(whatsapp.native_uri.starts_with("whatsapp://send?phone="));
        assert!(whatsapp.fallback_url.starts_with("https://wa.me/"));
    }

    #[test]
    fn whatsapp_prefill_is_percent_encoded() {
        let whatsapp = whatsapp_target();
        assert!(!whatsapp.fallback_url.contains(' '));
        assert!(whatsapp.fallback_url.contains("text=Hey%2C%20I%20want"));
        assert!(whatsapp.native_uri.ends_with(&format!(
            "text={}",
            urlencoding::encode(WHATSAPP_PREFILL)
        )));
    }
}
