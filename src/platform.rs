/// Answers the one question the deep-link dispatcher has about its host:
/// is this a mobile platform? Callers only ever see the boolean.
pub trait Platform {
    fn is_mobile(&self) -> bool;
}

/// Classifies from `navigator.userAgent`. A missing window or user agent
/// reads as non-mobile, so the user still lands on a predictable
/// browser-opened destination.
pub struct NavigatorPlatform;

impl Platform for NavigatorPlatform {
    fn is_mobile(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .map(|ua| is_mobile_user_agent(&ua))
            .unwrap_or(false)
    }
}

const MOBILE_MARKERS: [&str; 4] = ["mobi", "android", "iphone", "ipad"];

/// Case-insensitive marker match over the raw user-agent string.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| user_agent.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::is_mobile_user_agent;

    #[test]
    fn phones_and_tablets_classify_as_mobile() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/120.0.0.0 Mobile Safari/537.36"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15"
        ));
    }

    #[test]
    fn desktops_classify_as_non_mobile() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/120.0.0.0 Safari/537.36"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.0 Safari/605.1.15"
        ));
        assert!(!is_mobile_user_agent("Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0"));
    }

    #[test]
    fn empty_user_agent_is_non_mobile() {
        assert!(!is_mobile_user_agent(""));
    }
}
