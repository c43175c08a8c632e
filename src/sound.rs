use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

// Short click sample inlined as a data URI so no asset fetch is needed.
const CLICK_SAMPLE: &str =
    "data:audio/mp3;base64,//uQZAAAAAAAAAAAAAAAAAAAAAAAWGluZwAAAA8AAAACAAACcQCA";
const CLICK_VOLUME: f64 = 0.2;

/// Best-effort click feedback for the CTA buttons. Construction and playback
/// failures are swallowed: sound is garnish, never a reason to break a CTA.
pub struct ClickSound {
    audio: HtmlAudioElement,
}

impl ClickSound {
    pub fn new() -> Option<Self> {
        let audio = HtmlAudioElement::new_with_src(CLICK_SAMPLE).ok()?;
        audio.set_volume(CLICK_VOLUME);
        Some(Self { audio })
    }

    pub fn play(&self) {
        self.audio.set_current_time(0.0);
        if let Ok(promise) = self.audio.play() {
            // Autoplay policies can reject the play call; await the promise
            // and drop the rejection so it never surfaces as unhandled.
            spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }
}
