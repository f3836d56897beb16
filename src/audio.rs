use crowd_core::PanicSound;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The drum roll behind a global panic, played through WebAudio.
///
/// Playback state is derived from the audio clock rather than an `ended`
/// callback so it can be polled synchronously each frame.
pub struct WebPanicSound {
    audio_ctx: web::AudioContext,
    buffer: Option<web::AudioBuffer>,
    playing_until: f64,
}

impl WebPanicSound {
    pub fn new(audio_ctx: web::AudioContext, buffer: Option<web::AudioBuffer>) -> Self {
        Self {
            audio_ctx,
            buffer,
            playing_until: 0.0,
        }
    }
}

impl PanicSound for WebPanicSound {
    fn is_playing(&self) -> bool {
        self.buffer.is_some() && self.audio_ctx.current_time() < self.playing_until
    }

    fn play(&mut self) {
        let Some(buffer) = &self.buffer else {
            return;
        };
        let src = match web::AudioBufferSourceNode::new(&self.audio_ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(buffer));
        _ = src.connect_with_audio_node(&self.audio_ctx.destination());
        match src.start() {
            Ok(()) => {
                self.playing_until = self.audio_ctx.current_time() + buffer.duration();
            }
            Err(e) => log::error!("panic sound start error: {:?}", e),
        }
    }

    fn duration_secs(&self) -> f32 {
        self.buffer
            .as_ref()
            .map(|b| b.duration() as f32)
            .unwrap_or(0.0)
    }
}

/// Fetch and decode one audio file.
pub async fn load_buffer(audio_ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let bytes = resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(bytes)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decoded = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buffer: web::AudioBuffer = JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(buffer)
}

/// Browsers keep an AudioContext suspended until a user gesture resumes it.
pub fn unlock(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() != web::AudioContextState::Running {
        _ = audio_ctx.resume();
    }
}
