//! Browser sound-theme adapter backed by `HtmlAudioElement`.
//!
//! A sound theme is a JSON [`SoundThemeManifest`] mapping cue names to audio files. Loading
//! returns a handle at once and fetches the manifest in the background; cues played before the
//! manifest arrives are dropped. A failed load is reported by every later `play`.

use std::{cell::RefCell, rc::Rc};

use platform_host::{SoundHandle, SoundPlayer, SoundThemeManifest, SoundThemeService};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Browser sound-theme service.
pub struct WebSoundThemeService {
    base_path: String,
}

impl WebSoundThemeService {
    /// Service that prefixes root-relative references with `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves a root-relative reference against the configured base path.
    pub fn resolve(&self, file: &str) -> String {
        if file.starts_with('/') && !self.base_path.is_empty() {
            format!("{}{file}", self.base_path)
        } else {
            file.to_string()
        }
    }
}

impl SoundThemeService for WebSoundThemeService {
    fn load_sound_theme(&self, file: &str) -> SoundHandle {
        let player = WebSoundPlayer {
            manifest_url: self.resolve(file),
            manifest: Rc::new(RefCell::new(ManifestLoad::Pending)),
        };
        player.start_loading();
        SoundHandle::new(file, Rc::new(player))
    }
}

#[derive(Debug)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
enum ManifestLoad {
    Pending,
    Ready(SoundThemeManifest),
    Failed(String),
}

struct WebSoundPlayer {
    manifest_url: String,
    manifest: Rc<RefCell<ManifestLoad>>,
}

impl WebSoundPlayer {
    fn start_loading(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let url = self.manifest_url.clone();
            let slot = self.manifest.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_text(&url)
                    .await
                    .and_then(|raw| SoundThemeManifest::from_json_str(&raw));
                *slot.borrow_mut() = match outcome {
                    Ok(manifest) => ManifestLoad::Ready(manifest),
                    Err(err) => {
                        ManifestLoad::Failed(format!("sound theme `{url}` failed to load: {err}"))
                    }
                };
            });
        }
    }

    fn cue_url(&self, cue: &str) -> Result<Option<String>, String> {
        match &*self.manifest.borrow() {
            ManifestLoad::Pending => Ok(None),
            ManifestLoad::Ready(manifest) => Ok(manifest.cue_url(&self.manifest_url, cue)),
            ManifestLoad::Failed(err) => Err(err.clone()),
        }
    }
}

impl SoundPlayer for WebSoundPlayer {
    fn play(&self, cue: &str) -> Result<(), String> {
        let Some(url) = self.cue_url(cue)? else {
            return Ok(());
        };

        #[cfg(target_arch = "wasm32")]
        {
            let audio = web_sys::HtmlAudioElement::new_with_src(&url)
                .map_err(|err| format!("sound cue `{cue}` could not be created: {err:?}"))?;
            audio
                .play()
                .map(|_| ())
                .map_err(|err| format!("sound cue `{cue}` playback failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| format!("fetch failed: {err:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body = response
        .text()
        .map_err(|err| format!("response body unavailable: {err:?}"))?;
    JsFuture::from(body)
        .await
        .map_err(|err| format!("response body read failed: {err:?}"))?
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_relative_references_pick_up_the_base_path() {
        let service = WebSoundThemeService::new("/platinum/");

        assert_eq!(
            service.resolve("/sounds/platinum/platinum.json"),
            "/platinum/sounds/platinum/platinum.json"
        );
        assert_eq!(service.resolve("sounds/x.json"), "sounds/x.json");
        assert_eq!(
            WebSoundThemeService::default().resolve("/sounds/x.json"),
            "/sounds/x.json"
        );
    }

    #[test]
    fn handle_keeps_the_unresolved_reference_and_ignores_early_cues() {
        let service = WebSoundThemeService::new("/base");
        let handle = service.load_sound_theme("/sounds/platinum/platinum.json");

        assert_eq!(handle.file(), "/sounds/platinum/platinum.json");
        assert_eq!(handle.play("WindowOpen"), Ok(()));
    }

    #[test]
    fn failed_manifest_loads_surface_on_play() {
        let player = WebSoundPlayer {
            manifest_url: "/sounds/missing.json".to_string(),
            manifest: Rc::new(RefCell::new(ManifestLoad::Failed(
                "sound theme `/sounds/missing.json` failed to load: HTTP 404".to_string(),
            ))),
        };

        let err = player.play("WindowOpen").unwrap_err();
        assert!(err.contains("HTTP 404"), "{err}");
    }

    #[test]
    fn ready_manifests_resolve_cues_next_to_the_manifest() {
        let manifest =
            SoundThemeManifest::from_json_str(r#"{"cues":{"WindowOpen":"open.mp3"}}"#)
                .expect("manifest");
        let player = WebSoundPlayer {
            manifest_url: "/base/sounds/platinum/platinum.json".to_string(),
            manifest: Rc::new(RefCell::new(ManifestLoad::Ready(manifest))),
        };

        assert_eq!(
            player.cue_url("WindowOpen"),
            Ok(Some("/base/sounds/platinum/open.mp3".to_string()))
        );
        assert_eq!(player.cue_url("MenuOpen"), Ok(None));
        assert_eq!(player.play("WindowOpen"), Ok(()));
    }
}
