//! Connectivity-adaptive choice between the hero image and the hero video.
//!
//! The page starts on the image. A downlink reading at or above the threshold
//! upgrades to the video at once, a slower reading keeps the image, and no
//! reading at all upgrades to the video after a fixed delay.

use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::debug;

use crate::io::config::MediaConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaChoice {
    Image,
    Video,
}

/// What to render for the hero slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaSource {
    pub choice: MediaChoice,
    /// Image URL, or the embed URL when `choice` is video.
    pub src: String,
    /// Image shown while the video loads.
    pub poster: String,
}

#[derive(Debug, Clone)]
pub struct MediaLoader {
    video_id: String,
    fallback_image: String,
    min_downlink_mbps: f64,
    fallback_delay: Duration,
}

impl MediaLoader {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            video_id: config.video_id.clone(),
            fallback_image: config.fallback_image.clone(),
            min_downlink_mbps: config.min_downlink_mbps,
            fallback_delay: Duration::from_millis(config.fallback_delay_ms),
        }
    }

    /// Choice before any signal has been considered.
    pub fn initial(&self) -> MediaSource {
        self.source(MediaChoice::Image)
    }

    /// Resolve the choice for a downlink reading in Mbps, if one exists.
    ///
    /// Only the no-signal path waits.
    pub async fn resolve(&self, downlink_mbps: Option<f64>) -> MediaSource {
        let choice = match downlink_mbps {
            Some(speed) if speed >= self.min_downlink_mbps => MediaChoice::Video,
            Some(speed) => {
                debug!(
                    speed,
                    threshold = self.min_downlink_mbps,
                    "slow connection, keeping image"
                );
                MediaChoice::Image
            }
            None => {
                debug!(
                    delay_ms = self.fallback_delay.as_millis() as u64,
                    "no connection signal, delaying video"
                );
                sleep(self.fallback_delay).await;
                MediaChoice::Video
            }
        };
        self.source(choice)
    }

    fn source(&self, choice: MediaChoice) -> MediaSource {
        let src = match choice {
            MediaChoice::Image => self.fallback_image.clone(),
            MediaChoice::Video => embed_url(&self.video_id),
        };
        MediaSource {
            choice,
            src,
            poster: self.fallback_image.clone(),
        }
    }
}

/// Muted, looping, chrome-free embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&controls=0&loop=1&playlist={id}\
         &showinfo=0&rel=0&modestbranding=1&disablekb=1&fs=0&color=white&iv_load_policy=3",
        id = video_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn loader() -> MediaLoader {
        MediaLoader::new(&MediaConfig::default())
    }

    #[test]
    fn starts_on_image() {
        let initial = loader().initial();
        assert_eq!(initial.choice, MediaChoice::Image);
        assert_eq!(initial.src, "/assets/globe.jpg");
    }

    #[tokio::test(start_paused = true)]
    async fn fast_connection_loads_video_without_waiting() {
        let start = Instant::now();
        let source = loader().resolve(Some(10.0)).await;
        assert_eq!(source.choice, MediaChoice::Video);
        assert!(source.src.starts_with("https://www.youtube.com/embed/6stlCkUDG_s?"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn threshold_is_inclusive() {
        let source = loader().resolve(Some(1.5)).await;
        assert_eq!(source.choice, MediaChoice::Video);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_connection_keeps_image() {
        let source = loader().resolve(Some(0.4)).await;
        assert_eq!(source.choice, MediaChoice::Image);
        assert_eq!(source.src, source.poster);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_signal_switches_to_video_after_delay() {
        let start = Instant::now();
        let source = loader().resolve(None).await;
        assert_eq!(source.choice, MediaChoice::Video);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn embed_url_loops_the_same_video() {
        let url = embed_url("abc");
        assert!(url.contains("/embed/abc?"));
        assert!(url.contains("playlist=abc&"));
        assert!(url.contains("mute=1"));
    }
}
