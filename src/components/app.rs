use dioxus::prelude::*;

use crate::components::Player;
use crate::model::{PlayerLabels, Track};

/// Playlist the demo page feeds the widget. A real embedding page supplies
/// its own sequence; the widget itself has no built-in tracks.
const DEMO_PLAYLIST: &str = r#"[
  {
    "id": "night-drive",
    "title": "Night Drive",
    "artist": "Low Beams",
    "cover": "/assets/covers/night-drive.jpg",
    "src": "/assets/audio/night-drive.mp3"
  },
  {
    "id": "paper-maps",
    "title": "Paper Maps",
    "artist": "Low Beams",
    "cover": "/assets/covers/paper-maps.jpg",
    "src": "/assets/audio/paper-maps.mp3"
  },
  {
    "id": "glasshouse",
    "title": "Glasshouse",
    "artist": "Fern & Vale",
    "cover": "/assets/covers/glasshouse.jpg",
    "src": "/assets/audio/glasshouse.mp3"
  },
  {
    "id": "static-bloom",
    "title": "Static Bloom",
    "artist": "Fern & Vale",
    "cover": "",
    "src": "/assets/audio/static-bloom.mp3"
  }
]"#;

fn demo_tracks() -> Vec<Track> {
    serde_json::from_str(DEMO_PLAYLIST).unwrap_or_default()
}

fn demo_labels() -> PlayerLabels {
    PlayerLabels {
        heading: "Now playing".to_string(),
        track_list: "Tracklist".to_string(),
        play: "Play".to_string(),
        pause: "Pause".to_string(),
        previous: "Previous track".to_string(),
        next: "Next track".to_string(),
        seek: "Seek position".to_string(),
    }
}

#[component]
pub fn AppShell() -> Element {
    rsx! {
        main { class: "app-shell",
            Player { tracks: demo_tracks(), labels: demo_labels() }
        }
    }
}
