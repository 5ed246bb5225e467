/// Sound tags and the remote clips they play, in display order.
const SOUNDS: &[(&str, &str)] = &[
    (
        "attack",
        "https://commondatastorage.googleapis.com/codeskulptor-assets/Epoq-Lepidoptera.ogg",
    ),
    (
        "hit",
        "https://commondatastorage.googleapis.com/codeskulptor-assets/week7-brrring.m4a",
    ),
    (
        "level_up",
        "https://commondatastorage.googleapis.com/codeskulptor-demos/riceracer_assets/fx/win.ogg",
    ),
    (
        "game_over",
        "https://commondatastorage.googleapis.com/codeskulptor-assets/Evillaugh.ogg",
    ),
    (
        "bgm",
        "https://commondatastorage.googleapis.com/codeskulptor-demos/pyman_assets/ateapill.ogg",
    ),
    (
        "heal",
        "https://commondatastorage.googleapis.com/codeskulptor-demos/riceracer_assets/fx/engine-1.ogg",
    ),
];

/// Read-only table of sound tags.
#[derive(Debug, Clone, Copy)]
pub struct SoundLibrary {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for SoundLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SoundLibrary {
    pub const fn builtin() -> Self {
        Self { entries: SOUNDS }
    }

    pub fn url(&self, tag: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, url)| *url)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.url(tag).is_some()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}
