use cyberpet_core::VERSION;

use crate::presentation::view_models::{CelebrationViewModel, CreditsViewModel};

pub fn present_celebration() -> CelebrationViewModel {
    CelebrationViewModel::default()
}

pub fn present_credits(director: &str) -> CreditsViewModel {
    CreditsViewModel {
        director: director.to_string(),
        library_version: VERSION,
    }
}
