use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct CelebrationViewModel {}

// --------------------------------------------------------
// Credits
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CreditsViewModel {
    pub director: String,
    pub library_version: &'static str,
}
