// Views turn a view model into markup or text for one display mode.
// Each `impl CreateView` lives next to the views it picks between.

pub mod battle;
pub mod chat;
pub mod pet;
pub mod screens;
