use crate::presentation::view_models::CreateView;

pub trait Renderer {
    fn render_view<T>(&mut self, view_model: &T)
    where
        T: CreateView + ?Sized;
}
