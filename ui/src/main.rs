fn main() {
    ui::logs::init_logging();

    match gloo::utils::document().get_element_by_id("app") {
        Some(root) => {
            yew::Renderer::<ui::App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<ui::App>::new().render();
        }
    }
}
