fn main() {
    yew::Renderer::<front::App>::new().render();
}
