use rhytm::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
