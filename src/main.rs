use coming_soon::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting coming soon page");
    yew::Renderer::<App>::new().render();
}
