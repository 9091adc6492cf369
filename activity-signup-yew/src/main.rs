use activity_signup_yew::App;

fn main() {
    // Route tracing output to the browser console.
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting activity sign-up frontend");

    yew::Renderer::<App>::new().render();
}
