use faqhub_adapter_dashboard_leptos::App;

fn main() {
    console_error_panic_hook::set_once();
    // `tracing` events from the app crate are forwarded to `log` when no
    // subscriber is installed.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(App);
}
