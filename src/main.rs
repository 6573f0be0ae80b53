use feel_it_forward::api;
use feel_it_forward::common::init;
use feel_it_forward::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "migrate" => init::initialize_state(settings).await.map(|_| ()),
        component => anyhow::bail!("Unknown app component: {component}"),
    }
}
