#[macro_use]
extern crate rocket;

use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

mod app;
mod boot;
mod config;
mod contact;
mod dom;
mod events;
mod filter;
mod listing;
mod models;
mod render;
mod routes;
mod store;


use config::SiteConfig;
use store::MemoryStore;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the server from a figment. Portfolio data is loaded once here
/// and shared read-only by every request.
pub fn build(figment: Figment) -> Rocket<Build> {
    let config = SiteConfig::from_figment(&figment);
    let store = MemoryStore::load_or_embedded(&config.data_path)
        .expect("Failed to load portfolio data");

    rocket::custom(figment)
        .manage(store)
        .manage(config)
        .attach(Template::fairing())
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let config = SiteConfig::from_figment(&figment);

    // Boot check: create directories, validate critical files
    boot::run(&config);

    eprintln!("Serving portfolio data from: {}", config.data_path.display());

    build(figment)
}
